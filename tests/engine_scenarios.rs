//! End-to-end scenario walkthroughs against the public library API

use std::sync::Arc;

use interval_timer::{
    engine::{format_time, Phase},
    AppState, PresetStore, TimerConfiguration, TimerEngine,
};

fn workout_config(sets: u32) -> TimerConfiguration {
    TimerConfiguration {
        prep: 3,
        work: 5,
        rest: 2,
        rest_between_sets: 10,
        cycles: 2,
        sets,
        desc_work: Some("Burpees".to_string()),
        desc_rest: None,
    }
}

fn tick_times(engine: &mut TimerEngine, n: u32) {
    for _ in 0..n {
        engine.tick();
    }
}

#[test]
fn two_cycle_single_set_workout_runs_to_completion() {
    let mut engine = TimerEngine::new(workout_config(1));
    engine.start();

    tick_times(&mut engine, 3);
    assert_eq!(engine.run_state().phase, Phase::Work);
    assert_eq!(engine.run_state().seconds_remaining, 5);
    assert_eq!(engine.run_state().current_cycle, 1);

    tick_times(&mut engine, 5);
    assert_eq!(engine.run_state().phase, Phase::Rest);
    assert_eq!(engine.run_state().seconds_remaining, 2);

    tick_times(&mut engine, 2);
    assert_eq!(engine.run_state().phase, Phase::Work);
    assert_eq!(engine.run_state().current_cycle, 2);
    assert_eq!(engine.run_state().seconds_remaining, 5);

    tick_times(&mut engine, 5);
    let run = engine.run_state();
    assert_eq!(run.phase, Phase::Done);
    assert!(!run.running);
    assert!(run.is_finished);
}

#[test]
fn two_set_workout_takes_a_set_break_between_sets() {
    let mut engine = TimerEngine::new(workout_config(2));
    engine.start();

    // prep, then two full work/rest cycles of the first set
    tick_times(&mut engine, 3 + 5 + 2 + 5);
    assert_eq!(engine.run_state().phase, Phase::RestSet);
    assert_eq!(engine.run_state().seconds_remaining, 10);

    tick_times(&mut engine, 10);
    assert_eq!(engine.run_state().phase, Phase::Work);
    assert_eq!(engine.run_state().current_set, 2);
    assert_eq!(engine.run_state().current_cycle, 1);

    // second set runs to completion
    tick_times(&mut engine, 5 + 2 + 5);
    assert_eq!(engine.run_state().phase, Phase::Done);
}

#[test]
fn pausing_freezes_the_countdown_mid_phase() {
    let mut engine = TimerEngine::new(workout_config(1));
    engine.start();
    tick_times(&mut engine, 4);

    engine.pause();
    let frozen = engine.run_state().clone();
    tick_times(&mut engine, 10);
    assert_eq!(*engine.run_state(), frozen);

    engine.start();
    engine.tick();
    assert_eq!(
        engine.run_state().seconds_remaining,
        frozen.seconds_remaining - 1
    );
}

#[test]
fn snapshots_expose_the_recording_contract() {
    let mut engine = TimerEngine::new(workout_config(1));
    engine.start();
    tick_times(&mut engine, 3 + 5 + 2); // second work interval, full 5s left

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.formatted_time, "00:05");
    assert_eq!(snapshot.phase_display_name, "Work");
    assert_eq!(snapshot.phase_color, "#e53935");
    assert_eq!(snapshot.progress_text, "2/2 • Set 1");
    assert!(snapshot.progress_ratio >= 0.0 && snapshot.progress_ratio < 1.0);
}

#[test]
fn formatted_time_is_zero_padded() {
    assert_eq!(format_time(125), "02:05");
    assert_eq!(format_time(59), "00:59");
}

#[test]
fn app_state_drives_a_full_workout_with_presets() {
    let dir = tempfile::tempdir().unwrap();
    let presets = Arc::new(PresetStore::open(dir.path()).unwrap());
    let state = AppState::new(
        20553,
        "127.0.0.1".to_string(),
        TimerConfiguration::default(),
        presets,
    );

    // Store a preset and configure the engine from it
    let preset = state
        .presets
        .create("Short intervals".to_string(), workout_config(1))
        .unwrap();
    let stored = state.presets.get(preset.id).unwrap().unwrap();
    let snapshot = state.configure(stored.config).unwrap();
    assert_eq!(snapshot.phase, Phase::Prep);
    assert_eq!(snapshot.formatted_time, "00:03");

    // Configuring recorded the settings as last-used
    assert_eq!(
        state.presets.last_used().unwrap(),
        Some(workout_config(1))
    );

    // Drive the run to completion through tick application
    state.start().unwrap();
    let mut ticks = 0;
    loop {
        match state.apply_tick().unwrap() {
            Some((snapshot, _)) if snapshot.is_finished => break,
            Some(_) => ticks += 1,
            None => panic!("Timer stopped before finishing"),
        }
        assert!(ticks < 100, "Workout never finished");
    }

    let snapshot = state.snapshot().unwrap();
    assert_eq!(snapshot.phase, Phase::Done);
    assert!(!snapshot.running);
}
