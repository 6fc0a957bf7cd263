//! Interval timer engine: run state and phase transitions

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Phase, TickSnapshot, TimerConfiguration};

/// Mutable state of one timer run.
///
/// Created in the prep phase with the countdown loaded from the
/// configuration, and mutated exclusively through [`TimerEngine`] commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerRunState {
    /// Current phase of the workout
    pub phase: Phase,
    /// 1-based cycle index within the current set; 0 until the first
    /// transition out of prep
    pub current_cycle: u32,
    /// 1-based set index, starts at 1
    pub current_set: u32,
    /// Countdown within the current phase
    pub seconds_remaining: u32,
    /// Whether the external tick source should apply decrements
    pub running: bool,
    /// True only once the run has reached the done phase
    pub is_finished: bool,
}

impl TimerRunState {
    /// Initial state for a configuration: prep phase, not running.
    pub fn initial(config: &TimerConfiguration) -> Self {
        Self {
            phase: Phase::Prep,
            current_cycle: 0,
            current_set: 1,
            seconds_remaining: config.prep,
            running: false,
            is_finished: false,
        }
    }
}

/// The interval timer engine.
///
/// Owns a [`TimerConfiguration`] and the live [`TimerRunState`] and exposes
/// the deterministic command set: `configure`, `start`, `pause`, `reset`
/// and `tick`. The engine performs no I/O and every command completes
/// synchronously; callers that share an engine across threads must
/// serialize access themselves (the server wraps it in a `Mutex`).
#[derive(Debug, Clone)]
pub struct TimerEngine {
    config: TimerConfiguration,
    run: TimerRunState,
}

impl TimerEngine {
    /// Create an engine with the given configuration, clamped to validity.
    pub fn new(config: TimerConfiguration) -> Self {
        let config = config.clamped();
        let run = TimerRunState::initial(&config);
        Self { config, run }
    }

    /// Replace the configuration and hard-reset the run state.
    ///
    /// Always wins over in-progress state; no old progress is merged into
    /// the new configuration.
    pub fn configure(&mut self, config: TimerConfiguration) -> &TimerRunState {
        self.config = config.clamped();
        self.run = TimerRunState::initial(&self.config);
        &self.run
    }

    /// Allow the external tick source to apply decrements. No-op if
    /// already running or if the run is finished.
    pub fn start(&mut self) {
        if !self.run.phase.is_terminal() {
            self.run.running = true;
        }
    }

    /// Stop applying decrements. No-op if already paused.
    pub fn pause(&mut self) {
        self.run.running = false;
    }

    /// Return to the initial state of the current configuration.
    pub fn reset(&mut self) {
        self.run = TimerRunState::initial(&self.config);
    }

    /// Apply one 1-second tick.
    ///
    /// No-op unless running. Decrements the countdown, and at the phase
    /// boundary advances to the next phase per the transition table.
    /// Returns true if the tick changed the phase.
    pub fn tick(&mut self) -> bool {
        if !self.run.running || self.run.phase.is_terminal() {
            return false;
        }

        if self.run.seconds_remaining > 1 {
            self.run.seconds_remaining -= 1;
            false
        } else {
            self.advance_phase();
            true
        }
    }

    /// Advance to the next phase and reload the countdown.
    ///
    /// Transition table:
    /// - prep -> work, cycle becomes 1
    /// - work -> rest while cycles remain in the set
    /// - work -> restSet when the set is done but sets remain
    /// - work -> done when the last cycle of the last set completes
    /// - rest -> work, next cycle
    /// - restSet -> work, next set, cycle back to 1
    pub fn advance_phase(&mut self) {
        let run = &mut self.run;
        match run.phase {
            Phase::Prep => {
                run.phase = Phase::Work;
                run.seconds_remaining = self.config.work;
                run.current_cycle = 1;
            }
            Phase::Work => {
                if run.current_cycle < self.config.cycles {
                    run.phase = Phase::Rest;
                    run.seconds_remaining = self.config.rest;
                } else if run.current_set < self.config.sets {
                    run.phase = Phase::RestSet;
                    run.seconds_remaining = self.config.rest_between_sets;
                } else {
                    run.phase = Phase::Done;
                    run.seconds_remaining = 0;
                    run.running = false;
                    run.is_finished = true;
                }
            }
            Phase::Rest => {
                run.phase = Phase::Work;
                run.seconds_remaining = self.config.work;
                run.current_cycle += 1;
            }
            Phase::RestSet => {
                run.phase = Phase::Work;
                run.seconds_remaining = self.config.work;
                run.current_cycle = 1;
                run.current_set += 1;
            }
            Phase::Done => {}
        }

        debug!(
            phase = ?run.phase,
            cycle = run.current_cycle,
            set = run.current_set,
            seconds = run.seconds_remaining,
            "Phase advanced"
        );
    }

    /// Current configuration
    pub fn config(&self) -> &TimerConfiguration {
        &self.config
    }

    /// Current run state
    pub fn run_state(&self) -> &TimerRunState {
        &self.run
    }

    /// Duration of the current phase in seconds
    pub fn current_phase_duration(&self) -> u32 {
        match self.run.phase {
            Phase::Prep => self.config.prep,
            Phase::Work => self.config.work,
            Phase::Rest => self.config.rest,
            Phase::RestSet => self.config.rest_between_sets,
            Phase::Done => 0,
        }
    }

    /// Fraction of the current phase that has elapsed.
    ///
    /// 0 at phase start, approaching 1 at phase end; exactly 1 once done
    /// or for zero-length phases.
    pub fn progress_ratio(&self) -> f64 {
        let duration = self.current_phase_duration();
        if duration == 0 {
            1.0
        } else {
            1.0 - f64::from(self.run.seconds_remaining) / f64::from(duration)
        }
    }

    /// Progress line for the recording collaborator,
    /// e.g. `"2/10 • Set 1"`.
    pub fn progress_text(&self) -> String {
        format!(
            "{}/{} • Set {}",
            self.run.current_cycle, self.config.cycles, self.run.current_set
        )
    }

    /// Publishable snapshot of the current state
    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot {
            phase: self.run.phase,
            phase_display_name: self.run.phase.display_name().to_string(),
            phase_color: self.run.phase.color().to_string(),
            formatted_time: format_time(self.run.seconds_remaining),
            progress_text: self.progress_text(),
            progress_ratio: self.progress_ratio(),
            running: self.run.running,
            is_finished: self.run.is_finished,
        }
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(TimerConfiguration::default())
    }
}

/// Format a second count as zero-padded `MM:SS`
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(config: TimerConfiguration) -> TimerEngine {
        let mut engine = TimerEngine::new(config);
        engine.start();
        engine
    }

    fn tick_times(engine: &mut TimerEngine, n: u32) {
        for _ in 0..n {
            engine.tick();
        }
    }

    fn short_config() -> TimerConfiguration {
        TimerConfiguration {
            prep: 3,
            work: 5,
            rest: 2,
            rest_between_sets: 10,
            cycles: 2,
            sets: 1,
            ..Default::default()
        }
    }

    #[test]
    fn initial_state_matches_configuration() {
        let engine = TimerEngine::new(short_config());
        let run = engine.run_state();

        assert_eq!(run.phase, Phase::Prep);
        assert_eq!(run.seconds_remaining, 3);
        assert_eq!(run.current_cycle, 0);
        assert_eq!(run.current_set, 1);
        assert!(!run.running);
        assert!(!run.is_finished);
    }

    #[test]
    fn reset_after_configure_is_idempotent() {
        let mut engine = TimerEngine::new(short_config());
        let configured = engine.run_state().clone();

        engine.start();
        tick_times(&mut engine, 7);
        engine.reset();

        assert_eq!(*engine.run_state(), configured);
    }

    #[test]
    fn tick_is_a_noop_while_paused() {
        let mut engine = TimerEngine::new(short_config());
        let before = engine.run_state().clone();

        assert!(!engine.tick());
        assert_eq!(*engine.run_state(), before);
    }

    #[test]
    fn start_and_pause_only_touch_the_running_flag() {
        let mut engine = TimerEngine::new(short_config());

        engine.start();
        assert!(engine.run_state().running);
        assert_eq!(engine.run_state().phase, Phase::Prep);

        engine.start();
        assert!(engine.run_state().running);

        engine.pause();
        assert!(!engine.run_state().running);
        engine.pause();
        assert!(!engine.run_state().running);
    }

    #[test]
    fn countdown_is_monotone_and_never_skips_a_phase() {
        let mut engine = engine(short_config());

        // prep counts 3 -> 2 -> boundary, exactly one advance
        assert!(!engine.tick());
        assert_eq!(engine.run_state().seconds_remaining, 2);
        assert!(!engine.tick());
        assert_eq!(engine.run_state().seconds_remaining, 1);
        assert!(engine.tick());
        assert_eq!(engine.run_state().phase, Phase::Work);
        assert_eq!(engine.run_state().seconds_remaining, 5);
    }

    #[test]
    fn single_set_run_walks_prep_work_rest_work_done() {
        let mut engine = engine(short_config());

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
    fn multi_set_run_inserts_a_set_break() {
        let mut engine = engine(TimerConfiguration {
            sets: 2,
            ..short_config()
        });

        // prep + first full cycle + second work interval
        tick_times(&mut engine, 3 + 5 + 2 + 5);
        assert_eq!(engine.run_state().phase, Phase::RestSet);
        assert_eq!(engine.run_state().seconds_remaining, 10);
        assert_eq!(engine.run_state().current_set, 1);

        tick_times(&mut engine, 10);
        let run = engine.run_state();
        assert_eq!(run.phase, Phase::Work);
        assert_eq!(run.current_set, 2);
        assert_eq!(run.current_cycle, 1);
        assert_eq!(run.seconds_remaining, 5);
    }

    #[test]
    fn done_is_terminal_until_reset() {
        let mut engine = engine(TimerConfiguration {
            prep: 1,
            work: 1,
            rest: 1,
            cycles: 1,
            sets: 1,
            ..short_config()
        });

        tick_times(&mut engine, 2);
        assert_eq!(engine.run_state().phase, Phase::Done);

        engine.start();
        assert!(!engine.run_state().running);
        assert!(!engine.tick());
        assert_eq!(engine.run_state().phase, Phase::Done);

        engine.reset();
        assert_eq!(engine.run_state().phase, Phase::Prep);
        assert!(!engine.run_state().is_finished);
    }

    #[test]
    fn configure_hard_resets_in_progress_state() {
        let mut engine = engine(short_config());
        tick_times(&mut engine, 6);

        let run = engine.configure(TimerConfiguration {
            prep: 7,
            ..short_config()
        });

        assert_eq!(run.phase, Phase::Prep);
        assert_eq!(run.seconds_remaining, 7);
        assert_eq!(run.current_cycle, 0);
        assert_eq!(run.current_set, 1);
        assert!(!run.running);
    }

    #[test]
    fn progress_ratio_stays_in_unit_interval() {
        let mut engine = engine(short_config());

        assert_eq!(engine.progress_ratio(), 0.0);
        while engine.run_state().phase != Phase::Done {
            let ratio = engine.progress_ratio();
            assert!((0.0..1.0).contains(&ratio), "ratio {ratio} out of range");
            engine.tick();
        }
        assert_eq!(engine.progress_ratio(), 1.0);
    }

    #[test]
    fn formats_time_as_zero_padded_minutes_and_seconds() {
        assert_eq!(format_time(125), "02:05");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn snapshot_carries_the_recording_contract_fields() {
        let mut engine = engine(short_config());
        tick_times(&mut engine, 3);

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.formatted_time, "00:05");
        assert_eq!(snapshot.phase_display_name, "Work");
        assert_eq!(snapshot.progress_text, "1/2 • Set 1");
        assert_eq!(snapshot.progress_ratio, 0.0);
        assert!(snapshot.running);
    }
}
