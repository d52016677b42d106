//! Run bookkeeping shared by every system.

/// Lifecycle of a run. There is no pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Ended,
}

/// Audio cues emitted by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Jump,
    Milestone,
}

/// Side effects produced during a tick or a command, drained by the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Sound(Cue),
    /// Speed stepped up at this score
    SpeedUp { score: u32, speed: f32 },
    /// The run ended; the restart control should appear
    ShowRestart { score: u32, high_score: u32 },
    /// A new run started; the restart control should disappear
    HideRestart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    /// Ticks survived in the current run
    pub score: u32,
    /// Best completed run since launch. Survives restarts.
    pub high_score: u32,
    pub game_speed: f32,
    /// Score at which the speed last stepped up
    pub last_speed_increase_score: u32,
    pub phase: Phase,
}

impl RunState {
    pub fn new(base_speed: f32) -> Self {
        Self {
            score: 0,
            high_score: 0,
            game_speed: base_speed,
            last_speed_increase_score: 0,
            phase: Phase::Running,
        }
    }

    /// Start a fresh run, keeping the high score.
    pub fn reset(&mut self, base_speed: f32) {
        *self = Self {
            high_score: self.high_score,
            ..Self::new(base_speed)
        };
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// End the run and fold its score into the high score.
    pub fn finish(&mut self) {
        self.phase = Phase::Ended;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_raises_high_score() {
        let mut run = RunState::new(5.0);
        run.score = 42;
        run.finish();
        assert!(run.is_over());
        assert_eq!(run.high_score, 42);
    }

    #[test]
    fn test_finish_never_lowers_high_score() {
        let mut run = RunState::new(5.0);
        run.high_score = 300;
        run.score = 120;
        run.finish();
        assert_eq!(run.high_score, 300);
    }

    #[test]
    fn test_reset_keeps_only_high_score() {
        let mut run = RunState::new(5.0);
        run.score = 250;
        run.game_speed = 6.0;
        run.last_speed_increase_score = 200;
        run.finish();
        run.reset(5.0);
        assert_eq!(
            run,
            RunState {
                high_score: 250,
                ..RunState::new(5.0)
            }
        );
    }
}
