//! Linear speed ramp keyed on score multiples.

use super::state::{Cue, GameEvent, RunState};
use crate::config::Config;

/// Step the game speed up when the score lands on a new multiple of the
/// configured interval. Calling it twice for the same score changes nothing.
pub fn update(run: &mut RunState, config: &Config, events: &mut Vec<GameEvent>) {
    let score = run.score;
    let on_multiple = score.checked_rem(config.speed_interval) == Some(0);
    if score > 0 && on_multiple && score > run.last_speed_increase_score {
        run.game_speed += config.speed_increment;
        run.last_speed_increase_score = score;
        log::debug!("Speed up to {} at score {}", run.game_speed, score);
        events.push(GameEvent::SpeedUp {
            score,
            speed: run.game_speed,
        });
        events.push(GameEvent::Sound(Cue::Milestone));
    }
}
