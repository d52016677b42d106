//! Vertical motion of the character.

use super::entity::Character;

/// Advance an airborne character by one tick.
///
/// Grounded characters do not move. Returns true on the tick the character
/// lands, at which point it is clamped to `ground_y` and at rest.
pub fn step(character: &mut Character, gravity: f32, ground_y: f32) -> bool {
    if !character.jumping {
        return false;
    }

    character.vy += gravity;
    character.y += character.vy;

    if character.y >= ground_y {
        character.y = ground_y;
        character.jumping = false;
        character.vy = 0.0;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn airborne(config: &Config) -> Character {
        let mut dino = Character::new(config);
        dino.jumping = true;
        dino.vy = config.jump_impulse;
        dino
    }

    #[test]
    fn test_grounded_character_does_not_drift() {
        let config = Config::default();
        let mut dino = Character::new(&config);
        for _ in 0..50 {
            assert!(!step(&mut dino, config.gravity, config.ground_y()));
        }
        assert_eq!(dino, Character::new(&config));
    }

    #[test]
    fn test_velocity_grows_by_gravity_each_tick() {
        let config = Config::default();
        let mut dino = airborne(&config);
        let mut prev_vy = dino.vy;
        while dino.jumping {
            let before = dino.clone();
            let landed = step(&mut dino, config.gravity, config.ground_y());
            if landed {
                assert_eq!(dino.vy, 0.0);
                break;
            }
            assert_eq!(dino.vy, prev_vy + config.gravity);
            assert_eq!(dino.y, before.y + dino.vy);
            prev_vy = dino.vy;
        }
    }

    #[test]
    fn test_descent_is_monotonic() {
        let config = Config::default();
        let mut dino = airborne(&config);
        // Rise to the apex first
        while dino.vy < 0.0 {
            step(&mut dino, config.gravity, config.ground_y());
        }
        let mut prev_y = dino.y;
        while dino.jumping {
            step(&mut dino, config.gravity, config.ground_y());
            assert!(dino.y >= prev_y);
            assert!(dino.y <= config.ground_y());
            prev_y = dino.y;
        }
    }

    #[test]
    fn test_full_jump_arc() {
        let config = Config::default();
        let ground = config.ground_y();
        let mut dino = airborne(&config);

        // 20 ticks of rise: velocity reaches zero at the apex, 95 units up
        for _ in 0..20 {
            assert!(!step(&mut dino, config.gravity, ground));
        }
        assert_eq!(dino.vy, 0.0);
        assert_eq!(dino.y, ground - 95.0);
        assert!(dino.jumping);

        // Symmetric fall lands on tick 39
        for _ in 20..38 {
            assert!(!step(&mut dino, config.gravity, ground));
        }
        assert!(step(&mut dino, config.gravity, ground));
        assert_eq!(dino.y, ground);
        assert_eq!(dino.vy, 0.0);
        assert!(!dino.jumping);
    }

    #[test]
    fn test_landing_clamps_overshoot() {
        let config = Config::default();
        let ground = config.ground_y();
        let mut dino = Character::new(&config);
        dino.jumping = true;
        dino.y = ground - 1.0;
        dino.vy = 7.0;
        assert!(step(&mut dino, config.gravity, ground));
        assert_eq!(dino.y, ground);
    }

    #[test]
    fn test_landing_is_idempotent() {
        let config = Config::default();
        let ground = config.ground_y();
        let mut dino = airborne(&config);
        while !step(&mut dino, config.gravity, ground) {}
        let landed = dino.clone();
        for _ in 0..10 {
            assert!(!step(&mut dino, config.gravity, ground));
            assert_eq!(dino, landed);
        }
    }
}
