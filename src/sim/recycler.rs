//! Scrolls the obstacle and brings it back once it leaves the screen.

use rand::Rng;

use super::entity::Obstacle;
use crate::config::Config;

/// Move the obstacle left by `speed`. Once it is fully past the left edge it
/// reappears at `viewport.width + [0, gap_jitter)`. Returns true on respawn.
pub fn advance<R: Rng + ?Sized>(
    obstacle: &mut Obstacle,
    speed: f32,
    config: &Config,
    rng: &mut R,
) -> bool {
    obstacle.x -= speed;
    if !obstacle.is_off_screen() {
        return false;
    }

    let jitter = if config.gap_jitter > 0.0 {
        rng.random_range(0.0..config.gap_jitter)
    } else {
        0.0
    };
    obstacle.x = respawn_x(config.viewport.width, jitter, config.gap_jitter);
    true
}

/// `width + jitter`, kept below `width + gap_jitter`. Rounding the sum can
/// otherwise land exactly on the excluded bound.
fn respawn_x(width: f32, jitter: f32, gap_jitter: f32) -> f32 {
    let x = width + jitter;
    let upper = width + gap_jitter;
    if x >= upper && upper > width && upper > 0.0 {
        // Largest f32 below a positive `upper`
        f32::from_bits(upper.to_bits() - 1).max(width)
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_moves_left_by_speed() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut cactus = Obstacle::new(&config);
        assert!(!advance(&mut cactus, 5.0, &config, &mut rng));
        assert_eq!(cactus.x, config.viewport.width - 5.0);
        assert!(!advance(&mut cactus, 6.5, &config, &mut rng));
        assert_eq!(cactus.x, config.viewport.width - 11.5);
    }

    #[test]
    fn test_respawn_range() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut cactus = Obstacle::new(&config);
        for _ in 0..200 {
            cactus.x = -cactus.width + 1.0;
            assert!(advance(&mut cactus, 5.0, &config, &mut rng));
            assert!(cactus.x >= config.viewport.width);
            assert!(cactus.x < config.viewport.width + config.gap_jitter);
            assert_eq!(cactus.y, config.obstacle_y());
            assert_eq!(cactus.width, config.obstacle.width);
        }
    }

    #[test]
    fn test_largest_jitter_stays_below_bound() {
        let jitter = f32::from_bits(200.0f32.to_bits() - 1);
        assert_eq!(800.0 + jitter, 1000.0);
        let x = respawn_x(800.0, jitter, 200.0);
        assert!(x < 1000.0);
        assert!(x >= 800.0);
        assert_eq!(respawn_x(800.0, 0.0, 200.0), 800.0);
        assert_eq!(respawn_x(800.0, 120.5, 200.0), 920.5);
    }

    #[test]
    fn test_edge_touching_is_not_off_screen() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut cactus = Obstacle::new(&config);
        cactus.x = 5.0 - cactus.width;
        // Lands exactly at x + width == 0
        assert!(!advance(&mut cactus, 5.0, &config, &mut rng));
        assert_eq!(cactus.x, -cactus.width);
    }

    #[test]
    fn test_zero_jitter_respawns_at_edge() {
        let config = Config {
            gap_jitter: 0.0,
            ..Config::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let mut cactus = Obstacle::new(&config);
        cactus.x = -cactus.width;
        assert!(advance(&mut cactus, 1.0, &config, &mut rng));
        assert_eq!(cactus.x, config.viewport.width);
    }
}
