//! The two entities on screen: the runner and the cactus it jumps over.

use super::geometry::Rect;
use crate::config::Config;

/// Player character. Only moves vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity, negative is up
    pub vy: f32,
    pub jumping: bool,
}

impl Character {
    /// A character standing on the ground.
    pub fn new(config: &Config) -> Self {
        Self {
            x: config.character.x,
            y: config.ground_y(),
            width: config.character.width,
            height: config.character.height,
            vy: 0.0,
            jumping: false,
        }
    }

    /// Put the character back on the ground, at rest. Size is untouched.
    pub fn reset(&mut self, config: &Config) {
        self.x = config.character.x;
        self.y = config.ground_y();
        self.vy = 0.0;
        self.jumping = false;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The single obstacle, recycled when it leaves the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// An obstacle just past the right edge, standing on the ground.
    pub fn new(config: &Config) -> Self {
        Self {
            x: config.viewport.width,
            y: config.obstacle_y(),
            width: config.obstacle.width,
            height: config.obstacle.height,
        }
    }

    pub fn reset(&mut self, config: &Config) {
        self.x = config.viewport.width;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Fully past the left edge of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// Fallback color of the character, derived from its jump state each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Grounded,
    Airborne,
}

impl Tint {
    pub fn of(character: &Character) -> Self {
        if character.jumping {
            Tint::Airborne
        } else {
            Tint::Grounded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entities_are_ground_aligned() {
        let config = Config::default();
        let dino = Character::new(&config);
        let cactus = Obstacle::new(&config);
        assert_eq!(dino.rect().bottom(), config.viewport.height);
        assert_eq!(cactus.rect().bottom(), config.viewport.height);
        assert_eq!(cactus.x, config.viewport.width);
        assert!(!dino.jumping);
    }

    #[test]
    fn test_character_reset_keeps_size() {
        let config = Config::default();
        let mut dino = Character::new(&config);
        dino.y = 20.0;
        dino.vy = -3.0;
        dino.jumping = true;
        dino.reset(&config);
        assert_eq!(dino, Character::new(&config));
    }

    #[test]
    fn test_obstacle_reset_only_moves_x() {
        let config = Config::default();
        let mut cactus = Obstacle::new(&config);
        cactus.x = -12.0;
        cactus.reset(&config);
        assert_eq!(cactus.x, config.viewport.width);
        assert_eq!(cactus.y, config.obstacle_y());
    }

    #[test]
    fn test_off_screen_is_strict() {
        let config = Config::default();
        let mut cactus = Obstacle::new(&config);
        cactus.x = -cactus.width;
        assert!(!cactus.is_off_screen());
        cactus.x -= 0.5;
        assert!(cactus.is_off_screen());
    }

    #[test]
    fn test_tint_follows_jump_flag() {
        let config = Config::default();
        let mut dino = Character::new(&config);
        assert_eq!(Tint::of(&dino), Tint::Grounded);
        dino.jumping = true;
        assert_eq!(Tint::of(&dino), Tint::Airborne);
    }
}
