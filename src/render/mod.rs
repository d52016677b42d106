//! Drawing: a small draw-surface abstraction, the terminal pixel buffer that
//! implements it, sprites, and the scene built from a session.

pub mod font;
pub mod pixel_buf;
pub mod scene;
pub mod sprite;

pub use pixel_buf::PixelBuf;
pub use scene::draw;
pub use sprite::{AssetState, Assets, Sprite};

use crate::sim::Rect;

// ── Colors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn halved(self) -> Rgb {
        Rgb(self.0 / 2, self.1 / 2, self.2 / 2)
    }
}

pub const SKY: Rgb = Rgb(236, 240, 232);
pub const SAND: Rgb = Rgb(210, 185, 110);
pub const SAND_DARK: Rgb = Rgb(185, 160, 90);
pub const HORIZON: Rgb = Rgb(83, 83, 83);
pub const INK: Rgb = Rgb(20, 20, 20);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const SHADOW: Rgb = Rgb(30, 30, 30);
pub const DINO_GREEN: Rgb = Rgb(60, 160, 60);
pub const DINO_AIRBORNE: Rgb = Rgb(150, 210, 240);
pub const CACTUS_BROWN: Rgb = Rgb(140, 80, 40);
pub const PANEL: Rgb = Rgb(220, 195, 120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Draw commands in world units. `y` grows downward; the ground is at the
/// viewport height and anything below it is scenery.
pub trait Surface {
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Copy a sprite's opaque pixels, stretched to `rect`.
    fn blit(&mut self, sprite: &Sprite, rect: Rect);

    fn text(&mut self, x: f32, y: f32, text: &str, color: Rgb, align: Align);

    /// Width and height of `text` in world units.
    fn text_size(&self, text: &str) -> (f32, f32);

    /// Darken everything drawn so far.
    fn dim(&mut self);

    /// Draw the sprite if it is ready, a solid rectangle otherwise.
    fn draw_sprite(&mut self, sprite: &Sprite, rect: Rect, fallback: Rgb) {
        match sprite.state() {
            AssetState::Ready => self.blit(sprite, rect),
            AssetState::Loading | AssetState::Failed => self.fill_rect(rect, fallback),
        }
    }
}
