//! Pixel-art sprites and their readiness.
//!
//! Sprites are baked from ASCII art at startup. Until baked, or if baking is
//! turned off or fails, a sprite reports a non-ready state and the surface
//! draws a plain rectangle in its place.

use super::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetState {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone)]
pub struct Sprite {
    state: AssetState,
    w: usize,
    h: usize,
    /// Row-major, `None` is transparent
    px: Vec<Option<Rgb>>,
}

impl Sprite {
    pub fn loading() -> Self {
        Self::empty(AssetState::Loading)
    }

    pub fn failed() -> Self {
        Self::empty(AssetState::Failed)
    }

    fn empty(state: AssetState) -> Self {
        Self {
            state,
            w: 0,
            h: 0,
            px: Vec::new(),
        }
    }

    /// Bake a sprite from rows of ASCII art. `.` is transparent, every other
    /// character must appear in `palette`. Ragged rows or unknown characters
    /// produce a failed sprite.
    pub fn from_art(rows: &[&str], palette: &[(char, Rgb)]) -> Self {
        let w = rows.first().map_or(0, |r| r.chars().count());
        if w == 0 || rows.iter().any(|r| r.chars().count() != w) {
            return Self::failed();
        }

        let mut px = Vec::with_capacity(w * rows.len());
        for row in rows {
            for ch in row.chars() {
                if ch == '.' {
                    px.push(None);
                    continue;
                }
                match palette.iter().find(|(key, _)| *key == ch) {
                    Some(&(_, color)) => px.push(Some(color)),
                    None => return Self::failed(),
                }
            }
        }

        Self {
            state: AssetState::Ready,
            w,
            h: rows.len(),
            px,
        }
    }

    pub fn state(&self) -> AssetState {
        self.state
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Color at art coordinates, `None` if transparent or out of range.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.w || y >= self.h {
            return None;
        }
        self.px[y * self.w + x]
    }
}

// ── Built-in art ────────────────────────────────────────────────────────────

const DINO_BODY: Rgb = Rgb(83, 83, 83);
const DINO_EYE: Rgb = Rgb(255, 255, 255);
const CACTUS_L: Rgb = Rgb(74, 122, 26);
const CACTUS_HI: Rgb = Rgb(115, 191, 46);

#[rustfmt::skip]
const DINO_ART: [&str; 12] = [
    "......#####",
    ".....#o####",
    ".....######",
    ".....###...",
    "#...#####..",
    "##.######..",
    "#########..",
    ".#######...",
    "..######...",
    "...##.##...",
    "...#...#...",
    "...##..##..",
];

#[rustfmt::skip]
const CACTUS_ART: [&str; 8] = [
    "..+..",
    "..#.+",
    "+.#.#",
    "#.###",
    "###..",
    "..#..",
    "..#..",
    "..#..",
];

#[derive(Debug, Clone)]
pub struct Assets {
    pub dino: Sprite,
    pub cactus: Sprite,
}

impl Assets {
    /// Nothing baked yet.
    #[cfg(test)]
    pub fn pending() -> Self {
        Self {
            dino: Sprite::loading(),
            cactus: Sprite::loading(),
        }
    }

    /// Bake the built-in sprites, or mark them failed when sprites are
    /// turned off so everything draws as rectangles.
    pub fn load(enabled: bool) -> Self {
        if !enabled {
            log::info!("Sprites disabled - drawing rectangles");
            return Self {
                dino: Sprite::failed(),
                cactus: Sprite::failed(),
            };
        }
        let assets = Self {
            dino: Sprite::from_art(&DINO_ART, &[('#', DINO_BODY), ('o', DINO_EYE)]),
            cactus: Sprite::from_art(&CACTUS_ART, &[('#', CACTUS_L), ('+', CACTUS_HI)]),
        };
        for (name, sprite) in [("dino", &assets.dino), ("cactus", &assets.cactus)] {
            if sprite.state() != AssetState::Ready {
                log::warn!("Sprite {name} failed to bake - using fallback");
            }
        }
        assets
    }
}
