// ── Pixel buffer with half-block rendering ──────────────────────────────────

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color as CColor},
};

use super::font::{self, ADVANCE, GLYPH_H, GLYPH_W};
use super::{Align, Rgb, SKY, Sprite, Surface};
use crate::sim::Rect;

/// Maps world units to buffer pixels. The scale is uniform, the world is
/// centered horizontally and its ground line sits above a strip of scenery
/// at the bottom of the buffer. Negative world y reaches into the sky.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Projection {
    scale: f32,
    origin_x: f32,
    origin_y: f32,
}

impl Projection {
    fn fit(pw: usize, ph: usize, world_w: f32, world_h: f32) -> Self {
        let scenery = (ph / 8).max(2) as f32;
        let avail_h = (ph as f32 - scenery).max(1.0);
        let scale = (pw as f32 / world_w).min(avail_h / world_h);
        Self {
            scale,
            origin_x: (pw as f32 - world_w * scale) / 2.0,
            origin_y: avail_h - world_h * scale,
        }
    }

    fn x(&self, wx: f32) -> i32 {
        (self.origin_x + wx * self.scale).round() as i32
    }

    fn y(&self, wy: f32) -> i32 {
        (self.origin_y + wy * self.scale).round() as i32
    }

    /// Pixel rectangle `(x, y, w, h)` covering `rect`, at least 1x1.
    fn rect(&self, rect: Rect) -> (i32, i32, i32, i32) {
        let x0 = self.x(rect.x);
        let y0 = self.y(rect.y);
        let x1 = self.x(rect.right()).max(x0 + 1);
        let y1 = self.y(rect.bottom()).max(y0 + 1);
        (x0, y0, x1 - x0, y1 - y0)
    }
}

pub struct PixelBuf {
    w: usize,
    h: usize, // pixel height = terminal rows * 2
    px: Vec<Rgb>,
    world: (f32, f32),
    proj: Projection,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize, world_w: f32, world_h: f32) -> Self {
        Self {
            w,
            h,
            px: vec![SKY; w * h],
            world: (world_w, world_h),
            proj: Projection::fit(w, h, world_w, world_h),
        }
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.resize(w * h, SKY);
        self.proj = Projection::fit(w, h, self.world.0, self.world.1);
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    /// Pixel position of a world point.
    pub fn project(&self, wx: f32, wy: f32) -> (i32, i32) {
        (self.proj.x(wx), self.proj.y(wy))
    }

    fn fill_px(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        // Clip first so huge world rects stay cheap
        let x0 = x.max(0) as usize;
        let y0 = y.max(0) as usize;
        let x1 = (x.saturating_add(w)).clamp(0, self.w as i32) as usize;
        let y1 = (y.saturating_add(h)).clamp(0, self.h as i32) as usize;
        for py in y0..y1 {
            for px in x0..x1 {
                self.px[py * self.w + px] = c;
            }
        }
    }

    fn draw_glyph(&mut self, x: i32, y: i32, glyph: &font::Glyph, c: Rgb) {
        for row in 0..GLYPH_H {
            for col in 0..GLYPH_W {
                if glyph[(row * GLYPH_W + col) as usize] == 1 {
                    self.set(x + col, y + row, c);
                }
            }
        }
    }

    /// Write the buffer to the terminal, two pixels per cell using `▀`.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        // Colors currently set on the terminal; None forces a reset
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;

        let rgb = |c: Rgb| CColor::Rgb {
            r: c.0,
            g: c.1,
            b: c.2,
        };

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if bg != Some(bot) {
                    queue!(out, style::SetBackgroundColor(rgb(bot)))?;
                    bg = Some(bot);
                }
                if top == bot {
                    queue!(out, style::Print(' '))?;
                } else {
                    if fg != Some(top) {
                        queue!(out, style::SetForegroundColor(rgb(top)))?;
                        fg = Some(top);
                    }
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            if row + 1 < rows {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                fg = None;
                bg = None;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

impl Surface for PixelBuf {
    fn clear(&mut self, color: Rgb) {
        self.px.fill(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let (x, y, w, h) = self.proj.rect(rect);
        self.fill_px(x, y, w, h, color);
    }

    fn blit(&mut self, sprite: &Sprite, rect: Rect) {
        let (sw, sh) = (sprite.width(), sprite.height());
        if sw == 0 || sh == 0 {
            return;
        }
        let (x, y, w, h) = self.proj.rect(rect);
        // Nearest-neighbour: sample the art at the center of each pixel
        for dy in 0..h {
            let sy = ((dy as f32 + 0.5) * sh as f32 / h as f32) as usize;
            for dx in 0..w {
                let sx = ((dx as f32 + 0.5) * sw as f32 / w as f32) as usize;
                if let Some(c) = sprite.get(sx, sy) {
                    self.set(x + dx, y + dy, c);
                }
            }
        }
    }

    fn text(&mut self, x: f32, y: f32, text: &str, color: Rgb, align: Align) {
        let (mut px, py) = self.project(x, y);
        if align == Align::Center {
            px -= font::text_width(text) / 2;
        }
        for (i, ch) in text.chars().enumerate() {
            if let Some(glyph) = font::glyph(ch) {
                self.draw_glyph(px + i as i32 * ADVANCE, py, glyph, color);
            }
        }
    }

    fn text_size(&self, text: &str) -> (f32, f32) {
        (
            font::text_width(text) as f32 / self.proj.scale,
            GLYPH_H as f32 / self.proj.scale,
        )
    }

    fn dim(&mut self) {
        for c in &mut self.px {
            *c = c.halved();
        }
    }
}
