//! Builds a frame from the session state.

use super::{
    Align, Assets, CACTUS_BROWN, DINO_AIRBORNE, DINO_GREEN, HORIZON, INK, PANEL, Rgb, SAND,
    SHADOW, SKY, Surface, WHITE,
};
use crate::sim::{Rect, Session, Tint};

/// Far enough to cover any terminal margin around the world.
const BEYOND: f32 = 1.0e5;

pub fn tint_color(tint: Tint) -> Rgb {
    match tint {
        Tint::Grounded => DINO_GREEN,
        Tint::Airborne => DINO_AIRBORNE,
    }
}

/// Draw one frame. `show_restart` overlays the game-over panel.
pub fn draw(session: &Session, assets: &Assets, show_restart: bool, surface: &mut impl Surface) {
    let w = session.config.viewport.width;
    let h = session.config.viewport.height;

    surface.clear(SKY);
    surface.fill_rect(Rect::new(-BEYOND, h, 2.0 * BEYOND, BEYOND), SAND);

    surface.draw_sprite(&assets.cactus, session.obstacle.rect(), CACTUS_BROWN);
    surface.draw_sprite(&assets.dino, session.character.rect(), tint_color(session.tint));

    // Hide whatever has scrolled past the world's edges on wide terminals
    for x in [-BEYOND, w] {
        surface.fill_rect(Rect::new(x, -BEYOND, BEYOND, BEYOND + h), SKY);
        surface.fill_rect(Rect::new(x, h, BEYOND, BEYOND), SAND);
    }
    surface.fill_rect(Rect::new(-BEYOND, h, 2.0 * BEYOND, 1.0), HORIZON);

    let run = &session.run;
    let (_, line_h) = surface.text_size("0");
    surface.text(10.0, 10.0, &format!("SCORE {}", run.score), INK, Align::Left);
    surface.text(
        10.0,
        10.0 + line_h * 1.4,
        &format!("HI {}", run.high_score),
        INK,
        Align::Left,
    );

    if show_restart {
        draw_restart_panel(session, surface);
    }
}

fn draw_restart_panel(session: &Session, surface: &mut impl Surface) {
    let cx = session.config.viewport.width / 2.0;
    let cy = session.config.viewport.height / 2.0;

    surface.dim();

    let lines = [
        ("GAME OVER".to_string(), WHITE),
        (format!("SCORE {}", session.run.score), WHITE),
        (format!("HI {}", session.run.high_score), DINO_AIRBORNE),
        ("PRESS R".to_string(), INK),
    ];
    let (text_w, line_h) = lines
        .iter()
        .map(|(text, _)| surface.text_size(text))
        .fold((0.0f32, 0.0f32), |(mw, mh), (w, h)| (mw.max(w), mh.max(h)));
    let pad = line_h;
    let step = line_h * 1.6;
    let panel_w = text_w + pad * 2.0;
    let panel_h = step * lines.len() as f32 + pad;
    let panel = Rect::new(cx - panel_w / 2.0, cy - panel_h / 2.0, panel_w, panel_h);

    let border = pad * 0.25;
    surface.fill_rect(
        Rect::new(
            panel.x - border,
            panel.y - border,
            panel.w + border * 2.0,
            panel.h + border * 2.0,
        ),
        SHADOW,
    );
    surface.fill_rect(panel, PANEL);

    for (i, (text, color)) in lines.iter().enumerate() {
        let y = panel.y + pad * 0.8 + step * i as f32;
        surface.text(cx, y, text, *color, Align::Center);
    }
}
