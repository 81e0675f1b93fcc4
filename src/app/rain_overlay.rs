use ratatui::{buffer::Buffer, layout::Rect};

use crate::rain::{SeedDrop, Viewport};

/// Maps a particle from canvas units onto a terminal cell inside `area`.
pub(super) fn project(particle: &SeedDrop, viewport: Viewport, area: Rect) -> Option<(u16, u16)> {
    if !particle.is_visible(viewport) || area.width == 0 || area.height == 0 {
        return None;
    }

    let col = (particle.x / viewport.width * area.width as f32) as u16;
    let row = (particle.y / viewport.height * area.height as f32) as u16;
    if col >= area.width || row >= area.height {
        return None;
    }

    Some((area.x + col, area.y + row))
}

/// Draws seeds into blank cells only, so they fall behind the text.
pub(super) fn draw_rain(buf: &mut Buffer, area: Rect, particles: &[SeedDrop], viewport: Viewport) {
    for particle in particles {
        let Some((x, y)) = project(particle, viewport, area) else {
            continue;
        };

        let cell = buf.get_mut(x, y);
        if cell.symbol() != " " {
            continue;
        }

        let style = particle.seed.style();
        let glyph = if particle.is_large() {
            style.large_glyph
        } else {
            style.small_glyph
        };
        cell.set_char(glyph).set_fg(style.color);
    }
}
