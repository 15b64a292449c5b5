//! GameView: packs a [`PixelCanvas`] into a terminal framebuffer.
//!
//! Terminal glyphs are roughly twice as tall as they are wide, so each
//! terminal cell shows two vertically stacked pixels using half-block glyphs.
//! This module is pure (no I/O).

use crate::canvas::PixelCanvas;
use crate::core::{ShapeKind, Sprite, World};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

const UPPER_HALF: char = '▀';
const LOWER_HALF: char = '▄';
const FULL_BLOCK: char = '█';

const PLAYFIELD_BG: Rgb = Rgb::new(20, 20, 30);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Terminal cells needed to show a playfield of `width` x `height`
    /// pixels, border included.
    pub fn frame_size(width: i32, height: i32) -> (u16, u16) {
        let cols = width.max(0) + 2;
        let rows = (height.max(0) + 1) / 2 + 2;
        (clamp_u16(cols), clamp_u16(rows))
    }

    /// Render a canvas into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, canvas: &PixelCanvas, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = Self::frame_size(canvas.width(), canvas.height());
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..(canvas.height() + 1) / 2 {
            for x in 0..canvas.width() {
                let top = canvas.get(x, row * 2);
                let bottom = canvas.get(x, row * 2 + 1);
                let cx = start_x.saturating_add(1).saturating_add(clamp_u16(x));
                let cy = start_y.saturating_add(1).saturating_add(clamp_u16(row));
                fb.set(cx, cy, half_block(top, bottom));
            }
        }

        // HUD sits right-aligned on the top border.
        let hud = canvas.hud_text();
        if !hud.is_empty() {
            let len = clamp_u16(hud.chars().count() as i32);
            let x = start_x
                .saturating_add(frame_w)
                .saturating_sub(len.saturating_add(2));
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::BLACK).bold();
            fb.put_str(x.max(start_x), start_y, hud, style);
        }
    }

    /// Draw `world` into `canvas`, then render the canvas into `fb`.
    pub fn render_world_into(
        &self,
        world: &World,
        canvas: &mut PixelCanvas,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        if canvas.width() != world.width() || canvas.height() != world.height() {
            *canvas = PixelCanvas::new(world.width(), world.height());
        } else {
            canvas.clear();
        }
        world.draw(canvas);
        self.render_into(canvas, viewport, fb);
    }

    /// Convenience helper that allocates a canvas and framebuffer.
    pub fn render(&self, world: &World, viewport: Viewport) -> FrameBuffer {
        let mut canvas = PixelCanvas::new(world.width(), world.height());
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_world_into(world, &mut canvas, viewport, &mut fb);
        fb
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);
    fb.set(x, y, Cell::new('┌', style));
    fb.set(right, y, Cell::new('┐', style));
    fb.set(x, bottom, Cell::new('└', style));
    fb.set(right, bottom, Cell::new('┘', style));

    for dx in 1..w - 1 {
        fb.set(x.saturating_add(dx), y, Cell::new('─', style));
        fb.set(x.saturating_add(dx), bottom, Cell::new('─', style));
    }
    for dy in 1..h - 1 {
        fb.set(x, y.saturating_add(dy), Cell::new('│', style));
        fb.set(right, y.saturating_add(dy), Cell::new('│', style));
    }
}

fn half_block(top: Option<Sprite>, bottom: Option<Sprite>) -> Cell {
    match (top.map(sprite_color), bottom.map(sprite_color)) {
        (None, None) => Cell::new(' ', CellStyle::new(PLAYFIELD_BG, PLAYFIELD_BG)),
        (Some(t), None) => Cell::new(UPPER_HALF, CellStyle::new(t, PLAYFIELD_BG)),
        (None, Some(b)) => Cell::new(LOWER_HALF, CellStyle::new(b, PLAYFIELD_BG)),
        (Some(t), Some(b)) if t == b => Cell::new(FULL_BLOCK, CellStyle::new(t, PLAYFIELD_BG)),
        (Some(t), Some(b)) => Cell::new(UPPER_HALF, CellStyle::new(t, b)),
    }
}

fn sprite_color(sprite: Sprite) -> Rgb {
    match sprite {
        Sprite::Shape(ShapeKind::Fork) => Rgb::new(80, 220, 220),
        Sprite::Shape(ShapeKind::Ell) => Rgb::new(255, 165, 0),
        Sprite::Bullet => Rgb::new(240, 220, 80),
        Sprite::Particle => Rgb::new(200, 200, 200),
        Sprite::Base => Rgb::new(100, 220, 120),
    }
}

fn clamp_u16(v: i32) -> u16 {
    v.clamp(0, i32::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RenderSink;

    #[test]
    fn frame_size_packs_two_rows_per_cell() {
        assert_eq!(GameView::frame_size(80, 44), (82, 24));
        assert_eq!(GameView::frame_size(10, 5), (12, 5));
    }

    #[test]
    fn half_blocks_follow_occupancy() {
        assert_eq!(half_block(Some(Sprite::Bullet), None).ch, UPPER_HALF);
        assert_eq!(half_block(None, Some(Sprite::Bullet)).ch, LOWER_HALF);
        assert_eq!(half_block(Some(Sprite::Base), Some(Sprite::Base)).ch, FULL_BLOCK);
        assert_eq!(half_block(None, None).ch, ' ');

        let mixed = half_block(Some(Sprite::Bullet), Some(Sprite::Base));
        assert_eq!(mixed.ch, UPPER_HALF);
        assert_eq!(mixed.style.bg, sprite_color(Sprite::Base));
    }

    #[test]
    fn canvas_pixel_lands_inside_border() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.plot(0, 1, Sprite::Particle);
        let mut fb = FrameBuffer::new(6, 4);
        GameView::new().render_into(&canvas, Viewport::new(6, 4), &mut fb);

        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(1, 1).map(|c| c.ch), Some(LOWER_HALF));
    }
}
