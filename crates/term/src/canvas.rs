//! Pixel canvas: the render sink the world draws into.

use crate::core::{RenderSink, Sprite};

/// A playfield-sized grid of optional sprites, plus the HUD line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: i32,
    height: i32,
    pixels: Vec<Option<Sprite>>,
    hud: String,
}

impl PixelCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![None; (width as usize) * (height as usize)],
            hud: String::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Reset for the next frame without releasing memory.
    pub fn clear(&mut self) {
        self.pixels.fill(None);
        self.hud.clear();
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Sprite> {
        self.idx(x, y).and_then(|i| self.pixels[i])
    }

    pub fn hud_text(&self) -> &str {
        &self.hud
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}

impl RenderSink for PixelCanvas {
    fn plot(&mut self, x: i32, y: i32, sprite: Sprite) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = Some(sprite);
        }
    }

    fn hud(&mut self, text: &str) {
        self.hud.clear();
        self.hud.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_clips_to_playfield() {
        let mut c = PixelCanvas::new(4, 4);
        c.plot(-1, 0, Sprite::Bullet);
        c.plot(4, 0, Sprite::Bullet);
        c.plot(2, 3, Sprite::Bullet);
        assert_eq!(c.get(2, 3), Some(Sprite::Bullet));
        assert_eq!(c.pixels.iter().flatten().count(), 1);
    }

    #[test]
    fn clear_drops_pixels_and_hud() {
        let mut c = PixelCanvas::new(2, 2);
        c.plot(0, 0, Sprite::Base);
        c.hud("Load:3");
        c.clear();
        assert_eq!(c.get(0, 0), None);
        assert_eq!(c.hud_text(), "");
    }
}
