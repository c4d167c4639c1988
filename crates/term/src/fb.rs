//! Indexed-colour pixel matrix and its palette.

use std::convert::Infallible;

use crate::core::DisplaySurface;
use crate::types::{COLOR_ACTIVE, COLOR_BACKGROUND, COLOR_BEZEL, COLOR_LOCKED};

/// Side of the reference LED panel in pixels
pub const MATRIX_SIZE: u16 = 32;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colour lookup for the four palette indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; 4],
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = [Rgb::default(); 4];
        colors[COLOR_BACKGROUND as usize] = Rgb::new(0, 0, 0);
        colors[COLOR_BEZEL as usize] = Rgb::new(0, 0, 255);
        colors[COLOR_ACTIVE as usize] = Rgb::new(255, 0, 0);
        colors[COLOR_LOCKED as usize] = Rgb::new(255, 255, 255);
        Self { colors }
    }
}

impl Palette {
    pub const fn new(colors: [Rgb; 4]) -> Self {
        Self { colors }
    }

    /// Out-of-range indices fall back to the background colour.
    pub fn rgb(&self, index: u8) -> Rgb {
        self.colors
            .get(index as usize)
            .copied()
            .unwrap_or(self.colors[COLOR_BACKGROUND as usize])
    }
}

/// Row-major grid of palette indices.
///
/// `refresh` only counts presentations; pushing pixels to a real terminal is
/// the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    width: u16,
    height: u16,
    pixels: Vec<u8>,
    presented: u64,
}

impl PixelMatrix {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![COLOR_BACKGROUND; len],
            presented: 0,
        }
    }

    /// Matrix large enough for a `board_w` x `board_h` playfield plus bezel,
    /// never smaller than the reference panel.
    pub fn for_board(board_w: u8, board_h: u8) -> Self {
        Self::new(
            MATRIX_SIZE.max(board_w as u16 + 2),
            MATRIX_SIZE.max(board_h as u16 + 2),
        )
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<u8> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: u16, y: u16, color: u8) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self, color: u8) {
        self.pixels.fill(color);
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: u8) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x.saturating_add(dx), y.saturating_add(dy), color);
            }
        }
    }

    /// One-pixel outline around the `w` x `h` rectangle whose inside starts
    /// at (`x`, `y`).
    pub fn outline(&mut self, x: u16, y: u16, w: u16, h: u16, color: u8) {
        let (Some(left), Some(top)) = (x.checked_sub(1), y.checked_sub(1)) else {
            return;
        };
        let right = x.saturating_add(w);
        let bottom = y.saturating_add(h);
        for px in left..=right {
            self.set(px, top, color);
            self.set(px, bottom, color);
        }
        for py in top..=bottom {
            self.set(left, py, color);
            self.set(right, py, color);
        }
    }
}

impl DisplaySurface for PixelMatrix {
    type Error = Infallible;

    fn set_cell(&mut self, x: u16, y: u16, color: u8) {
        self.set(x, y, color);
    }

    fn refresh(&mut self) -> Result<(), Infallible> {
        self.presented = self.presented.wrapping_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut m = PixelMatrix::new(4, 4);
        m.set(4, 0, COLOR_BEZEL);
        m.set_cell(0, 9, COLOR_BEZEL);
        assert!(m.pixels().iter().all(|&p| p == COLOR_BACKGROUND));
        assert_eq!(m.get(4, 0), None);
    }

    #[test]
    fn outline_surrounds_inner_rect() {
        let mut m = PixelMatrix::new(6, 6);
        m.outline(1, 1, 3, 2, COLOR_BEZEL);
        assert_eq!(m.get(0, 0), Some(COLOR_BEZEL));
        assert_eq!(m.get(4, 3), Some(COLOR_BEZEL));
        assert_eq!(m.get(1, 1), Some(COLOR_BACKGROUND));
        assert_eq!(m.get(3, 2), Some(COLOR_BACKGROUND));
        assert_eq!(m.get(5, 5), Some(COLOR_BACKGROUND));
    }

    #[test]
    fn for_board_grows_past_reference_panel() {
        let m = PixelMatrix::for_board(10, 20);
        assert_eq!((m.width(), m.height()), (32, 32));
        let m = PixelMatrix::for_board(40, 20);
        assert_eq!((m.width(), m.height()), (42, 32));
    }

    #[test]
    fn refresh_counts_presentations() {
        let mut m = PixelMatrix::new(2, 2);
        m.refresh().unwrap();
        m.refresh().unwrap();
        assert_eq!(m.presented(), 2);
    }

    #[test]
    fn palette_falls_back_to_background() {
        let p = Palette::default();
        assert_eq!(p.rgb(COLOR_BEZEL), Rgb::new(0, 0, 255));
        assert_eq!(p.rgb(200), Rgb::new(0, 0, 0));
    }
}
