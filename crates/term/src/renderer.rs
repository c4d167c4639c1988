//! TerminalRenderer: flushes a pixel matrix to a real terminal.
//!
//! Each pixel is two terminal columns wide to compensate for glyph aspect
//! ratio. After the first full redraw only changed runs are re-emitted.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Palette, PixelMatrix, Rgb};

const PIXEL: &str = "  ";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    palette: Palette,
    last: Option<PixelMatrix>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(palette: Palette) -> Self {
        Self {
            stdout: io::stdout(),
            palette,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw the matrix and a one-line status below it.
    pub fn draw(&mut self, matrix: &PixelMatrix, status: &str) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == matrix.width() && prev.height() == matrix.height() => {
                encode_diff_into(prev, matrix, &self.palette, &mut self.buf)?;
            }
            _ => encode_full_into(matrix, &self.palette, &mut self.buf)?,
        }
        encode_status_into(matrix.height(), status, &mut self.buf)?;
        self.flush_buf()?;

        match &mut self.last {
            Some(prev) => prev.clone_from(matrix),
            None => self.last = Some(matrix.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(matrix: &PixelMatrix, palette: &Palette, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current: Option<u8> = None;
    for y in 0..matrix.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..matrix.width() {
            let color = matrix.get(x, y).unwrap_or_default();
            print_pixel(out, color, palette, &mut current)?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(
    prev: &PixelMatrix,
    next: &PixelMatrix,
    palette: &Palette,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut current: Option<u8> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x * 2, y))?;
        for dx in 0..len {
            let color = next.get(x + dx, y).unwrap_or_default();
            print_pixel(out, color, palette, &mut current)?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

fn encode_status_into(row: u16, status: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(Print(status))?;
    Ok(())
}

fn print_pixel(out: &mut Vec<u8>, color: u8, palette: &Palette, current: &mut Option<u8>) -> Result<()> {
    if *current != Some(color) {
        out.queue(SetBackgroundColor(rgb_to_color(palette.rgb(color))))?;
        *current = Some(color);
    }
    out.queue(Print(PIXEL))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &PixelMatrix,
    next: &PixelMatrix,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
