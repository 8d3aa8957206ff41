//! ArenaView: maps a [`RoundSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The 1200 x 600 arena is scaled to the largest area that fits the
//! viewport while keeping its 2:1 shape, accounting for terminal cells being
//! taller than they are wide.

use crate::core::RoundSnapshot;
use crate::fb::{palette, CellStyle, FrameBuffer};
use crate::types::{Rect, Side, ARENA_HEIGHT, ARENA_WIDTH, BORDER};

/// Smallest arena, in cells, worth drawing.
pub const MIN_COLS: u16 = 24;
pub const MIN_ROWS: u16 = 6;

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

/// Where the arena lands in the viewport and how pixels map to cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaLayout {
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
}

impl ArenaLayout {
    /// Fit the arena into `viewport`. `None` when it would be unreadable.
    ///
    /// `cell_aspect` is a cell's height over its width.
    pub fn fit(viewport: Viewport, cell_aspect: u16) -> Option<Self> {
        let ratio = (ARENA_WIDTH / ARENA_HEIGHT) as u32 * cell_aspect.max(1) as u32;
        let cols = (viewport.width as u32).min(viewport.height as u32 * ratio);
        let rows = cols / ratio;
        let (cols, rows) = (cols as u16, rows as u16);
        if cols < MIN_COLS || rows < MIN_ROWS {
            return None;
        }
        Some(Self {
            x: (viewport.width - cols) / 2,
            y: (viewport.height - rows) / 2,
            cols,
            rows,
        })
    }

    /// Column of arena pixel `px`, relative to the arena.
    pub fn col(&self, px: i32) -> i32 {
        scale_floor(px, self.cols, ARENA_WIDTH)
    }

    /// Row of arena pixel `py`, relative to the arena.
    pub fn row(&self, py: i32) -> i32 {
        scale_floor(py, self.rows, ARENA_HEIGHT)
    }

    /// Cells covered by `rect` as absolute `(x, y, w, h)`, clipped to the
    /// arena. Anything non-empty covers at least one cell.
    pub fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        if rect.is_empty() {
            return None;
        }
        let x0 = self.col(rect.x);
        let y0 = self.row(rect.y);
        let x1 = scale_ceil(rect.right(), self.cols, ARENA_WIDTH).max(x0 + 1);
        let y1 = scale_ceil(rect.bottom(), self.rows, ARENA_HEIGHT).max(y0 + 1);

        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.cols as i32);
        let y1 = y1.min(self.rows as i32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((
            self.x + x0 as u16,
            self.y + y0 as u16,
            (x1 - x0) as u16,
            (y1 - y0) as u16,
        ))
    }
}

fn scale_floor(v: i32, cells: u16, extent: i32) -> i32 {
    (v as i64 * cells as i64).div_euclid(extent as i64) as i32
}

fn scale_ceil(v: i32, cells: u16, extent: i32) -> i32 {
    let n = v as i64 * cells as i64;
    let e = extent as i64;
    (n.div_euclid(e) + i64::from(n.rem_euclid(e) != 0)) as i32
}

/// Renders the arena, ships, bullets, health readouts and winner banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaView {
    cell_aspect: u16,
    starfield: bool,
}

impl Default for ArenaView {
    fn default() -> Self {
        // Typical terminal glyphs are about twice as tall as wide.
        Self::new(2)
    }
}

impl ArenaView {
    pub fn new(cell_aspect: u16) -> Self {
        Self {
            cell_aspect,
            starfield: true,
        }
    }

    pub fn with_starfield(mut self, starfield: bool) -> Self {
        self.starfield = starfield;
        self
    }

    pub fn layout(&self, viewport: Viewport) -> Option<ArenaLayout> {
        ArenaLayout::fit(viewport, self.cell_aspect)
    }

    /// Render a frame into an existing framebuffer, with `banner` centered
    /// over it when given.
    ///
    /// Does not allocate once `fb` has been sized for the viewport.
    pub fn render_into(
        &self,
        snap: &RoundSnapshot,
        banner: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(palette::WHITE, palette::BORDER).into_cell(' '));

        let Some(layout) = self.layout(viewport) else {
            let style = CellStyle::new(palette::WHITE, palette::BORDER).bold();
            fb.put_str_centered(0, viewport.width, viewport.height / 2, "Terminal too small", style);
            return;
        };

        self.draw_background(fb, &layout);
        self.draw_border(fb, &layout);
        for side in Side::ALL {
            self.draw_ship(fb, &layout, side, &snap.ship(side));
        }
        for side in Side::ALL {
            for bullet in snap.bullets(side) {
                self.draw_bullet(fb, &layout, side, bullet);
            }
        }
        self.draw_health(fb, &layout, snap);

        if let Some(text) = banner {
            self.draw_banner(fb, &layout, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RoundSnapshot, banner: Option<&str>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, banner, viewport, &mut fb);
        fb
    }

    fn draw_background(&self, fb: &mut FrameBuffer, layout: &ArenaLayout) {
        let space = CellStyle::new(palette::STAR, palette::SPACE);
        fb.fill_rect(layout.x, layout.y, layout.cols, layout.rows, ' ', space);
        if !self.starfield {
            return;
        }
        for row in 0..layout.rows {
            for col in 0..layout.cols {
                if let Some(ch) = star_at(col, row) {
                    fb.put_char(layout.x + col, layout.y + row, ch, space);
                }
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &ArenaLayout) {
        if let Some((x, y, w, h)) = layout.cells(&BORDER) {
            let style = CellStyle::new(palette::BORDER_EDGE, palette::BORDER);
            fb.fill_rect(x, y, w, h, '┃', style);
        }
    }

    fn draw_ship(&self, fb: &mut FrameBuffer, layout: &ArenaLayout, side: Side, rect: &Rect) {
        let Some((x, y, w, h)) = layout.cells(rect) else {
            return;
        };
        let (hull, nose, nose_x) = match side {
            Side::Red => (CellStyle::new(palette::RED, palette::RED_DARK), '▶', x + w - 1),
            Side::Yellow => (CellStyle::new(palette::YELLOW, palette::YELLOW_DARK), '◀', x),
        };
        fb.fill_rect(x, y, w, h, '▒', hull);
        fb.put_char(nose_x, y + h / 2, nose, hull.bold());
    }

    fn draw_bullet(&self, fb: &mut FrameBuffer, layout: &ArenaLayout, side: Side, rect: &Rect) {
        let Some((x, y, w, h)) = layout.cells(rect) else {
            return;
        };
        let fg = match side {
            Side::Red => palette::RED,
            Side::Yellow => palette::YELLOW,
        };
        // Keep whatever background is underneath (space or a ship hull).
        for dy in 0..h {
            for dx in 0..w {
                let bg = fb
                    .get(x + dx, y + dy)
                    .map(|c| c.style.bg)
                    .unwrap_or(palette::SPACE);
                fb.put_char(x + dx, y + dy, '━', CellStyle::new(fg, bg).bold());
            }
        }
    }

    fn draw_health(&self, fb: &mut FrameBuffer, layout: &ArenaLayout, snap: &RoundSnapshot) {
        const LABEL: &str = "Health: ";
        let style = CellStyle::new(palette::WHITE, palette::SPACE).bold();
        let y = layout.y + layout.row(10) as u16;

        let left = layout.x + layout.col(10) as u16;
        let end = fb.put_str(left, y, LABEL, style);
        fb.put_u32(end, y, snap.health(Side::Red) as u32, style);

        let value = snap.health(Side::Yellow) as u32;
        let width = LABEL.len() as u16 + digit_count(value);
        let right = layout.x + layout.col(ARENA_WIDTH - 10) as u16;
        let start = right.saturating_sub(width);
        let end = fb.put_str(start, y, LABEL, style);
        fb.put_u32(end, y, value, style);
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, layout: &ArenaLayout, text: &str) {
        let text_w = text.chars().count() as u16;
        let band_w = (text_w + 6).min(layout.cols);
        let band_x = layout.x + (layout.cols - band_w) / 2;
        let mid_y = layout.y + layout.rows / 2;

        let band = CellStyle::new(palette::WHITE, palette::BORDER);
        fb.fill_rect(band_x, mid_y.saturating_sub(1), band_w, 3, ' ', band);
        fb.put_str_centered(band_x, band_w, mid_y, text, band.bold());
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

/// Fixed star pattern, stable across frames so the diff renderer stays quiet.
fn star_at(col: u16, row: u16) -> Option<char> {
    let mut h = (col as u32).wrapping_mul(0x9E37_79B9) ^ (row as u32).wrapping_mul(0x85EB_CA6B);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    match h % 64 {
        0 => Some('·'),
        1 => Some('.'),
        2 if h % 3 == 0 => Some('*'),
        _ => None,
    }
}
