//! Logical draw surface over a ratatui buffer.
//!
//! Screens draw on a fixed logical canvas. [`Viewport`] maps that canvas onto
//! the terminal's character grid and back again for pointer input, and
//! [`Surface`] implements the drawing primitives the screens need in terms of
//! buffer cells.

use crate::geometry::{Bounds, Point};
use crate::platform::assets::{Font, Image, ImageContent};
use crate::styles::{Rgb, Rgba};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Widget};

/// Shade glyph used for raster images the terminal cannot show
const RASTER_GLYPH: &str = "░";

/// Mapping between the logical canvas and a rectangle of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    logical_width: i32,
    logical_height: i32,
    area: Rect,
}

impl Viewport {
    pub fn new(logical: (i32, i32), area: Rect) -> Self {
        Self {
            logical_width: logical.0.max(1),
            logical_height: logical.1.max(1),
            area,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn logical_size(&self) -> (i32, i32) {
        (self.logical_width, self.logical_height)
    }

    /// Column (may be outside the area) containing logical `x`
    pub fn column(&self, x: i32) -> i32 {
        let cols = i64::from(self.area.width.max(1));
        let col = (i64::from(x) * cols).div_euclid(i64::from(self.logical_width));
        i64::from(self.area.x).saturating_add(col) as i32
    }

    /// Row (may be outside the area) containing logical `y`
    pub fn row(&self, y: i32) -> i32 {
        let rows = i64::from(self.area.height.max(1));
        let row = (i64::from(y) * rows).div_euclid(i64::from(self.logical_height));
        i64::from(self.area.y).saturating_add(row) as i32
    }

    /// Cell rectangle covering `bounds`, clipped to the area.
    ///
    /// A non-empty logical rectangle always covers at least one cell in each
    /// direction, so small controls stay visible on small terminals.
    pub fn cells(&self, bounds: Bounds) -> Rect {
        if bounds.width <= 0 || bounds.height <= 0 {
            return Rect::new(self.area.x, self.area.y, 0, 0);
        }
        let x0 = self.column(bounds.x);
        let y0 = self.row(bounds.y);
        let x1 = self.column(bounds.right()).max(x0 + 1);
        let y1 = self.row(bounds.bottom()).max(y0 + 1);
        self.clip(x0, y0, x1, y1)
    }

    fn clip(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
        let left = i32::from(self.area.left());
        let top = i32::from(self.area.top());
        let right = i32::from(self.area.right());
        let bottom = i32::from(self.area.bottom());
        let cx0 = x0.clamp(left, right);
        let cy0 = y0.clamp(top, bottom);
        let cx1 = x1.clamp(left, right);
        let cy1 = y1.clamp(top, bottom);
        Rect::new(
            cx0 as u16,
            cy0 as u16,
            (cx1 - cx0).max(0) as u16,
            (cy1 - cy0).max(0) as u16,
        )
    }

    /// Logical position at the center of a terminal cell
    pub fn to_logical(&self, column: u16, row: u16) -> Point {
        let cols = i64::from(self.area.width.max(1));
        let rows = i64::from(self.area.height.max(1));
        let col = i64::from(column.saturating_sub(self.area.x));
        let row = i64::from(row.saturating_sub(self.area.y));
        Point::new(
            ((2 * col + 1) * i64::from(self.logical_width) / (2 * cols)) as i32,
            ((2 * row + 1) * i64::from(self.logical_height) / (2 * rows)) as i32,
        )
    }

    /// Logical width of one cell, rounded up
    pub fn cell_width(&self) -> i32 {
        let cols = i32::from(self.area.width.max(1));
        (self.logical_width + cols - 1) / cols
    }

    /// Logical height of one cell, rounded up
    pub fn cell_height(&self) -> i32 {
        let rows = i32::from(self.area.height.max(1));
        (self.logical_height + rows - 1) / rows
    }
}

/// The draw surface lent to screens once per frame.
pub struct Surface<'a> {
    buf: &'a mut Buffer,
    viewport: Viewport,
}

impl<'a> Surface<'a> {
    /// Wrap `buf`, mapping a `logical` canvas onto its whole area
    pub fn new(buf: &'a mut Buffer, logical: (i32, i32)) -> Self {
        let viewport = Viewport::new(logical, buf.area);
        Self { buf, viewport }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The whole logical canvas
    pub fn bounds(&self) -> Bounds {
        let (w, h) = self.viewport.logical_size();
        Bounds::new(0, 0, w, h)
    }

    /// Clear the whole canvas to a solid color
    pub fn fill(&mut self, color: Rgb) {
        let bounds = self.bounds();
        self.fill_rect(bounds, color);
    }

    /// Opaque rectangle; erases whatever text was under it
    pub fn fill_rect(&mut self, bounds: Bounds, color: Rgb) {
        let cells = self.viewport.cells(bounds);
        for y in cells.top()..cells.bottom() {
            for x in cells.left()..cells.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_bg(color.into());
                }
            }
        }
    }

    /// Translucent rectangle blended over both the background and the text
    /// already drawn, so content beneath stays visible but dimmed.
    pub fn tint(&mut self, bounds: Bounds, color: Rgba) {
        let cells = self.viewport.cells(bounds);
        let over = color.rgb();
        let alpha = color.alpha();
        for y in cells.top()..cells.bottom() {
            for x in cells.left()..cells.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    let bg = rgb_of(cell.bg).unwrap_or(Rgb::BLACK).blend(over, alpha);
                    cell.set_bg(bg.into());
                    if let Some(fg) = rgb_of(cell.fg) {
                        cell.set_fg(fg.blend(over, alpha).into());
                    }
                }
            }
        }
    }

    /// Filled rounded rectangle with a border in `border`
    pub fn rounded_rect(&mut self, bounds: Bounds, fill: Rgb, border: Rgb) {
        self.fill_rect(bounds, fill);
        let cells = self.viewport.cells(bounds);
        if cells.width < 2 || cells.height < 2 {
            return;
        }
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border.into()).bg(fill.into()))
            .render(cells, self.buf);
    }

    /// Logical size of `text` in `font`.
    ///
    /// Every face renders in the cell font, so only the viewport matters.
    pub fn measure_text(&self, text: &str, _font: &Font) -> (i32, i32) {
        let width = Span::raw(text).width() as i32;
        (
            width * self.viewport.cell_width(),
            self.viewport.cell_height(),
        )
    }

    /// Draw `text` with its top-left corner at `pos`
    ///
    /// Only the foreground is painted; the background of each cell is kept.
    pub fn text(&mut self, pos: Point, text: &str, font: &Font, color: Rgb) {
        let column = self.viewport.column(pos.x);
        let row = self.viewport.row(pos.y);
        self.put_text(column, row, text, font.style(color));
    }

    /// Draw `text` centered on `center`
    pub fn text_centered(&mut self, center: Point, text: &str, font: &Font, color: Rgb) {
        let (width, _) = self.measure_text(text, font);
        // Snap the left edge to the nearest cell
        let left = center.x - width / 2 + self.viewport.cell_width() / 2;
        let column = self.viewport.column(left);
        let row = self.viewport.row(center.y);
        self.put_text(column, row, text, font.style(color));
    }

    fn put_text(&mut self, column: i32, row: i32, text: &str, style: Style) {
        let area = self.viewport.area();
        if row < i32::from(area.top()) || row >= i32::from(area.bottom()) {
            return;
        }
        let left = i32::from(area.left());
        let right = i32::from(area.right());
        // Drop characters that fall left of the area
        let skip = (left - column).max(0) as usize;
        let visible: String = text.chars().skip(skip).collect();
        let start = column.max(left);
        if start >= right || visible.is_empty() {
            return;
        }
        let max_width = (right - start) as usize;
        self.buf
            .set_stringn(start as u16, row as u16, visible, max_width, style);
    }

    /// Draw `image` scaled into `bounds`
    pub fn blit_image(&mut self, image: &Image, bounds: Bounds) {
        match &image.content {
            ImageContent::Art(lines) => {
                let cells = self.viewport.cells(bounds);
                for (offset, line) in lines.iter().enumerate() {
                    let row = i32::from(cells.y) + offset as i32;
                    if row >= i32::from(cells.bottom()) {
                        break;
                    }
                    let clipped: String = line.chars().take(cells.width as usize).collect();
                    self.put_text(i32::from(cells.x), row, &clipped, Style::default());
                }
            }
            ImageContent::Raster { tone } => {
                let cells = self.viewport.cells(bounds);
                let shade = tone.blend(Rgb::WHITE, 40);
                for y in cells.top()..cells.bottom() {
                    for x in cells.left()..cells.right() {
                        if let Some(cell) = self.buf.cell_mut((x, y)) {
                            cell.reset();
                            cell.set_symbol(RASTER_GLYPH)
                                .set_fg(shade.into())
                                .set_bg((*tone).into());
                        }
                    }
                }
            }
        }
    }
}

fn rgb_of(color: Color) -> Option<Rgb> {
    match color {
        Color::Rgb(r, g, b) => Some(Rgb(r, g, b)),
        Color::Black => Some(Rgb::BLACK),
        Color::White => Some(Rgb::WHITE),
        _ => None,
    }
}
