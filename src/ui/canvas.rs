use crossterm::style::Color;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bold: bool,
    pub reverse: bool,
}

impl Style {
    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    /// Stands in the column covered by the right half of a wide glyph.
    pub const CONTINUATION: char = '\0';

    pub fn is_continuation(&self) -> bool {
        self.ch == Self::CONTINUATION
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// A full frame of terminal cells, addressed by `(row, col)`.
/// Writes outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[cfg(test)]
    pub fn get(&self, row: u16, col: u16) -> Option<&Cell> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    pub fn set(&mut self, row: u16, col: u16, ch: char, style: Style) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = Cell { ch, style };
        }
    }

    /// Writes `text` starting at `col`, clipped at column `end` (exclusive)
    /// and at the canvas edge, and returns the column after the last glyph.
    ///
    /// Columns advance by display width: a double-width glyph takes its cell
    /// plus a continuation cell, and is dropped whole if it would cross `end`.
    /// Zero-width characters are skipped and control characters drawn as
    /// spaces.
    pub fn put_str(&mut self, row: u16, col: u16, end: u16, text: &str, style: Style) -> u16 {
        let end = end.min(self.width);
        let mut col = col;
        for ch in text.chars() {
            let (ch, width) = if ch.is_control() {
                (' ', 1)
            } else {
                match ch.width().unwrap_or(1) {
                    0 => continue,
                    width => (ch, width as u16),
                }
            };
            if col.saturating_add(width) > end {
                break;
            }
            self.set(row, col, ch, style);
            for tail in 1..width {
                self.set(row, col + tail, Cell::CONTINUATION, style);
            }
            col += width;
        }
        col
    }

    /// Paints `style` over `col..end` of `row`, padding with spaces so a
    /// highlight spans the whole region.
    pub fn fill_row(&mut self, row: u16, col: u16, end: u16, style: Style) {
        let end = end.min(self.width);
        for col in col..end {
            self.set(row, col, ' ', style);
        }
    }

    pub fn row(&self, row: u16) -> &[Cell] {
        if row >= self.height {
            return &[];
        }
        let start = row as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Characters of a row, trailing blanks trimmed.
    #[cfg(test)]
    pub fn row_text(&self, row: u16) -> String {
        let text: String = self
            .row(row)
            .iter()
            .filter(|cell| !cell.is_continuation())
            .map(|cell| cell.ch)
            .collect();
        text.trim_end().to_string()
    }

    fn index(&self, row: u16, col: u16) -> Option<usize> {
        (row < self.height && col < self.width)
            .then(|| row as usize * self.width as usize + col as usize)
    }
}
