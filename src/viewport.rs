/// Selection and scroll position over a list of `len` rows, of which `rows`
/// are visible at once.
///
/// Whenever the list is non-empty, `offset <= selected < offset + rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    selected: usize,
    offset: usize,
    rows: usize,
}

impl Viewport {
    pub fn new(rows: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            rows: rows.max(1),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Row range of the list that is on screen.
    pub fn visible_range(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        start..(self.offset + self.rows).min(len)
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_sub(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
        self.follow_down();
    }

    pub fn jump_start(&mut self) {
        self.reset();
    }

    pub fn jump_end(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = len - 1;
        self.offset = (self.selected + 1).saturating_sub(self.rows);
    }

    /// Applies a new visible row count and scrolls so the selection stays on screen.
    pub fn resize(&mut self, rows: usize) {
        self.rows = rows.max(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
        self.follow_down();
    }

    fn follow_down(&mut self) {
        if self.selected >= self.offset + self.rows {
            self.offset = self.selected + 1 - self.rows;
        }
    }
}
