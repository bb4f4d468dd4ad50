use crate::matcher::FuzzyMatcher;
use crate::model::Record;
use crate::viewport::Viewport;

/// Mutable state of one interactive session.
pub struct PickerState {
    pub records: Vec<Record>,

    pub filtered_indices: Vec<usize>,

    pub query: String,

    pub viewport: Viewport,

    matcher: FuzzyMatcher,
}

impl PickerState {
    pub fn new(records: Vec<Record>, visible_rows: usize) -> Self {
        let filtered_indices = (0..records.len()).collect();
        Self {
            records,
            filtered_indices,
            query: String::new(),
            viewport: Viewport::new(visible_rows),
            matcher: FuzzyMatcher::new(),
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.update_filter();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.update_filter();
        }
    }

    #[cfg(test)]
    pub fn update_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.update_filter();
    }

    /// Rebuilds the filtered view from scratch, keeping dataset order, and
    /// returns focus to the top.
    pub fn update_filter(&mut self) {
        self.filtered_indices = filter(&mut self.matcher, &self.records, &self.query);
        self.viewport.reset();

        log::debug!(
            "PickerState: query='{}', filtered_count={}",
            self.query,
            self.filtered_indices.len()
        );
    }

    pub fn move_up(&mut self) {
        self.viewport.move_up(self.filtered_indices.len());
    }

    pub fn move_down(&mut self) {
        self.viewport.move_down(self.filtered_indices.len());
    }

    pub fn jump_start(&mut self) {
        self.viewport.jump_start();
    }

    pub fn jump_end(&mut self) {
        self.viewport.jump_end(self.filtered_indices.len());
    }

    pub fn resize(&mut self, visible_rows: usize) {
        self.viewport.resize(visible_rows);
    }

    pub fn selected_index(&self) -> usize {
        self.viewport.selected()
    }

    pub fn scroll_offset(&self) -> usize {
        self.viewport.offset()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered_indices.len()
    }

    pub fn get_selected(&self) -> Option<&Record> {
        self.filtered_indices
            .get(self.viewport.selected())
            .map(|&idx| &self.records[idx])
    }

    /// Visible rows as `(position in filtered view, record)`.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.viewport
            .visible_range(self.filtered_indices.len())
            .map(|pos| (pos, &self.records[self.filtered_indices[pos]]))
    }
}

/// Indices of `records` whose search key matches `query`, in dataset order.
pub fn filter(matcher: &mut FuzzyMatcher, records: &[Record], query: &str) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matcher.matches(&record.search_key(), query))
        .map(|(idx, _)| idx)
        .collect()
}
