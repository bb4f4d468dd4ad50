use crate::config::{Config, LabelConfig, ThemeConfig};
use crate::model::Record;
use crate::state::PickerState;
use crate::ui::canvas::{Canvas, Style};

/// Title row plus query prompt row.
pub const HEADER_ROWS: u16 = 2;

pub fn visible_rows(height: u16) -> usize {
    height.saturating_sub(HEADER_ROWS) as usize
}

fn color(hex: &str) -> Style {
    Style::fg(ThemeConfig::parse_color(hex))
}

/// Draws a whole frame from the picker state. Holds only presentation
/// settings, so equal inputs always produce equal canvases.
pub struct Renderer {
    labels: LabelConfig,
    header: Style,
    prompt: Style,
    key: Style,
    rule: Style,
    heading: Style,
    link: Style,
    selected: Style,
}

impl Renderer {
    pub fn new(labels: LabelConfig, theme: &ThemeConfig) -> Self {
        Self {
            labels,
            header: color(&theme.header).bold(),
            prompt: color(&theme.prompt),
            key: color(&theme.key),
            rule: color(&theme.rule),
            heading: color(&theme.heading).bold(),
            link: color(&theme.link),
            selected: Style::default().reversed(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.labels.clone(), &config.theme)
    }

    pub fn render(&self, state: &PickerState, preview: bool, width: u16, height: u16) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        let selected = state.get_selected();
        let preview = if preview { selected } else { None };
        let list_end = if preview.is_some() { width / 2 } else { width };

        canvas.put_str(0, 0, list_end, &self.labels.title, self.header);
        let prompt = format!("{}{}", self.labels.prompt, state.query);
        canvas.put_str(1, 0, list_end, &prompt, self.prompt);

        for (row, (pos, record)) in (HEADER_ROWS..height).zip(state.visible()) {
            let line = record.display_line();
            if pos == state.selected_index() {
                canvas.fill_row(row, 0, list_end, self.selected);
                canvas.put_str(row, 0, list_end, &line, self.selected);
            } else {
                canvas.put_str(row, 0, list_end, &line, Style::default());
                canvas.put_str(row, 0, list_end, &record.id, self.key);
            }
        }

        if let Some(record) = preview {
            self.draw_preview(&mut canvas, record, list_end);
        }
        canvas
    }

    fn draw_preview(&self, canvas: &mut Canvas, record: &Record, rule_col: u16) {
        for row in 0..canvas.height() {
            canvas.set(row, rule_col, '│', self.rule);
        }

        let col = rule_col.saturating_add(2);
        let plain = Style::default();
        let mut row = 0;
        self.inline_field(canvas, &mut row, col, "HTTP Status Code:", &record.id);
        self.inline_field(canvas, &mut row, col, "Description:", &record.label);
        if let Some(category) = &record.category {
            self.inline_field(canvas, &mut row, col, "Category:", category);
        }
        if let Some(detail) = &record.detail {
            self.block_field(canvas, &mut row, col, "Details:", detail, plain);
        }
        if let Some(link) = &record.link {
            self.block_field(canvas, &mut row, col, "MDN Documentation:", link, self.link);
        }
    }

    fn inline_field(&self, canvas: &mut Canvas, row: &mut u16, col: u16, heading: &str, value: &str) {
        let end = canvas.width();
        let value_col = canvas.put_str(*row, col, end, heading, self.heading);
        canvas.put_str(*row, value_col.saturating_add(1), end, value, Style::default());
        *row += 2;
    }

    fn block_field(
        &self,
        canvas: &mut Canvas,
        row: &mut u16,
        col: u16,
        heading: &str,
        value: &str,
        style: Style,
    ) {
        let end = canvas.width();
        canvas.put_str(*row, col, end, heading, self.heading);
        canvas.put_str(*row + 1, col, end, value, style);
        *row += 3;
    }
}
