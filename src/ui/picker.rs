use crate::config::Config;
use crate::error::Result;
use crate::model::Record;
use crate::state::PickerState;
use crate::ui::render::{visible_rows, Renderer};
use crate::ui::terminal::CrosstermBackend;
use crate::ui::{Backend, InputEvent, Key};

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected(Record),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Browsing,
    Selected(Record),
    Cancelled,
}

pub struct Picker {
    pub state: PickerState,
    renderer: Renderer,
    preview: bool,
    width: u16,
    height: u16,
}

impl Picker {
    pub fn new(records: Vec<Record>, renderer: Renderer, preview: bool) -> Self {
        Self {
            state: PickerState::new(records, 1),
            renderer,
            preview,
            width: 0,
            height: 0,
        }
    }

    /// Drives the session until a record is chosen or the user cancels.
    /// Draws once up front and once after every non-final event.
    pub fn run<B: Backend>(&mut self, backend: &mut B) -> Result<Outcome> {
        let (width, height) = backend.size()?;
        self.resize(width, height);
        self.draw(backend)?;

        loop {
            let event = backend.next_event()?;
            match self.handle(event) {
                Session::Browsing => self.draw(backend)?,
                Session::Selected(record) => {
                    log::info!("picker: selected {}", record.id);
                    return Ok(Outcome::Selected(record));
                }
                Session::Cancelled => {
                    log::info!("picker: cancelled");
                    return Ok(Outcome::Cancelled);
                }
            }
        }
    }

    /// Applies one event to the state.
    pub fn handle(&mut self, event: InputEvent) -> Session {
        let key = match event {
            InputEvent::Key(key) => key,
            InputEvent::Resize { width, height } => {
                self.resize(width, height);
                return Session::Browsing;
            }
            InputEvent::Ignored => return Session::Browsing,
        };

        match key {
            Key::Char(c) => self.state.push_char(c),
            Key::Backspace => self.state.pop_char(),
            Key::Up => self.state.move_up(),
            Key::Down => self.state.move_down(),
            Key::Home => self.state.jump_start(),
            Key::End => self.state.jump_end(),
            Key::Enter => {
                if let Some(record) = self.state.get_selected() {
                    return Session::Selected(record.clone());
                }
            }
            Key::Escape | Key::Interrupt => return Session::Cancelled,
        }
        Session::Browsing
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.state.resize(visible_rows(height));
    }

    fn draw<B: Backend>(&self, backend: &mut B) -> Result<()> {
        log::trace!(
            "picker: selected={} offset={} rows={} filtered={}",
            self.state.selected_index(),
            self.state.scroll_offset(),
            self.state.viewport.rows(),
            self.state.filtered_len()
        );
        let canvas = self
            .renderer
            .render(&self.state, self.preview, self.width, self.height);
        backend.present(&canvas)
    }
}

/// Runs a picker on the real terminal. The terminal is restored before this
/// returns, whatever the outcome.
pub fn pick(records: Vec<Record>, config: &Config, preview: bool) -> Result<Outcome> {
    let mut picker = Picker::new(records, Renderer::from_config(config), preview);
    let mut terminal = CrosstermBackend::acquire()?;
    picker.run(&mut terminal)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;

    use super::*;
    use crate::codes;
    use crate::error::Error;
    use crate::ui::canvas::Canvas;

    struct ScriptedBackend {
        size: (u16, u16),
        events: VecDeque<InputEvent>,
        frames: Vec<Canvas>,
    }

    impl ScriptedBackend {
        fn new(width: u16, height: u16, events: impl IntoIterator<Item = InputEvent>) -> Self {
            Self {
                size: (width, height),
                events: events.into_iter().collect(),
                frames: Vec::new(),
            }
        }

        fn last_frame(&self) -> &Canvas {
            self.frames.last().expect("nothing was presented")
        }
    }

    impl Backend for ScriptedBackend {
        fn size(&self) -> Result<(u16, u16)> {
            Ok(self.size)
        }

        fn next_event(&mut self) -> Result<InputEvent> {
            self.events.pop_front().ok_or_else(|| {
                Error::Terminal(io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
            })
        }

        fn present(&mut self, canvas: &Canvas) -> Result<()> {
            self.frames.push(canvas.clone());
            Ok(())
        }
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::Key(key)
    }

    fn typed(text: &str) -> Vec<InputEvent> {
        text.chars().map(|c| key(Key::Char(c))).collect()
    }

    fn new_picker(records: Vec<Record>, preview: bool) -> Picker {
        Picker::new(records, Renderer::from_config(&Config::default()), preview)
    }

    fn highlighted(canvas: &Canvas) -> Vec<String> {
        (0..canvas.height())
            .filter(|&row| canvas.row(row).iter().any(|cell| cell.style.reverse))
            .map(|row| canvas.row_text(row))
            .collect()
    }

    #[test]
    fn typing_a_code_and_enter_selects_it() {
        let mut events = typed("404");
        events.push(key(Key::Enter));
        let mut backend = ScriptedBackend::new(80, 20, events);

        let outcome = new_picker(codes::records(), true).run(&mut backend).unwrap();

        match outcome {
            Outcome::Selected(record) => assert_eq!(record.label, "Not Found"),
            other => panic!("unexpected outcome {other:?}"),
        }
        // Initial frame plus one per keystroke before Enter.
        assert_eq!(backend.frames.len(), 4);
        assert_eq!(backend.last_frame().row_text(1).split('│').next().map(str::trim_end), Some("Search: 404"));
    }

    #[test]
    fn arrows_move_the_selection() {
        let events = [key(Key::Down), key(Key::Down), key(Key::Up), key(Key::Down), key(Key::Enter)];
        let mut backend = ScriptedBackend::new(60, 10, events);

        let outcome = new_picker(codes::records(), false).run(&mut backend).unwrap();

        assert_eq!(outcome, Outcome::Selected(codes::records()[2].clone()));
        assert_eq!(highlighted(backend.last_frame()), vec!["102  Processing".to_string()]);
    }

    #[test]
    fn end_then_home() {
        let mut picker = new_picker(codes::records(), false);
        let mut backend = ScriptedBackend::new(60, 10, [key(Key::End), key(Key::Home), key(Key::End), key(Key::Escape)]);

        assert_eq!(picker.run(&mut backend).unwrap(), Outcome::Cancelled);
        let last = codes::CODES.len() - 1;
        assert_eq!(picker.state.selected_index(), last);
        assert_eq!(picker.state.scroll_offset(), last + 1 - 8);
        assert_eq!(highlighted(&backend.frames[2]), vec!["100  Continue".to_string()]);
        assert_eq!(backend.last_frame().row_text(9), "511  Network Authentication Required");
    }

    #[test]
    fn escape_and_interrupt_cancel() {
        for cancel in [Key::Escape, Key::Interrupt] {
            let mut backend = ScriptedBackend::new(40, 10, [key(Key::Char('5')), key(cancel)]);
            let outcome = new_picker(codes::records(), true).run(&mut backend).unwrap();
            assert_eq!(outcome, Outcome::Cancelled);
            assert_eq!(backend.frames.len(), 2);
        }
    }

    #[test]
    fn backspace_restores_earlier_filter() {
        let mut picker = new_picker(codes::records(), false);
        for event in typed("er") {
            picker.handle(event);
        }
        picker.handle(key(Key::Down));
        picker.handle(key(Key::Backspace));

        let mut fresh = new_picker(codes::records(), false);
        fresh.handle(key(Key::Char('e')));

        assert_eq!(picker.state.query, "e");
        assert_eq!(picker.state.filtered_indices, fresh.state.filtered_indices);
        assert_eq!(picker.state.selected_index(), fresh.state.selected_index());
        assert_eq!(picker.state.scroll_offset(), fresh.state.scroll_offset());
    }

    #[test]
    fn scrolling_down_through_ten_rows_of_three() {
        let records: Vec<Record> = codes::records().into_iter().take(10).collect();
        let mut events = vec![key(Key::Down); 9];
        events.push(key(Key::Escape));
        let mut picker = new_picker(records, false);
        let mut backend = ScriptedBackend::new(40, 5, events);

        picker.run(&mut backend).unwrap();

        assert_eq!(picker.state.selected_index(), 9);
        assert_eq!(picker.state.scroll_offset(), 7);
    }

    #[test]
    fn shrinking_terminal_keeps_selection_visible() {
        let mut events = vec![key(Key::Down); 8];
        events.push(InputEvent::Resize { width: 40, height: 5 });
        events.push(key(Key::Escape));
        let mut picker = new_picker(codes::records(), false);
        let mut backend = ScriptedBackend::new(40, 20, events);

        picker.run(&mut backend).unwrap();

        assert_eq!(picker.state.selected_index(), 8);
        assert_eq!(picker.state.scroll_offset(), 6);
        let frame = backend.last_frame();
        assert_eq!(frame.height(), 5);
        assert_eq!(highlighted(frame), vec!["204  No Content".to_string()]);
    }

    #[test]
    fn enter_on_empty_dataset_is_a_no_op() {
        let events = [key(Key::Enter), key(Key::Down), key(Key::Enter), key(Key::Escape)];
        let mut backend = ScriptedBackend::new(40, 8, events);

        let outcome = new_picker(Vec::new(), true).run(&mut backend).unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(backend.frames.len(), 4);
        assert!(backend.frames.iter().all(|frame| highlighted(frame).is_empty()));
    }

    #[test]
    fn enter_without_matches_keeps_browsing() {
        let mut picker = new_picker(codes::records(), true);
        for event in typed("zzzz") {
            picker.handle(event);
        }
        assert_eq!(picker.handle(key(Key::Enter)), Session::Browsing);
        picker.handle(key(Key::Backspace));
        picker.handle(key(Key::Backspace));
        picker.handle(key(Key::Backspace));
        picker.handle(key(Key::Backspace));
        assert!(matches!(picker.handle(key(Key::Enter)), Session::Selected(r) if r.id == "100"));
    }

    #[test]
    fn ignored_events_change_nothing() {
        let mut picker = new_picker(codes::records(), false);
        picker.handle(key(Key::Down));
        assert_eq!(picker.handle(InputEvent::Ignored), Session::Browsing);
        assert_eq!(picker.state.selected_index(), 1);
        assert_eq!(picker.state.query, "");
    }

    #[test]
    fn event_source_errors_surface() {
        let mut backend = ScriptedBackend::new(40, 8, [key(Key::Down)]);
        let result = new_picker(codes::records(), false).run(&mut backend);
        assert!(matches!(result, Err(Error::Terminal(_))));
    }
}
