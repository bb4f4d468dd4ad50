use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetForegroundColor,
};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, DisableLineWrap, EnableLineWrap,
    EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::{Handle, Signals};

use super::canvas::{Canvas, Style};
use super::{Backend, InputEvent, Key};
use crate::error::{Error, Result};

/// Owns the terminal for the length of a session: raw mode, alternate screen
/// and hidden cursor are switched on by `acquire` and restored on drop, or by
/// the signal guard if the process is told to terminate first.
pub struct CrosstermBackend {
    out: Stdout,
    #[cfg(unix)]
    _signals: Option<SignalGuard>,
}

impl CrosstermBackend {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode().map_err(Error::TerminalSetup)?;

        // Constructed before the remaining setup so a failure below still
        // runs `Drop` and leaves raw mode.
        let mut backend = Self {
            out: io::stdout(),
            #[cfg(unix)]
            _signals: None,
        };
        execute!(backend.out, EnterAlternateScreen, DisableLineWrap, Hide)
            .map_err(Error::TerminalSetup)?;
        #[cfg(unix)]
        {
            backend._signals = Some(SignalGuard::new().map_err(Error::TerminalSetup)?);
        }

        log::debug!("terminal acquired");
        Ok(backend)
    }

    fn draw(&mut self, canvas: &Canvas) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        for row in 0..canvas.height() {
            queue!(self.out, MoveTo(0, row))?;
            let mut current = None;
            for cell in canvas.row(row) {
                if cell.is_continuation() {
                    continue;
                }
                if current != Some(cell.style) {
                    apply_style(&mut self.out, cell.style)?;
                    current = Some(cell.style);
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        self.out.flush()
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        restore_terminal(&mut self.out);
        log::debug!("terminal released");
    }
}

fn write_restore(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Show, EnableLineWrap, LeaveAlternateScreen)
}

fn restore_terminal(out: &mut impl Write) {
    let _ = write_restore(out);
    let _ = disable_raw_mode();
}

/// Restores the terminal and exits when SIGINT or SIGTERM arrives from
/// outside; in raw mode Ctrl+C is a key event and never gets here.
#[cfg(unix)]
struct SignalGuard {
    handle: Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    fn new() -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM])?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            if let Some(signal) = signals.forever().next() {
                log::warn!("terminating on signal {signal}");
                restore_terminal(&mut io::stdout());
                std::process::exit(128 + signal);
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Backend for CrosstermBackend {
    fn size(&self) -> Result<(u16, u16)> {
        terminal::size().map_err(Error::Terminal)
    }

    fn next_event(&mut self) -> Result<InputEvent> {
        let event = event::read().map_err(Error::Terminal)?;
        Ok(translate(event))
    }

    fn present(&mut self, canvas: &Canvas) -> Result<()> {
        self.draw(canvas).map_err(Error::Terminal)
    }
}

fn apply_style(out: &mut Stdout, style: Style) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(fg))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.reverse {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

/// Maps a raw crossterm event onto the picker's closed event set.
pub fn translate(event: Event) -> InputEvent {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Resize(width, height) => InputEvent::Resize { width, height },
        _ => InputEvent::Ignored,
    }
}

fn translate_key(key: KeyEvent) -> InputEvent {
    if key.kind == KeyEventKind::Release {
        return InputEvent::Ignored;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let key = match key.code {
        KeyCode::Char('c' | 'C') if ctrl => Key::Interrupt,
        KeyCode::Char(_) if ctrl || alt => return InputEvent::Ignored,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        _ => return InputEvent::Ignored,
    };
    InputEvent::Key(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
        translate(Event::Key(KeyEvent::new(code, modifiers)))
    }

    #[test]
    fn printable_characters() {
        assert_eq!(press(KeyCode::Char('a'), KeyModifiers::NONE), InputEvent::Key(Key::Char('a')));
        assert_eq!(press(KeyCode::Char('A'), KeyModifiers::SHIFT), InputEvent::Key(Key::Char('A')));
        assert_eq!(press(KeyCode::Char(' '), KeyModifiers::NONE), InputEvent::Key(Key::Char(' ')));
    }

    #[test]
    fn named_keys() {
        let cases = [
            (KeyCode::Backspace, Key::Backspace),
            (KeyCode::Up, Key::Up),
            (KeyCode::Down, Key::Down),
            (KeyCode::Home, Key::Home),
            (KeyCode::End, Key::End),
            (KeyCode::Enter, Key::Enter),
            (KeyCode::Esc, Key::Escape),
        ];
        for (code, key) in cases {
            assert_eq!(press(code, KeyModifiers::NONE), InputEvent::Key(key));
        }
    }

    #[test]
    fn ctrl_c_interrupts() {
        assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), InputEvent::Key(Key::Interrupt));
    }

    #[test]
    fn other_chords_and_keys_are_ignored() {
        assert_eq!(press(KeyCode::Char('x'), KeyModifiers::CONTROL), InputEvent::Ignored);
        assert_eq!(press(KeyCode::Char('x'), KeyModifiers::ALT), InputEvent::Ignored);
        assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), InputEvent::Ignored);
        assert_eq!(press(KeyCode::F(1), KeyModifiers::NONE), InputEvent::Ignored);
        assert_eq!(translate(Event::FocusGained), InputEvent::Ignored);
    }

    #[test]
    fn key_release_is_ignored() {
        let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate(Event::Key(release)), InputEvent::Ignored);
    }

    #[cfg(unix)]
    #[test]
    fn restore_sequence_shows_cursor_and_leaves_alternate_screen() {
        let mut out = Vec::new();
        write_restore(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?25h"));
        assert!(text.contains("\x1b[?7h"));
        assert!(text.contains("\x1b[?1049l"));
    }

    #[cfg(unix)]
    #[test]
    fn signal_guard_shuts_down_on_drop() {
        let guard = SignalGuard::new().unwrap();
        assert!(guard.thread.is_some());
        drop(guard);
    }

    #[test]
    fn resize_carries_dimensions() {
        assert_eq!(
            translate(Event::Resize(120, 40)),
            InputEvent::Resize { width: 120, height: 40 }
        );
    }
}
