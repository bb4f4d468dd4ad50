pub mod canvas;
pub mod picker;
pub mod render;
pub mod terminal;

use crate::error::Result;
use canvas::Canvas;

/// Keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Up,
    Down,
    Home,
    End,
    Enter,
    Escape,
    Interrupt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Resize { width: u16, height: u16 },
    /// Anything outside the set above; carries no state change.
    Ignored,
}

/// The terminal as seen by the picker: one blocking event source and a
/// cell-addressed screen presented one whole frame at a time.
pub trait Backend {
    /// Current `(width, height)` in cells.
    fn size(&self) -> Result<(u16, u16)>;

    /// Blocks until the next event arrives.
    fn next_event(&mut self) -> Result<InputEvent>;

    fn present(&mut self, canvas: &Canvas) -> Result<()>;
}
