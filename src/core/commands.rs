//! Keyboard command resolution.
//!
//! Maps a key press plus the current focus to a [`Command`]. The resolver
//! is pure; the caller performs the command and honours
//! [`Dispatch::prevent_default`].

use crate::config::seek;

// =============================================================================
// Input
// =============================================================================

/// A key press as seen by the dispatcher.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyInput {
    /// `KeyboardEvent.key` value (`"Escape"`, `" "`, `"c"`, ...).
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyInput {
    /// A key press without modifiers.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Whether any chord modifier is held.
    pub fn has_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta || self.shift
    }
}

/// Where keyboard focus currently is, as far as shortcuts care.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusTarget {
    /// Focus is not in a text field.
    #[default]
    Page,
    /// The rename dialog's new-name input.
    RenameInput,
    /// Any other `<input>` or `<textarea>`.
    OtherText,
}

impl FocusTarget {
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Page)
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// An application action reachable from the keyboard or a control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Close the rename and file-list dialogs.
    CloseModals,
    TogglePlay,
    /// Seek the active media by a signed number of seconds.
    SeekBy(f64),
    NextSibling,
    PrevSibling,
    /// Open the rename dialog and focus its input.
    OpenRename,
    OpenFileList,
    Rotate,
    /// Submit the rename dialog.
    SubmitRename,
}

/// A resolved key press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dispatch {
    pub command: Command,
    /// Suppress the browser default (page scroll on space, typing, ...).
    pub prevent_default: bool,
}

impl Dispatch {
    fn new(command: Command) -> Self {
        Self {
            command,
            prevent_default: true,
        }
    }

    fn passive(command: Command) -> Self {
        Self {
            command,
            prevent_default: false,
        }
    }
}

/// Resolve a key press into a command.
///
/// `Escape` always closes dialogs, whatever the focus or modifiers. In a
/// text field only `Enter` in the rename input does anything else. Chorded
/// keys are ignored.
pub fn resolve(input: &KeyInput, focus: FocusTarget) -> Option<Dispatch> {
    if input.key == "Escape" {
        return Some(Dispatch::passive(Command::CloseModals));
    }

    if focus.is_text() {
        return (focus == FocusTarget::RenameInput && input.key == "Enter" && !input.has_modifier())
            .then(|| Dispatch::new(Command::SubmitRename));
    }

    if input.has_modifier() {
        return None;
    }

    let command = match input.key.as_str() {
        "ArrowRight" => Command::SeekBy(seek::ARROW_STEP_SECS),
        "ArrowLeft" => Command::SeekBy(-seek::ARROW_STEP_SECS),
        key => match key.to_lowercase().as_str() {
            " " => Command::TogglePlay,
            "x" => Command::SeekBy(seek::SHORT_STEP_SECS),
            "z" => Command::SeekBy(-seek::SHORT_STEP_SECS),
            "c" => Command::NextSibling,
            "v" => Command::PrevSibling,
            "e" => Command::OpenRename,
            "l" => Command::OpenFileList,
            "r" => Command::Rotate,
            _ => return None,
        },
    };
    Some(Dispatch::new(command))
}
