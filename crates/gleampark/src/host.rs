//! Capability traits for the editor host.
//!
//! The commands never touch a concrete editor; they are handed an
//! implementation of these traits. Tests script one, the CLI binaries
//! use [`TerminalHost`](crate::terminal::TerminalHost).

use thiserror::Error;

/// Failure of a host-side action. The codec layer never produces these;
/// they exist only where the host touches the outside world.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("clipboard write failed: {0}")]
    ClipboardWrite(String),
    #[error("could not open external URL: {0}")]
    OpenExternal(String),
    #[error("document edit failed: {0}")]
    DocumentEdit(String),
}

/// The resolved two-way choice for inserting decoded code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteTarget {
    NewFile,
    Append,
}

/// A single-line input prompt with inline validation.
pub struct InputPrompt<'a> {
    pub prompt: &'a str,
    pub placeholder: &'a str,
    /// Returns a message describing why the entry is invalid, or `None`
    /// when the entry is acceptable.
    pub validate: &'a dyn Fn(&str) -> Option<String>,
}

/// Selection and document access.
pub trait EditorWorkspace {
    /// Currently selected text, or `None` when the selection is empty.
    fn selected_text(&self) -> Option<String>;

    /// Full text of the active document, or `None` when no editor is
    /// active.
    fn active_document_text(&self) -> Option<String>;

    /// Opens a new untitled document holding `content`.
    fn open_new_document(&mut self, content: &str) -> Result<(), HostError>;

    /// Inserts `text` at the end of the active document and moves the
    /// cursor there.
    fn append_to_active_document(&mut self, text: &str) -> Result<(), HostError>;
}

/// Prompts and notifications.
///
/// Interactive hosts re-prompt until the validator passes or the user
/// cancels; non-interactive hosts may report the validation message and
/// cancel.
pub trait UserInterface {
    fn prompt_input(&mut self, prompt: &InputPrompt<'_>) -> Option<String>;

    /// Exclusive choice between the two paste targets; `None` when the
    /// picker is dismissed.
    fn pick_paste_target(&mut self) -> Option<PasteTarget>;

    fn show_information(&mut self, message: &str);

    fn show_error(&mut self, message: &str);
}

/// Actions that leave the editor process.
pub trait ExternalActions {
    fn write_clipboard(&mut self, text: &str) -> Result<(), HostError>;

    fn open_external(&mut self, url: &str) -> Result<(), HostError>;
}

/// Everything the commands need from the host.
pub trait EditorHost: EditorWorkspace + UserInterface + ExternalActions {}

impl<T: EditorWorkspace + UserInterface + ExternalActions> EditorHost for T {}
