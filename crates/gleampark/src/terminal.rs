//! Non-interactive host for the CLI binaries.
//!
//! Selection and prompt answers are supplied up front, messages go to
//! stderr, and new documents land on stdout. There is never an active
//! document, so append resolution always falls back to a new file.

use std::io::{self, Write};

use tracing::debug;

use crate::host::{
    EditorWorkspace, ExternalActions, HostError, InputPrompt, PasteTarget, UserInterface,
};

#[derive(Debug, Default)]
pub struct TerminalHost {
    selection: Option<String>,
    pending_input: Option<String>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose "selection" is the given text.
    pub fn with_selection(selection: String) -> Self {
        Self {
            selection: Some(selection).filter(|s| !s.is_empty()),
            pending_input: None,
        }
    }

    /// Host that answers the next input prompt with the given text.
    pub fn with_input(input: String) -> Self {
        Self {
            selection: None,
            pending_input: Some(input),
        }
    }
}

impl EditorWorkspace for TerminalHost {
    fn selected_text(&self) -> Option<String> {
        self.selection.clone()
    }

    fn active_document_text(&self) -> Option<String> {
        None
    }

    fn open_new_document(&mut self, content: &str) -> Result<(), HostError> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.write_all(b"\n"))
            .map_err(|err| HostError::DocumentEdit(err.to_string()))
    }

    fn append_to_active_document(&mut self, _text: &str) -> Result<(), HostError> {
        Err(HostError::DocumentEdit(
            "no active document in a terminal session".to_string(),
        ))
    }
}

impl UserInterface for TerminalHost {
    /// Single-shot: a pre-supplied answer failing validation is reported
    /// and treated as a cancellation.
    fn prompt_input(&mut self, prompt: &InputPrompt<'_>) -> Option<String> {
        let answer = self.pending_input.take()?;
        match (prompt.validate)(&answer) {
            None => Some(answer),
            Some(message) => {
                eprintln!("{message}");
                None
            }
        }
    }

    fn pick_paste_target(&mut self) -> Option<PasteTarget> {
        None
    }

    fn show_information(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }
}

impl ExternalActions for TerminalHost {
    fn write_clipboard(&mut self, text: &str) -> Result<(), HostError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| HostError::ClipboardWrite(err.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|err| HostError::ClipboardWrite(err.to_string()))
    }

    fn open_external(&mut self, url: &str) -> Result<(), HostError> {
        debug!(url, "opening in default browser");
        open::that(url).map_err(|err| HostError::OpenExternal(err.to_string()))
    }
}
