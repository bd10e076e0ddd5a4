//! Configuration enumerations and the configuration-store capability.

use serde::{Deserialize, Serialize};

/// How a generated playground link is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShareMethod {
    /// Copy the link to the system clipboard.
    #[default]
    Clipboard,
    /// Open the link in the default browser.
    Browser,
    /// Copy to the clipboard and open in the browser.
    Both,
}

/// Where decoded playground code is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasteMethod {
    /// Always create a new untitled document.
    #[default]
    NewFile,
    /// Always append to the end of the active document.
    Append,
    /// Ask on every decode.
    Ask,
}

/// Configuration store injected into the commands.
pub trait ConfigStore {
    fn share_method(&self) -> ShareMethod;
    fn paste_method(&self) -> PasteMethod;
}
