//! Editor integration for sharing Gleam snippets to the playground.
//!
//! The commands are written against capability traits ([`host`]) so any
//! editor host can drive them; the codec itself lives in
//! `gleampark-playground`.

pub mod commands;
pub mod config;
pub mod host;
pub mod settings;
pub mod terminal;

pub use commands::{decode_from_playground, share_to_playground};
pub use config::{ConfigStore, PasteMethod, ShareMethod};
pub use host::{
    EditorHost, EditorWorkspace, ExternalActions, HostError, InputPrompt, PasteTarget,
    UserInterface,
};
pub use settings::{Settings, SettingsError};
pub use terminal::TerminalHost;
