//! Decode a pasted playground URL back into the editor.

use gleampark_playground::{
    decode_playground_hash, extract_hash_from_url, validate_playground_url,
};
use tracing::debug;

use crate::config::{ConfigStore, PasteMethod};
use crate::host::{EditorHost, HostError, InputPrompt, PasteTarget};

/// Prompts for a playground URL, decodes it, and inserts the snippet per
/// the configured [`PasteMethod`].
///
/// Decode failures surface as a single uniform error message; only a
/// failing document edit is reported with its cause.
pub fn decode_from_playground(
    host: &mut impl EditorHost,
    config: &impl ConfigStore,
) -> Result<(), HostError> {
    let url = host.prompt_input(&InputPrompt {
        prompt: "Enter Gleam Playground URL",
        placeholder: "https://playground.gleam.run/#...",
        validate: &|value| {
            if value.is_empty() {
                Some("URL cannot be empty".to_string())
            } else if !validate_playground_url(value) {
                Some("Invalid playground URL format".to_string())
            } else {
                None
            }
        },
    });
    let Some(url) = url else {
        return Ok(());
    };

    let Some(hash) = extract_hash_from_url(&url) else {
        host.show_error("Could not extract hash from URL");
        return Ok(());
    };

    let Some(payload) = decode_playground_hash(hash) else {
        host.show_error("Could not decode playground data. The URL may be invalid or corrupted.");
        return Ok(());
    };

    let Some(target) = resolve_paste_target(host, config) else {
        return Ok(());
    };
    debug!(?target, content_len = payload.content.len(), "inserting decoded snippet");

    let inserted = match target {
        PasteTarget::NewFile => host.open_new_document(&payload.content),
        PasteTarget::Append => append_with_separator(host, &payload.content),
    };
    match inserted {
        Ok(()) => host.show_information("Playground code inserted successfully"),
        Err(err) => host.show_error(&format!("Failed to insert code: {err}")),
    }

    Ok(())
}

/// Resolves the three-way paste method down to a concrete target. With
/// no active editor the only workable target is a new file; `Ask` defers
/// to the picker, whose dismissal cancels the command.
fn resolve_paste_target(
    host: &mut impl EditorHost,
    config: &impl ConfigStore,
) -> Option<PasteTarget> {
    if host.active_document_text().is_none() {
        return Some(PasteTarget::NewFile);
    }
    match config.paste_method() {
        PasteMethod::NewFile => Some(PasteTarget::NewFile),
        PasteMethod::Append => Some(PasteTarget::Append),
        PasteMethod::Ask => host.pick_paste_target(),
    }
}

fn append_with_separator(host: &mut impl EditorHost, content: &str) -> Result<(), HostError> {
    let existing = host.active_document_text().unwrap_or_default();
    let separator = if existing.is_empty() { "" } else { "\n\n" };
    host.append_to_active_document(&format!("{separator}{content}"))
}
