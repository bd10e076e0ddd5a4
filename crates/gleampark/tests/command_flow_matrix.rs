use gleampark::{
    decode_from_playground, share_to_playground, ConfigStore, EditorWorkspace, ExternalActions,
    HostError, InputPrompt, PasteMethod, PasteTarget, ShareMethod, UserInterface,
};
use gleampark_playground::build_playground_url;

#[derive(Debug, Clone, Copy)]
struct TestConfig {
    share_method: ShareMethod,
    paste_method: PasteMethod,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            share_method: ShareMethod::Clipboard,
            paste_method: PasteMethod::NewFile,
        }
    }
}

impl ConfigStore for TestConfig {
    fn share_method(&self) -> ShareMethod {
        self.share_method
    }

    fn paste_method(&self) -> PasteMethod {
        self.paste_method
    }
}

/// Host scripted with canned answers; records everything the commands do.
#[derive(Default)]
struct ScriptedHost {
    selection: Option<String>,
    document: Option<String>,
    prompt_answer: Option<String>,
    pick_answer: Option<PasteTarget>,
    clipboard_fails: bool,
    browser_fails: bool,
    edit_fails: bool,

    clipboard: Option<String>,
    opened_urls: Vec<String>,
    new_documents: Vec<String>,
    infos: Vec<String>,
    errors: Vec<String>,
    validation_messages: Vec<String>,
}

impl EditorWorkspace for ScriptedHost {
    fn selected_text(&self) -> Option<String> {
        self.selection.clone()
    }

    fn active_document_text(&self) -> Option<String> {
        self.document.clone()
    }

    fn open_new_document(&mut self, content: &str) -> Result<(), HostError> {
        if self.edit_fails {
            return Err(HostError::DocumentEdit("disk full".to_string()));
        }
        self.new_documents.push(content.to_string());
        Ok(())
    }

    fn append_to_active_document(&mut self, text: &str) -> Result<(), HostError> {
        if self.edit_fails {
            return Err(HostError::DocumentEdit("disk full".to_string()));
        }
        let document = self
            .document
            .as_mut()
            .ok_or_else(|| HostError::DocumentEdit("no active document".to_string()))?;
        document.push_str(text);
        Ok(())
    }
}

impl UserInterface for ScriptedHost {
    fn prompt_input(&mut self, prompt: &InputPrompt<'_>) -> Option<String> {
        let answer = self.prompt_answer.take()?;
        match (prompt.validate)(&answer) {
            None => Some(answer),
            Some(message) => {
                self.validation_messages.push(message);
                None
            }
        }
    }

    fn pick_paste_target(&mut self) -> Option<PasteTarget> {
        self.pick_answer
    }

    fn show_information(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

impl ExternalActions for ScriptedHost {
    fn write_clipboard(&mut self, text: &str) -> Result<(), HostError> {
        if self.clipboard_fails {
            return Err(HostError::ClipboardWrite("denied".to_string()));
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn open_external(&mut self, url: &str) -> Result<(), HostError> {
        if self.browser_fails {
            return Err(HostError::OpenExternal("no display".to_string()));
        }
        self.opened_urls.push(url.to_string());
        Ok(())
    }
}

const SNIPPET: &str = "pub fn main() { \"Hello\" }";

// ---------------------------------------------------------------- share

#[test]
fn share_without_selection_only_informs() {
    let mut host = ScriptedHost::default();
    share_to_playground(&mut host, &TestConfig::default()).unwrap();
    assert_eq!(host.infos, ["Please select code to share to the playground."]);
    assert_eq!(host.clipboard, None);
    assert!(host.opened_urls.is_empty());
}

#[test]
fn share_to_clipboard() {
    let mut host = ScriptedHost {
        selection: Some(SNIPPET.to_string()),
        ..ScriptedHost::default()
    };
    share_to_playground(&mut host, &TestConfig::default()).unwrap();
    assert_eq!(host.clipboard.as_deref(), Some(&*build_playground_url(SNIPPET)));
    assert_eq!(host.infos, ["Playground link copied!"]);
    assert!(host.opened_urls.is_empty());
}

#[test]
fn share_to_browser() {
    let mut host = ScriptedHost {
        selection: Some(SNIPPET.to_string()),
        ..ScriptedHost::default()
    };
    let config = TestConfig {
        share_method: ShareMethod::Browser,
        ..TestConfig::default()
    };
    share_to_playground(&mut host, &config).unwrap();
    assert_eq!(host.opened_urls, [build_playground_url(SNIPPET)]);
    assert_eq!(host.clipboard, None);
    assert!(host.infos.is_empty());
}

#[test]
fn share_to_both() {
    let mut host = ScriptedHost {
        selection: Some(SNIPPET.to_string()),
        ..ScriptedHost::default()
    };
    let config = TestConfig {
        share_method: ShareMethod::Both,
        ..TestConfig::default()
    };
    share_to_playground(&mut host, &config).unwrap();
    assert_eq!(host.clipboard.as_deref(), Some(&*build_playground_url(SNIPPET)));
    assert_eq!(host.opened_urls, [build_playground_url(SNIPPET)]);
    assert_eq!(host.infos, ["Playground link copied!"]);
}

#[test]
fn share_swallows_browser_failure() {
    let mut host = ScriptedHost {
        selection: Some(SNIPPET.to_string()),
        browser_fails: true,
        ..ScriptedHost::default()
    };
    let config = TestConfig {
        share_method: ShareMethod::Both,
        ..TestConfig::default()
    };
    share_to_playground(&mut host, &config).unwrap();
    assert_eq!(host.infos, ["Playground link copied!"]);
    assert!(host.errors.is_empty());
}

#[test]
fn share_propagates_clipboard_failure() {
    let mut host = ScriptedHost {
        selection: Some(SNIPPET.to_string()),
        clipboard_fails: true,
        ..ScriptedHost::default()
    };
    let err = share_to_playground(&mut host, &TestConfig::default()).unwrap_err();
    assert!(matches!(err, HostError::ClipboardWrite(_)));
    assert!(host.infos.is_empty());
}

// ---------------------------------------------------------------- decode

fn decoding_host(url: String) -> ScriptedHost {
    ScriptedHost {
        prompt_answer: Some(url),
        ..ScriptedHost::default()
    }
}

#[test]
fn decode_into_new_file() {
    let mut host = decoding_host(build_playground_url(SNIPPET));
    decode_from_playground(&mut host, &TestConfig::default()).unwrap();
    assert_eq!(host.new_documents, [SNIPPET]);
    assert_eq!(host.infos, ["Playground code inserted successfully"]);
    assert!(host.errors.is_empty());
}

#[test]
fn decode_cancelled_prompt_does_nothing() {
    let mut host = ScriptedHost::default();
    decode_from_playground(&mut host, &TestConfig::default()).unwrap();
    assert!(host.new_documents.is_empty());
    assert!(host.infos.is_empty());
    assert!(host.errors.is_empty());
}

#[test]
fn decode_reports_empty_and_invalid_urls_through_the_validator() {
    let mut host = decoding_host(String::new());
    decode_from_playground(&mut host, &TestConfig::default()).unwrap();
    assert_eq!(host.validation_messages, ["URL cannot be empty"]);

    let mut host = decoding_host("https://example.com/#N4Ig".to_string());
    decode_from_playground(&mut host, &TestConfig::default()).unwrap();
    assert_eq!(host.validation_messages, ["Invalid playground URL format"]);
    assert!(host.new_documents.is_empty());
}

#[test]
fn decode_reports_corrupted_data_with_a_single_message() {
    // Valid URL shape, but the fragment is not a compressed payload.
    let mut host = decoding_host("https://playground.gleam.run/#AAAAAAAA".to_string());
    decode_from_playground(&mut host, &TestConfig::default()).unwrap();
    assert_eq!(
        host.errors,
        ["Could not decode playground data. The URL may be invalid or corrupted."]
    );
    assert!(host.new_documents.is_empty());
}

#[test]
fn decode_appends_with_separator_to_a_nonempty_document() {
    let mut host = decoding_host(build_playground_url(SNIPPET));
    host.document = Some("existing".to_string());
    let config = TestConfig {
        paste_method: PasteMethod::Append,
        ..TestConfig::default()
    };
    decode_from_playground(&mut host, &config).unwrap();
    assert_eq!(host.document.as_deref(), Some(&*format!("existing\n\n{SNIPPET}")));
    assert_eq!(host.infos, ["Playground code inserted successfully"]);
}

#[test]
fn decode_appends_without_separator_to_an_empty_document() {
    let mut host = decoding_host(build_playground_url(SNIPPET));
    host.document = Some(String::new());
    let config = TestConfig {
        paste_method: PasteMethod::Append,
        ..TestConfig::default()
    };
    decode_from_playground(&mut host, &config).unwrap();
    assert_eq!(host.document.as_deref(), Some(SNIPPET));
}

#[test]
fn decode_falls_back_to_new_file_without_an_active_editor() {
    let mut host = decoding_host(build_playground_url(SNIPPET));
    let config = TestConfig {
        paste_method: PasteMethod::Append,
        ..TestConfig::default()
    };
    decode_from_playground(&mut host, &config).unwrap();
    assert_eq!(host.new_documents, [SNIPPET]);
}

#[test]
fn decode_ask_honors_the_picked_target() {
    let mut host = decoding_host(build_playground_url(SNIPPET));
    host.document = Some("existing".to_string());
    host.pick_answer = Some(PasteTarget::Append);
    let config = TestConfig {
        paste_method: PasteMethod::Ask,
        ..TestConfig::default()
    };
    decode_from_playground(&mut host, &config).unwrap();
    assert_eq!(host.document.as_deref(), Some(&*format!("existing\n\n{SNIPPET}")));
}

#[test]
fn decode_ask_dismissed_cancels_silently() {
    let mut host = decoding_host(build_playground_url(SNIPPET));
    host.document = Some("existing".to_string());
    let config = TestConfig {
        paste_method: PasteMethod::Ask,
        ..TestConfig::default()
    };
    decode_from_playground(&mut host, &config).unwrap();
    assert!(host.new_documents.is_empty());
    assert_eq!(host.document.as_deref(), Some("existing"));
    assert!(host.infos.is_empty());
    assert!(host.errors.is_empty());
}

#[test]
fn decode_reports_a_failed_edit_with_its_cause() {
    let mut host = decoding_host(build_playground_url(SNIPPET));
    host.edit_fails = true;
    decode_from_playground(&mut host, &TestConfig::default()).unwrap();
    assert_eq!(host.errors.len(), 1);
    assert!(host.errors[0].starts_with("Failed to insert code:"));
    assert!(host.infos.is_empty());
}

#[test]
fn decode_preserves_unicode_content() {
    let code = "pub fn main() { \"Hello 世界 🌍\" }";
    let mut host = decoding_host(build_playground_url(code));
    decode_from_playground(&mut host, &TestConfig::default()).unwrap();
    assert_eq!(host.new_documents, [code]);
}
