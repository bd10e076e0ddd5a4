//! Share the current selection as a playground link.

use gleampark_playground::build_playground_url;
use tracing::debug;

use crate::config::{ConfigStore, ShareMethod};
use crate::host::{EditorHost, HostError};

/// Builds a playground URL from the current selection and delivers it
/// per the configured [`ShareMethod`].
///
/// An empty selection only shows an information message. A clipboard
/// failure propagates to the caller; a browser failure is best effort
/// and swallowed (headless hosts cannot open one).
pub fn share_to_playground(
    host: &mut impl EditorHost,
    config: &impl ConfigStore,
) -> Result<(), HostError> {
    let Some(code) = host.selected_text() else {
        host.show_information("Please select code to share to the playground.");
        return Ok(());
    };

    let url = build_playground_url(&code);
    let method = config.share_method();
    debug!(?method, selection_len = code.len(), "sharing selection");

    if matches!(method, ShareMethod::Clipboard | ShareMethod::Both) {
        host.write_clipboard(&url)?;
        host.show_information("Playground link copied!");
    }

    if matches!(method, ShareMethod::Browser | ShareMethod::Both) {
        if let Err(err) = host.open_external(&url) {
            debug!(error = %err, "could not open browser");
        }
    }

    Ok(())
}
