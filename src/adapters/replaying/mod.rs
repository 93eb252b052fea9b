//! Replaying adapters that serve recorded interactions back.

pub mod editor;
pub mod filesystem;
pub mod git;

pub use editor::ReplayingEditorRefresh;
pub use filesystem::ReplayingFileSystem;
pub use git::ReplayingGitClient;

/// Extracts a `Result` from a cassette output JSON value.
///
/// Outputs follow the recording convention: `{"Ok": v}` for success and
/// `{"Err": "message"}` for failure.
pub(crate) fn extract_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("Err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("Ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
