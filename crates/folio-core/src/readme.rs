//! README content decoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Decodes the base64 `content` field of GitHub's readme endpoint.
///
/// GitHub wraps the encoded text at 60 columns. Anything that is not valid
/// base64 or not valid UTF-8 is treated as "no README".
pub fn decode_readme(content: &str) -> Option<String> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    let bytes = STANDARD.decode(compact.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}
