use serde::de::DeserializeOwned;

const FENCE: &str = "```";

/// Decode a JSON reply from the text generator.
///
/// One leading fence line (with an optional language tag) and one trailing
/// fence line are stripped. Anything else around the JSON is a decode error.
pub fn decode_json_response<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(strip_fences(raw))
}

fn strip_fences(raw: &str) -> &str {
    let mut body = raw.trim();

    if body.starts_with(FENCE) {
        body = match body.find('\n') {
            Some(newline) => &body[newline + 1..],
            None => "",
        };
    }

    let trimmed_end = body.trim_end();
    if let Some(before) = trimmed_end.strip_suffix(FENCE) {
        if before.is_empty() || before.ends_with('\n') {
            body = before;
        }
    }

    body.trim()
}
