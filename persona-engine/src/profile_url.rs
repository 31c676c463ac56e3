use persona_core::CoreError;
use url::Url;

/// Extracts the username from a Reddit profile URL.
///
/// Accepts the `reddit.com/user/<name>` and `reddit.com/u/<name>` shapes on
/// any reddit.com host, with or without a scheme or trailing path. Anything
/// else is rejected before any network activity happens.
pub fn extract_username(input: &str) -> Result<String, CoreError> {
    let invalid = || CoreError::InvalidProfileUrl {
        url: input.to_string(),
    };

    let trimmed = input.trim();
    let parsed = match Url::parse(trimmed) {
        Ok(url) => url,
        // Scheme-less input like "reddit.com/u/alice" parses as relative.
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{trimmed}")).map_err(|_| invalid())?
        }
        Err(_) => return Err(invalid()),
    };
    let host = parsed.host_str().ok_or_else(invalid)?;
    if host != "reddit.com" && !host.ends_with(".reddit.com") {
        return Err(invalid());
    }

    let mut segments = parsed.path_segments().ok_or_else(invalid)?;
    while let Some(segment) = segments.next() {
        if segment == "user" || segment == "u" {
            match segments.next() {
                Some(name) if !name.is_empty() => return Ok(name.to_string()),
                _ => break,
            }
        }
    }
    Err(invalid())
}
