// src/core/normalize.rs
//
// Raw text box contents → absolute http(s) URL with a host.

use std::fmt;

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a URL to inspect")]
    Empty,

    #[error("Invalid URL format - missing domain")]
    MissingHost { input: String },

    #[error("Invalid URL format - {reason}")]
    Malformed { input: String, reason: String },
}

impl ValidationError {
    /// Empty input is a warning (nothing was attempted), not a failed inspection.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ValidationError::Empty)
    }
}

/// A validated absolute URL. `as_str` is what the user typed plus the
/// scheme we added, not `Url`'s re-serialization (which appends `/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    text: String,
    parsed: Url,
}

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn host(&self) -> &str {
        self.parsed.host_str().unwrap_or_default()
    }

}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

const SCHEMES: [&str; 2] = ["http://", "https://"];
const DEFAULT_SCHEME: &str = "https://";

fn has_scheme(s: &str) -> bool {
    SCHEMES.iter().any(|p| {
        s.len() >= p.len() && s.as_bytes()[..p.len()].eq_ignore_ascii_case(p.as_bytes())
    })
}

/// Text between `://` and the first `/`, `?` or `#`.
fn authority(text: &str) -> &str {
    let rest = text.split_once("://").map_or("", |(_, r)| r);
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

pub fn normalize(raw: &str) -> Result<NormalizedUrl, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let text = if has_scheme(trimmed) { s!(trimmed) } else { join!(DEFAULT_SCHEME, trimmed) };

    // `Url` skips extra slashes after `https:`, so check the typed authority.
    if authority(&text).is_empty() {
        return Err(ValidationError::MissingHost { input: s!(trimmed) });
    }

    let parsed = match Url::parse(&text) {
        Ok(u) => u,
        Err(url::ParseError::EmptyHost) => {
            return Err(ValidationError::MissingHost { input: s!(trimmed) });
        }
        Err(e) => {
            return Err(ValidationError::Malformed { input: s!(trimmed), reason: e.to_string() });
        }
    };

    match parsed.host_str() {
        Some(h) if !h.is_empty() => Ok(NormalizedUrl { text, parsed }),
        _ => Err(ValidationError::MissingHost { input: s!(trimmed) }),
    }
}
