// src/core/deeplink.rs
//
// Link into the real Search Console inspector for a URL.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::consts::{GSC_INSPECT_BASE, GSC_RESOURCE_PARAM};
use super::NormalizedUrl;

/// Everything but RFC 3986 unreserved characters; spaces become `%20`.
const RESOURCE_ID: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// `…/inspect?resource_id=<percent-encoded url>`; `:`, `/`, `?`, `&`, `=` all escaped.
pub fn gsc_inspect_link(url: &NormalizedUrl) -> String {
    let encoded = utf8_percent_encode(url.as_str(), RESOURCE_ID).to_string();
    join!(GSC_INSPECT_BASE, "?", GSC_RESOURCE_PARAM, "=", &encoded)
}
