//! The normalization pipeline that rewrites raw input into a canonical
//! candidate string.
//!
//! Stages run in a fixed order; later stages assume the rewrites of earlier
//! ones. Each stage is a pure function over an immutable string, so the
//! pipeline is testable stage by stage.

use std::fmt;

use once_cell::sync::Lazy;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use regex::Regex;
use url::Url;

use crate::constants::{CANONICAL_HOST, HOST, PROFILE_PREFIX};

/// Error returned when a candidate cannot be parsed structurally.
///
/// Never crosses the crate boundary: `cast` converts it into the
/// exceptional variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NotParseable {
    /// The candidate is not a syntactically valid URL.
    InvalidUrl(url::ParseError),
    /// A `%` not followed by two hex digits.
    MalformedEscape {
        /// Byte offset of the `%` in the candidate.
        position: usize,
    },
    /// The profile identifier segment decodes to invalid UTF-8.
    InvalidPercentEncoding(std::str::Utf8Error),
}

impl fmt::Display for NotParseable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(e) => write!(f, "invalid URL: {e}"),
            Self::MalformedEscape { position } => {
                write!(f, "malformed percent escape at byte {position}")
            }
            Self::InvalidPercentEncoding(e) => {
                write!(f, "invalid percent-encoding in profile segment: {e}")
            }
        }
    }
}

impl std::error::Error for NotParseable {}

/// Any subdomain token directly in front of the registered domain, e.g. the
/// two-letter country codes LinkedIn serves localized profiles from.
static SUBDOMAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+\.linkedin").expect("subdomain pattern must compile"));

/// Escape set for the profile identifier segment: form-style encoding that
/// keeps the unreserved marks and leaves `?`, `=`, `#`, `%` literal so
/// usernames containing them read naturally instead of as escapes.
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'?')
    .remove(b'=')
    .remove(b'#')
    .remove(b'%');

/// Rewrites a raw string into a canonical candidate.
///
/// A returned string that starts with [`PROFILE_PREFIX`] is fully
/// canonical. A string that does not is handed back as-is after the early
/// textual repairs (stage 5 early exit) and will be classified exceptional
/// by the caller.
pub(crate) fn normalize(raw: &str) -> Result<String, NotParseable> {
    let candidate = repair_protocol(raw);
    let candidate = collapse_subdomains(&candidate);
    let candidate = candidate.to_lowercase();
    let candidate = trim_trailing_slash(candidate);

    if !candidate.starts_with(PROFILE_PREFIX) {
        return Ok(candidate);
    }

    validate_escapes(&candidate)?;
    let mut url = Url::parse(&candidate).map_err(NotParseable::InvalidUrl)?;
    url.set_query(None);
    url.set_fragment(None);

    let segment = reencode_segment(profile_segment(&url))?;
    if segment.is_empty() {
        // Nothing between the prefix and the next slash: hand back a
        // non-profile shape so classification marks it exceptional.
        return Ok(format!("https://{CANONICAL_HOST}/in"));
    }

    Ok(format!("{PROFILE_PREFIX}{segment}").to_lowercase())
}

/// Stage 1: repair missing or insecure scheme and a missing `www`.
fn repair_protocol(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix(HOST) {
        return format!("https://{CANONICAL_HOST}{rest}");
    }
    if raw.starts_with(CANONICAL_HOST) {
        return format!("https://{raw}");
    }

    let secured = if let Some(rest) = raw.strip_prefix("http://") {
        format!("https://{rest}")
    } else {
        raw.to_string()
    };

    if let Some(rest) = secured.strip_prefix("https://linkedin.com") {
        return format!("https://{CANONICAL_HOST}{rest}");
    }
    secured
}

/// Stage 2: swap any subdomain in front of the registered domain for `www`.
///
/// Blanket textual substitution, same as the reference behavior: it also
/// fires on a matching token elsewhere in the string (path, query).
fn collapse_subdomains(input: &str) -> String {
    SUBDOMAIN.replace_all(input, "www.linkedin").into_owned()
}

/// Stage 4: remove exactly one trailing slash, if present.
fn trim_trailing_slash(mut input: String) -> String {
    if input.ends_with('/') {
        input.pop();
    }
    input
}

/// Stage 6a: every `%` must introduce a two-hex-digit escape.
///
/// `Url::parse` passes malformed escapes through literally; a strict URI
/// parser rejects them, and so does classification.
fn validate_escapes(candidate: &str) -> Result<(), NotParseable> {
    let bytes = candidate.as_bytes();
    for (position, _) in bytes.iter().enumerate().filter(|(_, b)| **b == b'%') {
        let valid = bytes.get(position + 1).is_some_and(u8::is_ascii_hexdigit)
            && bytes.get(position + 2).is_some_and(u8::is_ascii_hexdigit);
        if !valid {
            return Err(NotParseable::MalformedEscape { position });
        }
    }
    Ok(())
}

/// Stage 8a: the profile identifier is the first path segment after
/// `/in/`; anything nested further is dropped.
fn profile_segment(url: &Url) -> &str {
    let rest = url.path().strip_prefix("/in/").unwrap_or("");
    rest.split('/').next().unwrap_or("")
}

/// Stage 8b: percent-decode the identifier, then re-encode it with
/// [`SEGMENT_ENCODE_SET`].
fn reencode_segment(encoded: &str) -> Result<String, NotParseable> {
    let decoded = percent_decode_str(encoded)
        .decode_utf8()
        .map_err(NotParseable::InvalidPercentEncoding)?;
    Ok(utf8_percent_encode(&decoded, SEGMENT_ENCODE_SET).to_string())
}
