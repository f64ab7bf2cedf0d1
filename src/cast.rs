//! The classification entry point.

use crate::constants::PROFILE_PREFIX;
use crate::normalize::normalize;
use crate::value::{Kind, LinkedinUrl};

/// Input accepted by [`LinkedinUrl::cast`]: a raw string, an explicit
/// absent marker, or an already-classified value.
///
/// The `From` impls make call sites read like the untyped coercion they
/// replace while keeping the accepted inputs a closed set.
#[derive(Debug, Clone)]
pub enum CastInput {
    /// No value supplied.
    Absent,
    /// A raw, unclassified string.
    Raw(String),
    /// An already-classified value, passed through unchanged.
    Value(LinkedinUrl),
}

impl From<&str> for CastInput {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for CastInput {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<Option<&str>> for CastInput {
    fn from(raw: Option<&str>) -> Self {
        raw.map_or(Self::Absent, Into::into)
    }
}

impl From<Option<String>> for CastInput {
    fn from(raw: Option<String>) -> Self {
        raw.map_or(Self::Absent, Into::into)
    }
}

impl From<LinkedinUrl> for CastInput {
    fn from(value: LinkedinUrl) -> Self {
        Self::Value(value)
    }
}

impl From<&LinkedinUrl> for CastInput {
    fn from(value: &LinkedinUrl) -> Self {
        Self::Value(value.clone())
    }
}

impl LinkedinUrl {
    /// Classifies a raw string (or passes an already-classified value
    /// through) into exactly one variant.
    ///
    /// Total and pure: every input has a defined outcome, nothing is
    /// raised, and casting a cast result is the identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedin_url::LinkedinUrl;
    ///
    /// let url = LinkedinUrl::cast("linkedin.com/in/example");
    /// assert_eq!(url.as_str(), "https://www.linkedin.com/in/example");
    ///
    /// assert!(LinkedinUrl::cast(None::<&str>).is_blank());
    /// assert_eq!(LinkedinUrl::cast(url.clone()), url);
    /// ```
    #[must_use]
    pub fn cast(input: impl Into<CastInput>) -> Self {
        match input.into() {
            CastInput::Value(value) => value,
            CastInput::Absent => Self(Kind::Blank),
            CastInput::Raw(raw) => Self::cast_raw(raw),
        }
    }

    fn cast_raw(raw: String) -> Self {
        if raw.trim().is_empty() {
            return Self(Kind::Blank);
        }
        match normalize(&raw) {
            Ok(candidate) if candidate.starts_with(PROFILE_PREFIX) => Self(Kind::Regular(candidate)),
            // Wrong path shape or not parseable: keep the original input.
            Ok(_) | Err(_) => Self(Kind::Exceptional { raw, reason: None }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casting_a_value_is_the_identity() {
        let value = LinkedinUrl::cast("https://www.linkedin.com/in/example");
        let again = LinkedinUrl::cast(value.clone());
        assert_eq!(again, value);
        assert_eq!(again.as_str(), value.as_str());
        assert!(again.is_regular());
    }

    #[test]
    fn casting_blank_twice_stays_blank() {
        let value = LinkedinUrl::cast(LinkedinUrl::cast(None::<&str>));
        assert!(value.is_blank());
        assert_eq!(value.as_str(), "");
    }

    #[test]
    fn casting_exceptional_twice_keeps_the_original() {
        let value = LinkedinUrl::cast(LinkedinUrl::cast("{}"));
        assert!(value.is_exceptional());
        assert_eq!(value.as_str(), "{}");
    }

    #[test]
    fn absent_inputs_are_blank() {
        assert!(LinkedinUrl::cast(None::<&str>).is_blank());
        assert!(LinkedinUrl::cast(None::<String>).is_blank());
        assert!(LinkedinUrl::cast("").is_blank());
        assert!(LinkedinUrl::cast("   ").is_blank());
    }

    #[test]
    fn appends_scheme_and_www_when_missing() {
        let value = LinkedinUrl::cast("linkedin.com/in/example");
        assert!(value.is_regular());
        assert_eq!(value.as_str(), "https://www.linkedin.com/in/example");
    }

    #[test]
    fn inserts_www_when_missing() {
        let value = LinkedinUrl::cast("https://linkedin.com/in/example");
        assert!(value.is_regular());
        assert_eq!(value.as_str(), "https://www.linkedin.com/in/example");
    }

    #[test]
    fn swaps_country_code_for_www() {
        let value = LinkedinUrl::cast("https://za.linkedin.com/in/example");
        assert!(value.is_regular());
        assert_eq!(value.as_str(), "https://www.linkedin.com/in/example");
    }

    #[test]
    fn upgrades_insecure_scheme() {
        let value = LinkedinUrl::cast("http://www.linkedin.com/in/example");
        assert!(value.is_regular());
        assert_eq!(value.as_str(), "https://www.linkedin.com/in/example");
    }

    #[test]
    fn removes_trailing_slash() {
        let value = LinkedinUrl::cast("https://www.linkedin.com/in/example/");
        assert_eq!(value.as_str(), "https://www.linkedin.com/in/example");
    }

    #[test]
    fn removes_anchor() {
        let value = LinkedinUrl::cast("https://www.linkedin.com/in/example#anchor");
        assert_eq!(value.as_str(), "https://www.linkedin.com/in/example");
    }

    #[test]
    fn removes_query_string() {
        let value = LinkedinUrl::cast("https://www.linkedin.com/in/example?q=1");
        assert_eq!(value.as_str(), "https://www.linkedin.com/in/example");
    }

    #[test]
    fn non_profile_path_is_exceptional() {
        let raw = "https://www.linkedin.com/company/nexl-co/mycompany/";
        let value = LinkedinUrl::cast(raw);
        assert!(value.is_exceptional());
        assert_eq!(value.as_str(), raw);
    }

    #[test]
    fn invalid_url_is_exceptional() {
        let raw = "https://{}.linkedin.com/in/example";
        let value = LinkedinUrl::cast(raw);
        assert!(value.is_exceptional());
        assert_eq!(value.as_str(), raw);
    }

    #[test]
    fn malformed_percent_escape_is_exceptional() {
        let raw = "https://www.linkedin.com/in/%GG";
        let value = LinkedinUrl::cast(raw);
        assert!(value.is_exceptional());
        assert_eq!(value.as_str(), raw);
    }

    #[test]
    fn undecodable_identifier_is_exceptional() {
        let raw = "https://www.linkedin.com/in/%de";
        let value = LinkedinUrl::cast(raw);
        assert!(value.is_exceptional());
        assert_eq!(value.as_str(), raw);
    }

    #[test]
    fn missing_identifier_is_exceptional() {
        let value = LinkedinUrl::cast("https://www.linkedin.com/in/");
        assert!(value.is_exceptional());
        assert_eq!(value.as_str(), "https://www.linkedin.com/in/");
    }
}
