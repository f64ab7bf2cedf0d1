//! The classified profile-URL value.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A classified LinkedIn profile URL field.
///
/// Exactly one of three variants is active: blank (no value supplied),
/// regular (a canonical profile URL), or exceptional (anything else, with
/// the original input preserved verbatim plus a human-readable reason).
///
/// Values are created by [`LinkedinUrl::cast`] and are immutable. Equality,
/// ordering, and hashing are variant-agnostic: they compare the lowercased
/// string form, so two differently-spelled inputs that canonicalize to the
/// same profile compare equal and collapse to one entry in a set or map.
///
/// # Examples
///
/// ```
/// use linkedin_url::LinkedinUrl;
///
/// let url = LinkedinUrl::cast("http://za.linkedin.com/in/Example?trk=pub#about");
/// assert!(url.is_regular());
/// assert_eq!(url.as_str(), "https://www.linkedin.com/in/example");
///
/// let company = LinkedinUrl::cast("https://www.linkedin.com/company/acme/");
/// assert!(company.is_exceptional());
/// assert_eq!(company.as_str(), "https://www.linkedin.com/company/acme/");
/// ```
#[derive(Debug, Clone)]
pub struct LinkedinUrl(pub(crate) Kind);

/// Closed set of variant tags. Private: values are only constructed through
/// [`LinkedinUrl::cast`] and [`LinkedinUrl::exceptional_with_reason`], so
/// every variant upholds its string-form invariant.
#[derive(Debug, Clone)]
pub(crate) enum Kind {
    /// No value supplied; string form is empty.
    Blank,
    /// Not a profile URL; carries the raw input verbatim and an optional
    /// caller-supplied reason.
    Exceptional {
        raw: String,
        reason: Option<String>,
    },
    /// A canonical profile URL: lowercase, prefixed, no query, fragment, or
    /// trailing slash.
    Regular(String),
}

impl LinkedinUrl {
    /// Creates an exceptional value carrying a caller-supplied reason.
    ///
    /// This is the one variant constructor exposed besides [`cast`], used by
    /// validation code that wants its own message instead of the default
    /// `"has an invalid value of <raw>"`.
    ///
    /// [`cast`]: LinkedinUrl::cast
    #[must_use]
    pub fn exceptional_with_reason(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self(Kind::Exceptional {
            raw: raw.into(),
            reason: Some(reason.into()),
        })
    }

    /// Returns true if no value was supplied.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        matches!(self.0, Kind::Blank)
    }

    /// Returns true if the input could not be classified as a profile URL.
    #[must_use]
    pub const fn is_exceptional(&self) -> bool {
        matches!(self.0, Kind::Exceptional { .. })
    }

    /// Returns true if the value holds a canonical profile URL.
    #[must_use]
    pub const fn is_regular(&self) -> bool {
        matches!(self.0, Kind::Regular(_))
    }

    /// Returns the string form: `""` for blank, the original raw input for
    /// exceptional, the canonical URL for regular.
    ///
    /// This is the sole serialization format.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Kind::Blank => "",
            Kind::Exceptional { raw, .. } => raw,
            Kind::Regular(canonical) => canonical,
        }
    }

    /// Returns the human-readable reason for an exceptional value, or
    /// `None` for blank and regular values.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        match &self.0 {
            Kind::Exceptional { raw, reason } => Some(
                reason
                    .clone()
                    .unwrap_or_else(|| format!("has an invalid value of {raw}")),
            ),
            Kind::Blank | Kind::Regular(_) => None,
        }
    }

    /// The key equality, ordering, and hashing derive from: the lowercased
    /// string form. Regular values are already lowercase by construction.
    fn comparison_key(&self) -> Cow<'_, str> {
        match &self.0 {
            Kind::Blank => Cow::Borrowed(""),
            Kind::Exceptional { raw, .. } => Cow::Owned(raw.to_lowercase()),
            Kind::Regular(canonical) => Cow::Borrowed(canonical),
        }
    }
}

impl fmt::Display for LinkedinUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for LinkedinUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Default for LinkedinUrl {
    fn default() -> Self {
        Self(Kind::Blank)
    }
}

impl PartialEq for LinkedinUrl {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl Eq for LinkedinUrl {}

impl Hash for LinkedinUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}

impl PartialOrd for LinkedinUrl {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LinkedinUrl {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparison_key().cmp(&other.comparison_key())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LinkedinUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LinkedinUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::cast(s))
    }
}
