//! Canonicalizing value type for LinkedIn profile URLs.
//!
//! This crate maps an arbitrary, possibly malformed, user-supplied string
//! that is supposed to identify a LinkedIn profile page to exactly one of
//! three outcomes: a blank marker, a canonical profile URL, or an
//! exceptional marker carrying the original input plus a reason.
//!
//! # Overview
//!
//! Classification is a single total function, [`LinkedinUrl::cast`]. The
//! canonical form is stable under repeated casting, case-insensitive, and
//! free of tracking noise (query strings, fragments, trailing slashes); the
//! many surface variants a user might supply (missing scheme, missing
//! `www`, country-code subdomains, `http://`, mixed case, percent-encoded
//! identifiers) all collapse to one shape:
//!
//! ```text
//! https://www.linkedin.com/in/<identifier>
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use linkedin_url::LinkedinUrl;
//!
//! let url = LinkedinUrl::cast("http://za.linkedin.com/in/Example?trk=pub#about");
//! assert!(url.is_regular());
//! assert_eq!(url.as_str(), "https://www.linkedin.com/in/example");
//!
//! // Equality ignores spelling differences that normalize away.
//! assert_eq!(url, LinkedinUrl::cast("linkedin.com/in/example/"));
//!
//! // Malformed input never raises; it becomes an inspectable value.
//! let company = LinkedinUrl::cast("https://www.linkedin.com/company/acme/");
//! assert!(company.is_exceptional());
//! assert_eq!(company.as_str(), "https://www.linkedin.com/company/acme/");
//! assert_eq!(
//!     company.reason().unwrap(),
//!     "has an invalid value of https://www.linkedin.com/company/acme/"
//! );
//!
//! // Absent input is a first-class outcome.
//! assert!(LinkedinUrl::cast(None::<&str>).is_blank());
//! ```
//!
//! # Value contract
//!
//! | Variant | String form | `is_blank` | `is_exceptional` | `is_regular` |
//! |-------------|---------------------------|------------|------------------|--------------|
//! | Blank | `""` | true | false | false |
//! | Exceptional | original input, verbatim | false | true | false |
//! | Regular | canonical profile URL | false | false | true |
//!
//! Equality, ordering, and hashing compare the lowercased string form
//! regardless of variant, so values behave as set and map keys and blank
//! sorts before every non-empty value.
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`LinkedinUrl`] as its plain
//!   string form, deserializing through [`LinkedinUrl::cast`]. This is the
//!   format job-queue payloads transport.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
// "LinkedIn" is not in clippy's dictionary of valid identifiers.
#![allow(clippy::doc_markdown)]

mod cast;
mod constants;
mod normalize;
pub mod prelude;
mod validation;
mod value;

pub use cast::CastInput;
pub use constants::{CANONICAL_HOST, HOST, PROFILE_PREFIX};
pub use validation::ErrorCollector;
pub use value::LinkedinUrl;
