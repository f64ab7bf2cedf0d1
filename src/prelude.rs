//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use linkedin_url::prelude::*;
//!
//! let url = LinkedinUrl::cast("linkedin.com/in/example");
//! assert!(url.as_str().starts_with(PROFILE_PREFIX));
//! ```

pub use crate::{CANONICAL_HOST, CastInput, ErrorCollector, HOST, LinkedinUrl, PROFILE_PREFIX};
