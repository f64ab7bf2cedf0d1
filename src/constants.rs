//! Constants for LinkedIn profile URL canonicalization.

/// The network's registered domain, without scheme or subdomain.
pub const HOST: &str = "linkedin.com";

/// The canonical host every normalized URL uses.
pub const CANONICAL_HOST: &str = "www.linkedin.com";

/// The fixed prefix that distinguishes a user-profile URL from any other
/// page on the network. Every regular value starts with this string.
pub const PROFILE_PREFIX: &str = "https://www.linkedin.com/in/";
