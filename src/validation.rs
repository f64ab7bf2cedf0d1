//! Hook for reporting exceptional values into an external error collection.

use std::collections::HashMap;

use crate::value::LinkedinUrl;

/// An error-reporting collection keyed by field name.
///
/// Implemented for plain std containers so callers without a validation
/// framework can collect messages directly; framework adapters implement it
/// on their own error types.
pub trait ErrorCollector {
    /// Appends a message for the given field.
    fn add(&mut self, field: &str, message: &str);
}

impl ErrorCollector for Vec<(String, String)> {
    fn add(&mut self, field: &str, message: &str) {
        self.push((field.to_string(), message.to_string()));
    }
}

impl ErrorCollector for HashMap<String, Vec<String>> {
    fn add(&mut self, field: &str, message: &str) {
        self.entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }
}

impl LinkedinUrl {
    /// Appends this value's reason to `errors` under `field` if the value is
    /// exceptional; does nothing otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedin_url::LinkedinUrl;
    ///
    /// let mut errors: Vec<(String, String)> = Vec::new();
    /// LinkedinUrl::cast("{}").exceptional_errors(&mut errors, "profile_url");
    /// assert_eq!(
    ///     errors,
    ///     vec![("profile_url".to_string(), "has an invalid value of {}".to_string())]
    /// );
    /// ```
    pub fn exceptional_errors(&self, errors: &mut dyn ErrorCollector, field: &str) {
        if let Some(reason) = self.reason() {
            errors.add(field, &reason);
        }
    }
}
