use crate::error::ValidationError;

/// Entities that can report every rule they break.
///
/// `violations` is a pure function returning messages in field-declaration
/// order; composite entities build theirs by concatenating the lists of their
/// parts, so nothing stops at the first failure.
pub trait Validate {
    fn violations(&self) -> Vec<String>;

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check(self.violations())
    }
}

/// Pushes `message` when `value` is empty.
pub(crate) fn require(value: &str, message: &str, violations: &mut Vec<String>) {
    if value.is_empty() {
        violations.push(message.to_string());
    }
}
