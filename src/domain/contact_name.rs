//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// This ensures that names are validated at construction time and cannot
/// be empty or whitespace-only. The stored value is kept exactly as
/// provided; trimming applies to validation only.
///
/// # Example
///
/// ```
/// use phonebook::domain::ContactName;
///
/// let name = ContactName::new("Ana").unwrap();
/// assert_eq!(name.as_str(), "Ana");
/// assert!(ContactName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BlankName` if the name is empty after
    /// trimming whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = ContactName::new("Ana").unwrap();
        assert_eq!(name.as_str(), "Ana");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(
            ContactName::new("").unwrap_err(),
            ValidationError::BlankName
        );
    }

    #[test]
    fn test_name_rejects_whitespace_only() {
        assert!(ContactName::new("   ").is_err());
        assert!(ContactName::new("\t\n").is_err());
    }

    #[test]
    fn test_name_keeps_surrounding_whitespace() {
        let name = ContactName::new("  Ana ").unwrap();
        assert_eq!(name.as_str(), "  Ana ");
    }

    #[test]
    fn test_name_display() {
        let name = ContactName::new("Ana").unwrap();
        assert_eq!(format!("{}", name), "Ana");
    }

    #[test]
    fn test_name_serialization() {
        let name = ContactName::new("Ana").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Ana\"");
    }

    #[test]
    fn test_name_deserialization_blank_fails() {
        let result: Result<ContactName, _> = serde_json::from_str("\" \"");
        assert!(result.is_err());
    }
}
