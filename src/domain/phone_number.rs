//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Smallest valid phone number (9 digits, no leading zero).
pub const MIN_NUMBER: u32 = 100_000_000;

/// Largest valid phone number.
pub const MAX_NUMBER: u32 = 999_999_999;

/// A type-safe wrapper for 9-digit phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// A number is valid iff it lies in `100_000_000..=999_999_999`, i.e. it
/// has exactly 9 digits and no leading zero.
///
/// `PhoneNumber` is the identity key for contacts: two contacts with the
/// same number are considered the same entry.
///
/// # Example
///
/// ```
/// use phonebook::domain::PhoneNumber;
///
/// let number = PhoneNumber::new(912_345_678).unwrap();
/// assert_eq!(number.value(), 912_345_678);
/// assert!(PhoneNumber::new(99_999_999).is_err()); // 8 digits
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhoneNumber(u32);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the 9-digit range.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NumberOutOfRange` if `number` is outside
    /// `[100_000_000, 999_999_999]`.
    pub fn new(number: u32) -> Result<Self, ValidationError> {
        if !Self::is_valid(number) {
            return Err(ValidationError::NumberOutOfRange(number));
        }

        Ok(Self(number))
    }

    /// Validate the 9-digit range.
    fn is_valid(number: u32) -> bool {
        (MIN_NUMBER..=MAX_NUMBER).contains(&number)
    }

    /// Get the numeric value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    /// Parse a phone number from its decimal digits.
    ///
    /// Anything that is not a plain decimal number fails with
    /// `ValidationError::NumberNotNumeric`; a parsed value outside the
    /// 9-digit range fails as in [`PhoneNumber::new`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u32 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::NumberNotNumeric(s.to_string()))?;
        Self::new(number)
    }
}

// Serde support - serialize as plain number
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from number with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = u32::deserialize(deserializer)?;
        PhoneNumber::new(number).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_valid() {
        let number = PhoneNumber::new(912_345_678).unwrap();
        assert_eq!(number.value(), 912_345_678);
    }

    #[test]
    fn test_number_validates_range() {
        assert!(PhoneNumber::new(0).is_err());
        assert!(PhoneNumber::new(99_999_999).is_err());
        assert!(PhoneNumber::new(1_000_000_000).is_err());
        assert!(PhoneNumber::new(MIN_NUMBER).is_ok());
        assert!(PhoneNumber::new(MAX_NUMBER).is_ok());
    }

    #[test]
    fn test_number_rejection_carries_value() {
        let err = PhoneNumber::new(42).unwrap_err();
        assert_eq!(err, ValidationError::NumberOutOfRange(42));
    }

    #[test]
    fn test_number_ordering_is_numeric() {
        let low = PhoneNumber::new(MIN_NUMBER).unwrap();
        let high = PhoneNumber::new(MAX_NUMBER).unwrap();
        assert!(low < high);
        assert_eq!(low.cmp(&low), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_number_from_str() {
        let number: PhoneNumber = "912345678".parse().unwrap();
        assert_eq!(number.value(), 912_345_678);

        assert_eq!(
            "91a345678".parse::<PhoneNumber>().unwrap_err(),
            ValidationError::NumberNotNumeric("91a345678".to_string())
        );
        assert!("12345".parse::<PhoneNumber>().is_err());
    }

    #[test]
    fn test_number_display() {
        let number = PhoneNumber::new(912_345_678).unwrap();
        assert_eq!(format!("{}", number), "912345678");
    }

    #[test]
    fn test_number_serialization() {
        let number = PhoneNumber::new(912_345_678).unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "912345678");
    }

    #[test]
    fn test_number_deserialization() {
        let number: PhoneNumber = serde_json::from_str("912345678").unwrap();
        assert_eq!(number.value(), 912_345_678);
    }

    #[test]
    fn test_number_deserialization_out_of_range_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("12345678");
        assert!(result.is_err());
    }
}
