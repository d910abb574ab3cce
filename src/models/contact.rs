//! Contact model representing one phonebook entry.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A validated (name, number) pair representing one phonebook entry.
///
/// A `Contact` is immutable once constructed: there are no setters, so a
/// contact sitting inside a [`ContactList`](crate::models::ContactList)
/// can never drift out from under the list's number-uniqueness invariant.
/// Editing an entry means removing the old contact and adding a new one,
/// which re-runs validation and the duplicate check.
///
/// Identity is the phone number: two contacts with equal numbers compare
/// equal regardless of name, and ordering is ascending by number.
///
/// # Example
///
/// ```
/// use phonebook::models::Contact;
///
/// let ana = Contact::new("Ana", 912_345_678).unwrap();
/// assert_eq!(ana.name().as_str(), "Ana");
/// assert_eq!(ana.number().value(), 912_345_678);
/// assert_eq!(ana.to_string(), "Number:912345678 Name:Ana");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Display name of the contact.
    name: ContactName,

    /// 9-digit phone number; the contact's identity.
    number: PhoneNumber,
}

impl Contact {
    /// Create a new Contact from raw inputs, validating both fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BlankName` if the name is empty after
    /// trimming, or `ValidationError::NumberOutOfRange` if the number is
    /// outside `[100_000_000, 999_999_999]`.
    pub fn new(name: impl Into<String>, number: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            number: PhoneNumber::new(number)?,
        })
    }

    /// Assemble a Contact from already-validated value objects.
    pub fn from_parts(name: ContactName, number: PhoneNumber) -> Self {
        Self { name, number }
    }

    /// Get the contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Get the contact's phone number.
    pub fn number(&self) -> PhoneNumber {
        self.number
    }
}

// Identity is the number; the name plays no part in equality or order.
impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl PartialOrd for Contact {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Contact {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number.cmp(&other.number)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number:{} Name:{}", self.number, self.name)
    }
}
