//! ContactList collection with number-based deduplication.

use crate::error::{ListError, ListResult};
use crate::models::Contact;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Outcome of a positional [`ContactList::set`] replacement.
///
/// Distinguishes "the element was replaced, here is the previous one"
/// from "the operation was refused because the incoming number already
/// exists in the list". Callers must not conflate the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// The element at the index was replaced; carries the previous element.
    Replaced(Contact),

    /// The incoming contact's number already exists in the list; nothing
    /// was changed.
    Rejected,
}

/// An ordered, number-deduplicated collection of [`Contact`]s.
///
/// Elements keep insertion order. No two elements ever share a phone
/// number; [`ContactList::add`] is the sole uniqueness gate and every
/// insertion path routes through it. Duplicate inserts are a normal,
/// reported outcome (`false` / a skipped count), not an error.
///
/// `Clone` is the copy constructor: the clone holds value copies of the
/// same contacts in the same order, and later membership changes to one
/// list never affect the other.
///
/// Rendering via `Display` sorts a *view* ascending by number; the list's
/// own iteration order is never changed by rendering.
///
/// # Example
///
/// ```
/// use phonebook::models::{Contact, ContactList};
///
/// let mut list = ContactList::new();
/// assert!(list.add(Contact::new("Bob", 911_111_111).unwrap()));
/// assert!(!list.add(Contact::new("Carl", 911_111_111).unwrap()));
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactList {
    contacts: Vec<Contact>,
}

impl ContactList {
    /// Create an empty contact list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a defensive snapshot of the contacts in current order.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    /// Borrow the contacts in current order.
    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    /// Iterate over the contacts in current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Replace this list's contents with `other`'s contacts.
    ///
    /// Equivalent to [`ContactList::clear`] followed by
    /// [`ContactList::merge_from`].
    pub fn replace_all(&mut self, other: &ContactList) {
        self.contacts.clear();
        self.merge_from(other);
    }

    /// Get the contact at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfRange` if `index` is not within
    /// `[0, len)`.
    pub fn get(&self, index: usize) -> ListResult<&Contact> {
        self.contacts.get(index).ok_or(ListError::IndexOutOfRange {
            index,
            len: self.contacts.len(),
        })
    }

    /// Replace the contact at `index` with `contact`.
    ///
    /// If a contact with the same number already exists anywhere in the
    /// list (including at `index` itself), nothing changes and
    /// [`SetOutcome::Rejected`] is returned. Otherwise the previous
    /// element is returned inside [`SetOutcome::Replaced`].
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfRange` if `index` is not within
    /// `[0, len)`. The index is checked before the duplicate test.
    pub fn set(&mut self, index: usize, contact: Contact) -> ListResult<SetOutcome> {
        if index >= self.contacts.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.contacts.len(),
            });
        }

        if self.contains(&contact) {
            tracing::debug!(number = contact.number().value(), "set rejected: duplicate number");
            return Ok(SetOutcome::Rejected);
        }

        let previous = std::mem::replace(&mut self.contacts[index], contact);
        Ok(SetOutcome::Replaced(previous))
    }

    /// Append `contact` if its number is not already present.
    ///
    /// Returns whether the append happened. This is the sole uniqueness
    /// gate for insertion.
    pub fn add(&mut self, contact: Contact) -> bool {
        if self.contains(&contact) {
            tracing::debug!(number = contact.number().value(), "add rejected: duplicate number");
            return false;
        }
        self.contacts.push(contact);
        true
    }

    /// Add each of `other`'s contacts in order, skipping duplicates.
    ///
    /// Returns the number of contacts actually added.
    pub fn merge_from(&mut self, other: &ContactList) -> usize {
        let mut added = 0;
        for contact in other.iter() {
            if self.add(contact.clone()) {
                added += 1;
            }
        }
        tracing::debug!(
            added,
            skipped = other.len() - added,
            "merged contact list"
        );
        added
    }

    /// Remove the first element equal to `contact` (by number).
    ///
    /// Returns whether a removal occurred.
    pub fn remove(&mut self, contact: &Contact) -> bool {
        match self.index_of(contact) {
            Some(index) => {
                self.contacts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return the contact at `index`, shifting later elements
    /// down to fill the gap.
    ///
    /// # Errors
    ///
    /// Returns `ListError::IndexOutOfRange` if `index` is not within
    /// `[0, len)`.
    pub fn remove_at(&mut self, index: usize) -> ListResult<Contact> {
        if index >= self.contacts.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.contacts.len(),
            });
        }
        Ok(self.contacts.remove(index))
    }

    /// Remove every element equal (by number) to some element of `other`.
    ///
    /// Returns whether at least one removal occurred.
    pub fn remove_all(&mut self, other: &ContactList) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|contact| !other.contains(contact));
        let removed = before - self.contacts.len();
        if removed > 0 {
            tracing::debug!(removed, "removed overlapping contacts");
        }
        removed > 0
    }

    /// Whether some element has the same number as `contact`.
    pub fn contains(&self, contact: &Contact) -> bool {
        self.contacts.contains(contact)
    }

    /// Index of the first element equal to `contact` (by number), if any.
    pub fn index_of(&self, contact: &Contact) -> Option<usize> {
        self.contacts.iter().position(|c| c == contact)
    }

    /// Empty the list.
    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    /// Number of contacts in the list.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the list contains no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Snapshot of the current contents in current order.
    pub fn to_vec(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    /// The contacts sorted ascending by number, leaving the list's own
    /// order untouched.
    pub fn sorted(&self) -> Vec<Contact> {
        let mut view = self.contacts.clone();
        view.sort();
        view
    }
}

impl fmt::Display for ContactList {
    /// Renders each contact on its own line, newline-terminated, sorted
    /// ascending by number. Does not mutate the list's iteration order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for contact in self.sorted() {
            writeln!(f, "{}", contact)?;
        }
        Ok(())
    }
}

impl Extend<Contact> for ContactList {
    fn extend<T: IntoIterator<Item = Contact>>(&mut self, iter: T) {
        for contact in iter {
            self.add(contact);
        }
    }
}

impl FromIterator<Contact> for ContactList {
    /// Collects contacts through [`ContactList::add`]; duplicate numbers
    /// are silently skipped.
    fn from_iter<T: IntoIterator<Item = Contact>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl IntoIterator for ContactList {
    type Item = Contact;
    type IntoIter = std::vec::IntoIter<Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.into_iter()
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

// Serde support - deserialize as a contact sequence, re-establishing the
// dedup invariant on the way in.
impl<'de> Deserialize<'de> for ContactList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let contacts = Vec::<Contact>::deserialize(deserializer)?;
        Ok(contacts.into_iter().collect())
    }
}
