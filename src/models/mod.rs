//! Data structures for contacts and contact lists.

pub mod contact;
pub mod contact_list;

pub use contact::Contact;
pub use contact_list::{ContactList, SetOutcome};
