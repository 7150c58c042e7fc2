//! Pages Module
//!
//! Home, about, contact and counters pages. None of them touch the store
//! beyond the soft session lookup.

pub mod handlers;

pub use handlers::{about, contact_form, counters, home, submit_contact, ContactForm};
