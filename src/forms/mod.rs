//! Typed form drafts and their validation into create/update payloads.
//!
//! A draft holds what the user typed; `validate` either yields the payload the clients accept
//! or every [`FieldError`] found, so the form can show them all at once.

pub mod error;
pub mod order;
pub mod product;

pub use error::{FieldError, ValidationErrors};
pub use order::OrderDraft;
pub use product::{ProductDraft, VariationDraft};
