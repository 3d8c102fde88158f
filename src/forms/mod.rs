//! Category entry forms.
//!
//! * [`FormDraft`] / [`fields`] — what each category's form asks for.
//! * [`EntryFormController`] — trim, validate, save, announce.
//! * [`FormError`] — validation warning or save failure.

pub mod controller;
pub mod draft;

pub use controller::{
    EntryFormController, FormError, DATE_FORMAT, SAVED_ANNOUNCEMENT, TIMESTAMP_FORMAT,
};
pub use draft::{fields, missing_message, FieldSpec, FormDraft};
