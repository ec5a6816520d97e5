//! Form domain layer
//!
//! Field values and the review form that owns them. Rendering lives in
//! `ui::forms::review_form`; checks live in `state::validation`.

mod field;
mod form_state;

pub use field::{FieldId, FieldValue, FormField, Reviewed};
pub use form_state::{Focus, ReviewForm};
