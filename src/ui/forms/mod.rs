//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `review_form`: The review form sections and their conditional parts

mod field_renderer;
mod review_form;

pub use review_form::draw_review_form;
