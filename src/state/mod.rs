//! Application state module

mod app_state;
mod attachment;
mod flow;
mod forms;
mod payload;
mod preview;
mod validation;
mod visibility;

pub use app_state::*;
pub use attachment::{
    gate_selection, parse_selection, DiskProbe, FileProbe, MAX_FILES, MAX_FILE_SIZE,
};
pub use flow::*;
pub use forms::*;
pub use payload::*;
pub use preview::*;
pub use validation::validate_form;
pub use visibility::*;

#[cfg(test)]
pub(crate) use attachment::tests::FakeProbe;
#[cfg(test)]
pub(crate) use attachment::Attachment;
#[cfg(test)]
pub(crate) use validation::tests::complete_form;
