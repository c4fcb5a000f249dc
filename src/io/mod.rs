pub mod input;
pub mod output;

pub use input::{load_document, parse_document_str};
pub use output::{OutputDestination, OutputOptions, emit, submission_document};
