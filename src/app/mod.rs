mod input;
mod options;
mod runtime;
mod status;
mod terminal;

pub(crate) use runtime::App;
pub use options::UiOptions;
