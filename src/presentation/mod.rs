mod capability;
pub(crate) mod components;
mod view;

pub use capability::{
    CapabilityProbe, FixedCapability, InputMode, ParseInputModeError, TIME_INPUT_ENV,
    TerminalProbe,
};
pub use view::{UiContext, draw};
