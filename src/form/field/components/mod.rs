mod base;
pub(crate) mod helpers;
mod segmented;
mod text;

pub use base::{ControlKind, DisplaySegment, InputControl, ValidityState};
pub use segmented::SegmentedTimeControl;
pub use text::{TIME_PATTERN, TextTimeControl, matches_time_pattern};
