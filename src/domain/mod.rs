mod clock;
mod parser;
mod schema;

pub use clock::{Precision, SECONDS_PER_DAY, TimeOfDay, TimeRangeError};
pub use parser::{parse_field_definition, parse_field_value};
pub use schema::{FieldDefinition, FieldPayload, FieldSettings, FieldValue, TIME_FIELD_TYPE};
