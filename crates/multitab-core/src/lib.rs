pub mod bounds;
pub mod controller;
pub mod error;
pub mod field;
pub mod store;
pub mod table;
pub mod tabs;
pub mod validate;

pub use bounds::{Bounds, MAX_SPAN, MAX_VALUE};
pub use controller::{App, InputEvent, Outcome, SliderValues};
pub use error::MultitabError;
pub use field::{Field, FieldInputs};
pub use store::SavedValues;
pub use table::{Cell, Table};
pub use tabs::{Checkbox, Lifecycle, Tab, TabManager};
pub use validate::{
    greater_than_or_equal, is_integer, less_than_or_equal, parse_integer, validate_field,
    validate_form, within_magnitude, within_span, FieldError, ValidationReport,
};
