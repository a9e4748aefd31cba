use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::validate::parse_integer;

/// Identity of one of the four bound input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    MinCol,
    MaxCol,
    MinRow,
    MaxRow,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::MinCol, Field::MaxCol, Field::MinRow, Field::MaxRow];

    /// The other end of this field's axis.
    pub fn counterpart(self) -> Field {
        match self {
            Field::MinCol => Field::MaxCol,
            Field::MaxCol => Field::MinCol,
            Field::MinRow => Field::MaxRow,
            Field::MaxRow => Field::MinRow,
        }
    }

    /// Whether this field is the lower end of its axis.
    pub fn is_min(self) -> bool {
        matches!(self, Field::MinCol | Field::MinRow)
    }

    /// Wire name used by the host form.
    pub fn name(self) -> &'static str {
        match self {
            Field::MinCol => "minCol",
            Field::MaxCol => "maxCol",
            Field::MinRow => "minRow",
            Field::MaxRow => "maxRow",
        }
    }

    /// Parse a wire name back to a field.
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "minCol" => Some(Field::MinCol),
            "maxCol" => Some(Field::MaxCol),
            "minRow" => Some(Field::MinRow),
            "maxRow" => Some(Field::MaxRow),
            _ => None,
        }
    }
}

/// Raw text contents of the four bound input fields.
///
/// Text is kept verbatim as typed; interpretation happens in the validation
/// rules and in `to_bounds`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInputs {
    min_col: String,
    max_col: String,
    min_row: String,
    max_row: String,
}

impl FieldInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::MinCol => &self.min_col,
            Field::MaxCol => &self.max_col,
            Field::MinRow => &self.min_row,
            Field::MaxRow => &self.max_row,
        }
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let slot = match field {
            Field::MinCol => &mut self.min_col,
            Field::MaxCol => &mut self.max_col,
            Field::MinRow => &mut self.min_row,
            Field::MaxRow => &mut self.max_row,
        };
        *slot = text.into();
    }

    /// Overwrite all four fields from stored bounds.
    pub fn load(&mut self, bounds: Bounds) {
        self.min_col = bounds.min_col.to_string();
        self.max_col = bounds.max_col.to_string();
        self.min_row = bounds.min_row.to_string();
        self.max_row = bounds.max_row.to_string();
    }

    /// Interpret all four fields as bounds. `None` when any field is empty,
    /// non-integral, or outside i32 range.
    pub fn to_bounds(&self) -> Option<Bounds> {
        let int32 = |field: Field| -> Option<i32> {
            parse_integer(self.get(field)).and_then(|v| i32::try_from(v).ok())
        };

        Some(Bounds {
            min_col: int32(Field::MinCol)?,
            max_col: int32(Field::MaxCol)?,
            min_row: int32(Field::MinRow)?,
            max_row: int32(Field::MaxRow)?,
        })
    }
}
