//! Logical codes stored on column records.

/// Sentinel stored in `zero_value` marking a column as non-nullable.
pub const NOT_NULL_SENTINEL: &str = "!NIL";

/// Logical column type (`column_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    String,
    /// Integer, or decimal when a scale is configured.
    Number,
    DateTime,
    Decimal,
    /// A code this version does not know; carried through untouched.
    Other(i32),
}

impl ColumnType {
    /// Decode a stored code. The unset code `0` decodes as [`ColumnType::String`].
    pub fn from_code(code: i32) -> Self {
        match code {
            0 | 1 => Self::String,
            2 => Self::Number,
            3 => Self::DateTime,
            4 => Self::Decimal,
            other => Self::Other(other),
        }
    }

    /// The stored code for this type.
    pub fn code(self) -> i32 {
        match self {
            Self::String => 1,
            Self::Number => 2,
            Self::DateTime => 3,
            Self::Decimal => 4,
            Self::Other(code) => code,
        }
    }

    /// Returns true if the code is one this version understands.
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Database storage subtype for string columns (`string_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StringStorage {
    /// Length-bounded string.
    #[default]
    Bounded,
    /// Unbounded text.
    Unbounded,
}

impl StringStorage {
    /// Decode a stored code; anything but `2` is bounded.
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => Self::Unbounded,
            _ => Self::Bounded,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Bounded => 1,
            Self::Unbounded => 2,
        }
    }
}

/// How generated list endpoints match string filters (`string_search`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StringSearch {
    /// `value%`
    #[default]
    Prefix,
    /// `%value%`
    Substring,
    Exact,
}

impl StringSearch {
    /// Decode a stored code; unset and unknown codes fall back to prefix matching.
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => Self::Substring,
            3 => Self::Exact,
            _ => Self::Prefix,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Prefix => 1,
            Self::Substring => 2,
            Self::Exact => 3,
        }
    }
}

/// Interpretation of a column's `zero_value` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroValue<'a> {
    /// The column must always hold a value.
    Required,
    /// Nullable; the value is substituted when the column is absent.
    Default(&'a str),
    /// Nullable with no default.
    Nullable,
}

impl<'a> ZeroValue<'a> {
    /// Interpret a stored `zero_value` string.
    pub fn parse(raw: &'a str) -> Self {
        match raw {
            NOT_NULL_SENTINEL => Self::Required,
            "" => Self::Nullable,
            value => Self::Default(value),
        }
    }

    pub fn is_nullable(self) -> bool {
        !matches!(self, Self::Required)
    }

    pub fn default_value(self) -> Option<&'a str> {
        match self {
            Self::Default(value) => Some(value),
            _ => None,
        }
    }
}
