//! Column type definitions.

use std::fmt;

use serde::Serialize;

/// Logical value kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    /// Integer, or decimal when the storage type carries a scale.
    Number,
    DateTime,
    Decimal,
    /// Unrecognized type code, passed through for the generator's own fallback.
    Other(i32),
}

impl ValueKind {
    /// Get the lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::DateTime => "datetime",
            ValueKind::Decimal => "decimal",
            ValueKind::Other(_) => "other",
        }
    }
}

/// Database storage type of a column.
///
/// `Unspecified` leaves the choice (and width) to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageType {
    Unspecified,
    /// Unbounded text.
    Text,
    /// Length-bounded string.
    Varchar(u32),
    /// Integer with a display width.
    Int(u32),
    /// Fixed-point number.
    Decimal { precision: u32, scale: u32 },
}

impl StorageType {
    /// Returns the database type declaration, or `None` for the generator default.
    pub fn declaration(&self) -> Option<String> {
        match self {
            StorageType::Unspecified => None,
            StorageType::Text => Some("longtext".into()),
            StorageType::Varchar(len) => Some(format!("varchar({len})")),
            StorageType::Int(len) => Some(format!("int({len})")),
            StorageType::Decimal { precision, scale } => {
                Some(format!("decimal({precision},{scale})"))
            }
        }
    }

    pub fn is_specified(&self) -> bool {
        !matches!(self, StorageType::Unspecified)
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.declaration() {
            Some(decl) => f.write_str(&decl),
            None => f.write_str("default"),
        }
    }
}

impl Serialize for StorageType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::serde_helpers::serialize_storage_type(self, serializer)
    }
}

/// Matching mode for string filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    Prefix,
    Substring,
    Exact,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Prefix => "prefix",
            SearchMode::Substring => "substring",
            SearchMode::Exact => "exact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_declaration() {
        assert_eq!(StorageType::Unspecified.declaration(), None);
        assert_eq!(StorageType::Text.declaration().as_deref(), Some("longtext"));
        assert_eq!(
            StorageType::Varchar(120).declaration().as_deref(),
            Some("varchar(120)")
        );
        assert_eq!(StorageType::Int(11).declaration().as_deref(), Some("int(11)"));
        assert_eq!(
            StorageType::Decimal {
                precision: 10,
                scale: 2
            }
            .declaration()
            .as_deref(),
            Some("decimal(10,2)")
        );
    }

    #[test]
    fn test_storage_type_display() {
        assert_eq!(StorageType::Unspecified.to_string(), "default");
        assert_eq!(StorageType::Varchar(50).to_string(), "varchar(50)");
    }

    #[test]
    fn test_storage_type_serializes_as_declaration() {
        assert_eq!(
            serde_json::to_string(&StorageType::Int(11)).unwrap(),
            r#""int(11)""#
        );
        assert_eq!(
            serde_json::to_string(&StorageType::Unspecified).unwrap(),
            "null"
        );
    }

    #[test]
    fn test_value_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ValueKind::DateTime).unwrap(),
            r#""date_time""#
        );
        assert_eq!(
            serde_json::to_string(&ValueKind::Other(9)).unwrap(),
            r#"{"other":9}"#
        );
    }

    #[test]
    fn test_value_kind_as_str() {
        assert_eq!(ValueKind::String.as_str(), "string");
        assert_eq!(ValueKind::Other(7).as_str(), "other");
    }
}
