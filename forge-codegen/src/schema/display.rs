//! Schema tree display formatting.
//!
//! # Example
//!
//! ```ignore
//! use tableforge_codegen::schema::{DisplayStyle, SchemaDisplay};
//!
//! let display = SchemaDisplay::new(&schema).style(DisplayStyle::TreeBox);
//! println!("{display}");
//! ```

use std::fmt;

use tableforge_ir::{AppSchema, ColumnSchema, TableSchema};

/// Display style for schema trees.
#[derive(Debug, Clone, Copy, Default)]
pub enum DisplayStyle {
    /// Indented table and column names.
    ///
    /// ```text
    /// product
    ///   sku
    ///   name
    /// ```
    #[default]
    Simple,

    /// Names with resolved storage types and nullability.
    ///
    /// ```text
    /// product
    ///   sku varchar(64) not null
    ///   name default
    /// ```
    WithTypes,

    /// Tree structure with box-drawing characters and metadata.
    ///
    /// ```text
    /// ├─ product (2 columns, 1 unique)
    /// │  ├─ sku varchar(64) not null
    /// │  └─ name default
    /// │  unique (sku)
    /// └─ order (0 columns)
    /// ```
    TreeBox,
}

/// Declarative schema tree formatter.
#[derive(Debug, Clone)]
pub struct SchemaDisplay<'a> {
    schema: &'a AppSchema,
    style: DisplayStyle,
    indent_str: &'a str,
}

impl<'a> SchemaDisplay<'a> {
    pub fn new(schema: &'a AppSchema) -> Self {
        Self {
            schema,
            style: DisplayStyle::default(),
            indent_str: "  ",
        }
    }

    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the indentation string (default: two spaces).
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent_str = indent;
        self
    }

    pub fn render(&self) -> String {
        let mut output = String::new();
        match self.style {
            DisplayStyle::Simple => self.render_indented(&mut output, false),
            DisplayStyle::WithTypes => self.render_indented(&mut output, true),
            DisplayStyle::TreeBox => self.render_tree_box(&mut output),
        }
        output
    }

    fn render_indented(&self, output: &mut String, with_types: bool) {
        for table in &self.schema.tables {
            output.push_str(&table.name);
            output.push('\n');
            for column in &table.columns {
                output.push_str(self.indent_str);
                if with_types {
                    output.push_str(&column_signature(column));
                } else {
                    output.push_str(&column.name);
                }
                output.push('\n');
            }
        }
    }

    fn render_tree_box(&self, output: &mut String) {
        let count = self.schema.tables.len();
        for (i, table) in self.schema.tables.iter().enumerate() {
            let is_last = i == count - 1;
            let branch = if is_last { "└─" } else { "├─" };
            let child_prefix = if is_last { "   " } else { "│  " };

            output.push_str(branch);
            output.push(' ');
            output.push_str(&table.name);
            output.push_str(&table_metadata(table));
            output.push('\n');

            let column_count = table.columns.len();
            for (j, column) in table.columns.iter().enumerate() {
                let column_branch = if j == column_count - 1 { "└─" } else { "├─" };
                output.push_str(child_prefix);
                output.push_str(column_branch);
                output.push(' ');
                output.push_str(&column_signature(column));
                output.push('\n');
            }

            for constraint in &table.unique_constraints {
                output.push_str(child_prefix);
                output.push_str("unique (");
                output.push_str(&constraint.join(", "));
                output.push_str(")\n");
            }
        }
    }
}

impl fmt::Display for SchemaDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn column_signature(column: &ColumnSchema) -> String {
    let mut signature = format!("{} {}", column.name, column.storage);
    if !column.nullable {
        signature.push_str(" not null");
    }
    if let Some(default) = &column.default {
        signature.push_str(&format!(" = {default:?}"));
    }
    signature
}

fn table_metadata(table: &TableSchema) -> String {
    let columns = table.columns.len();
    let mut parts = vec![format!(
        "{columns} column{}",
        if columns == 1 { "" } else { "s" }
    )];
    if !table.unique_constraints.is_empty() {
        parts.push(format!("{} unique", table.unique_constraints.len()));
    }
    format!(" ({})", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use tableforge_ir::{
        AppMeta, Permissions, RecordTracking, SearchMode, StorageType, ValueKind, Visibility,
    };

    use super::*;

    fn column(name: &str, storage: StorageType, nullable: bool) -> ColumnSchema {
        ColumnSchema {
            name: name.into(),
            display_name: name.into(),
            comment: None,
            kind: ValueKind::String,
            storage,
            nullable,
            default: None,
            permissions: Permissions::default(),
            visibility: Visibility::default(),
            search: Some(SearchMode::Prefix),
            update_alone: false,
            enum_values: vec![],
        }
    }

    fn schema() -> AppSchema {
        let mut status = column("status", StorageType::Unspecified, true);
        status.default = Some("draft".into());
        AppSchema {
            meta: AppMeta {
                id: "shop".into(),
                name: "Shop".into(),
                package: "com.example.shop".into(),
                description: None,
                owner: None,
            },
            options: None,
            tables: vec![
                TableSchema {
                    name: "product".into(),
                    comment: None,
                    tracking: RecordTracking::default(),
                    columns: vec![
                        column("sku", StorageType::Varchar(64), false),
                        column("vendor", StorageType::Int(11), true),
                        status,
                    ],
                    unique_constraints: vec![vec!["sku".into(), "vendor".into()]],
                },
                TableSchema {
                    name: "audit".into(),
                    comment: None,
                    tracking: RecordTracking::default(),
                    columns: vec![],
                    unique_constraints: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_simple() {
        let schema = schema();
        insta::assert_snapshot!(SchemaDisplay::new(&schema).render(), @r"
        product
          sku
          vendor
          status
        audit
        ");
    }

    #[test]
    fn test_with_types() {
        let schema = schema();
        let display = SchemaDisplay::new(&schema)
            .style(DisplayStyle::WithTypes)
            .indent("    ");
        insta::assert_snapshot!(display.render(), @r#"
        product
            sku varchar(64) not null
            vendor int(11)
            status default = "draft"
        audit
        "#);
    }

    #[test]
    fn test_tree_box() {
        let schema = schema();
        let display = SchemaDisplay::new(&schema).style(DisplayStyle::TreeBox);
        insta::assert_snapshot!(display.to_string(), @r#"
        ├─ product (3 columns, 1 unique)
        │  ├─ sku varchar(64) not null
        │  ├─ vendor int(11)
        │  └─ status default = "draft"
        │  unique (sku, vendor)
        └─ audit (0 columns)
        "#);
    }
}
