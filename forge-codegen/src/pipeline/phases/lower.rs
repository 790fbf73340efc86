//! Lower phase - resolves configuration rows into the application schema.
//!
//! Every stored code and bitmask is interpreted here, so generators only see
//! resolved values.

use tableforge_core::{Application, ApplicationConfig, ColumnConfig, StringSearch, TableConfig};
use tableforge_ir::{
    AppMeta, AppOptions, AppSchema, ColumnSchema, PageTargets, Permissions, RecordTracking,
    SearchMode, TableSchema, ValueKind, Visibility,
};
use tracing::debug;

use crate::{
    CompileError,
    pipeline::{
        CompilationContext, Diagnostic, Phase, SourceConfig, SourceTable,
        diagnostic::column_location,
    },
    resolve::{group_unique_columns, parse_enum_values, resolve_kind, resolve_storage},
};

/// Phase that transforms the loaded rows into an [`AppSchema`].
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Resolve rows into the application schema"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<(), CompileError> {
        let Some(source) = ctx.source.as_ref() else {
            return Err(CompileError::Phase {
                phase: self.name(),
                message: "configuration rows not loaded".into(),
            });
        };

        let schema = lower_source(source, &mut ctx.diagnostics);
        debug!(
            application_id = %schema.meta.id,
            tables = schema.tables.len(),
            columns = schema.column_count(),
            "lowered schema"
        );
        ctx.ir = Some(schema);
        Ok(())
    }
}

fn lower_source(source: &SourceConfig, diagnostics: &mut Vec<Diagnostic>) -> AppSchema {
    AppSchema {
        meta: lower_meta(&source.application),
        options: source.options.as_ref().map(lower_options),
        tables: source
            .tables
            .iter()
            .map(|entry| lower_table(entry, diagnostics))
            .collect(),
    }
}

fn lower_meta(application: &Application) -> AppMeta {
    AppMeta {
        id: application.id.clone(),
        name: application.name.clone(),
        package: application.package.clone(),
        description: non_empty(&application.description),
        owner: non_empty(&application.owner_id),
    }
}

fn lower_options(config: &ApplicationConfig) -> AppOptions {
    let pages = config.page_type;
    AppOptions {
        pages: PageTargets {
            pc: pages.pc(),
            mobile: pages.mobile(),
            dashboard: pages.dashboard(),
        },
        token_expire_hours: u32::try_from(config.token_expire_hours)
            .ok()
            .filter(|hours| *hours > 0),
    }
}

fn lower_table(entry: &SourceTable, diagnostics: &mut Vec<Diagnostic>) -> TableSchema {
    let table: &TableConfig = &entry.table;
    TableSchema {
        name: table.name.clone(),
        comment: non_empty(&table.comment),
        tracking: RecordTracking {
            create_time: table.record_type.track_create(),
            update_time: table.record_type.track_update(),
            delete_time: table.record_type.track_delete(),
        },
        columns: entry
            .columns
            .iter()
            .map(|column| lower_column(&table.name, column, diagnostics))
            .collect(),
        unique_constraints: group_unique_columns(&entry.columns),
    }
}

fn lower_column(
    table: &str,
    column: &ColumnConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> ColumnSchema {
    let kind = resolve_kind(column);
    let zero_value = column.zero_value();

    let enum_values = parse_enum_values(kind, &column.enum_json).unwrap_or_else(|err| {
        diagnostics.push(
            Diagnostic::warning(
                "lower",
                format!("ignoring enum values of column '{}': {err}", column.name),
            )
            .at(column_location(table, &column.name)),
        );
        Vec::new()
    });

    ColumnSchema {
        name: column.name.clone(),
        display_name: column.display_name.clone(),
        comment: non_empty(&column.comment),
        kind,
        storage: resolve_storage(column),
        nullable: zero_value.is_nullable(),
        default: zero_value.default_value().map(str::to_string),
        permissions: Permissions {
            creatable: column.update_type.creatable(),
            updatable: column.update_type.updatable(),
            filterable: column.update_type.filterable(),
        },
        visibility: Visibility {
            add: column.display_type.on_add(),
            edit: column.display_type.on_edit(),
            list: column.display_type.on_list(),
            detail: column.display_type.on_detail(),
        },
        search: (kind == ValueKind::String).then(|| search_mode(column.string_search())),
        update_alone: column.is_update_alone(),
        enum_values,
    }
}

fn search_mode(search: StringSearch) -> SearchMode {
    match search {
        StringSearch::Prefix => SearchMode::Prefix,
        StringSearch::Substring => SearchMode::Substring,
        StringSearch::Exact => SearchMode::Exact,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use tableforge_core::{DisplayFlags, PageFlags, RecordFlags, UpdateFlags};
    use tableforge_ir::{EnumKey, StorageType};

    use super::*;

    fn column(name: &str) -> ColumnConfig {
        ColumnConfig {
            name: name.into(),
            display_name: name.to_uppercase(),
            column_type: 1,
            string_type: 1,
            string_search: 1,
            update_type: UpdateFlags::new(UpdateFlags::ALL),
            ..Default::default()
        }
    }

    fn source(columns: Vec<ColumnConfig>) -> SourceConfig {
        SourceConfig {
            application: Application {
                id: "shop".into(),
                name: "Shop".into(),
                package: "com.example.shop".into(),
                owner_id: "u1".into(),
                ..Default::default()
            },
            options: None,
            tables: vec![SourceTable {
                table: TableConfig {
                    id: "t1".into(),
                    name: "product".into(),
                    record_type: RecordFlags::new(RecordFlags::CREATE_TIME | RecordFlags::DELETE_TIME),
                    ..Default::default()
                },
                columns,
            }],
        }
    }

    #[test]
    fn test_meta_and_tracking() {
        let mut diagnostics = Vec::new();
        let schema = lower_source(&source(vec![]), &mut diagnostics);

        assert_eq!(schema.meta.package, "com.example.shop");
        assert_eq!(schema.meta.owner.as_deref(), Some("u1"));
        assert_eq!(schema.meta.description, None);
        assert!(schema.options.is_none());

        let tracking = schema.tables[0].tracking;
        assert!(tracking.create_time);
        assert!(!tracking.update_time);
        assert!(tracking.delete_time);
    }

    #[test]
    fn test_nullability_follows_sentinel() {
        let mut required = column("sku");
        required.zero_value = "!NIL".into();
        let optional = column("note");
        let mut defaulted = column("status");
        defaulted.zero_value = "draft".into();

        let mut diagnostics = Vec::new();
        let schema = lower_source(&source(vec![required, optional, defaulted]), &mut diagnostics);
        let table = &schema.tables[0];

        let sku = table.column("sku").unwrap();
        assert!(!sku.nullable);
        assert_eq!(sku.default, None);

        let note = table.column("note").unwrap();
        assert!(note.nullable);
        assert_eq!(note.default, None);

        let status = table.column("status").unwrap();
        assert!(status.nullable);
        assert_eq!(status.default.as_deref(), Some("draft"));
    }

    #[test]
    fn test_permissions_and_visibility() {
        let mut col = column("price");
        col.update_type = UpdateFlags::new(UpdateFlags::CREATE | UpdateFlags::FILTER);
        col.display_type = DisplayFlags::new(DisplayFlags::LIST | DisplayFlags::DETAIL);

        let mut diagnostics = Vec::new();
        let schema = lower_source(&source(vec![col]), &mut diagnostics);
        let price = &schema.tables[0].columns[0];

        assert_eq!(
            price.permissions,
            Permissions {
                creatable: true,
                updatable: false,
                filterable: true
            }
        );
        assert_eq!(
            price.visibility,
            Visibility {
                add: false,
                edit: false,
                list: true,
                detail: true
            }
        );
    }

    #[test]
    fn test_search_only_for_strings() {
        let mut name = column("name");
        name.string_search = 3;
        let mut count = column("count");
        count.column_type = 2;
        count.column_length = 11;

        let mut diagnostics = Vec::new();
        let schema = lower_source(&source(vec![name, count]), &mut diagnostics);
        let table = &schema.tables[0];

        assert_eq!(table.columns[0].search, Some(SearchMode::Exact));
        assert_eq!(table.columns[1].search, None);
        assert_eq!(table.columns[1].storage, StorageType::Int(11));
    }

    #[test]
    fn test_bad_enum_json_warns() {
        let mut state = column("state");
        state.column_type = 2;
        state.enum_json = "[{key:1}]".into();
        let mut color = column("color");
        color.enum_json = "red,green".into();

        let mut diagnostics = Vec::new();
        let schema = lower_source(&source(vec![state, color]), &mut diagnostics);
        let table = &schema.tables[0];

        assert!(table.columns[0].enum_values.is_empty());
        assert_eq!(table.columns[1].enum_values.len(), 2);
        assert_eq!(
            table.columns[1].enum_values[1].key,
            EnumKey::Text("green".into())
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("tables.product.columns.state")
        );
    }

    #[test]
    fn test_options() {
        let config = ApplicationConfig {
            application_id: "shop".into(),
            page_type: PageFlags::new(PageFlags::PC | PageFlags::DASHBOARD),
            token_expire_hours: 0,
            ..Default::default()
        };
        let options = lower_options(&config);

        assert!(options.pages.pc);
        assert!(!options.pages.mobile);
        assert!(options.pages.dashboard);
        assert_eq!(options.token_expire_hours, None);

        let options = lower_options(&ApplicationConfig {
            token_expire_hours: 24,
            ..config
        });
        assert_eq!(options.token_expire_hours, Some(24));
    }
}
