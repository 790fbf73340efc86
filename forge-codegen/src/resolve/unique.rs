//! Composite unique constraint grouping.

use indexmap::IndexMap;
use tableforge_core::ColumnConfig;

/// Group the columns of one table into composite unique constraints.
///
/// Columns sharing a non-zero `unique_check` value form one constraint.
/// Constraints are ordered by the first appearance of their group id, and
/// column names within a constraint keep column order. Group id `0` columns
/// are left out.
pub fn group_unique_columns(columns: &[ColumnConfig]) -> Vec<Vec<String>> {
    let mut groups: IndexMap<i32, Vec<String>> = IndexMap::new();
    for column in columns {
        if let Some(group) = column.unique_group() {
            groups.entry(group).or_default().push(column.name.clone());
        }
    }
    groups.into_values().collect()
}
