//! Column descriptors and table schemas

use std::fmt;

/// Logical column type as declared to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalType {
    Text,
    Integer,
}

impl LogicalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalType::Text => "TEXT",
            LogicalType::Integer => "INTEGER",
        }
    }
}

/// Whether a column appears in output rows or only receives constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Appears in output rows
    Visible,
    /// Hidden; exists only to receive a constraint argument
    Control,
}

/// A single column in a generator table schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name
    pub name: &'static str,
    /// Declared logical type
    pub logical_type: LogicalType,
    /// Visible or control
    pub visibility: Visibility,
}

impl ColumnDef {
    /// Creates a visible column
    pub fn visible(name: &'static str, logical_type: LogicalType) -> Self {
        Self {
            name,
            logical_type,
            visibility: Visibility::Visible,
        }
    }

    /// Creates a control (hidden) column
    pub fn control(name: &'static str, logical_type: LogicalType) -> Self {
        Self {
            name,
            logical_type,
            visibility: Visibility::Control,
        }
    }

    /// Returns true if this is a control column
    pub fn is_control(&self) -> bool {
        self.visibility == Visibility::Control
    }
}

/// Ordered, position-addressed column list for one generator type.
///
/// Column index is identity: the host addresses columns by position and
/// the layout never changes for the lifetime of the table type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    table_name: &'static str,
    columns: Vec<ColumnDef>,
}

impl TableSchema {
    /// Creates a schema from an ordered column list.
    ///
    /// Visible columns must precede control columns.
    pub fn new(table_name: &'static str, columns: Vec<ColumnDef>) -> Self {
        debug_assert!(
            columns.windows(2).all(|w| !(w[0].is_control() && !w[1].is_control())),
            "visible columns must precede control columns"
        );
        Self {
            table_name,
            columns,
        }
    }

    /// Returns the table name
    pub fn table_name(&self) -> &'static str {
        self.table_name
    }

    /// Returns the column at the given index, if any
    pub fn column(&self, index: usize) -> Option<&ColumnDef> {
        self.columns.get(index)
    }

    /// Returns the full ordered column list
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the number of visible columns
    pub fn visible_count(&self) -> usize {
        self.columns.iter().filter(|c| !c.is_control()).count()
    }

    /// Renders the declaration string for the host engine.
    ///
    /// Control columns are declared HIDDEN.
    pub fn declaration(&self) -> String {
        let mut out = String::from("CREATE TABLE x(");
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(col.name);
            if col.is_control() {
                out.push_str(" HIDDEN");
            }
        }
        out.push(')');
        out
    }
}

impl fmt::Display for TableSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.table_name, self.declaration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TableSchema {
        TableSchema::new(
            "sample",
            vec![
                ColumnDef::visible("value", LogicalType::Integer),
                ColumnDef::control("start", LogicalType::Integer),
                ColumnDef::control("stop", LogicalType::Integer),
            ],
        )
    }

    #[test]
    fn test_index_is_identity() {
        let schema = sample();
        assert_eq!(schema.column(0).unwrap().name, "value");
        assert_eq!(schema.column(2).unwrap().name, "stop");
        assert!(schema.column(3).is_none());
    }

    #[test]
    fn test_visible_count() {
        let schema = sample();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.visible_count(), 1);
    }

    #[test]
    fn test_declaration_marks_control_hidden() {
        let schema = sample();
        assert_eq!(
            schema.declaration(),
            "CREATE TABLE x(value, start HIDDEN, stop HIDDEN)"
        );
    }
}
