//! Table component for structured data
//!
//! Typed columns plus rows of cells addressed by column key. Cells are either
//! plain text or nested nodes, so a cell can hold a badge or any other
//! component.
//!
//! # Example
//!
//! ```ignore
//! use trellis_ui::prelude::*;
//!
//! ui::table()
//!     .column(TableColumn::new("name", "Name").width(160.0))
//!     .column(TableColumn::new("status", "Status"))
//!     .row([("name", Cell::from("api-gateway")), ("status", Cell::from(ui::badge("Healthy").build()))])
//!     .striped()
//! ```

use indexmap::IndexMap;
use tracing::warn;
use trellis_element::prelude::*;

/// One typed table column
#[derive(Clone, Debug, PartialEq)]
pub struct TableColumn {
    key: String,
    title: String,
    width: Prop<f32>,
    align: Prop<TextAlign>,
}

impl TableColumn {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width: Prop::Unset,
            align: Prop::Unset,
        }
    }

    /// Fix the column width in pixels
    pub fn width(mut self, px: f32) -> Self {
        self.width = Prop::Set(px);
        self
    }

    /// Align cell content in this column
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Prop::Set(align);
        self
    }

    /// The column's key, used to address cells in a row
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl ToPropValue for TableColumn {
    fn to_prop_value(&self) -> PropValue {
        let mut entries = vec![
            ("key", PropValue::Str(self.key.clone())),
            ("title", PropValue::Str(self.title.clone())),
        ];
        if let Some(width) = self.width.as_ref() {
            entries.push(("width", PropValue::Float(*width as f64)));
        }
        if let Some(align) = self.align.as_ref() {
            entries.push(("align", align.to_prop_value()));
        }
        PropValue::map(entries)
    }
}

/// One table cell: plain text or an arbitrary nested component
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Node(UiNode),
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<UiNode> for Cell {
    fn from(node: UiNode) -> Self {
        Cell::Node(node)
    }
}

impl ToPropValue for Cell {
    fn to_prop_value(&self) -> PropValue {
        match self {
            Cell::Text(text) => PropValue::Str(text.clone()),
            Cell::Node(node) => PropValue::Node(Box::new(node.clone())),
        }
    }
}

/// Table component with typed columns and keyed rows
pub struct Table {
    columns: Vec<TableColumn>,
    rows: Vec<IndexMap<String, Cell>>,
    striped: Prop<bool>,
    bordered: Prop<bool>,
    compact: Prop<bool>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            striped: Prop::Unset,
            bordered: Prop::Unset,
            compact: Prop::Unset,
        }
    }

    /// Add a column
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add several columns
    pub fn columns(mut self, columns: impl IntoIterator<Item = TableColumn>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Add a row of cells keyed by column key
    pub fn row<K, V>(mut self, cells: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Cell>,
    {
        self.rows.push(
            cells
                .into_iter()
                .map(|(key, cell)| (key.into(), cell.into()))
                .collect(),
        );
        self
    }

    /// Alternate row backgrounds
    pub fn striped(mut self) -> Self {
        self.striped = Prop::Set(true);
        self
    }

    /// Draw cell borders
    pub fn bordered(mut self) -> Self {
        self.bordered = Prop::Set(true);
        self
    }

    /// Tighter row spacing
    pub fn compact(mut self) -> Self {
        self.compact = Prop::Set(true);
        self
    }
}

impl ElementBuilder for Table {
    fn build(&self) -> UiNode {
        for row in &self.rows {
            for key in row.keys() {
                if !self.columns.iter().any(|column| column.key() == key) {
                    warn!(key = %key, "table row cell addresses a column that was never declared");
                }
            }
        }
        let rows = PropValue::List(
            self.rows
                .iter()
                .map(|row| {
                    PropValue::Map(
                        row.iter()
                            .map(|(key, cell)| (key.clone(), cell.to_prop_value()))
                            .collect(),
                    )
                })
                .collect(),
        );
        UiNode::new("Table")
            .prop_set("columns", self.columns.clone())
            .prop("rows", Prop::Set(rows))
            .prop("striped", self.striped.encode())
            .prop("bordered", self.bordered.encode())
            .prop("compact", self.compact.encode())
    }
}

/// Create an empty table
pub fn table() -> Table {
    Table::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::badge::badge;

    #[test]
    fn test_table_shape() {
        let node = table()
            .column(TableColumn::new("name", "Name").width(160.0))
            .column(TableColumn::new("age", "Age").align(TextAlign::Right))
            .row([("name", "Ada"), ("age", "36")])
            .striped()
            .build();

        assert_eq!(node.tag, "Table");
        assert!(node.get_prop("striped").unwrap().is_set());
        assert_eq!(node.get_prop("bordered"), Some(&Prop::Unset));

        let Some(Prop::Set(PropValue::List(columns))) = node.get_prop("columns") else {
            panic!("columns should be a set list");
        };
        assert_eq!(columns.len(), 2);
    }

    #[test]
    fn test_row_cells_keyed_by_column() {
        let node = table()
            .column(TableColumn::new("name", "Name"))
            .row([("name", "Ada")])
            .build();

        let Some(Prop::Set(PropValue::List(rows))) = node.get_prop("rows") else {
            panic!("rows should be a set list");
        };
        let PropValue::Map(row) = &rows[0] else {
            panic!("each row should be a map");
        };
        assert_eq!(row["name"], PropValue::Str("Ada".into()));
    }

    #[test]
    fn test_node_cell() {
        let node = table()
            .column(TableColumn::new("status", "Status"))
            .row([("status", Cell::from(badge("Healthy").build()))])
            .build();

        let Some(Prop::Set(PropValue::List(rows))) = node.get_prop("rows") else {
            panic!("rows should be a set list");
        };
        let PropValue::Map(row) = &rows[0] else {
            panic!("each row should be a map");
        };
        assert!(matches!(&row["status"], PropValue::Node(cell) if cell.tag == "Badge"));
    }
}
