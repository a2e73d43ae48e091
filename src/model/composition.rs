//! The `composicao` sheet: parent/child edges of the indicator hierarchy.

use crate::model::{clean_integer_column, SheetBase, SheetSchema};
use crate::table::RawTable;

pub const SCHEMA: SheetSchema = SheetSchema {
    name: crate::sheets::COMPOSITION,
    required: &["codigo_pai", "codigo_filho"],
    optional: &[],
    allows_value_columns: false,
};

/// A directed parent -> child edge over indicator codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionEdge {
    /// 1-based sheet row number, for messages.
    pub row: usize,
    pub parent: u32,
    pub child: u32,
}

#[derive(Debug, Clone)]
pub struct CompositionModel {
    pub base: SheetBase,
    /// Edges that survived cleaning, in sheet order.
    pub edges: Vec<CompositionEdge>,
}

impl CompositionModel {
    pub fn from_table(table: RawTable) -> Self {
        let mut base = SheetBase::new(table);
        base.init();
        base.verify_structure(&SCHEMA);

        let (parents, errors) = clean_integer_column(&base, "codigo_pai", Some(1), true);
        base.cleaning_errors.extend(errors);
        let (children, errors) = clean_integer_column(&base, "codigo_filho", Some(1), true);
        base.cleaning_errors.extend(errors);

        let edges = parents
            .iter()
            .zip(children.iter())
            .enumerate()
            .filter_map(|(idx, (parent, child))| match (parent, child) {
                (Some(parent), Some(child)) => Some(CompositionEdge {
                    row: base.row_number(idx),
                    parent: *parent as u32,
                    child: *child as u32,
                }),
                _ => None,
            })
            .collect();

        CompositionModel { base, edges }
    }

    pub fn sanity_check_passed(&self) -> bool {
        self.base.sanity_check_passed()
    }

    /// Edges as string pairs, the graph module's input shape.
    pub fn edge_ids(&self) -> Vec<(String, String)> {
        self.edges
            .iter()
            .map(|e| (e.parent.to_string(), e.child.to_string()))
            .collect()
    }
}
