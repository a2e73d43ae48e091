//! The `proporcionalidades` sheet: the only double-header sheet. The first
//! header row names parent value columns; the second names the per-parent
//! child columns plus a leading `id`.

use crate::model::values::ValueColumnId;
use crate::model::{is_unnamed_header, SheetBase, SheetSchema};
use crate::table::RawTable;

pub const SCHEMA: SheetSchema = SheetSchema {
    name: crate::sheets::PROPORTIONALITY,
    required: &[],
    optional: &[],
    allows_value_columns: true,
};

#[derive(Debug, Clone)]
pub struct ProportionalityModel {
    pub base: SheetBase,
    /// Parent value columns from the first header row.
    pub parent_columns: Vec<ValueColumnId>,
    /// Child value columns from the second header row.
    pub child_columns: Vec<ValueColumnId>,
}

impl ProportionalityModel {
    pub fn from_table(table: RawTable) -> Self {
        let mut base = SheetBase::new(table);
        base.init();

        let mut parent_columns = Vec::new();
        for header in base.table.columns.clone() {
            if is_unnamed_header(&header) {
                continue;
            }
            match ValueColumnId::parse(&header) {
                Some(id) => parent_columns.push(id),
                None => base.structural_errors.push(format!(
                    "first header row: '{}' does not match the CODE-YEAR[-SCENARIO] pattern",
                    header
                )),
            }
        }

        let mut child_columns = Vec::new();
        for (idx, header) in base.table.sub_columns.clone().into_iter().enumerate() {
            if is_unnamed_header(&header) {
                continue;
            }
            if idx == 0 && header == "id" {
                continue;
            }
            match ValueColumnId::parse(&header) {
                Some(id) => child_columns.push(id),
                None => base.structural_errors.push(format!(
                    "second header row: '{}' does not match the CODE-YEAR[-SCENARIO] pattern",
                    header
                )),
            }
        }

        if base.table.read_succeeded && !base.table.sub_columns.iter().any(|c| c == "id") {
            base.structural_errors
                .push("second header row is missing the 'id' column".to_string());
        }

        ProportionalityModel {
            base,
            parent_columns,
            child_columns,
        }
    }

    pub fn sanity_check_passed(&self) -> bool {
        self.base.sanity_check_passed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::HeaderKind;

    fn table(columns: &[&str], sub_columns: &[&str]) -> RawTable {
        RawTable {
            exists: true,
            read_succeeded: true,
            header_kind: HeaderKind::Double,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            sub_columns: sub_columns.iter().map(|c| c.to_string()).collect(),
            rows: vec![vec![Some("1".to_string())]],
        }
    }

    #[test]
    fn test_headers_parsed() {
        let model = ProportionalityModel::from_table(table(
            &["5001-2015", "", ""],
            &["id", "2001-2015", "2002-2015"],
        ));

        assert!(model.sanity_check_passed());
        assert_eq!(model.parent_columns.len(), 1);
        assert_eq!(model.parent_columns[0].code, 5001);
        assert_eq!(model.child_columns.len(), 2);
    }

    #[test]
    fn test_malformed_parent_header() {
        let model =
            ProportionalityModel::from_table(table(&["not-a-column"], &["id", "2001-2015"]));
        assert!(!model.sanity_check_passed());
        assert!(model.base.structural_errors[0].contains("not-a-column"));
    }

    #[test]
    fn test_missing_id_subcolumn() {
        let model =
            ProportionalityModel::from_table(table(&["5001-2015"], &["2001-2015"]));
        assert!(model
            .base
            .structural_errors
            .iter()
            .any(|e| e.contains("missing the 'id' column")));
    }
}
