//! The `dicionario` sheet: extra words accepted by the (external)
//! spellchecker. Structural validation only; no spellcheck engine lives in
//! this crate.

use crate::model::{SheetBase, SheetSchema};
use crate::table::RawTable;

pub const SCHEMA: SheetSchema = SheetSchema {
    name: crate::sheets::DICTIONARY,
    required: &["palavra"],
    optional: &[],
    allows_value_columns: false,
};

#[derive(Debug, Clone)]
pub struct DictionaryModel {
    pub base: SheetBase,
    pub words: Vec<String>,
}

impl DictionaryModel {
    pub fn from_table(table: RawTable) -> Self {
        let mut base = SheetBase::new(table);
        base.init();
        base.verify_structure(&SCHEMA);

        let words = base
            .table
            .column("palavra")
            .map(|col| {
                col.into_iter()
                    .flatten()
                    .map(|w| w.trim().to_string())
                    .filter(|w| !w.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        DictionaryModel { base, words }
    }

    pub fn sanity_check_passed(&self) -> bool {
        self.base.sanity_check_passed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::HeaderKind;

    #[test]
    fn test_words_collected() {
        let table = RawTable {
            exists: true,
            read_succeeded: true,
            header_kind: HeaderKind::Single,
            columns: vec!["palavra".to_string()],
            sub_columns: Vec::new(),
            rows: vec![
                vec![Some("geomorfologia".to_string())],
                vec![Some(" pluviosidade ".to_string())],
                vec![None],
            ],
        };
        let model = DictionaryModel::from_table(table);

        assert!(model.sanity_check_passed());
        assert_eq!(model.words, vec!["geomorfologia", "pluviosidade"]);
    }
}
