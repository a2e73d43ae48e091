//! Temporal reference content checks.

use std::collections::BTreeSet;

use crate::checks::Findings;
use crate::model::{TemporalModel, ValueModel};

/// Temporal symbols referenced by scenario-tagged value columns must be
/// future years: a projection under a scenario cannot sit in the past.
///
/// `current_year` is injected so the rule is testable; the runner passes
/// the local calendar year.
pub fn check_future_years(
    temporal: &TemporalModel,
    values: &ValueModel,
    current_year: i64,
) -> Findings {
    let mut errors = Vec::new();

    let scenario_years: BTreeSet<i64> = values
        .columns
        .iter()
        .filter(|c| c.scenario.is_some())
        .map(|c| c.year as i64)
        .collect();

    for reference in &temporal.references {
        if scenario_years.contains(&reference.symbol) && reference.symbol <= current_year {
            errors.push(format!(
                "row {}: temporal reference {} is used by scenario value columns but is not a future year",
                reference.row, reference.symbol
            ));
        }
    }

    (errors, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TemporalModel, ValueModel};
    use crate::table::{HeaderKind, RawTable};

    fn temporal(symbols: &[&str]) -> TemporalModel {
        let table = RawTable {
            exists: true,
            read_succeeded: true,
            header_kind: HeaderKind::Single,
            columns: vec![
                "nome".to_string(),
                "descricao".to_string(),
                "simbolo".to_string(),
            ],
            sub_columns: Vec::new(),
            rows: symbols
                .iter()
                .map(|s| {
                    vec![
                        Some(s.to_string()),
                        Some("d".to_string()),
                        Some(s.to_string()),
                    ]
                })
                .collect(),
        };
        TemporalModel::from_table(table)
    }

    fn values(columns: &[&str]) -> ValueModel {
        let mut all = vec!["id".to_string()];
        all.extend(columns.iter().map(|c| c.to_string()));
        let table = RawTable {
            exists: true,
            read_succeeded: true,
            header_kind: HeaderKind::Single,
            columns: all,
            sub_columns: Vec::new(),
            rows: vec![],
        };
        ValueModel::from_table(table)
    }

    #[test]
    fn test_future_scenario_year_passes() {
        let (errors, _) = check_future_years(
            &temporal(&["2015", "2050"]),
            &values(&["1-2015", "1-2050-1"]),
            2026,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_past_scenario_year_fails() {
        let (errors, _) = check_future_years(
            &temporal(&["2015", "2020"]),
            &values(&["1-2015", "1-2020-1"]),
            2026,
        );
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("2020"));
        assert!(errors[0].contains("not a future year"));
    }

    #[test]
    fn test_plain_year_columns_unconstrained() {
        // Without a scenario suffix a past year is fine
        let (errors, _) =
            check_future_years(&temporal(&["2015"]), &values(&["1-2015"]), 2026);
        assert!(errors.is_empty());
    }
}
