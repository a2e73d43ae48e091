//! Referential checks between the description sheet and the optional
//! legend and proportionality sheets.

use std::collections::BTreeSet;

use crate::checks::Findings;
use crate::model::{DescriptionModel, LegendModel, ProportionalityModel};

/// Every `legenda` reference in the description sheet must name an
/// existing legend group.
pub fn check_legend_references(
    description: &DescriptionModel,
    legend: &LegendModel,
) -> Findings {
    let groups: BTreeSet<u32> = legend
        .rows
        .iter()
        .filter_map(|row| row.code.as_deref().and_then(|c| c.trim().parse().ok()))
        .collect();

    let errors = description
        .records
        .iter()
        .filter_map(|record| {
            let legend_ref = record.legend?;
            if groups.contains(&legend_ref) {
                None
            } else {
                Some(format!(
                    "row {}: legend {} is not defined in the legend sheet",
                    record.row, legend_ref
                ))
            }
        })
        .collect();

    (errors, Vec::new())
}

/// Every code named by the proportionality matrix headers must be a
/// described indicator.
pub fn check_proportionality_references(
    proportionality: &ProportionalityModel,
    description: &DescriptionModel,
) -> Findings {
    let codes: BTreeSet<u32> = description.codes().into_iter().collect();
    let mut errors = Vec::new();

    for (which, columns) in [
        ("parent", &proportionality.parent_columns),
        ("child", &proportionality.child_columns),
    ] {
        for column in columns.iter() {
            if !codes.contains(&column.code) {
                errors.push(format!(
                    "{} column '{}': code {} is not in the description sheet",
                    which, column.name, column.code
                ));
            }
        }
    }

    (errors, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ValidationContext;
    use crate::table::{HeaderKind, RawTable};

    fn description_with_legend(rows: &[(&str, Option<&str>)]) -> DescriptionModel {
        let table = RawTable {
            exists: true,
            read_succeeded: true,
            header_kind: HeaderKind::Single,
            columns: [
                "codigo",
                "nivel",
                "nome_simples",
                "nome_completo",
                "desc_simples",
                "desc_completa",
                "legenda",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            sub_columns: Vec::new(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(i, (code, legend))| {
                    vec![
                        Some(code.to_string()),
                        Some(if i == 0 { "1" } else { "2" }.to_string()),
                        Some("n".to_string()),
                        Some("N".to_string()),
                        Some("d".to_string()),
                        Some("D".to_string()),
                        legend.map(|l| l.to_string()),
                    ]
                })
                .collect(),
        };
        DescriptionModel::from_table(table, &ValidationContext::default())
    }

    fn legend(codes: &[&str]) -> LegendModel {
        let table = RawTable {
            exists: true,
            read_succeeded: true,
            header_kind: HeaderKind::Single,
            columns: ["codigo", "etiqueta", "cor", "minimo", "maximo", "ordem"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            sub_columns: Vec::new(),
            rows: codes
                .iter()
                .map(|c| {
                    vec![
                        Some(c.to_string()),
                        Some("DI".to_string()),
                        Some("#CCCCCC".to_string()),
                        None,
                        None,
                        Some("1".to_string()),
                    ]
                })
                .collect(),
        };
        LegendModel::from_table(table)
    }

    fn proportionality(parents: &[&str], children: &[&str]) -> ProportionalityModel {
        let mut sub = vec!["id".to_string()];
        sub.extend(children.iter().map(|c| c.to_string()));
        let table = RawTable {
            exists: true,
            read_succeeded: true,
            header_kind: HeaderKind::Double,
            columns: parents.iter().map(|c| c.to_string()).collect(),
            sub_columns: sub,
            rows: vec![vec![Some("1".to_string())]],
        };
        ProportionalityModel::from_table(table)
    }

    #[test]
    fn test_legend_reference_found() {
        let (errors, _) = check_legend_references(
            &description_with_legend(&[("1", Some("1")), ("2", Some("1"))]),
            &legend(&["1"]),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_legend_reference_missing() {
        let (errors, _) = check_legend_references(
            &description_with_legend(&[("1", Some("2"))]),
            &legend(&["1"]),
        );
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("legend 2"));
    }

    #[test]
    fn test_proportionality_codes_checked() {
        let (errors, _) = check_proportionality_references(
            &proportionality(&["1-2015"], &["2-2015", "9-2015"]),
            &description_with_legend(&[("1", None), ("2", None)]),
        );
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("code 9"));
        assert!(errors[0].starts_with("child"));
    }
}
