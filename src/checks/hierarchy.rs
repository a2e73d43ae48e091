//! Composition hierarchy checks: cycles, islands, membership, levels.

use std::collections::BTreeSet;

use crate::checks::Findings;
use crate::graph::DiGraph;
use crate::model::{CompositionModel, DescriptionModel};

/// Validate the composition graph against the description sheet.
///
/// Reports cycles, disconnected islands, composition codes unknown to the
/// description sheet, and level mismatches between the description sheet
/// and the canonical BFS depth from the root indicator.
pub fn check_hierarchy(
    composition: &CompositionModel,
    description: &DescriptionModel,
) -> Findings {
    let mut errors = Vec::new();

    let graph = DiGraph::from_edges(composition.edge_ids());
    if graph.is_empty() {
        return (
            vec!["the composition sheet defines no edges".to_string()],
            Vec::new(),
        );
    }

    let (has_cycle, cycle) = graph.detect_cycles();
    if has_cycle {
        let path = cycle.unwrap_or_default();
        let mut nodes: Vec<&str> = path.iter().map(|(from, _)| from.as_str()).collect();
        if let Some((_, last)) = path.last() {
            nodes.push(last.as_str());
        }
        errors.push(format!(
            "the composition graph contains a cycle: {}",
            nodes.join(" -> ")
        ));
    }

    for island in graph.disconnected_components() {
        errors.push(format!(
            "codes [{}] are disconnected from the main hierarchy",
            island.join(", ")
        ));
    }

    // Membership: every code on an edge must be described
    let described: BTreeSet<u32> = description.codes().into_iter().collect();
    let unknown: BTreeSet<u32> = composition
        .edges
        .iter()
        .flat_map(|edge| [edge.parent, edge.child])
        .filter(|code| !described.contains(code))
        .collect();
    for code in unknown {
        errors.push(format!(
            "code {} appears in the composition sheet but not in the description sheet",
            code
        ));
    }

    // Level consistency via the BFS tree rooted at the level-1 indicator.
    // Cycles make depths meaningless, so skip in that case.
    if !has_cycle {
        match description.root() {
            Some(root) => match graph.to_tree(&root.code.to_string()) {
                Ok(depths) => {
                    for record in &description.records {
                        if let Some(&depth) = depths.get(&record.code.to_string()) {
                            if depth != record.level {
                                errors.push(format!(
                                    "code {}: description level {} does not match hierarchy depth {}",
                                    record.code, record.level, depth
                                ));
                            }
                        }
                    }
                }
                Err(message) => errors.push(message),
            },
            None => errors.push(
                "the description sheet does not define exactly one level-1 indicator to root the hierarchy"
                    .to_string(),
            ),
        }
    }

    (errors, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ValidationContext;
    use crate::model::{CompositionModel, DescriptionModel};
    use crate::table::{HeaderKind, RawTable};

    fn composition(pairs: &[(&str, &str)]) -> CompositionModel {
        let table = RawTable {
            exists: true,
            read_succeeded: true,
            header_kind: HeaderKind::Single,
            columns: vec!["codigo_pai".to_string(), "codigo_filho".to_string()],
            sub_columns: Vec::new(),
            rows: pairs
                .iter()
                .map(|(p, c)| vec![Some(p.to_string()), Some(c.to_string())])
                .collect(),
        };
        CompositionModel::from_table(table)
    }

    fn description(rows: &[(&str, &str)]) -> DescriptionModel {
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
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            sub_columns: Vec::new(),
            rows: rows
                .iter()
                .map(|(code, level)| {
                    vec![
                        Some(code.to_string()),
                        Some(level.to_string()),
                        Some("n".to_string()),
                        Some("N".to_string()),
                        Some("d".to_string()),
                        Some("D".to_string()),
                    ]
                })
                .collect(),
        };
        DescriptionModel::from_table(table, &ValidationContext::default())
    }

    #[test]
    fn test_clean_hierarchy_passes() {
        let comp = composition(&[("1", "2"), ("1", "3"), ("2", "4")]);
        let desc = description(&[("1", "1"), ("2", "2"), ("3", "2"), ("4", "3")]);
        let (errors, _) = check_hierarchy(&comp, &desc);
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_cycle_reported() {
        let comp = composition(&[("1", "2"), ("2", "3"), ("3", "1")]);
        let desc = description(&[("1", "1"), ("2", "2"), ("3", "3")]);
        let (errors, _) = check_hierarchy(&comp, &desc);
        assert!(errors.iter().any(|e| e.contains("cycle")));
    }

    #[test]
    fn test_island_reported() {
        let comp = composition(&[("1", "2"), ("1", "3"), ("8", "9")]);
        let desc = description(&[("1", "1"), ("2", "2"), ("3", "2"), ("8", "2"), ("9", "3")]);
        let (errors, _) = check_hierarchy(&comp, &desc);
        assert!(errors
            .iter()
            .any(|e| e.contains("disconnected") && e.contains("[8, 9]")));
    }

    #[test]
    fn test_undescribed_code_reported() {
        let comp = composition(&[("1", "2"), ("1", "7")]);
        let desc = description(&[("1", "1"), ("2", "2")]);
        let (errors, _) = check_hierarchy(&comp, &desc);
        assert!(errors
            .iter()
            .any(|e| e.contains("code 7") && e.contains("not in the description")));
    }

    #[test]
    fn test_level_mismatch_reported() {
        let comp = composition(&[("1", "2"), ("2", "3")]);
        // Code 3 claims level 2 but sits at depth 3
        let desc = description(&[("1", "1"), ("2", "2"), ("3", "2")]);
        let (errors, _) = check_hierarchy(&comp, &desc);
        assert!(errors
            .iter()
            .any(|e| e.contains("code 3") && e.contains("depth 3")));
    }

    #[test]
    fn test_empty_graph_is_explicit_error() {
        let comp = composition(&[]);
        let desc = description(&[("1", "1")]);
        let (errors, _) = check_hierarchy(&comp, &desc);
        assert_eq!(errors, vec!["the composition sheet defines no edges"]);
    }
}
