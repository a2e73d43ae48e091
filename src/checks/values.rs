//! Value sheet content checks: column well-formedness against the other
//! sheets, and coverage of descriptions and hierarchy leaves.

use std::collections::BTreeSet;

use crate::checks::Findings;
use crate::context::ValidationContext;
use crate::graph::DiGraph;
use crate::model::{CompositionModel, DescriptionModel, TemporalModel, ValueModel};

/// Every value column must reference a described indicator code, a
/// declared temporal symbol as its year, and (when suffixed) a declared
/// scenario symbol.
pub fn check_value_columns(
    values: &ValueModel,
    description: &DescriptionModel,
    temporal: &TemporalModel,
    ctx: &ValidationContext,
) -> Findings {
    let mut errors = Vec::new();

    let codes: BTreeSet<u32> = description.codes().into_iter().collect();
    let years: BTreeSet<i64> = temporal.symbols().into_iter().collect();

    for column in &values.columns {
        if !codes.contains(&column.code) {
            errors.push(format!(
                "column '{}': code {} is not in the description sheet",
                column.name, column.code
            ));
        }
        if !years.contains(&(column.year as i64)) {
            errors.push(format!(
                "column '{}': year {} is not a declared temporal reference",
                column.name, column.year
            ));
        }
        if let Some(scenario) = column.scenario {
            if !ctx.is_scenario_symbol(scenario as i64) {
                errors.push(format!(
                    "column '{}': scenario {} is not declared in the scenarios sheet",
                    column.name, scenario
                ));
            }
        }
    }

    (errors, Vec::new())
}

/// Every indicator below level 1 must have at least one value column.
/// Level-2 indicators tied to scenario symbol 0 are exempt; they only
/// aggregate scenario projections.
pub fn check_description_coverage(
    description: &DescriptionModel,
    values: &ValueModel,
) -> Findings {
    let covered: BTreeSet<u32> = values.codes_with_values().into_iter().collect();

    let missing: Vec<String> = description
        .records
        .iter()
        .filter(|r| r.level > 1)
        .filter(|r| !(r.level == 2 && r.scenario == Some(0)))
        .filter(|r| !covered.contains(&r.code))
        .map(|r| r.code.to_string())
        .collect();

    let errors = if missing.is_empty() {
        Vec::new()
    } else {
        vec![format!(
            "indicators [{}] have no value column",
            missing.join(", ")
        )]
    };

    (errors, Vec::new())
}

/// Every leaf of the composition graph must have at least one value
/// column; a leaf without data cannot feed the indicators above it.
pub fn check_leaf_values(composition: &CompositionModel, values: &ValueModel) -> Findings {
    let graph = DiGraph::from_edges(composition.edge_ids());
    if graph.is_empty() {
        return (
            vec!["cannot check leaf coverage: the composition sheet defines no edges".to_string()],
            Vec::new(),
        );
    }

    let covered: BTreeSet<String> = values
        .codes_with_values()
        .into_iter()
        .map(|c| c.to_string())
        .collect();

    let missing: Vec<String> = graph
        .leaf_nodes()
        .into_iter()
        .filter(|leaf| !covered.contains(leaf))
        .collect();

    let errors = if missing.is_empty() {
        Vec::new()
    } else {
        vec![format!(
            "leaf indicators [{}] have no value column",
            missing.join(", ")
        )]
    };

    (errors, Vec::new())
}
