//! The sequential validation pipeline.
//!
//! Loading, model construction, and every content check run in a fixed
//! order, each appending to the shared report. A sheet that fails its
//! sanity checks aborts only the checks that depend on it, with a single
//! scoped message instead of a cascade of per-row noise.

use anyhow::{ensure, Result};
use chrono::Datelike;
use std::path::Path;

use crate::checks;
use crate::config::CheckConfig;
use crate::context::ValidationContext;
use crate::loader;
use crate::model::{
    CompositionModel, DescriptionModel, DictionaryModel, LegendModel, ProportionalityModel,
    ScenarioModel, SheetBase, TemporalModel, ValueModel,
};
use crate::report::{check, ValidationReport};
use crate::sheets;
use crate::table::RawTable;

/// Whether a dependency sheet lets a check run, and how it fails if not.
enum Gate {
    Ready,
    /// Dependency is an absent optional sheet; the check stays unexecuted.
    Skip,
    /// Dependency is unusable; the check reports one aborted error.
    Abort(String),
}

fn gate(deps: &[(&str, &SheetBase)]) -> Gate {
    for (sheet, base) in deps {
        if !base.table.exists {
            if sheets::REQUIRED.contains(sheet) {
                return Gate::Abort(format!("check aborted: sheet '{}' is missing", sheet));
            }
            return Gate::Skip;
        }
        if !base.table.read_succeeded {
            return Gate::Abort(format!("check aborted: sheet '{}' could not be read", sheet));
        }
        if base.table.is_empty() {
            return Gate::Abort(format!("check aborted: sheet '{}' has no data rows", sheet));
        }
        if !base.sanity_check_passed() {
            return Gate::Abort(format!(
                "check aborted: sheet '{}' failed structural or cleaning validation",
                sheet
            ));
        }
    }
    Gate::Ready
}

fn run_gated(
    report: &mut ValidationReport,
    name: &str,
    deps: &[(&str, &SheetBase)],
    check: impl FnOnce() -> checks::Findings,
) {
    match gate(deps) {
        Gate::Ready => {
            let (errors, warnings) = check();
            report.extend(name, errors, warnings);
        }
        Gate::Abort(message) => report.extend(name, vec![message], Vec::new()),
        Gate::Skip => {}
    }
}

/// Record a sheet's structural and cleaning findings under its structure
/// check. Absent optional sheets leave the check unexecuted.
fn report_structure(report: &mut ValidationReport, name: &str, sheet: &str, base: &SheetBase) {
    if !base.table.exists {
        if sheets::REQUIRED.contains(&sheet) {
            report.extend(
                name,
                vec![format!("check aborted: sheet '{}' is missing", sheet)],
                Vec::new(),
            );
        }
        return;
    }
    if !base.table.read_succeeded {
        report.extend(
            name,
            vec![format!("check aborted: sheet '{}' could not be read", sheet)],
            Vec::new(),
        );
        return;
    }

    let mut errors = base.structural_errors.clone();
    errors.extend(base.cleaning_errors.iter().cloned());
    if base.table.is_empty() {
        errors.push("sheet has no data rows".to_string());
    }
    report.extend(name, errors, base.warnings.clone());
}

/// Run the whole validation pipeline over a dataset directory.
pub fn run(input_dir: &Path, config: &CheckConfig) -> Result<ValidationReport> {
    ensure!(
        input_dir.is_dir(),
        "input directory '{}' does not exist",
        input_dir.display()
    );

    let mut report = ValidationReport::new();

    let (mut tables, load_errors) = loader::load_all(input_dir);
    report.extend(check::LOADING, load_errors, Vec::new());

    let mut take = |name: &str| tables.remove(name).unwrap_or_else(RawTable::absent);

    // Scenarios come first: the description model and several checks need
    // to know whether scenarios exist at all.
    let scenarios = ScenarioModel::from_table(take(sheets::SCENARIOS));
    let ctx = ValidationContext {
        scenarios_present: scenarios.base.table.exists && !scenarios.base.table.is_empty(),
        legend_present: false, // filled in below
        scenario_symbols: scenarios.symbols(),
    };

    let description = DescriptionModel::from_table(take(sheets::DESCRIPTION), &ctx);
    let composition = CompositionModel::from_table(take(sheets::COMPOSITION));
    let values = ValueModel::from_table(take(sheets::VALUES));
    let temporal = TemporalModel::from_table(take(sheets::TEMPORAL));
    let legend = LegendModel::from_table(take(sheets::LEGEND));
    let proportionality = ProportionalityModel::from_table(take(sheets::PROPORTIONALITY));
    let dictionary = DictionaryModel::from_table(take(sheets::DICTIONARY));

    let ctx = ValidationContext {
        legend_present: legend.base.table.exists && !legend.base.table.is_empty(),
        ..ctx
    };

    report_structure(
        &mut report,
        check::STRUCTURE_DESCRIPTION,
        sheets::DESCRIPTION,
        &description.base,
    );
    report_structure(
        &mut report,
        check::STRUCTURE_COMPOSITION,
        sheets::COMPOSITION,
        &composition.base,
    );
    report_structure(&mut report, check::STRUCTURE_VALUES, sheets::VALUES, &values.base);
    report_structure(
        &mut report,
        check::STRUCTURE_TEMPORAL,
        sheets::TEMPORAL,
        &temporal.base,
    );
    report_structure(
        &mut report,
        check::STRUCTURE_SCENARIOS,
        sheets::SCENARIOS,
        &scenarios.base,
    );
    report_structure(&mut report, check::STRUCTURE_LEGEND, sheets::LEGEND, &legend.base);
    report_structure(
        &mut report,
        check::STRUCTURE_PROPORTIONALITY,
        sheets::PROPORTIONALITY,
        &proportionality.base,
    );
    report_structure(
        &mut report,
        check::STRUCTURE_DICTIONARY,
        sheets::DICTIONARY,
        &dictionary.base,
    );

    let desc_dep = (sheets::DESCRIPTION, &description.base);
    let comp_dep = (sheets::COMPOSITION, &composition.base);
    let values_dep = (sheets::VALUES, &values.base);
    let temporal_dep = (sheets::TEMPORAL, &temporal.base);
    let scenarios_dep = (sheets::SCENARIOS, &scenarios.base);
    let legend_dep = (sheets::LEGEND, &legend.base);
    let proportionality_dep = (sheets::PROPORTIONALITY, &proportionality.base);

    run_gated(&mut report, check::DESCRIPTION_CODES, &[desc_dep], || {
        checks::description::check_codes(&description)
    });
    run_gated(&mut report, check::DESCRIPTION_LEVELS, &[desc_dep], || {
        checks::description::check_levels(&description)
    });
    run_gated(&mut report, check::DESCRIPTION_STYLE, &[desc_dep], || {
        checks::description::check_style(&description)
    });
    if !config.disable_title_length {
        run_gated(&mut report, check::TITLE_LENGTH, &[desc_dep], || {
            checks::description::check_title_length(&description)
        });
    }

    run_gated(
        &mut report,
        check::HIERARCHY,
        &[comp_dep, desc_dep],
        || checks::hierarchy::check_hierarchy(&composition, &description),
    );
    run_gated(
        &mut report,
        check::LEAF_VALUES,
        &[comp_dep, values_dep],
        || checks::values::check_leaf_values(&composition, &values),
    );
    run_gated(
        &mut report,
        check::VALUE_COLUMNS,
        &[values_dep, desc_dep, temporal_dep],
        || checks::values::check_value_columns(&values, &description, &temporal, &ctx),
    );
    run_gated(
        &mut report,
        check::VALUE_COVERAGE,
        &[desc_dep, values_dep],
        || checks::values::check_description_coverage(&description, &values),
    );

    run_gated(&mut report, check::SCENARIO_SYMBOLS, &[scenarios_dep], || {
        checks::scenario::check_symbols_unique(&scenarios)
    });

    let current_year = chrono::Local::now().year() as i64;
    run_gated(
        &mut report,
        check::TEMPORAL_REFERENCES,
        &[temporal_dep, values_dep],
        || checks::temporal::check_future_years(&temporal, &values, current_year),
    );

    run_gated(&mut report, check::LEGEND_INTERVALS, &[legend_dep], || {
        checks::legend::check_intervals(&legend)
    });
    run_gated(&mut report, check::LEGEND_CODES, &[legend_dep], || {
        checks::legend::check_codes(&legend)
    });
    run_gated(
        &mut report,
        check::LEGEND_REFERENCES,
        &[desc_dep, legend_dep],
        || checks::references::check_legend_references(&description, &legend),
    );
    run_gated(
        &mut report,
        check::PROPORTIONALITY_REFERENCES,
        &[proportionality_dep, desc_dep],
        || checks::references::check_proportionality_references(&proportionality, &description),
    );

    // Spellchecking runs in an external tool; the catalog entry stays
    // unexecuted so its absence is visible in the summary, where the
    // renderer tells "disabled by configuration" apart from "not run".

    Ok(report)
}
