//! End-to-end pipeline tests: real files on disk, full report out.

mod common;

use common::{write_sheet, write_valid_dataset};
use tempfile::TempDir;

use indicheck::config::CheckConfig;
use indicheck::report::check;
use indicheck::runner;

#[test]
fn test_valid_dataset_is_clean() {
    let tmp = TempDir::new().unwrap();
    write_valid_dataset(tmp.path());

    let report = runner::run(tmp.path(), &CheckConfig::default()).unwrap();

    assert_eq!(report.total_errors(), 0, "{:#?}", report);
    assert_eq!(report.total_warnings(), 0, "{:#?}", report);
    // Spellcheck is external and stays unexecuted
    assert_eq!(report.not_executed(), vec![check::SPELLCHECK]);
}

#[test]
fn test_cycle_is_reported_through_the_pipeline() {
    let tmp = TempDir::new().unwrap();
    write_valid_dataset(tmp.path());
    write_sheet(
        tmp.path(),
        "composicao",
        "codigo_pai,codigo_filho\n1,2\n1,3\n2,4\n4,2\n",
    );

    let report = runner::run(tmp.path(), &CheckConfig::default()).unwrap();

    let hierarchy = report.entry(check::HIERARCHY).unwrap();
    assert!(hierarchy.errors.iter().any(|e| e.contains("cycle")));
}

#[test]
fn test_legend_discontinuity_is_reported() {
    let tmp = TempDir::new().unwrap();
    write_valid_dataset(tmp.path());
    write_sheet(
        tmp.path(),
        "legenda",
        "codigo,etiqueta,cor,minimo,maximo,ordem\n\
         1,Low,#00FF00,0,9.99,1\n\
         1,High,#FF0000,10.02,20.0,2\n\
         1,DI,#CCCCCC,,,3\n",
    );

    let report = runner::run(tmp.path(), &CheckConfig::default()).unwrap();

    let intervals = report.entry(check::LEGEND_INTERVALS).unwrap();
    assert_eq!(intervals.errors.len(), 1);
    assert!(intervals.errors[0].contains("expected min 10.00"));
}

#[test]
fn test_duplicate_scenario_symbols_reported() {
    let tmp = TempDir::new().unwrap();
    write_valid_dataset(tmp.path());
    write_sheet(
        tmp.path(),
        "cenarios",
        "nome,descricao,simbolo\nA,d,1\nB,d,2\nC,d,2\nD,d,3\n",
    );

    let report = runner::run(tmp.path(), &CheckConfig::default()).unwrap();

    let symbols = report.entry(check::SCENARIO_SYMBOLS).unwrap();
    assert_eq!(symbols.errors.len(), 1);
    assert!(symbols.errors[0].contains("symbol 2"));
}

#[test]
fn test_code_gap_reported() {
    let tmp = TempDir::new().unwrap();
    write_valid_dataset(tmp.path());
    write_sheet(
        tmp.path(),
        "descricao",
        "codigo,nivel,nome_simples,nome_completo,desc_simples,desc_completa\n\
         1,1,A,A,S.,D.\n\
         2,2,B,B,S.,D.\n\
         4,2,C,C,S.,D.\n",
    );

    let report = runner::run(tmp.path(), &CheckConfig::default()).unwrap();

    let codes = report.entry(check::DESCRIPTION_CODES).unwrap();
    assert_eq!(codes.errors.len(), 1);
    assert!(codes.errors[0].contains("[1, 2, 4]"));
}

#[test]
fn test_missing_required_sheet_does_not_stop_the_run() {
    let tmp = TempDir::new().unwrap();
    write_valid_dataset(tmp.path());
    std::fs::remove_file(tmp.path().join("composicao.csv")).unwrap();

    let report = runner::run(tmp.path(), &CheckConfig::default()).unwrap();

    // The missing file is a load error and the dependent checks abort
    let loading = report.entry(check::LOADING).unwrap();
    assert!(loading.errors.iter().any(|e| e.contains("composicao")));
    let hierarchy = report.entry(check::HIERARCHY).unwrap();
    assert_eq!(hierarchy.errors.len(), 1);
    assert!(hierarchy.errors[0].contains("check aborted"));

    // Unrelated checks still ran
    let legend = report.entry(check::LEGEND_INTERVALS).unwrap();
    assert!(legend.executed);
    assert!(legend.errors.is_empty());
}

#[test]
fn test_broken_cells_drop_rows_but_not_the_run() {
    let tmp = TempDir::new().unwrap();
    write_valid_dataset(tmp.path());
    write_sheet(
        tmp.path(),
        "descricao",
        "codigo,nivel,nome_simples,nome_completo,desc_simples,desc_completa\n\
         1,1,A,A,S.,D.\n\
         oops,2,B,B,S.,D.\n\
         3,2,C,C,S.,D.\n",
    );

    let report = runner::run(tmp.path(), &CheckConfig::default()).unwrap();

    let structure = report.entry(check::STRUCTURE_DESCRIPTION).unwrap();
    assert!(structure.errors.iter().any(|e| e.contains("row 3")));

    // Dependent description checks abort instead of cascading
    let codes = report.entry(check::DESCRIPTION_CODES).unwrap();
    assert_eq!(codes.errors.len(), 1);
    assert!(codes.errors[0].contains("check aborted"));
}

#[test]
fn test_scenario_column_without_scenarios_sheet() {
    let tmp = TempDir::new().unwrap();
    write_valid_dataset(tmp.path());
    std::fs::remove_file(tmp.path().join("cenarios.csv")).unwrap();
    // Keep the scenario value column out as well; this test is about the
    // description sheet's dynamic column
    write_sheet(
        tmp.path(),
        "valores",
        "id,2-2015,3-2015,4-2015\n1,0.5,0.25,10.2\n",
    );

    let report = runner::run(tmp.path(), &CheckConfig::default()).unwrap();

    let structure = report.entry(check::STRUCTURE_DESCRIPTION).unwrap();
    assert!(structure
        .errors
        .iter()
        .any(|e| e.contains("cenario") && e.contains("no scenarios sheet")));
}
