//! CLI entry point and command handlers for indicheck.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indicheck::cli::{Cli, Commands};
use indicheck::config::CheckConfig;
use indicheck::{model, render, runner};

fn main() {
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            std::process::exit(2);
        }
    }
}

fn dispatch(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Check {
            dir,
            json,
            limit,
            no_spellcheck,
            no_title_length,
        } => cmd_check(&dir, json, limit, no_spellcheck, no_title_length, cli.quiet),
        Commands::Schema { sheet } => cmd_schema(sheet.as_deref()),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "indicheck", &mut io::stdout());
            Ok(0)
        }
    }
}

fn cmd_check(
    dir: &Path,
    json: Option<PathBuf>,
    limit: Option<usize>,
    no_spellcheck: bool,
    no_title_length: bool,
    quiet: bool,
) -> Result<i32> {
    let mut config = CheckConfig {
        disable_spellcheck: no_spellcheck,
        disable_title_length: no_title_length,
        ..Default::default()
    };
    if let Some(limit) = limit {
        config.message_limit = limit;
    }

    let report = runner::run(dir, &config)?;

    if quiet {
        println!(
            "{} errors, {} warnings",
            report.total_errors(),
            report.total_warnings()
        );
    } else {
        println!("{}", render::format_report(&report, &config));
    }

    if let Some(path) = json {
        let summary = serde_json::to_string_pretty(&render::summary_json(&report))?;
        fs::write(&path, summary)
            .with_context(|| format!("Failed to write JSON summary to {}", path.display()))?;
        if !quiet {
            println!("\nJSON summary written to {}", path.display());
        }
    }

    Ok(if report.total_errors() > 0 { 1 } else { 0 })
}

fn cmd_schema(sheet: Option<&str>) -> Result<i32> {
    let schemas = model::all_schemas();

    if let Some(name) = sheet {
        let schema = schemas
            .iter()
            .find(|s| s.name == name)
            .with_context(|| format!("Unknown sheet '{}'", name))?;
        print_schema(schema);
    } else {
        for schema in schemas {
            print_schema(schema);
            println!();
        }
    }
    Ok(0)
}

fn print_schema(schema: &model::SheetSchema) {
    println!("{}", schema.name.bold());
    println!("  required: {}", schema.required.join(", "));
    if !schema.optional.is_empty() {
        println!("  optional: {}", schema.optional.join(", "));
    }
    if schema.allows_value_columns {
        println!("  dynamic:  CODE-YEAR and CODE-YEAR-SCENARIO columns");
    }
}
