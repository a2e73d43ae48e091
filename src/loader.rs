//! Directory scanning and CSV/XLSX reading.
//!
//! The loader turns a dataset directory into one [`RawTable`] per known
//! sheet. It is deliberately thin: no schema knowledge, no cell
//! interpretation beyond "empty or text". A file that fails to parse yields
//! a table with `read_succeeded = false` plus a load error, never a panic,
//! so the rest of the pipeline can keep going.

use calamine::{open_workbook_auto, Data, Reader};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::sheets;
use crate::table::{HeaderKind, RawTable};

/// File extensions the loader understands, in preference order.
const EXTENSIONS: &[&str] = &["csv", "xlsx"];

/// Load every known sheet from `input_dir`.
///
/// Returns one table per sheet name (required and optional alike) plus the
/// list of load errors: required sheets that are missing, and files that
/// could not be read. A missing optional sheet is not an error; its table
/// just reports `exists = false`.
pub fn load_all(input_dir: &Path) -> (BTreeMap<String, RawTable>, Vec<String>) {
    let mut tables = BTreeMap::new();
    let mut errors = Vec::new();

    for &name in sheets::REQUIRED.iter().chain(sheets::OPTIONAL.iter()) {
        let header_kind = header_kind_for(name);
        match find_sheet_file(input_dir, name) {
            Some(path) => {
                let table = match load_file(&path, header_kind) {
                    Ok(table) => table,
                    Err(e) => {
                        errors.push(format!(
                            "failed to read '{}': {}",
                            path.display(),
                            e
                        ));
                        RawTable::unreadable(header_kind)
                    }
                };
                tables.insert(name.to_string(), table);
            }
            None => {
                if sheets::REQUIRED.contains(&name) {
                    errors.push(format!(
                        "required sheet '{}' not found in {} (looked for .csv and .xlsx)",
                        name,
                        input_dir.display()
                    ));
                }
                tables.insert(name.to_string(), RawTable::absent());
            }
        }
    }

    (tables, errors)
}

/// Locate the file backing a sheet, preferring `.csv` over `.xlsx`.
fn find_sheet_file(input_dir: &Path, name: &str) -> Option<PathBuf> {
    for ext in EXTENSIONS {
        let candidate = input_dir.join(format!("{}.{}", name, ext));
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// The proportionality matrix is the only sheet with two header rows.
fn header_kind_for(name: &str) -> HeaderKind {
    if name == sheets::PROPORTIONALITY {
        HeaderKind::Double
    } else {
        HeaderKind::Single
    }
}

/// Read a single file into a raw table, dispatching on extension.
fn load_file(path: &Path, header_kind: HeaderKind) -> anyhow::Result<RawTable> {
    let is_xlsx = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false);

    let raw_rows = if is_xlsx {
        read_xlsx_rows(path)?
    } else {
        read_csv_rows(path)?
    };

    Ok(assemble(raw_rows, header_kind))
}

/// Split raw rows into header row(s) and data rows.
fn assemble(mut raw_rows: Vec<Vec<Option<String>>>, header_kind: HeaderKind) -> RawTable {
    let columns = if raw_rows.is_empty() {
        Vec::new()
    } else {
        header_cells(raw_rows.remove(0))
    };

    let sub_columns = match header_kind {
        HeaderKind::Double if !raw_rows.is_empty() => header_cells(raw_rows.remove(0)),
        _ => Vec::new(),
    };

    RawTable {
        exists: true,
        read_succeeded: true,
        header_kind,
        columns,
        sub_columns,
        rows: raw_rows,
    }
}

/// Header cells are trimmed; empty headers stay as empty strings so the
/// models can flag them as unnamed columns.
fn header_cells(row: Vec<Option<String>>) -> Vec<String> {
    row.into_iter()
        .map(|c| c.map(|s| s.trim().to_string()).unwrap_or_default())
        .collect()
}

fn read_csv_rows(path: &Path) -> anyhow::Result<Vec<Vec<Option<String>>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|cell| {
                    if cell.is_empty() {
                        None
                    } else {
                        Some(cell.to_string())
                    }
                })
                .collect(),
        );
    }
    Ok(rows)
}

fn read_xlsx_rows(path: &Path) -> anyhow::Result<Vec<Vec<Option<String>>>> {
    let mut workbook = open_workbook_auto(path)?;
    // Only the first worksheet is meaningful; anything else is ignored.
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow::anyhow!("workbook has no sheets"))??;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Ok(rows)
}

/// Map a spreadsheet cell to its textual form.
///
/// Whole floats print without the trailing `.0` so that integer columns
/// survive the round-trip through spreadsheet editors.
fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => {
            if s.is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Data::Float(f) => {
            if f.fract() == 0.0 {
                Some(format!("{}", *f as i64))
            } else {
                Some(f.to_string())
            }
        }
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::Error(e) => Some(format!("{:?}", e)),
        other => Some(other.to_string()),
    }
}
