//! Legend consistency checks.
//!
//! A legend group (all rows sharing one `codigo`) partitions a numeric
//! range into labeled intervals plus exactly one unavailable-data row.
//! Validation per group runs in stages: labels, cell types and shape,
//! colors, decimal precision, interval continuity, order permutation.
//! A precision failure suppresses the continuity stage for that group so a
//! sloppily-written bound does not also masquerade as a discontinuity.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::checks::{validate_code_sequence, Findings};
use crate::fixed::{Fixed2, ParseFixedError};
use crate::model::{join_numbers, LegendModel, LegendRow};
use crate::UNAVAILABLE;

fn color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").unwrap())
}

/// Validate every legend group's labels, types, colors, precision,
/// interval continuity and order permutation.
pub fn check_intervals(legend: &LegendModel) -> Findings {
    let mut errors = Vec::new();

    for (code, rows) in group_rows(legend) {
        validate_group(code, &rows, &mut errors);
    }

    (errors, Vec::new())
}

/// Validate that legend group codes are `1..=K` contiguous from 1.
///
/// A non-numeric code makes the sequence unverifiable; that is reported
/// explicitly instead of silently skipping the check.
pub fn check_codes(legend: &LegendModel) -> Findings {
    let mut non_numeric: Vec<usize> = Vec::new();
    let mut codes = Vec::new();

    for row in &legend.rows {
        match row.code.as_deref().map(parse_positive) {
            Some(Some(code)) => codes.push(code),
            _ => non_numeric.push(row.row),
        }
    }

    if !non_numeric.is_empty() {
        return (
            vec![format!(
                "cannot validate the legend code sequence: codes that are not positive integers in rows {}",
                join_numbers(&non_numeric)
            )],
            Vec::new(),
        );
    }

    codes.sort_unstable();
    codes.dedup();
    (validate_code_sequence(&codes, "legend code"), Vec::new())
}

/// Group rows by their (numeric) legend code. Rows with non-numeric codes
/// are left out here; `check_codes` reports them.
fn group_rows(legend: &LegendModel) -> BTreeMap<u32, Vec<&LegendRow>> {
    let mut groups: BTreeMap<u32, Vec<&LegendRow>> = BTreeMap::new();
    for row in &legend.rows {
        if let Some(code) = row.code.as_deref().and_then(parse_positive) {
            groups.entry(code).or_default().push(row);
        }
    }
    groups
}

fn parse_positive(text: &str) -> Option<u32> {
    let value: u32 = text.trim().parse().ok()?;
    if value >= 1 {
        Some(value)
    } else {
        None
    }
}

/// One interval row of a group after cell typing.
struct TypedRow {
    row: usize,
    min: Option<Fixed2>,
    max: Option<Fixed2>,
}

fn validate_group(code: u32, rows: &[&LegendRow], errors: &mut Vec<String>) {
    let tag = format!("legend {}", code);

    validate_labels(&tag, rows, errors);
    validate_colors(&tag, rows, errors);

    let (typed, precision_ok) = validate_shape(&tag, rows, errors);

    // Precision errors mask interval errors: a bound like 10.001 would
    // otherwise also surface as a bogus discontinuity.
    if precision_ok {
        validate_intervals(&tag, &typed, errors);
    }

    validate_order(&tag, rows, errors);
}

/// Stage 1: no duplicate labels within the group.
fn validate_labels(tag: &str, rows: &[&LegendRow], errors: &mut Vec<String>) {
    let mut by_label: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for row in rows {
        if let Some(label) = row.label.as_deref() {
            by_label.entry(label).or_default().push(row.row);
        }
    }
    for (label, occurrences) in by_label {
        if occurrences.len() > 1 {
            errors.push(format!(
                "{}: duplicate label '{}' in rows {}",
                tag,
                label,
                join_numbers(&occurrences)
            ));
        }
    }
}

/// Stage 3: colors are `#RGB` or `#RRGGBB`.
fn validate_colors(tag: &str, rows: &[&LegendRow], errors: &mut Vec<String>) {
    for row in rows {
        let color = row.color.as_deref().unwrap_or("");
        if !color_pattern().is_match(color) {
            errors.push(format!(
                "{} row {}: '{}' is not a hex RGB color",
                tag, row.row, color
            ));
        }
    }
}

/// Stages 2 and 4: cell types, the single sentinel row, and decimal
/// precision. Returns the typed interval rows and whether every bound
/// passed the two-decimal-places rule.
fn validate_shape(
    tag: &str,
    rows: &[&LegendRow],
    errors: &mut Vec<String>,
) -> (Vec<TypedRow>, bool) {
    let mut typed = Vec::new();
    let mut precision_ok = true;
    let mut sentinel_rows = Vec::new();

    for row in rows {
        match row.order.as_deref() {
            Some(order) if parse_positive(order).is_none() => {
                errors.push(format!(
                    "{} row {}: 'ordem' value '{}' is not a positive integer",
                    tag, row.row, order
                ));
            }
            None => {
                errors.push(format!("{} row {}: 'ordem' is empty", tag, row.row));
            }
            _ => {}
        }

        let is_sentinel = row.label.as_deref() == Some(UNAVAILABLE);
        if is_sentinel {
            sentinel_rows.push(row.row);
            if row.min.is_some() || row.max.is_some() {
                errors.push(format!(
                    "{} row {}: the '{}' row must leave min and max empty",
                    tag, row.row, UNAVAILABLE
                ));
            }
            continue;
        }

        let mut bound = |name: &str, cell: &Option<String>| -> Option<Fixed2> {
            let text = match cell {
                Some(text) => text,
                None => {
                    errors.push(format!("{} row {}: '{}' is empty", tag, row.row, name));
                    return None;
                }
            };
            match Fixed2::parse(text) {
                Ok(value) => Some(value),
                Err(ParseFixedError::NotNumeric) => {
                    errors.push(format!(
                        "{} row {}: '{}' value '{}' is not a number",
                        tag, row.row, name, text
                    ));
                    None
                }
                Err(err @ ParseFixedError::TooManyDecimals { .. }) => {
                    errors.push(format!(
                        "{} row {}: '{}' value '{}' has {}",
                        tag, row.row, name, text, err
                    ));
                    precision_ok = false;
                    None
                }
            }
        };

        let min = bound("minimo", &row.min);
        let max = bound("maximo", &row.max);
        typed.push(TypedRow {
            row: row.row,
            min,
            max,
        });
    }

    match sentinel_rows.len() {
        1 => {}
        0 => errors.push(format!("{}: no '{}' row", tag, UNAVAILABLE)),
        _ => errors.push(format!(
            "{}: more than one '{}' row (rows {})",
            tag,
            UNAVAILABLE,
            join_numbers(&sentinel_rows)
        )),
    }

    (typed, precision_ok)
}

/// Stage 5: `min < max` per row and exact `+0.01` continuity between
/// consecutive rows sorted by min.
fn validate_intervals(tag: &str, typed: &[TypedRow], errors: &mut Vec<String>) {
    let mut intervals: Vec<(&TypedRow, Fixed2, Fixed2)> = typed
        .iter()
        .filter_map(|r| Some((r, r.min?, r.max?)))
        .collect();
    intervals.sort_by_key(|(_, min, _)| *min);

    for (row, min, max) in &intervals {
        if min >= max {
            errors.push(format!(
                "{} row {}: min {} is not below max {}",
                tag, row.row, min, max
            ));
        }
    }

    for pair in intervals.windows(2) {
        let (_, _, prev_max) = pair[0];
        let (row, min, _) = pair[1];
        let expected = prev_max + Fixed2::STEP;
        if min != expected {
            errors.push(format!(
                "{} row {}: interval is not continuous, expected min {}, found {}",
                tag, row.row, expected, min
            ));
        }
    }
}

/// Stage 6: the group's `ordem` values are a permutation of `1..=N`.
fn validate_order(tag: &str, rows: &[&LegendRow], errors: &mut Vec<String>) {
    let orders: Vec<u32> = rows
        .iter()
        .filter_map(|row| row.order.as_deref().and_then(parse_positive))
        .collect();
    if orders.len() != rows.len() {
        // Unparseable order cells were already reported by the shape stage
        return;
    }

    let mut found = orders.clone();
    found.sort_unstable();
    let expected: Vec<u32> = (1..=rows.len() as u32).collect();
    if found != expected {
        errors.push(format!(
            "{}: 'ordem' must be a permutation of [{}], found [{}]",
            tag,
            expected
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            found
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
}
