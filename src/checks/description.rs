//! Description sheet content checks: code sequence, level occupancy, and
//! text-style warnings.

use crate::checks::{validate_code_sequence, Findings};
use crate::model::DescriptionModel;

/// Longest `nome_simples` before the title-length warning fires.
pub const TITLE_LIMIT: usize = 40;

/// Codes must be unique and contiguous from 1.
pub fn check_codes(description: &DescriptionModel) -> Findings {
    (
        validate_code_sequence(&description.codes(), "code"),
        Vec::new(),
    )
}

/// Levels must start at 1 and leave no gaps, and exactly one indicator
/// sits at level 1.
pub fn check_levels(description: &DescriptionModel) -> Findings {
    let mut errors = Vec::new();

    let roots = description
        .records
        .iter()
        .filter(|r| r.level == 1)
        .count();
    if roots != 1 {
        errors.push(format!(
            "expected exactly one level-1 indicator, found {}",
            roots
        ));
    }

    if let Some(max) = description.records.iter().map(|r| r.level).max() {
        for level in 1..=max {
            if !description.records.iter().any(|r| r.level == level) {
                errors.push(format!(
                    "no indicator at level {} although level {} exists",
                    level, max
                ));
            }
        }
    }

    (errors, Vec::new())
}

/// Style warnings over the name and description texts. Never errors.
pub fn check_style(description: &DescriptionModel) -> Findings {
    let mut warnings = Vec::new();

    for record in &description.records {
        for (column, text) in [
            ("nome_simples", &record.simple_name),
            ("nome_completo", &record.complete_name),
        ] {
            if text.trim() != text {
                warnings.push(format!(
                    "row {}: '{}' has leading or trailing whitespace",
                    record.row, column
                ));
            }
            if text
                .trim()
                .chars()
                .next()
                .map(|c| c.is_lowercase())
                .unwrap_or(false)
            {
                warnings.push(format!(
                    "row {}: '{}' does not start with a capital letter",
                    record.row, column
                ));
            }
        }

        let desc = record.complete_desc.trim();
        if !desc.is_empty() && !desc.ends_with('.') {
            warnings.push(format!(
                "row {}: 'desc_completa' does not end with a period",
                record.row
            ));
        }
    }

    (Vec::new(), warnings)
}

/// Warn when a simple name is too long for report layouts.
pub fn check_title_length(description: &DescriptionModel) -> Findings {
    let warnings = description
        .records
        .iter()
        .filter(|r| r.simple_name.chars().count() > TITLE_LIMIT)
        .map(|r| {
            format!(
                "row {}: 'nome_simples' has {} characters (limit {})",
                r.row,
                r.simple_name.chars().count(),
                TITLE_LIMIT
            )
        })
        .collect();
    (Vec::new(), warnings)
}
