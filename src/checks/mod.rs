//! Content validators.
//!
//! Every check is a pure function over cleaned models returning
//! `(errors, warnings)`. Checks never mutate the models and never panic on
//! bad content; whatever they find becomes messages in the report.

pub mod description;
pub mod hierarchy;
pub mod legend;
pub mod references;
pub mod scenario;
pub mod temporal;
pub mod values;

/// `(errors, warnings)` of a single check run.
pub type Findings = (Vec<String>, Vec<String>);

/// Validate that `codes` form the contiguous sequence `1..=N`.
///
/// Duplicates are reported per duplicated value; a gap or offset start is
/// one error naming the full found sequence. Pure function of its input,
/// so repeated runs yield identical error lists.
pub fn validate_code_sequence(codes: &[u32], what: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if codes.is_empty() {
        return errors;
    }

    let mut sorted = codes.to_vec();
    sorted.sort_unstable();

    let mut duplicates: Vec<u32> = sorted
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[0])
        .collect();
    duplicates.dedup();
    for value in &duplicates {
        errors.push(format!("duplicate {} {}", what, value));
    }

    sorted.dedup();
    let expected: Vec<u32> = (1..=sorted.len() as u32).collect();
    if sorted != expected {
        errors.push(format!(
            "{}s are not sequential from 1: found [{}]",
            what,
            sorted
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    errors
}
