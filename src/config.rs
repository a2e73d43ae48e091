//! Check configuration.
//!
//! Built once from CLI flags in `main` and passed by reference through the
//! pipeline. Configuration only decides which optional checks are skipped
//! (they stay `executed = false` in the report) and how much of each check's
//! findings the renderer prints; it never alters validation semantics.

/// Default number of rendered messages per check before truncation.
pub const DEFAULT_MESSAGE_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Skip the dictionary-backed spellcheck entirely.
    pub disable_spellcheck: bool,
    /// Skip the title-length warning check.
    pub disable_title_length: bool,
    /// Maximum messages the renderer prints per check; `0` disables
    /// truncation. The in-memory report always keeps the full lists.
    pub message_limit: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            disable_spellcheck: false,
            disable_title_length: false,
            message_limit: DEFAULT_MESSAGE_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CheckConfig::default();
        assert!(!config.disable_spellcheck);
        assert!(!config.disable_title_length);
        assert_eq!(config.message_limit, DEFAULT_MESSAGE_LIMIT);
    }
}
