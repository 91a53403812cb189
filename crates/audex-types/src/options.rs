use serde::{Deserialize, Serialize};

/// Startup configuration shared by reconstruction, transformation, and
/// progress reporting.
///
/// Built once at startup and passed by reference into each component; there
/// is deliberately no runtime flag surface for these (the CLI only accepts
/// the input and output paths).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Principal whose activity is excluded from reconstruction and output.
    /// `None` disables the filter.
    pub ignored_user: Option<String>,

    /// Emit a progress line after every this many processed records
    pub progress_interval: u64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            ignored_user: Some("rdsadmin".to_string()),
            progress_interval: 100_000,
        }
    }
}

impl ExportOptions {
    /// True when `user` is the configured ignore-principal
    pub fn skips_user(&self, user: &str) -> bool {
        self.ignored_user.as_deref() == Some(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_skips_rdsadmin() {
        let options = ExportOptions::default();
        assert!(options.skips_user("rdsadmin"));
        assert!(!options.skips_user("alice"));
    }

    #[test]
    fn test_disabled_filter_skips_nobody() {
        let options = ExportOptions {
            ignored_user: None,
            ..ExportOptions::default()
        };
        assert!(!options.skips_user("rdsadmin"));
    }
}
