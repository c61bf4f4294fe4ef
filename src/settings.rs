use serde::{Deserialize, Serialize};

/// Runtime settings, taken from the command line and optionally overridden by the `settings`
/// object of the challenge definition.
#[derive(Debug, Clone, Copy, Hash, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Print debug information to stderr
    #[serde(default)]
    pub verbose: bool,
    /// Amount of worker threads, [None] means one per cpu
    #[serde(default)]
    pub threads: Option<usize>,
}

pub const DEFAULT_SETTINGS: Settings = Settings {
    verbose: false,
    threads: None,
};

impl Settings {
    /// Amount of worker threads to actually use, never zero.
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }

    /// Apply the fields of `other` that are set on top of `self`.
    pub fn merge(self, other: SettingsOverride) -> Settings {
        Settings {
            verbose: other.verbose.unwrap_or(self.verbose),
            threads: other.threads.or(self.threads),
        }
    }
}

/// The `settings` object of a challenge definition. Fields that are left out keep the value
/// from the command line.
#[derive(Debug, Clone, Copy, Hash, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SettingsOverride {
    #[serde(default)]
    pub verbose: Option<bool>,
    #[serde(default)]
    pub threads: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_settings_merge() {
        let cli = Settings {
            verbose: false,
            threads: Some(2),
        };
        let doc: SettingsOverride =
            serde_json::from_str(r#"{"verbose": true}"#).expect("bad settings");
        let merged = cli.merge(doc);
        assert!(merged.verbose);
        assert_eq!(merged.threads, Some(2));
        assert_eq!(merged.worker_count(), 2);
    }

    #[test]
    fn test_settings_merge_can_turn_verbose_off() {
        let cli = Settings {
            verbose: true,
            threads: None,
        };
        let doc: SettingsOverride =
            serde_json::from_str(r#"{"verbose": false, "threads": 3}"#).expect("bad settings");
        let merged = cli.merge(doc);
        assert!(!merged.verbose);
        assert_eq!(merged.threads, Some(3));

        let kept = cli.merge(SettingsOverride::default());
        assert_eq!(kept, cli);
    }

    #[test]
    fn test_settings_worker_count_never_zero() {
        let s = Settings {
            verbose: false,
            threads: Some(0),
        };
        assert_eq!(s.worker_count(), 1);
        assert!(DEFAULT_SETTINGS.worker_count() >= 1);
    }
}
