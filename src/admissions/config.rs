//! Admissions desk configuration.

/// Configuration for an [`AdmissionsDesk`](super::AdmissionsDesk).
///
/// # Examples
///
/// ```
/// use triage_heap::admissions::AdmissionsConfig;
///
/// let config = AdmissionsConfig::default()
///     .with_capacity(50)
///     .with_show_menu(false);
/// assert_eq!(config.capacity, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdmissionsConfig {
    /// Maximum number of patients waiting at once.
    pub capacity: usize,

    /// Whether to print the menu and prompt before each command.
    ///
    /// Disable for scripted input so output holds only command results.
    pub show_menu: bool,
}

impl Default for AdmissionsConfig {
    fn default() -> Self {
        Self {
            capacity: 20,
            show_menu: true,
        }
    }
}

impl AdmissionsConfig {
    /// Preset for piped or scripted sessions: default capacity, no menu.
    pub fn scripted() -> Self {
        Self::default().with_show_menu(false)
    }

    /// Sets the waiting queue capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Enables or disables the menu and prompt.
    pub fn with_show_menu(mut self, show: bool) -> Self {
        self.show_menu = show;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("capacity must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdmissionsConfig::default();
        assert_eq!(config.capacity, 20);
        assert!(config.show_menu);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_scripted_preset() {
        let config = AdmissionsConfig::scripted();
        assert_eq!(config.capacity, 20);
        assert!(!config.show_menu);
    }

    #[test]
    fn test_builder_chainable() {
        let config = AdmissionsConfig::scripted().with_capacity(3);
        assert_eq!(config.capacity, 3);
        assert!(!config.show_menu);
    }

    #[test]
    fn test_validate_zero_capacity() {
        let config = AdmissionsConfig::default().with_capacity(0);
        assert!(config.validate().is_err());
    }
}
