//! Registry configuration.

/// Registry configuration.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Maximum length in bytes for short text fields (titles, names, relationship types)
    pub max_short_text_len: usize,
    /// Maximum length in characters for long text fields (descriptions)
    pub max_long_text_len: usize,
    /// Initial capacity of the project map in entries
    pub initial_project_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_short_text_len: 64,
            max_long_text_len: 500,
            initial_project_capacity: 256,
        }
    }
}
