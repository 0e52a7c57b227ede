//! Agent configuration loader.

use std::path::Path;

use agent_core::AgentConfig;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Loader for agent tuning from TOML files.
///
/// Missing keys fall back to the compiled-in defaults, so a file can
/// override a single threshold without restating the rest.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<AgentConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?;
        let config: AgentConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_health = 20.0").unwrap();
        writeln!(file, "health_urgency_threshold = 0.5").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.max_health, 20.0);
        assert_eq!(config.health_urgency_threshold, 0.5);
        // Unnamed keys keep their defaults.
        assert_eq!(config.max_energy, AgentConfig::DEFAULT_MAX_ENERGY);
    }

    #[test]
    fn vector_values_parse_from_tables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "wall_clearance = {{ x = 3.0, y = 3.0 }}").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.wall_clearance.x, 3.0);
        assert_eq!(config.wall_clearance.y, 3.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(ConfigLoader::load(Path::new("/nonexistent/agent.toml")).is_err());
    }
}
