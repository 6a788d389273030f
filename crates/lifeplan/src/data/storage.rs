//! Scenario file storage
//!
//! Directory structure:
//! ~/.lifeplan/
//!   config.yaml          # Default scenario and as-of date
//!   lifeplan.log
//!   scenarios/
//!     baseline.yaml
//!     sabbatical.yaml

use std::fs;
use std::path::{Path, PathBuf};

use super::scenario_data::ScenarioData;

/// Configuration stored in config.yaml
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default, PartialEq)]
pub struct DataConfig {
    /// Scenario used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_scenario: Option<String>,

    /// Fixed projection start (YYYY-MM-DD) used instead of today's date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_as_of: Option<String>,
}

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    NotFound(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::NotFound(name) => write!(f, "Scenario not found: {}", name),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory holding config and scenario files
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.lifeplan/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lifeplan")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    fn scenarios_dir(&self) -> PathBuf {
        self.root.join("scenarios")
    }

    fn scenario_path(&self, name: &str) -> PathBuf {
        self.scenarios_dir()
            .join(format!("{}.yaml", sanitize_filename(name)))
    }

    /// Check if the data directory exists and has been initialized
    pub fn exists(&self) -> bool {
        self.root.exists() && self.scenarios_dir().exists()
    }

    /// Initialize the data directory structure
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))?;
        fs::create_dir_all(self.scenarios_dir()).map_err(|e| {
            StorageError::Io(format!("Failed to create scenarios directory: {}", e))
        })?;
        Ok(())
    }

    /// Load config.yaml, or the default config if it does not exist
    pub fn load_config(&self) -> Result<DataConfig, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            return Ok(DataConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Names of all scenarios in the scenarios directory, sorted.
    ///
    /// Files that are not `.yaml`/`.yml` are ignored. A missing directory
    /// yields an empty list.
    pub fn list_scenarios(&self) -> Result<Vec<String>, StorageError> {
        let scenarios_dir = self.scenarios_dir();
        if !scenarios_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&scenarios_dir)
            .map_err(|e| StorageError::Io(format!("Failed to read scenarios directory: {}", e)))?;

        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
            })
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect();
        names.sort();
        Ok(names)
    }

    /// Load a scenario by name from the scenarios directory
    pub fn load_scenario(&self, name: &str) -> Result<ScenarioData, StorageError> {
        let path = self.scenario_path(name);
        if path.exists() {
            return load_scenario_file(&path);
        }

        // Fall back to the .yml spelling
        let alt = path.with_extension("yml");
        if alt.exists() {
            return load_scenario_file(&alt);
        }

        Err(StorageError::NotFound(name.to_string()))
    }
}

/// Load a scenario from an explicit file path
pub fn load_scenario_file(path: &Path) -> Result<ScenarioData, StorageError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let mut data = ScenarioData::from_yaml(&content)
        .map_err(|e| StorageError::Parse(format!("Failed to parse {}: {}", path.display(), e)))?;

    if data.name.is_none() {
        data.name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string);
    }

    tracing::debug!(path = %path.display(), "Loaded scenario");
    Ok(data)
}

/// Sanitize a scenario name for use as a filename
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
