use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use hudpanel_bridge::config::{Config, PersistentData};
use serde::{Serialize, de::DeserializeOwned};

const CONFIG_FILE: &str = "config.toml";
const DATA_FILE: &str = "data.toml";

/// Errors that can occur while loading or saving the persisted documents.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to determine the user's configuration or data directories. This
    /// usually occurs when required environment variables are missing (e.g.,
    /// `$HOME` on Unix or `%APPDATA%` on Windows).
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    /// An I/O error occurred while reading or writing a document.
    #[error("failed to access document: {0}")]
    IoError(#[from] std::io::Error),
    /// The document contains invalid TOML or does not match the expected structure.
    #[error("failed to deserialize document: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize a document to TOML.
    #[error("failed to serialize document: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Storage for the configuration and transient-data documents.
///
/// `load_*` returns `Ok(None)` when the document does not exist yet.
/// Writes are synchronous and complete before the call returns.
pub trait Persistence {
    fn load_config(&self) -> Result<Option<Config>, ConfigError>;
    fn save_config(&mut self, config: &Config) -> Result<(), ConfigError>;
    fn load_data(&self) -> Result<Option<PersistentData>, ConfigError>;
    fn save_data(&mut self, data: &PersistentData) -> Result<(), ConfigError>;
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn load_config(&self) -> Result<Option<Config>, ConfigError> {
        (**self).load_config()
    }

    fn save_config(&mut self, config: &Config) -> Result<(), ConfigError> {
        (**self).save_config(config)
    }

    fn load_data(&self) -> Result<Option<PersistentData>, ConfigError> {
        (**self).load_data()
    }

    fn save_data(&mut self, data: &PersistentData) -> Result<(), ConfigError> {
        (**self).save_data(data)
    }
}

/// Loads a document, recovering from a missing or malformed one with
/// defaults. The returned flag tells whether the defaults should be written
/// back.
pub fn load_or_default<T: Default>(result: Result<Option<T>, ConfigError>, name: &str) -> (T, bool) {
    match result {
        Ok(Some(document)) => (document, false),
        Ok(None) => {
            log::info!("No {name} found, creating defaults");
            (T::default(), true)
        }
        Err(error) => {
            log::warn!("The {name} is corrupt ({error}), creating new");
            (T::default(), true)
        }
    }
}

/// Documents stored as pretty TOML files in one directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// A store in the user's configuration directory for this application.
    pub fn from_project_dirs() -> Result<Self, ConfigError> {
        match ProjectDirs::from("dev", "hudpanel", "hudpanel") {
            Some(path) => Ok(Self::new(path.config_dir())),
            None => Err(ConfigError::DirectoriesNotFound),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn read<T: DeserializeOwned>(&self, file_name: &str) -> Result<Option<T>, ConfigError> {
        let path = self.directory.join(file_name);
        if !path.exists() {
            return Ok(None);
        }

        log::debug!("Loading document from {path:?}");
        let contents = fs::read_to_string(path)?;
        Ok(Some(toml::from_str(&contents)?))
    }

    fn write<T: Serialize>(&self, file_name: &str, document: &T) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.directory)?;

        let contents = toml::to_string_pretty(document)?;
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.directory.join(file_name))?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;

        Ok(())
    }
}

impl Persistence for FileStore {
    fn load_config(&self) -> Result<Option<Config>, ConfigError> {
        self.read(CONFIG_FILE)
    }

    fn save_config(&mut self, config: &Config) -> Result<(), ConfigError> {
        self.write(CONFIG_FILE, config)
    }

    fn load_data(&self) -> Result<Option<PersistentData>, ConfigError> {
        self.read(DATA_FILE)
    }

    fn save_data(&mut self, data: &PersistentData) -> Result<(), ConfigError> {
        self.write(DATA_FILE, data)
    }
}

/// Documents kept in memory as serialized TOML text, so they go through the
/// same encoding as on disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub config_text: Option<String>,
    pub data_text: Option<String>,
    /// Number of successful `save_*` calls.
    pub writes: usize,
}

impl MemoryStore {
    pub fn with_config_text(text: impl Into<String>) -> Self {
        Self {
            config_text: Some(text.into()),
            ..Self::default()
        }
    }
}

fn parse<T: DeserializeOwned>(text: &Option<String>) -> Result<Option<T>, ConfigError> {
    text.as_deref()
        .map(toml::from_str)
        .transpose()
        .map_err(ConfigError::from)
}

impl Persistence for MemoryStore {
    fn load_config(&self) -> Result<Option<Config>, ConfigError> {
        parse(&self.config_text)
    }

    fn save_config(&mut self, config: &Config) -> Result<(), ConfigError> {
        self.config_text = Some(toml::to_string_pretty(config)?);
        self.writes += 1;
        Ok(())
    }

    fn load_data(&self) -> Result<Option<PersistentData>, ConfigError> {
        parse(&self.data_text)
    }

    fn save_data(&mut self, data: &PersistentData) -> Result<(), ConfigError> {
        self.data_text = Some(toml::to_string_pretty(data)?);
        self.writes += 1;
        Ok(())
    }
}
