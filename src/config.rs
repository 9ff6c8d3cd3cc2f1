use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

const URL_KEY: &str = "zammad.url";
const TOKEN_KEY: &str = "zammad.token";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Durable string-by-key persistence. Values survive process restarts;
/// callers are responsible for any validation.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Persists all entries as one durable operation: on failure, none of
    /// them may be observable afterwards.
    fn set_many(&mut self, entries: &[(&str, &str)]) -> AppResult<()>;
}

/// JSON-file backed store under the user configuration directory.
pub struct FileStore {
    file_path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open_default() -> AppResult<Self> {
        let dir = dirs::config_dir().ok_or_else(|| {
            AppError::Configuration("could not locate a user configuration directory".to_string())
        })?;
        Self::open(dir.join("zab").join(SETTINGS_FILE_NAME))
    }

    pub fn open(file_path: PathBuf) -> AppResult<Self> {
        let values = match fs::read_to_string(&file_path) {
            Ok(contents) => serde_json::from_str::<BTreeMap<String, String>>(&contents)
                .map_err(|err| AppError::Configuration(format!("invalid settings file: {err}")))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(AppError::Io(err)),
        };

        Ok(Self { file_path, values })
    }

    fn save(&self, values: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(values).map_err(|err| {
            AppError::Configuration(format!("failed to serialize settings: {err}"))
        })?;
        fs::write(&self.file_path, data)?;
        Ok(())
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.set_many(&[(key, value)])
    }

    fn set_many(&mut self, entries: &[(&str, &str)]) -> AppResult<()> {
        // Stage, write, and only then commit, so a failed write leaves both
        // the file and the in-memory view on the previous values.
        let mut staged = self.values.clone();
        for (key, value) in entries {
            staged.insert((*key).to_string(), (*value).to_string());
        }
        self.save(&staged)?;
        self.values = staged;
        Ok(())
    }
}

/// Read-only snapshot of the stored Zammad credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub base_url: String,
    pub api_token: String,
}

impl Credentials {
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.api_token.is_empty()
    }
}

/// Owns the two durable settings entries the Zammad integration needs.
pub struct ZammadSettings {
    store: Box<dyn SettingsStore>,
}

impl ZammadSettings {
    pub fn new(store: Box<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub fn base_url(&self) -> String {
        self.store.get(URL_KEY).unwrap_or_default()
    }

    pub fn api_token(&self) -> String {
        self.store.get(TOKEN_KEY).unwrap_or_default()
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_configured()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            base_url: self.base_url(),
            api_token: self.api_token(),
        }
    }

    /// Persists the base URL (normalized to end with `/`) and the token.
    ///
    /// Returns `false` without touching the store when either value is empty
    /// after trimming, so a cancelled or blank prompt never overwrites
    /// previously stored credentials.
    pub fn configure(&mut self, base_url: &str, api_token: &str) -> AppResult<bool> {
        let url = base_url.trim();
        let token = api_token.trim();
        if url.is_empty() || token.is_empty() {
            return Ok(false);
        }

        let normalized = if url.ends_with('/') {
            url.to_string()
        } else {
            format!("{url}/")
        };

        self.store.set_many(&[(URL_KEY, &normalized), (TOKEN_KEY, token)])?;
        Ok(true)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    use super::SettingsStore;
    use crate::error::AppResult;

    #[derive(Default)]
    pub(crate) struct MemoryStore {
        values: HashMap<String, String>,
    }

    impl SettingsStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
            self.values.insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn set_many(&mut self, entries: &[(&str, &str)]) -> AppResult<()> {
            for (key, value) in entries {
                self.values.insert((*key).to_string(), (*value).to_string());
            }
            Ok(())
        }
    }
}
