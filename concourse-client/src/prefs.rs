//! Connection preferences file.
//!
//! A preferences file is TOML with a flat set of optional keys:
//!
//! ```toml
//! host = "db.example.com"
//! port = 1717
//! username = "admin"
//! password = "secret"
//! environment = "production"
//! ```
//!
//! Values found in the file win over anything supplied in code, so one
//! file can pin an entire deployment's connection settings. Unknown keys
//! are ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Preferences {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub environment: Option<String>,
}

impl Preferences {
    /// Load preferences from a TOML file. A leading `~` in the path is
    /// expanded to the home directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = expand_home(path.as_ref());
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            ClientError::Connect(format!(
                "cannot read preferences file {}: {}",
                path.display(),
                e
            ))
        })?;
        let prefs = toml::from_str(&contents).map_err(|e| {
            ClientError::Connect(format!(
                "cannot parse preferences file {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!("loaded preferences from {}", path.display());
        Ok(prefs)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_preferences() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "host = \"db.example.com\"\nport = 9010\nusername = \"jeff\""
        )
        .unwrap();

        let prefs = Preferences::load(file.path()).unwrap();
        assert_eq!(prefs.host.as_deref(), Some("db.example.com"));
        assert_eq!(prefs.port, Some(9010));
        assert_eq!(prefs.username.as_deref(), Some("jeff"));
        assert_eq!(prefs.password, None);
        assert_eq!(prefs.environment, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"h\"\nshard_count = 32").unwrap();

        let prefs = Preferences::load(file.path()).unwrap();
        assert_eq!(prefs.host.as_deref(), Some("h"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        let err = Preferences::load(file.path()).unwrap_err();
        assert!(matches!(err, ClientError::Connect(_)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Preferences::load("/no/such/prefs.toml").unwrap_err();
        assert!(matches!(err, ClientError::Connect(_)));
    }

    #[test]
    fn test_expand_home_passthrough() {
        // Absolute paths come back untouched
        assert_eq!(
            expand_home(Path::new("/etc/concourse.toml")),
            PathBuf::from("/etc/concourse.toml")
        );
    }
}
