use std::path::PathBuf;

use serde::Deserialize;

const FILE_NAME: &str = "qosgen.toml";

/// Optional per-install defaults, looked up next to the binary. CLI flags
/// take precedence. A missing or unreadable file just means defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    pub out_dir: Option<PathBuf>,
    pub prefix: Option<String>,
}

fn settings_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.join(FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(FILE_NAME))
}

impl FileSettings {
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}
