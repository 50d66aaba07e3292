use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::{errors::LedgerError, ledger::Payer, utils::ensure_dir};

const APP_DIR: &str = "duo_split";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_PROJECTION_MONTHS: usize = 6;

/// Display names for the two participants. The engine itself only knows
/// [`Payer::First`] and [`Payer::Second`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "StoredNames")]
pub struct ParticipantNames {
    #[serde(rename = "user1Name")]
    pub first: String,
    #[serde(rename = "user2Name")]
    pub second: String,
}

/// Every key a settings file has ever used for the names.
///
/// Current keys win; `userName`/`partnerName` only fill what they leave empty.
#[derive(Debug, Deserialize)]
struct StoredNames {
    #[serde(rename = "user1Name")]
    user1_name: Option<String>,
    #[serde(rename = "user2Name")]
    user2_name: Option<String>,
    #[serde(rename = "userName")]
    user_name: Option<String>,
    #[serde(rename = "partnerName")]
    partner_name: Option<String>,
}

impl From<StoredNames> for ParticipantNames {
    fn from(stored: StoredNames) -> Self {
        let defaults = ParticipantNames::default();
        Self {
            first: stored
                .user1_name
                .or(stored.user_name)
                .unwrap_or(defaults.first),
            second: stored
                .user2_name
                .or(stored.partner_name)
                .unwrap_or(defaults.second),
        }
    }
}

impl ParticipantNames {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn name_for(&self, participant: Payer) -> &str {
        match participant {
            Payer::First => &self.first,
            Payer::Second => &self.second,
        }
    }
}

impl Default for ParticipantNames {
    fn default() -> Self {
        Self::new("Participant 1", "Participant 2")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", from = "StoredConfig")]
pub struct Config {
    pub participants: ParticipantNames,
    pub projection_months: usize,
}

/// Settings as found on disk. Files written before the `participants` object
/// existed keep the names at the root.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredConfig {
    #[serde(default)]
    participants: Option<ParticipantNames>,
    #[serde(default = "default_projection_months")]
    projection_months: usize,
    #[serde(flatten)]
    root_names: StoredNames,
}

impl From<StoredConfig> for Config {
    fn from(stored: StoredConfig) -> Self {
        Self {
            participants: stored
                .participants
                .unwrap_or_else(|| stored.root_names.into()),
            projection_months: stored.projection_months,
        }
    }
}

fn default_projection_months() -> usize {
    DEFAULT_PROJECTION_MONTHS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            participants: ParticipantNames::default(),
            projection_months: DEFAULT_PROJECTION_MONTHS,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Targets `<platform config dir>/duo_split/config.json`.
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the stored config, or the defaults when nothing was saved yet.
    pub fn load(&self) -> Result<Config, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            debug!(path = %self.path.display(), "config loaded");
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        info!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_legacy_name_keys() {
        let names: ParticipantNames =
            serde_json::from_str(r#"{"userName":"Ana","partnerName":"Bruno"}"#).unwrap();
        assert_eq!(names, ParticipantNames::new("Ana", "Bruno"));
    }

    #[test]
    fn current_keys_win_over_legacy_keys() {
        let names: ParticipantNames = serde_json::from_str(
            r#"{"user1Name":"Ana","user2Name":"Bruno","userName":"Old","partnerName":"Older"}"#,
        )
        .unwrap();
        assert_eq!(names, ParticipantNames::new("Ana", "Bruno"));
    }

    #[test]
    fn partial_names_fill_from_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"participants":{"user1Name":"Ana"}}"#).unwrap();
        assert_eq!(config.participants, ParticipantNames::new("Ana", "Participant 2"));
    }

    #[test]
    fn flat_settings_read_names_from_root() {
        let config: Config =
            serde_json::from_str(r#"{"user1Name":"Ana","user2Name":"Bruno"}"#).unwrap();
        assert_eq!(config.participants, ParticipantNames::new("Ana", "Bruno"));
        assert_eq!(config.projection_months, 6);

        let legacy: Config =
            serde_json::from_str(r#"{"userName":"Ana","partnerName":"Bruno"}"#).unwrap();
        assert_eq!(legacy.participants, ParticipantNames::new("Ana", "Bruno"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn writes_current_name_keys() {
        let value = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(value["participants"]["user1Name"], "Participant 1");
        assert_eq!(value["participants"]["user2Name"], "Participant 2");
        assert_eq!(value["projectionMonths"], 6);
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let tmp = tmp_path(Path::new("/x/config.json"));
        assert_eq!(tmp, PathBuf::from("/x/config.json.tmp"));
    }

    #[test]
    fn name_for_maps_roles() {
        let names = ParticipantNames::new("Ana", "Bruno");
        assert_eq!(names.name_for(Payer::First), "Ana");
        assert_eq!(names.name_for(Payer::Second), "Bruno");
    }
}
