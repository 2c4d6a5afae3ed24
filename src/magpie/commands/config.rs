use crate::commands::{CmdMessage, CmdResult};
use crate::config::MagpieConfig;
use crate::error::{MagpieError, Result};
use std::path::{Path, PathBuf};

use super::save::sanitize_file_name;

pub const KEYS: &[&str] = &["default-file", "group-exports", "export-dir"];

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = MagpieConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = get_value(&config, &key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            set_value(&mut config, &key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                get_value(&config, &key)?
            )));
        }
    }

    Ok(result.with_config(config))
}

pub fn get_value(config: &MagpieConfig, key: &str) -> Result<String> {
    match key {
        "default-file" => Ok(config.default_file.clone()),
        "group-exports" => Ok(config.group_exports.to_string()),
        "export-dir" => Ok(config
            .export_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        other => Err(unknown_key(other)),
    }
}

fn set_value(config: &mut MagpieConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "default-file" => {
            let name = sanitize_file_name(value);
            if name.is_empty() {
                return Err(MagpieError::InvalidFileName(value.to_string()));
            }
            config.default_file = name;
        }
        "group-exports" => {
            config.group_exports = match value {
                "true" | "yes" | "on" | "1" => true,
                "false" | "no" | "off" | "0" => false,
                _ => {
                    return Err(MagpieError::Api(format!(
                        "group-exports expects true or false, got {}",
                        value
                    )))
                }
            };
        }
        "export-dir" => {
            config.export_dir = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        other => return Err(unknown_key(other)),
    }
    Ok(())
}

fn unknown_key(key: &str) -> MagpieError {
    MagpieError::Api(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}
