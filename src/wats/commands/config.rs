use crate::commands::{CmdMessage, CmdResult};
use crate::config::WatsConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = WatsConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = WatsConfig::load(config_dir)?;
            match config.get(&key) {
                Some(val) => {
                    let mut result = CmdResult::default();
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => Ok(CmdResult::failure(CmdMessage::error(format!(
                    "Unknown config key: {}",
                    key
                )))),
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = WatsConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::failure(CmdMessage::error(e)));
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
