use crate::commands::{CardsPaths, CmdMessage, CmdResult};
use crate::config::CardsConfig;
use crate::error::{CardsError, Result};
use std::fs;

pub fn run(paths: &CardsPaths) -> Result<CmdResult> {
    let dir = &paths.deck_dir;
    fs::create_dir_all(dir).map_err(CardsError::Io)?;
    if !dir.join("config.json").exists() {
        CardsConfig::default().save(dir)?;
    }
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized card deck at {}",
        dir.display()
    )));
    Ok(result)
}
