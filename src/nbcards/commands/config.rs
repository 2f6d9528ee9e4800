use crate::commands::{CardsPaths, CmdMessage, CmdResult};
use crate::config::CardsConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &CardsPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.deck_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = CardsConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = CardsConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = CardsConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(temp: &TempDir) -> CardsPaths {
        CardsPaths {
            deck_dir: temp.path().join(".nbcards"),
            workspace: Some(temp.path().to_path_buf()),
        }
    }

    #[test]
    fn set_then_show_key() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);
        run(&paths, ConfigAction::Set("pretty".into(), "true".into())).unwrap();

        let shown = run(&paths, ConfigAction::ShowKey("pretty".into())).unwrap();
        assert_eq!(shown.messages[0].content, "true");

        let all = run(&paths, ConfigAction::ShowAll).unwrap();
        assert!(all.config.unwrap().pretty);
    }

    #[test]
    fn invalid_set_is_reported_and_not_saved() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);
        let result = run(&paths, ConfigAction::Set("pretty".into(), "sort of".into())).unwrap();
        assert!(result.has_errors());
        assert!(!paths.deck_dir.join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_reported() {
        let temp = TempDir::new().unwrap();
        let result = run(&paths(&temp), ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(result.has_errors());
    }
}
