//! 設定ファイル
//!
//! JSON形式の設定を読み込む。未指定の項目は既定値で補う。
//!
//! ```json
//! {
//!   "extra_word_chars": "-",
//!   "key_binding": "Alt-T",
//!   "log_level": "debug",
//!   "log_file": "~/.transpose-words/debug.log"
//! }
//! ```

use crate::error::{ConfigError, Result};
use crate::input::keybinding::Key;
use crate::logging::LogLevel;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 既定のキーバインド
pub const DEFAULT_KEY_BINDING: &str = "Alt-T";

const CONFIG_DIR_NAME: &str = "transpose-words";
const CONFIG_FILE_NAME: &str = "config.json";

/// 設定
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 単語文字として追加で扱う文字
    pub extra_word_chars: String,
    /// 単語入れ替えコマンドのキー
    pub key_binding: String,
    /// ログレベル
    pub log_level: LogLevel,
    /// ログ出力先ファイル
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extra_word_chars: String::new(),
            key_binding: DEFAULT_KEY_BINDING.to_string(),
            log_level: LogLevel::default(),
            log_file: None,
        }
    }
}

impl Config {
    /// 設定を読み込む
    ///
    /// パス指定時はそのファイルが必須。未指定時は既定の場所を探し、
    /// ファイルがなければ既定値を返す。
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                let expanded = expand_path(path);
                if !expanded.exists() {
                    return Err(ConfigError::NotFound {
                        path: expanded.display().to_string(),
                    }
                    .into());
                }
                Self::from_file(&expanded)
            }
            None => match default_config_path() {
                Some(default_path) if default_path.exists() => Self::from_file(&default_path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// 指定ファイルから読み込む
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents).map_err(|error| match error {
            crate::error::TransposeError::Config(ConfigError::InvalidFile { message, .. }) => {
                ConfigError::InvalidFile {
                    path: path.display().to_string(),
                    message,
                }
                .into()
            }
            other => other,
        })?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// JSON文字列から読み込む
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self =
            serde_json::from_str(json).map_err(|error| ConfigError::InvalidFile {
                path: "<inline>".to_string(),
                message: error.to_string(),
            })?;
        if let Some(log_file) = config.log_file.take() {
            config.log_file = Some(expand_path(&log_file.to_string_lossy()));
        }
        config.validate()?;
        Ok(config)
    }

    /// 設定値の整合性を検証
    pub fn validate(&self) -> Result<()> {
        if let Some(ch) = self.extra_word_chars.chars().find(|ch| ch.is_whitespace()) {
            return Err(ConfigError::InvalidValue {
                key: "extra_word_chars".to_string(),
                value: format!("{:?}", ch),
            }
            .into());
        }

        Key::parse(&self.key_binding).map_err(|_| ConfigError::InvalidValue {
            key: "key_binding".to_string(),
            value: self.key_binding.clone(),
        })?;

        Ok(())
    }

    /// 設定されたキーバインド
    pub fn key(&self) -> Result<Key> {
        Key::parse(&self.key_binding)
    }
}

/// 既定の設定ファイルパス
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// `~` や環境変数を展開したパス
pub fn expand_path(path: &str) -> PathBuf {
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(path).as_ref()),
    }
}
