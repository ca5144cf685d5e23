// src/config/game_config.rs
//! ゲームの調整用パラメータ。盤面サイズは 4×4 固定なのでここには入れない！

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::logic::spawn::DEFAULT_FOUR_PROBABILITY;

/// 勝利とみなすタイルの値のデフォルト
pub const DEFAULT_WIN_VALUE: u32 = 2048;

/// セッションの設定。JS からは JSON で渡せるよ (足りない項目はデフォルト値)。
///
/// ```
/// use tile_merge_2048::config::GameConfig;
/// let config = GameConfig::from_json(r#"{"historyLimit": 20}"#).unwrap();
/// assert_eq!(config.history_limit, Some(20));
/// assert_eq!(config.win_value, 2048);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// この値以上のタイルができたら won
    pub win_value: u32,
    /// 新しいタイルが 4 になる確率
    pub four_probability: f64,
    /// Undo 履歴の最大数。None なら無制限 (ニューゲームでクリアされる)
    pub history_limit: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_value: DEFAULT_WIN_VALUE,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            history_limit: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("win value {0} must be a power of two >= 4")]
    InvalidWinValue(u32),
    #[error("four probability {0} must be within 0.0..=1.0")]
    InvalidProbability(f64),
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_value < 4 || !self.win_value.is_power_of_two() {
            return Err(ConfigError::InvalidWinValue(self.win_value));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::InvalidProbability(self.four_probability));
        }
        Ok(())
    }
}
