// src/components/game_state.rs

// serde を使う宣言！このスナップショットがそのままセーブデータになるよ。
use serde::{Serialize, Deserialize};
use itertools::Itertools;
use thiserror::Error;

use crate::components::position::{Position, CELL_COUNT};
use crate::components::tile::{Tile, MAX_TILE_VALUE};

/// スコアの上限。JS の number でぴったり表せる 2^53 まで。
pub const MAX_SCORE: u64 = 1 << 53;

/// セッションが今どういう状況なのかを表す列挙型だよ！🏁
///
/// フラグ (over / won) から毎回計算するだけで、どこにも保存しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// まだ initialize されてない
    Idle,
    /// プレイ中
    Playing,
    /// 2048 を作った！🏆 (そのまま続けて遊べる)
    Won,
    /// もう動かせない…
    GameOver,
}

/// ゲームのスナップショット。保存にも、Undo の履歴にもこれを使う。
///
/// JSON にすると `{"tiles": [...], "score": 0, "bestScore": 0, "over": false, "won": false}` になる。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub tiles: Vec<Tile>,
    pub score: u64,
    pub best_score: u64,
    pub over: bool,
    pub won: bool,
}

/// 読み込んだスナップショットが壊れてたときのエラー。
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("snapshot has {0} tiles but the board only has 16 cells")]
    TooManyTiles(usize),
    #[error("tile at {0:?} is outside the board")]
    OffBoard(Position),
    #[error("two tiles share the cell {0:?}")]
    DuplicatePosition(Position),
    #[error("tile id {0} appears more than once")]
    DuplicateId(u64),
    #[error("tile value {0} is not a power of two between 2 and {max}", max = MAX_TILE_VALUE)]
    InvalidValue(u32),
    #[error("snapshot has no tiles")]
    NoTiles,
    #[error("score {0} is larger than any reachable score")]
    ImplausibleScore(u64),
}

impl GameState {
    /// JSON 文字列からスナップショットを復元して、中身が盤面として成立してるか確認まで済ませる。
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let state: GameState = serde_json::from_str(json)?;
        state.validate()?;
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// 構造チェック！ 同じマスに2枚乗ってたりしたらダメ。
    pub fn validate(&self) -> Result<(), SnapshotError> {
        // タイル0枚の盤面はどの方向にも動かせず、over にもならない
        if self.tiles.is_empty() {
            return Err(SnapshotError::NoTiles);
        }
        if self.tiles.len() > CELL_COUNT {
            return Err(SnapshotError::TooManyTiles(self.tiles.len()));
        }
        if let Some(tile) = self.tiles.iter().find(|t| !t.position.is_on_board()) {
            return Err(SnapshotError::OffBoard(tile.position));
        }
        if let Some(tile) = self.tiles.iter().find(|t| !t.has_valid_value()) {
            return Err(SnapshotError::InvalidValue(tile.value));
        }
        if let Some(pos) = self.tiles.iter().map(|t| t.position).duplicates().next() {
            return Err(SnapshotError::DuplicatePosition(pos));
        }
        if let Some(id) = self.tiles.iter().map(|t| t.id).duplicates().next() {
            return Err(SnapshotError::DuplicateId(id.0));
        }
        if let Some(score) = [self.score, self.best_score].into_iter().find(|&s| s > MAX_SCORE) {
            return Err(SnapshotError::ImplausibleScore(score));
        }
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        if self.over {
            GameStatus::GameOver
        } else if self.won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tile::TileId;

    fn tile(id: u64, value: u32, x: u8, y: u8) -> Tile {
        Tile::new(TileId(id), value, Position::new(x, y))
    }

    #[test]
    fn status_prefers_game_over() {
        let mut state = GameState::default();
        assert_eq!(state.status(), GameStatus::Playing);
        state.won = true;
        assert_eq!(state.status(), GameStatus::Won);
        state.over = true;
        assert_eq!(state.status(), GameStatus::GameOver, "over が立ってたら GameOver が優先");
    }

    #[test]
    fn json_round_trip_keeps_everything() {
        let state = GameState {
            tiles: vec![tile(0, 2, 0, 0), tile(1, 4, 3, 2)],
            score: 12,
            best_score: 100,
            over: false,
            won: true,
        };
        let json = state.to_json().unwrap();
        assert!(json.contains("\"bestScore\":100"), "camelCase で保存されるはず: {}", json);
        let restored = GameState::from_json(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn rejects_garbage_json() {
        assert!(matches!(GameState::from_json("{not json"), Err(SnapshotError::Malformed(_))));
        assert!(matches!(GameState::from_json("{\"tiles\": 3}"), Err(SnapshotError::Malformed(_))));
    }

    #[test]
    fn rejects_structurally_broken_boards() {
        let mut state = GameState {
            tiles: vec![tile(0, 2, 1, 1), tile(1, 2, 1, 1)],
            ..GameState::default()
        };
        assert!(matches!(state.validate(), Err(SnapshotError::DuplicatePosition(p)) if p == Position::new(1, 1)));

        state.tiles = vec![tile(0, 2, 4, 0)];
        assert!(matches!(state.validate(), Err(SnapshotError::OffBoard(_))));

        state.tiles = vec![tile(0, 3, 0, 0)];
        assert!(matches!(state.validate(), Err(SnapshotError::InvalidValue(3))));

        state.tiles = vec![tile(9, 2, 0, 0), tile(9, 4, 1, 0)];
        assert!(matches!(state.validate(), Err(SnapshotError::DuplicateId(9))));

        state.tiles = (0..17).map(|i| tile(i, 2, 0, 0)).collect();
        assert!(matches!(state.validate(), Err(SnapshotError::TooManyTiles(17))));

        state.tiles = Vec::new();
        assert!(matches!(state.validate(), Err(SnapshotError::NoTiles)));
    }

    #[test]
    fn rejects_values_a_real_game_cannot_reach() {
        let mut state = GameState {
            tiles: vec![tile(0, 1 << 31, 0, 0), tile(1, 1 << 31, 1, 0)],
            ..GameState::default()
        };
        assert!(matches!(state.validate(), Err(SnapshotError::InvalidValue(v)) if v == 1 << 31));

        state.tiles = vec![tile(0, MAX_TILE_VALUE, 0, 0), tile(1, 2, 1, 0)];
        assert!(state.validate().is_ok());

        state.score = u64::MAX;
        assert!(matches!(state.validate(), Err(SnapshotError::ImplausibleScore(u64::MAX))));
        state.score = MAX_SCORE;
        assert!(state.validate().is_ok());
        state.best_score = MAX_SCORE + 1;
        assert!(matches!(state.validate(), Err(SnapshotError::ImplausibleScore(_))));
    }

    #[test]
    fn missing_fields_are_malformed() {
        let json = r#"{"tiles": [], "score": 0}"#;
        assert!(GameState::from_json(json).is_err(), "bestScore / over / won が無いのはダメ");
    }
}
