// src/app/persistence.rs
//! ベストスコア / テーマ / ゲーム状態の読み書き。
//!
//! 読み込みの失敗は「保存データなし」として扱い、書き込みの失敗はログに出して無視する。
//! 壊れたセーブデータでゲームが起動できなくなるのは最悪だからね！

use log::{debug, warn};

use crate::app::storage::GameStorage;
use crate::components::{GameState, Theme};

pub const KEY_BEST_SCORE: &str = "2048_best_score";
pub const KEY_THEME: &str = "2048_theme";
pub const KEY_GAME_STATE: &str = "2048_game_state";

// 読めなかったら None (エラーはログだけ)
fn read<S: GameStorage + ?Sized>(storage: &S, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Persistence: {}", e);
            None
        }
    }
}

fn write<S: GameStorage + ?Sized>(storage: &mut S, key: &str, value: &str) {
    if let Err(e) = storage.set_item(key, value) {
        warn!("Persistence: {}", e);
    }
}

/// ベストスコア。無い or 数字じゃなければ 0。
pub fn load_best_score<S: GameStorage + ?Sized>(storage: &S) -> u64 {
    read(storage, KEY_BEST_SCORE)
        .and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(score) => Some(score),
            Err(e) => {
                warn!("Persistence: ignoring unparsable best score {:?}: {}", raw, e);
                None
            }
        })
        .unwrap_or(0)
}

pub fn save_best_score<S: GameStorage + ?Sized>(storage: &mut S, score: u64) {
    write(storage, KEY_BEST_SCORE, &score.to_string());
}

/// テーマ。無い or 知らない ID ならデフォルト。
pub fn load_theme<S: GameStorage + ?Sized>(storage: &S) -> Theme {
    Theme::from_stored(read(storage, KEY_THEME).as_deref())
}

pub fn save_theme<S: GameStorage + ?Sized>(storage: &mut S, theme: Theme) {
    write(storage, KEY_THEME, theme.id());
}

/// 保存されたゲーム状態。無い / JSON が壊れてる / 盤面として不正 なら None。
///
/// 壊れていたデータはその場で消す。
pub fn load_game_state<S: GameStorage + ?Sized>(storage: &mut S) -> Option<GameState> {
    let raw = read(storage, KEY_GAME_STATE)?;
    match GameState::from_json(&raw) {
        Ok(state) => {
            debug!("Persistence: loaded saved game with {} tiles", state.tiles.len());
            Some(state)
        }
        Err(e) => {
            warn!("Persistence: discarding saved game: {}", e);
            clear_game_state(storage);
            None
        }
    }
}

pub fn clear_game_state<S: GameStorage + ?Sized>(storage: &mut S) {
    if let Err(e) = storage.remove_item(KEY_GAME_STATE) {
        warn!("Persistence: {}", e);
    }
}

pub fn save_game_state<S: GameStorage + ?Sized>(storage: &mut S, state: &GameState) {
    match state.to_json() {
        Ok(json) => write(storage, KEY_GAME_STATE, &json),
        Err(e) => warn!("Persistence: failed to serialize game state: {}", e),
    }
}
