//! Session の今の状態を、JS 側に渡しやすい JSON に変換する。

use rand::Rng;
use serde::Serialize;

use crate::app::session::Session;
use crate::app::storage::GameStorage;
use crate::components::{GameStatus, Theme, Tile};

/// フロントエンドが描画に使う読み取り専用ビュー。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView<'a> {
    pub tiles: &'a [Tile],
    pub score: u64,
    pub best_score: u64,
    pub over: bool,
    pub won: bool,
    pub can_undo: bool,
    pub status: GameStatus,
    pub theme: Theme,
}

pub fn game_view<S: GameStorage, R: Rng>(session: &Session<S, R>) -> GameView<'_> {
    GameView {
        tiles: session.tiles(),
        score: session.score(),
        best_score: session.best_score(),
        over: session.over(),
        won: session.won(),
        can_undo: session.can_undo(),
        status: session.status(),
        theme: session.theme(),
    }
}

/// ビュー全体を JSON 文字列に。
pub fn game_view_json<S: GameStorage, R: Rng>(session: &Session<S, R>) -> Result<String, serde_json::Error> {
    serde_json::to_string(&game_view(session))
}

/// タイルだけを JSON 文字列に。
pub fn tiles_json<S: GameStorage, R: Rng>(session: &Session<S, R>) -> Result<String, serde_json::Error> {
    serde_json::to_string(session.tiles())
}
