// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod components; // 盤面のデータ型 (Tile, Position, GameState...)
pub mod config;
pub mod logic; // 寄せる・合体・詰み判定・タイル生成 (純粋関数)
pub mod app; // Session と GameApp
pub mod logger;

// よく使うものはクレート直下からも使えるようにしておく
pub use app::{GameApp, Session};
pub use components::{Direction, GameState, GameStatus, Position, Theme, Tile, TileId};
pub use config::GameConfig;
pub use logic::{compute_move, has_legal_moves, spawn_tile, MoveResult};

// Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init();
    log::info!("tile_merge_2048 loaded");
}
