// src/app/mod.rs
//! セッション管理と、それを JS に公開する GameApp まわりのモジュールだよ！

pub mod history;
pub mod storage;
pub mod persistence;
pub mod local_storage;
pub mod session;
pub mod state_getter;
pub mod game_app;

pub use game_app::GameApp;
pub use history::History;
pub use session::Session;
pub use storage::{GameStorage, MemoryStorage, StorageError};
