// src/components/mod.rs

// 盤面まわりのデータ型はここにまとめるよ！
pub mod position;
pub mod tile;
pub mod direction;
pub mod game_state;
pub mod theme; // 🎨

// よく使う型はここから直接 use できるようにしておく
pub use position::{Position, GRID_SIZE, CELL_COUNT};
pub use tile::{Tile, TileId, TileIdGenerator, MAX_TILE_VALUE};
pub use direction::{Direction, ParseDirectionError, ALL_DIRECTIONS};
pub use game_state::{GameState, GameStatus, SnapshotError, MAX_SCORE};
pub use theme::Theme;
