//! 2048 のルール関連モジュールをまとめるよ！

pub mod slide;
pub mod legal_moves;
pub mod win_condition;


// 各モジュールから公開したい関数をここで再エクスポート！
pub use slide::{compute_move, MoveResult};
pub use legal_moves::has_legal_moves;
pub use win_condition::check_win_condition;
