// src/logic/mod.rs
//! 盤面を変形させる純粋なロジックたち。状態は持たないよ！

pub mod grid;
pub mod rules;
pub mod spawn;

pub use grid::Grid;
pub use rules::{compute_move, has_legal_moves, check_win_condition, MoveResult};
pub use spawn::{spawn_tile, DEFAULT_FOUR_PROBABILITY};
