//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::Tile;

/// 目標の値 (ふつうは 2048) 以上のタイルが盤面にあればクリア！🏆
pub fn check_win_condition(tiles: &[Tile], win_value: u32) -> bool {
    tiles.iter().any(|tile| tile.value >= win_value)
}
