// src/components/position.rs

// serde を使う宣言！位置情報はセーブデータにそのまま入るよ。
use serde::{Serialize, Deserialize};

/// 盤面の一辺のマス数。4×4 固定だよ！
pub const GRID_SIZE: usize = 4;

/// 盤面のマス数 (= 置けるタイルの最大数)。
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// 盤面上のマスを表す座標だよ！📍 (x が列、y が行)
///
/// 0 <= x, y < GRID_SIZE が約束事。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// 盤面の中に収まってるかチェックする。
    pub fn is_on_board(&self) -> bool {
        (self.x as usize) < GRID_SIZE && (self.y as usize) < GRID_SIZE
    }

    /// 盤面を反時計回りに 90° × `quarter_turns` 回したときの、このマスの移動先。
    ///
    /// 1回転ぶんは (x, y) -> (y, 3 - x)。
    /// 4回で元に戻るので、逆変換は `(4 - n) % 4` 回まわせばOK！🔄
    pub fn rotated_ccw(self, quarter_turns: u8) -> Self {
        let max = (GRID_SIZE - 1) as u8;
        (0..quarter_turns % 4).fold(self, |p, _| Position { x: p.y, y: max - p.x })
    }

    /// 全マスを行優先 (y → x) で列挙するよ。
    pub fn all() -> impl Iterator<Item = Position> {
        itertools::iproduct!(0..GRID_SIZE as u8, 0..GRID_SIZE as u8).map(|(y, x)| Position { x, y })
    }
}
