//! 「まだ動かせる手があるか？」の判定だよ。

use crate::components::{Position, Tile, CELL_COUNT, GRID_SIZE};
use crate::logic::grid::Grid;

/// まだ合法手が残っているか判定する。
///
/// 空きマスが1つでもあれば true。満杯なら、上下左右で隣り合う同じ値のペアがあるかを見る。
/// 各マスの「右」と「下」だけ見れば、全部の隣接ペアをちょうど1回ずつ調べられる。
pub fn has_legal_moves(tiles: &[Tile]) -> bool {
    if tiles.len() < CELL_COUNT {
        return true;
    }

    let grid = Grid::from_tiles(tiles);
    let last = (GRID_SIZE - 1) as u8;
    Position::all().any(|pos| {
        let Some(current) = grid.get(pos) else {
            return true;
        };
        let right = (pos.x < last).then(|| Position::new(pos.x + 1, pos.y));
        let down = (pos.y < last).then(|| Position::new(pos.x, pos.y + 1));
        [right, down]
            .into_iter()
            .flatten()
            .any(|neighbor| grid.get(neighbor).is_some_and(|t| t.value == current.value))
    })
}
