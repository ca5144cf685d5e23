// src/logic/grid.rs
//! タイル集合 ⇔ 4×4 グリッドの変換と、グリッドの回転。

use crate::components::{Position, Tile, GRID_SIZE};

/// 4×4 のマス目。`cells[y][x]` でアクセスするよ。
///
/// タイル集合からいつでも作り直せる「ビュー」なので、どこにも保存しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Tile>; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn empty() -> Self {
        Self::default()
    }

    /// タイル集合からグリッドを組み立てる。各タイルは自分の position のマスに入る。
    ///
    /// 同じマスに2枚あるのは呼び出し側のバグ。
    pub fn from_tiles<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Self {
        let mut grid = Grid::empty();
        for tile in tiles {
            debug_assert!(tile.position.is_on_board(), "tile {:?} is off the board", tile.id);
            debug_assert!(grid.get(tile.position).is_none(), "two tiles share {:?}", tile.position);
            grid.set(tile.position, Some(tile.clone()));
        }
        grid
    }

    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.cells[pos.y as usize][pos.x as usize].as_ref()
    }

    pub fn set(&mut self, pos: Position, tile: Option<Tile>) {
        self.cells[pos.y as usize][pos.x as usize] = tile;
    }

    /// y 行目を左から順に。
    pub fn row(&self, y: usize) -> &[Option<Tile>; GRID_SIZE] {
        &self.cells[y]
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.get(pos).is_none()).collect()
    }

    /// 反時計回りに 90° × `quarter_turns` 回したグリッドを新しく作る。
    ///
    /// マスの入れ替えだけで、タイルの中身 (id, value, position, merged_from) は一切触らない。
    pub fn rotated_ccw(&self, quarter_turns: u8) -> Self {
        let mut rotated = Grid::empty();
        for pos in Position::all() {
            rotated.set(pos.rotated_ccw(quarter_turns), self.get(pos).cloned());
        }
        rotated
    }

    /// 行優先でタイルを取り出す。position はそのタイルが今いるマスに書き換えるよ。
    pub fn into_tiles(self) -> Vec<Tile> {
        let mut tiles = Vec::new();
        for (y, row) in self.cells.into_iter().enumerate() {
            for (x, cell) in row.into_iter().enumerate() {
                if let Some(tile) = cell {
                    tiles.push(Tile { position: Position::new(x as u8, y as u8), ..tile });
                }
            }
        }
        tiles
    }
}
