//! タイルを寄せて合体させる、2048 のいちばん大事なルール！➡️➡️💥

use crate::components::{Direction, Position, Tile, TileIdGenerator, GRID_SIZE};
use crate::logic::grid::Grid;

/// `compute_move` の結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// 移動後のタイル集合 (行優先で並んでる)
    pub tiles: Vec<Tile>,
    /// この手で合体して生まれたタイルの値の合計
    pub score_increase: u64,
    /// 1枚でも動いた or 合体したら true
    pub moved: bool,
}

/// 1行ぶんの処理結果
struct RowOutcome {
    row: [Option<Tile>; GRID_SIZE],
    score_increase: u64,
    moved: bool,
}

/// タイル集合を `direction` に寄せた結果を計算する。入力のタイルは一切書き換えないよ。
///
/// やり方:
/// 1. 前の手の演出用フラグ (merged_from / is_new) を落としたコピーでグリッドを作る
/// 2. 方向ぶんだけ反時計回りに回して「左寄せ」問題にする (LEFT 0, UP 1, RIGHT 2, DOWN 3)
/// 3. 各行を左から詰めて、隣と同じ値なら合体
/// 4. 逆回転して、各タイルの position を本当のマスに直す
///
/// 合体で生まれるタイルの ID は `ids` から払い出す。
pub fn compute_move(tiles: &[Tile], direction: Direction, ids: &mut TileIdGenerator) -> MoveResult {
    let turns = direction.quarter_turns();
    let oriented = Grid::from_tiles(&tiles.iter().map(Tile::cleared).collect::<Vec<_>>()).rotated_ccw(turns);

    let mut result = Grid::empty();
    let mut score_increase = 0;
    let mut moved = false;

    for y in 0..GRID_SIZE {
        let outcome = slide_row(oriented.row(y), ids);
        score_increase += outcome.score_increase;
        moved |= outcome.moved;
        for (x, cell) in outcome.row.into_iter().enumerate() {
            result.set(Position::new(x as u8, y as u8), cell);
        }
    }

    let tiles = result.rotated_ccw((4 - turns) % 4).into_tiles();
    log::debug!("compute_move {}: {} tiles, +{}, moved={}", direction, tiles.len(), score_increase, moved);
    MoveResult { tiles, score_increase, moved }
}

/// 1行を左に詰めて合体させる。
///
/// 左から順に見て、次のタイルと同じ値なら合体して次をスキップ。
/// 合体したてのタイルがもう一度合体することはない ([a, a, a] -> [2a, a])。
fn slide_row(row: &[Option<Tile>; GRID_SIZE], ids: &mut TileIdGenerator) -> RowOutcome {
    // (回転後の行でのもとの列, タイル)
    let compressed: Vec<(usize, &Tile)> = row
        .iter()
        .enumerate()
        .filter_map(|(x, cell)| cell.as_ref().map(|tile| (x, tile)))
        .collect();

    let mut out: [Option<Tile>; GRID_SIZE] = Default::default();
    let mut next_slot = 0;
    let mut score_increase = 0;
    let mut moved = false;
    let mut i = 0;

    while i < compressed.len() {
        let (from_x, current) = compressed[i];
        // u32 に収まらない合体はしない (普通の盤面では起きない)
        match (compressed.get(i + 1), current.value.checked_mul(2)) {
            (Some(&(_, next)), Some(doubled)) if next.value == current.value => {
                let merged = Tile {
                    id: ids.next_id(),
                    value: doubled,
                    position: current.position,
                    merged_from: Some(Box::new([current.clone(), next.clone()])),
                    is_new: false,
                };
                score_increase += u64::from(merged.value);
                out[next_slot] = Some(merged);
                moved = true;
                i += 2;
            }
            _ => {
                if from_x != next_slot {
                    moved = true;
                }
                out[next_slot] = Some(current.clone());
                i += 1;
            }
        }
        next_slot += 1;
    }

    RowOutcome { row: out, score_increase, moved }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::TileId;

    fn row_of(values: [u32; 4]) -> [Option<Tile>; GRID_SIZE] {
        let mut row: [Option<Tile>; GRID_SIZE] = Default::default();
        for (x, &v) in values.iter().enumerate() {
            if v != 0 {
                row[x] = Some(Tile::new(TileId(x as u64), v, Position::new(x as u8, 0)));
            }
        }
        row
    }

    fn values(row: &[Option<Tile>; GRID_SIZE]) -> [u32; 4] {
        let mut out = [0; 4];
        for (x, cell) in row.iter().enumerate() {
            out[x] = cell.as_ref().map_or(0, |t| t.value);
        }
        out
    }

    #[test]
    fn slide_row_cases() {
        // (入力, 期待する出力, スコア, moved)
        let cases = [
            ([0, 0, 0, 0], [0, 0, 0, 0], 0, false),
            ([2, 0, 0, 0], [2, 0, 0, 0], 0, false),
            ([0, 0, 0, 2], [2, 0, 0, 0], 0, true),
            ([2, 2, 0, 0], [4, 0, 0, 0], 4, true),
            ([2, 0, 2, 0], [4, 0, 0, 0], 4, true),
            ([2, 2, 2, 0], [4, 2, 0, 0], 4, true),
            ([2, 2, 2, 2], [4, 4, 0, 0], 8, true),
            ([4, 4, 8, 8], [8, 16, 0, 0], 24, true),
            ([2, 4, 2, 4], [2, 4, 2, 4], 0, false),
            ([4, 2, 2, 0], [4, 4, 0, 0], 4, true),
            ([8, 0, 4, 4], [8, 8, 0, 0], 8, true),
        ];
        for (input, expected, score, moved) in cases {
            let mut ids = TileIdGenerator::new();
            ids.reserve_past(&[Tile::new(TileId(100), 2, Position::new(0, 0))]);
            let outcome = slide_row(&row_of(input), &mut ids);
            assert_eq!(values(&outcome.row), expected, "入力 {:?}", input);
            assert_eq!(outcome.score_increase, score, "入力 {:?} のスコア", input);
            assert_eq!(outcome.moved, moved, "入力 {:?} の moved", input);
        }
    }

    #[test]
    fn merged_tile_gets_fresh_id_and_two_parents() {
        let mut ids = TileIdGenerator::new();
        ids.reserve_past(&[Tile::new(TileId(3), 2, Position::new(0, 0))]);
        let outcome = slide_row(&row_of([2, 2, 0, 0]), &mut ids);
        let merged = outcome.row[0].as_ref().expect("merged tile");
        assert_eq!(merged.id, TileId(4));
        let parents = merged.merged_from.as_ref().expect("merged_from");
        assert_eq!(parents[0].id, TileId(0));
        assert_eq!(parents[1].id, TileId(1));
    }
}
