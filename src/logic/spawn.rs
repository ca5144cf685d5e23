// src/logic/spawn.rs

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::{Tile, TileIdGenerator};
use crate::logic::grid::Grid;

/// 新しく湧くタイルが 4 になる確率のデフォルト。残りは 2。
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// 空きマスのどれか1つに新しいタイルを湧かせる🌱
///
/// 空きマスは一様ランダムに選ぶ。値は `four_probability` の確率で 4、それ以外は 2。
/// 盤面が満杯なら None (エラーじゃなくて普通の結果だよ)。
///
/// # 引数
/// * `tiles` - 今の盤面のタイル集合
/// * `rng` - 乱数生成器。テストではシード固定のものを渡す
/// * `ids` - 新しいタイルの ID の払い出し元
/// * `four_probability` - 4 が出る確率 (0.0 ..= 1.0)
pub fn spawn_tile<R: Rng + ?Sized>(
    tiles: &[Tile],
    rng: &mut R,
    ids: &mut TileIdGenerator,
    four_probability: f64,
) -> Option<Tile> {
    let empty_cells = Grid::from_tiles(tiles).empty_cells();
    let position = *empty_cells.choose(rng)?;
    let value = if rng.gen_bool(four_probability.clamp(0.0, 1.0)) { 4 } else { 2 };

    let mut tile = Tile::new(ids.next_id(), value, position);
    tile.is_new = true;
    Some(tile)
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Position, TileId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn full_board_except(hole: Option<Position>) -> Vec<Tile> {
        Position::all()
            .filter(|&p| Some(p) != hole)
            .enumerate()
            .map(|(i, p)| Tile::new(TileId(i as u64), 2 << (i % 5), p))
            .collect()
    }

    #[test]
    fn full_board_spawns_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut ids = TileIdGenerator::new();
        let tiles = full_board_except(None);
        assert_eq!(tiles.len(), 16);
        assert!(spawn_tile(&tiles, &mut rng, &mut ids, DEFAULT_FOUR_PROBABILITY).is_none());
    }

    #[test]
    fn single_hole_is_always_chosen() {
        let hole = Position::new(2, 3);
        let tiles = full_board_except(Some(hole));
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ids = TileIdGenerator::new();
            ids.reserve_past(&tiles);
            let tile = spawn_tile(&tiles, &mut rng, &mut ids, DEFAULT_FOUR_PROBABILITY)
                .expect("there is one empty cell");
            assert_eq!(tile.position, hole, "seed {} で穴以外に湧いた", seed);
            assert!(tile.is_new);
            assert!(tile.merged_from.is_none());
            assert!(tile.value == 2 || tile.value == 4);
            assert_eq!(tile.id, TileId(15), "既存 ID とかぶらない");
        }
    }

    #[test]
    fn probability_extremes_pick_a_fixed_value() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ids = TileIdGenerator::new();
        for _ in 0..20 {
            assert_eq!(spawn_tile(&[], &mut rng, &mut ids, 0.0).map(|t| t.value), Some(2));
            assert_eq!(spawn_tile(&[], &mut rng, &mut ids, 1.0).map(|t| t.value), Some(4));
        }
    }

    #[test]
    fn mostly_twos_with_default_probability() {
        let mut rng = StdRng::seed_from_u64(2048);
        let mut ids = TileIdGenerator::new();
        let fours = (0..1000)
            .filter_map(|_| spawn_tile(&[], &mut rng, &mut ids, DEFAULT_FOUR_PROBABILITY))
            .filter(|t| t.value == 4)
            .count();
        // 期待値は 100。かなりゆるめの範囲でチェック
        assert!((40..=200).contains(&fours), "4 が {} 回出た", fours);
    }
}
