// src/components/tile.rs

use serde::{Serialize, Deserialize};

use crate::components::position::Position;

/// 4×4 の盤面で作れるいちばん大きいタイル (2^17)。これより大きい値は不正なセーブデータ。
pub const MAX_TILE_VALUE: u32 = 1 << 17;

/// タイルを見分けるための ID だよ。中身はただの連番！
///
/// 同じセッションの中では絶対にかぶらない (`TileIdGenerator` が払い出す)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u64);

/// TileId を払い出す係。
///
/// セーブデータを読み込んだあとは `reserve_past` で既存 ID より先に進めておくこと！
#[derive(Debug, Clone, Default)]
pub struct TileIdGenerator {
    next_id: u64,
}

impl TileIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        id
    }

    /// `tiles` (と、その merged_from) に出てくる全 ID より大きい値から払い出すようにする。
    pub fn reserve_past(&mut self, tiles: &[Tile]) {
        let max_seen = tiles.iter().flat_map(Tile::ids).max();
        if let Some(TileId(max)) = max_seen {
            self.next_id = self.next_id.max(max + 1);
        }
    }
}

/// 盤面に乗っている数字タイル！🔢
///
/// - `value`: 2 以上の 2 のべき乗
/// - `merged_from`: この手で合体して生まれたタイルなら、その元になった 2 枚 (演出用、次の手で消える)
/// - `is_new`: この手で湧いたタイルなら true (演出用、次の手で消える)
///
/// エンジンは渡されたタイルを書き換えない。毎回新しい値を作って返すよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_from: Option<Box<[Tile; 2]>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
}

impl Tile {
    /// 演出用フラグの付いていない素のタイルを作る。
    pub fn new(id: TileId, value: u32, position: Position) -> Self {
        Self {
            id,
            value,
            position,
            merged_from: None,
            is_new: false,
        }
    }

    /// `merged_from` と `is_new` を落としたコピーを返す。
    pub fn cleared(&self) -> Self {
        Tile::new(self.id, self.value, self.position)
    }

    /// 2 以上 `MAX_TILE_VALUE` 以下の 2 のべき乗かどうか。
    pub fn has_valid_value(&self) -> bool {
        self.value >= 2 && self.value <= MAX_TILE_VALUE && self.value.is_power_of_two()
    }

    // 自分の ID と、合体元の ID を全部並べる
    fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        std::iter::once(self.id).chain(self.merged_from.iter().flat_map(|pair| pair.iter().map(|t| t.id)))
    }
}
