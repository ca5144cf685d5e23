// src/components/theme.rs
//! 見た目のテーマ ID。色とかの中身はフロント側が持ってて、こっちは ID の保存と検証だけ！🎨

use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Candy,
    Mint,
    Apple,
    Bamboo,
    Festive,
    Ink,
    Cyberpunk,
    Steampunk,
    Witcher,
    Zelda,
    Mario,
    Microsoft,
}

impl Theme {
    /// 並び順は選択 UI に出す順番そのまま。
    pub const ALL: [Theme; 12] = [
        Theme::Candy,
        Theme::Mint,
        Theme::Apple,
        Theme::Bamboo,
        Theme::Festive,
        Theme::Ink,
        Theme::Cyberpunk,
        Theme::Steampunk,
        Theme::Witcher,
        Theme::Zelda,
        Theme::Mario,
        Theme::Microsoft,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Theme::Candy => "candy",
            Theme::Mint => "mint",
            Theme::Apple => "apple",
            Theme::Bamboo => "bamboo",
            Theme::Festive => "festive",
            Theme::Ink => "ink",
            Theme::Cyberpunk => "cyberpunk",
            Theme::Steampunk => "steampunk",
            Theme::Witcher => "witcher",
            Theme::Zelda => "zelda",
            Theme::Mario => "mario",
            Theme::Microsoft => "microsoft",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Candy => "Candy",
            Theme::Mint => "Mint",
            Theme::Apple => "Apple",
            Theme::Bamboo => "Bamboo",
            Theme::Festive => "Festive",
            Theme::Ink => "Ink",
            Theme::Cyberpunk => "Cyberpunk",
            Theme::Steampunk => "Steampunk",
            Theme::Witcher => "Witcher",
            Theme::Zelda => "Zelda",
            Theme::Mario => "Mario",
            Theme::Microsoft => "Microsoft",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Theme::Candy => "🍬",
            Theme::Mint => "🌿",
            Theme::Apple => "🍎",
            Theme::Bamboo => "🎋",
            Theme::Festive => "🧧",
            Theme::Ink => "🖌️",
            Theme::Cyberpunk => "🤖",
            Theme::Steampunk => "⚙️",
            Theme::Witcher => "🐺",
            Theme::Zelda => "🗡️",
            Theme::Mario => "🍄",
            Theme::Microsoft => "💻",
        }
    }

    /// ID 文字列からテーマを探す。知らない ID なら None。
    pub fn from_id(id: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|theme| theme.id() == id)
    }

    /// 保存されてた値を読むとき用。無い or 知らない ID ならデフォルト (candy) にする。
    pub fn from_stored(stored: Option<&str>) -> Theme {
        stored.and_then(Theme::from_id).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_lookup() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_id(theme.id()), Some(theme));
        }
        assert_eq!(Theme::from_id("vaporwave"), None);
    }

    #[test]
    fn stored_value_falls_back_to_candy() {
        assert_eq!(Theme::from_stored(None), Theme::Candy);
        assert_eq!(Theme::from_stored(Some("nope")), Theme::Candy);
        assert_eq!(Theme::from_stored(Some("zelda")), Theme::Zelda);
    }

    #[test]
    fn serde_uses_the_id() {
        let json = serde_json::to_string(&Theme::Cyberpunk).unwrap();
        assert_eq!(json, "\"cyberpunk\"");
        assert_eq!(Theme::Cyberpunk.id(), "cyberpunk");
        assert_eq!(Theme::Steampunk.name(), "Steampunk");
    }
}
