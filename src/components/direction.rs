// src/components/direction.rs

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// タイルを寄せる方向だよ！⬆️⬇️⬅️➡️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// 4方向ぜんぶ。テストでよく回すやつ。
pub const ALL_DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

impl Direction {
    /// この方向を「左寄せ」として扱うために、盤面を反時計回りに何回 90° 回すか。
    ///
    /// LEFT: 0, UP: 1, RIGHT: 2, DOWN: 3
    pub fn quarter_turns(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// "UP" / "DOWN" / "LEFT" / "RIGHT" 以外の文字列が来たとき。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction token: {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UP" => Ok(Direction::Up),
            "DOWN" => Ok(Direction::Down),
            "LEFT" => Ok(Direction::Left),
            "RIGHT" => Ok(Direction::Right),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_four_tokens() {
        for dir in ALL_DIRECTIONS {
            assert_eq!(dir.as_str().parse::<Direction>(), Ok(dir));
        }
        assert!("up".parse::<Direction>().is_err(), "小文字は受け付けない");
        assert_eq!(
            "NORTH".parse::<Direction>(),
            Err(ParseDirectionError("NORTH".to_string()))
        );
    }

    #[test]
    fn quarter_turns_are_distinct() {
        let mut turns: Vec<u8> = ALL_DIRECTIONS.iter().map(|d| d.quarter_turns()).collect();
        turns.sort();
        assert_eq!(turns, vec![0, 1, 2, 3]);
    }
}
