// src/app/history.rs
//! Undo 用の履歴スタック。

use crate::components::GameState;

/// 手を打つ前のスナップショットを積んでいくスタックだよ📚
///
/// `limit` があれば、溢れた分は古い方から捨てる。
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<GameState>,
    limit: Option<usize>,
}

impl History {
    pub fn new(limit: Option<usize>) -> Self {
        Self { snapshots: Vec::new(), limit }
    }

    pub fn push(&mut self, snapshot: GameState) {
        self.snapshots.push(snapshot);
        if let Some(limit) = self.limit {
            if self.snapshots.len() > limit {
                let overflow = self.snapshots.len() - limit;
                self.snapshots.drain(..overflow);
            }
        }
    }

    pub fn pop(&mut self) -> Option<GameState> {
        self.snapshots.pop()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(score: u64) -> GameState {
        GameState { score, ..GameState::default() }
    }

    #[test]
    fn last_in_first_out() {
        let mut history = History::new(None);
        assert!(history.is_empty());
        history.push(snapshot(1));
        history.push(snapshot(2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().map(|s| s.score), Some(2));
        assert_eq!(history.pop().map(|s| s.score), Some(1));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn limit_drops_the_oldest() {
        let mut history = History::new(Some(2));
        for score in 1..=5 {
            history.push(snapshot(score));
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().map(|s| s.score), Some(5));
        assert_eq!(history.pop().map(|s| s.score), Some(4));
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut history = History::new(Some(0));
        history.push(snapshot(1));
        assert!(history.is_empty());
    }

    #[test]
    fn clear_empties_everything() {
        let mut history = History::new(None);
        history.push(snapshot(1));
        history.clear();
        assert!(history.is_empty());
    }
}
