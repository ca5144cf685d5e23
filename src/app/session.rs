// src/app/session.rs
//! 1つのゲームセッションを管理する状態マシン。
//!
//! 盤面の変形は `logic` に丸投げして、こっちはスコア・フラグ・履歴・保存を担当するよ！

use log::{debug, info, warn};
use rand::Rng;

use crate::app::history::History;
use crate::app::persistence;
use crate::app::storage::GameStorage;
use crate::config::GameConfig;
use crate::components::{Direction, GameState, GameStatus, Theme, Tile, TileIdGenerator};
use crate::logic::{check_win_condition, compute_move, has_legal_moves, spawn_tile};

/// ゲームセッション本体。
///
/// 状態遷移: Idle → (initialize) → Playing → {Won, GameOver}
/// Won になっても続けて遊べる。over が立ったら移動は全部無視。
pub struct Session<S: GameStorage, R: Rng> {
    config: GameConfig,
    storage: S,
    rng: R,
    ids: TileIdGenerator,
    tiles: Vec<Tile>,
    score: u64,
    best_score: u64,
    over: bool,
    won: bool,
    theme: Theme,
    history: History,
    initialized: bool,
}

impl<S: GameStorage, R: Rng> Session<S, R> {
    /// 空っぽ (Idle) のセッションを作る。遊ぶ前に `initialize` を呼んでね。
    pub fn new(storage: S, rng: R, config: GameConfig) -> Self {
        let history = History::new(config.history_limit);
        Self {
            config,
            storage,
            rng,
            ids: TileIdGenerator::new(),
            tiles: Vec::new(),
            score: 0,
            best_score: 0,
            over: false,
            won: false,
            theme: Theme::default(),
            history,
            initialized: false,
        }
    }

    /// 保存データがあれば復元、なければニューゲーム。2回目以降の呼び出しは何もしない。
    pub fn initialize(&mut self) {
        if self.initialized {
            debug!("Session: already initialized");
            return;
        }
        self.best_score = persistence::load_best_score(&self.storage);
        self.theme = persistence::load_theme(&self.storage);

        match persistence::load_game_state(&mut self.storage) {
            Some(saved) => {
                info!("Session: resuming saved game (score {})", saved.score);
                self.ids.reserve_past(&saved.tiles);
                self.tiles = saved.tiles;
                self.score = saved.score;
                self.over = saved.over;
                self.won = saved.won;
                self.initialized = true;
                if saved.best_score > self.best_score {
                    self.best_score = saved.best_score;
                    persistence::save_best_score(&mut self.storage, self.best_score);
                }
                self.update_best_score();
            }
            None => {
                info!("Session: no saved game, starting fresh");
                self.start_new_game();
            }
        }
    }

    /// 盤面と履歴を捨てて、タイル2枚から始め直す。ベストスコアはそのまま。
    pub fn start_new_game(&mut self) {
        self.history.clear();
        self.tiles.clear();
        for _ in 0..2 {
            // 2枚目は1枚目が置かれた盤面を見て湧くので、同じマスにはならない
            if let Some(tile) = spawn_tile(&self.tiles, &mut self.rng, &mut self.ids, self.config.four_probability) {
                self.tiles.push(tile);
            }
        }
        self.score = 0;
        self.over = false;
        self.won = false;
        self.initialized = true;
        info!("Session: new game started");
        self.persist();
    }

    /// タイルを `direction` に寄せる。盤面が変わったら true。
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        if !self.initialized {
            warn!("Session: move_tiles({}) before initialize, ignored", direction);
            return false;
        }
        if self.over {
            debug!("Session: game is over, move {} ignored", direction);
            return false;
        }
        if !self.tiles.is_empty() && !has_legal_moves(&self.tiles) {
            info!("Session: no legal moves left, game over");
            self.over = true;
            self.persist();
            return false;
        }

        let result = compute_move(&self.tiles, direction, &mut self.ids);
        if !result.moved {
            return false;
        }

        let before = self.snapshot();
        self.history.push(before);
        self.score = self.score.saturating_add(result.score_increase);

        let mut tiles = result.tiles;
        if !self.won && check_win_condition(&tiles, self.config.win_value) {
            info!("Session: reached {}! 🏆", self.config.win_value);
            self.won = true;
        }
        match spawn_tile(&tiles, &mut self.rng, &mut self.ids, self.config.four_probability) {
            Some(tile) => tiles.push(tile),
            None => debug!("Session: board full, nothing spawned"),
        }
        if !has_legal_moves(&tiles) {
            info!("Session: no legal moves left, game over (score {})", self.score);
            self.over = true;
        }
        self.tiles = tiles;

        self.update_best_score();
        self.persist();
        true
    }

    /// ひとつ前の状態に戻す。履歴が空なら false。ベストスコアは戻さない。
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.tiles = previous.tiles;
        self.score = previous.score;
        self.over = previous.over;
        self.won = previous.won;
        debug!("Session: undo, {} snapshots left", self.history.len());
        self.persist();
        true
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        persistence::save_theme(&mut self.storage, theme);
    }

    /// 今の状態のスナップショット (保存 & 履歴用)
    pub fn snapshot(&self) -> GameState {
        GameState {
            tiles: self.tiles.clone(),
            score: self.score,
            best_score: self.best_score,
            over: self.over,
            won: self.won,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.initialized {
            self.snapshot().status()
        } else {
            GameStatus::Idle
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn over(&self) -> bool {
        self.over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn update_best_score(&mut self) {
        if self.score > self.best_score {
            self.best_score = self.score;
            persistence::save_best_score(&mut self.storage, self.best_score);
        }
    }

    fn persist(&mut self) {
        let snapshot = self.snapshot();
        persistence::save_game_state(&mut self.storage, &snapshot);
    }
}
