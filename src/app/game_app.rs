// src/app/game_app.rs

// --- 必要なものをインポート ---
use std::sync::{Arc, Mutex, MutexGuard};

use wasm_bindgen::prelude::*;
use log::{info, warn, error};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::local_storage::LocalStorage;
use crate::app::session::Session;
use crate::app::state_getter;
use crate::app::storage::{GameStorage, MemoryStorage};
use crate::config::GameConfig;
use crate::components::{Direction, Theme};

type BrowserSession = Session<Box<dyn GameStorage>, StdRng>;

/// JS から触る窓口！ ゲームの状態は全部 Session の中にあるよ。
///
/// Session は Arc<Mutex<>> で包んでおく。1回の操作 (move / undo / restart) の間は
/// ずっとロックを持つので、連打されても前の手の結果を見てから次の手が動く。
#[wasm_bindgen]
pub struct GameApp {
    session: Arc<Mutex<BrowserSession>>,
}

#[wasm_bindgen]
impl GameApp {
    /// デフォルト設定で作って、保存データを読み込む (無ければニューゲーム)。
    #[wasm_bindgen(constructor)]
    pub fn new() -> GameApp {
        GameApp::build(GameConfig::default())
    }

    /// JSON で設定を渡して作る。設定が壊れてたらエラーを返すよ。
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<GameApp, JsValue> {
        let config = GameConfig::from_json(config_json).map_err(|e| {
            let error_msg = format!("Invalid game config: {}", e);
            error!("GameApp: {}", error_msg);
            JsValue::from_str(&error_msg)
        })?;
        Ok(GameApp::build(config))
    }

    #[wasm_bindgen(js_name = startNewGame)]
    pub fn start_new_game(&self) {
        self.lock_session().start_new_game();
    }

    /// "UP" / "DOWN" / "LEFT" / "RIGHT" のどれか。盤面が動いたら true。
    #[wasm_bindgen(js_name = moveTiles)]
    pub fn move_tiles(&self, direction: &str) -> Result<bool, JsValue> {
        let direction = direction.parse::<Direction>().map_err(|e| {
            error!("GameApp: {}", e);
            JsValue::from_str(&format!("{}", e))
        })?;
        Ok(self.lock_session().move_tiles(direction))
    }

    pub fn undo(&self) -> bool {
        self.lock_session().undo()
    }

    /// タイルの配列 (JS オブジェクト)
    pub fn tiles(&self) -> Result<JsValue, JsValue> {
        let session = self.lock_session();
        let json = state_getter::tiles_json(&*session).map_err(to_js_error)?;
        js_sys::JSON::parse(&json)
    }

    /// tiles / score / bestScore / over / won / canUndo / status / theme をまとめた JS オブジェクト
    pub fn state(&self) -> Result<JsValue, JsValue> {
        let session = self.lock_session();
        let json = state_getter::game_view_json(&*session).map_err(to_js_error)?;
        js_sys::JSON::parse(&json)
    }

    // JS の number に合わせて f64 で返す (2^53 まではぴったり)
    pub fn score(&self) -> f64 {
        self.lock_session().score() as f64
    }

    #[wasm_bindgen(js_name = bestScore)]
    pub fn best_score(&self) -> f64 {
        self.lock_session().best_score() as f64
    }

    pub fn over(&self) -> bool {
        self.lock_session().over()
    }

    pub fn won(&self) -> bool {
        self.lock_session().won()
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.lock_session().can_undo()
    }

    pub fn theme(&self) -> String {
        self.lock_session().theme().id().to_string()
    }

    /// 知らないテーマ ID なら何もしないで false。
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, theme_id: &str) -> bool {
        match Theme::from_id(theme_id) {
            Some(theme) => {
                self.lock_session().set_theme(theme);
                true
            }
            None => {
                warn!("GameApp: unknown theme id {:?}", theme_id);
                false
            }
        }
    }
}

impl Default for GameApp {
    fn default() -> Self {
        GameApp::new()
    }
}

impl GameApp {
    fn build(config: GameConfig) -> GameApp {
        info!("GameApp: 初期化中...");
        // localStorage が使えないときはメモリ上だけで遊ぶ (リロードで消える)
        let storage: Box<dyn GameStorage> = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                warn!("GameApp: {}, falling back to in-memory storage", e);
                Box::new(MemoryStorage::new())
            }
        };
        let mut session = Session::new(storage, StdRng::from_entropy(), config);
        session.initialize();
        info!("GameApp: 初期化完了。");
        GameApp {
            session: Arc::new(Mutex::new(session)),
        }
    }

    fn lock_session(&self) -> MutexGuard<'_, BrowserSession> {
        match self.session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("GameApp: session mutex poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

fn to_js_error(e: serde_json::Error) -> JsValue {
    let error_msg = format!("Failed to serialize game state: {}", e);
    error!("GameApp: {}", error_msg);
    JsValue::from_str(&error_msg)
}
