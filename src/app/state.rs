// アプリケーション状態

use crossbeam_channel::{unbounded, Receiver, Sender};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::app::stats::{AttemptRecord, AttemptStats};
use crate::application::{DisplayMode, PatternBoard, PatternListener};
use crate::constants::CELL_COUNT;
use crate::domain::{CellId, PatternPath};
use crate::vlog;

/// 完成パターンをチャネルへ流すリスナ
struct ChannelListener {
    tx: Sender<String>,
}

impl PatternListener for ChannelListener {
    fn on_pattern_finished(&mut self, pattern: &str) {
        let _ = self.tx.send(pattern.to_string());
    }
}

/// アプリケーション状態
pub struct App {
    pub board: PatternBoard,
    pub rx: Receiver<String>,
    /// 照合用シークレット（検証済みパターンコード）
    pub secret: Option<String>,
    /// シークレット入力欄の内容
    pub secret_input: String,
    pub stats: AttemptStats,
    pub last_pattern: Option<String>,
    pub log_lines: Vec<String>,
    pub verbose_logging: bool,
}

impl Default for App {
    fn default() -> Self {
        let (tx, rx) = unbounded::<String>();
        let mut board = PatternBoard::new();
        board.set_listener(Box::new(ChannelListener { tx }));

        Self {
            board,
            rx,
            secret: None,
            secret_input: String::new(),
            stats: AttemptStats::default(),
            last_pattern: None,
            log_lines: vec!["待機中".into()],
            verbose_logging: false,
        }
    }
}

impl App {
    pub fn push_log(&mut self, s: String) {
        self.log_lines.push(s);
        if self.log_lines.len() > 500 {
            let cut = self.log_lines.len() - 500;
            self.log_lines.drain(0..cut);
        }
    }

    /// 入力欄の内容をシークレットとして採用する
    pub fn apply_secret(&mut self) {
        match PatternPath::from_code(&self.secret_input) {
            Ok(path) if path.len() >= 2 => {
                let code = path.code();
                self.push_log(format!("シークレットを設定: {code}"));
                self.secret = Some(code);
            }
            Ok(_) => {
                self.push_log("シークレットは2セル以上が必要".into());
            }
            Err(e) => {
                self.push_log(format!("シークレット不正: {e}"));
            }
        }
    }

    /// 4〜9 セルのランダムなシークレットを作って採用する
    pub fn random_secret(&mut self) {
        let mut rng = rand::thread_rng();
        let len = rng.gen_range(4..=CELL_COUNT);

        let mut indices: Vec<usize> = (0..CELL_COUNT).collect();
        indices.shuffle(&mut rng);

        let mut path = PatternPath::new();
        for id in indices.iter().take(len).filter_map(|&i| CellId::from_index(i)) {
            path.push(id);
        }

        let code = path.code();
        self.secret_input = code.clone();
        self.push_log(format!("ランダムシークレットを設定: {code}"));
        self.secret = Some(code);
    }

    /// 完成したパターンを1件処理する（照合 → 表示モード更新 → 記録）
    pub fn handle_finished(&mut self, pattern: String) {
        let verdict = self.secret.as_deref().map(|s| s == pattern);
        self.stats.record(verdict);

        vlog!(
            "{}",
            serde_json::to_string(&AttemptRecord {
                pattern: &pattern,
                length: pattern.len(),
                matched: verdict,
            })
            .unwrap_or_default()
        );

        match verdict {
            Some(true) => {
                // 照合成功。ボードは離した時点で Wrong になっているので
                // 呼び出し側であるこちらが Correct に戻す
                self.board.set_display_mode(DisplayMode::Correct);
                self.push_log(format!("一致: {pattern}"));
            }
            Some(false) => {
                self.push_log(format!("不一致: {pattern}"));
            }
            None => {
                self.push_log(format!("パターン入力: {pattern}（シークレット未設定）"));
            }
        }

        self.last_pattern = Some(pattern);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::PointerEvent;
    use crate::domain::Point;

    const SIDE: f32 = 900.0;

    fn center(row: u8, column: u8) -> Point {
        let coord = |i: u8| 175.0 + 275.0 * i as f32;
        Point::new(coord(column), coord(row))
    }

    fn draw(app: &mut App, cells: &[(u8, u8)]) {
        let first = cells[0];
        app.board
            .handle_event(PointerEvent::down(center(first.0, first.1)));
        for &(r, c) in &cells[1..] {
            app.board.handle_event(PointerEvent::moved(center(r, c)));
        }
        let last = cells[cells.len() - 1];
        app.board
            .handle_event(PointerEvent::up(center(last.0, last.1)));
    }

    #[test]
    fn matching_pattern_flips_mode_back_to_correct() {
        let mut app = App::default();
        app.board.layout(SIDE);
        app.secret = Some("01".into());

        draw(&mut app, &[(0, 0), (0, 1)]);
        let finished: Vec<String> = app.rx.try_iter().collect();
        for p in finished {
            app.handle_finished(p);
        }

        assert_eq!(app.board.display_mode(), DisplayMode::Correct);
        assert_eq!(app.stats.matched, 1);
        assert_eq!(app.last_pattern.as_deref(), Some("01"));
    }

    #[test]
    fn mismatch_leaves_wrong_standing() {
        let mut app = App::default();
        app.board.layout(SIDE);
        app.secret = Some("048".into());

        draw(&mut app, &[(0, 0), (0, 1)]);
        let finished: Vec<String> = app.rx.try_iter().collect();
        for p in finished {
            app.handle_finished(p);
        }

        assert_eq!(app.board.display_mode(), DisplayMode::Wrong);
        assert_eq!(app.stats.mismatched, 1);
    }

    #[test]
    fn apply_secret_validates_input() {
        let mut app = App::default();

        app.secret_input = "048".into();
        app.apply_secret();
        assert_eq!(app.secret.as_deref(), Some("048"));

        app.secret_input = "0x8".into();
        app.apply_secret();
        // 不正入力では前のシークレットが残る
        assert_eq!(app.secret.as_deref(), Some("048"));

        app.secret_input = "7".into();
        app.apply_secret();
        assert_eq!(app.secret.as_deref(), Some("048"));
    }

    #[test]
    fn random_secret_is_valid_pattern() {
        let mut app = App::default();
        app.random_secret();

        let code = app.secret.clone().unwrap();
        let path = PatternPath::from_code(&code).unwrap();
        assert!(path.len() >= 4 && path.len() <= CELL_COUNT);
    }

    #[test]
    fn log_is_capped() {
        let mut app = App::default();
        for i in 0..600 {
            app.push_log(format!("line {i}"));
        }
        assert_eq!(app.log_lines.len(), 500);
    }
}
