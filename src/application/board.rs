// パターンボード - ジェスチャ状態機械

use crate::application::events::{PointerEvent, PointerPhase};
use crate::domain::{Grid, PatternPath, Point};

/// 表示モード
///
/// あくまで描画・操作用のフラグで、このコンポーネント自身は
/// パターンの正否を判定しない。指を離すと無条件に Wrong になるため、
/// 照合した呼び出し側が次の再描画までに Correct へ戻すことを想定する。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Correct,
    Wrong,
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::Correct
    }
}

/// ジェスチャの状態
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    /// 待機中（パスは空）
    Idle,
    /// 追跡中（ポインタを追いかけている）
    Tracking,
    /// 確定済み（通知済み、次のリセット待ち）
    Resolved,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}

/// 完成したパターンを受け取るリスナ
///
/// 1ジェスチャにつき高々1回、指が離れたときに同期呼び出しされる。
pub trait PatternListener {
    fn on_pattern_finished(&mut self, pattern: &str);
}

/// 3×3 パターンボード本体
///
/// レイアウト・ヒット判定・ジェスチャ追跡・通知をまとめる。
/// 描画は presentation 層の純関数に任せ、ここでは状態だけ持つ。
#[derive(Default)]
pub struct PatternBoard {
    grid: Option<Grid>,
    path: PatternPath,
    stroke: Vec<Point>,
    display_mode: DisplayMode,
    state: GestureState,
    listener: Option<Box<dyn PatternListener>>,
}

impl PatternBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_listener(&mut self, listener: Box<dyn PatternListener>) {
        self.listener = Some(listener);
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn path(&self) -> &PatternPath {
        &self.path
    }

    /// 接続ストロークの折れ線（訪問中心列。追跡中は末尾がポインタ座標）
    pub fn stroke(&self) -> &[Point] {
        &self.stroke
    }

    pub fn pattern_code(&self) -> String {
        self.path.code()
    }

    /// 一辺 side の正方形領域でレイアウトする
    ///
    /// 初回の有効な呼び出しだけが効く。レイアウトをやり直すと
    /// 訪問状態が失われるため、2回目以降は何もしない。
    /// side が正でない間も何もしない。
    pub fn layout(&mut self, side: f32) {
        if self.grid.is_some() || side <= 0.0 {
            return;
        }
        self.grid = Some(Grid::new(side));
    }

    /// 訪問状態・パス・ストロークを消して Idle に戻す
    ///
    /// 表示モードは触らない（外部の判定結果を消さないため）。
    pub fn reset(&mut self) {
        self.path.clear();
        self.stroke.clear();
        self.state = GestureState::Idle;
    }

    /// ポインタイベントを1つ処理する。戻り値は再描画が必要かどうか
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Down | PointerPhase::Move => self.handle_pointer(event.pos),
            // キャンセルは離した場合と同じ扱い
            PointerPhase::Up | PointerPhase::Cancel => self.handle_release(),
        }
    }

    fn handle_pointer(&mut self, pos: Point) -> bool {
        let mut repaint = false;

        // Wrong 表示中のタッチは表示を消し、同じイベントを
        // 新しいジェスチャの開始として処理する
        if self.display_mode == DisplayMode::Wrong {
            self.reset();
            self.display_mode = DisplayMode::Correct;
            repaint = true;
        }

        let Some(grid) = &self.grid else {
            return repaint;
        };

        if let Some(id) = grid.hit_test(pos, &self.path) {
            self.path.push(id);
            repaint = true;
        }

        // ヒットの有無によらず、パスがあればストロークを指先まで伸ばす
        if !self.path.is_empty() {
            self.state = GestureState::Tracking;
            self.rebuild_stroke(Some(pos));
            repaint = true;
        }

        repaint
    }

    fn handle_release(&mut self) -> bool {
        // 確定済みの状態で重ねて離しても再通知しない
        if self.state == GestureState::Resolved {
            return false;
        }

        if self.path.is_empty() {
            let changed = self.display_mode != DisplayMode::Correct;
            self.display_mode = DisplayMode::Correct;
            self.state = GestureState::Idle;
            return changed;
        }

        // 正否はここでは分からないので、いったん Wrong にして
        // 呼び出し側の判定に委ねる
        self.display_mode = DisplayMode::Wrong;
        self.rebuild_stroke(None);
        self.state = GestureState::Resolved;
        self.notify_finished();
        true
    }

    fn rebuild_stroke(&mut self, live: Option<Point>) {
        self.stroke.clear();
        let Some(grid) = &self.grid else {
            return;
        };
        for id in self.path.cells() {
            self.stroke.push(grid.center(*id));
        }
        if let Some(pos) = live {
            self.stroke.push(pos);
        }
    }

    fn notify_finished(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let code = self.path.code();
        if let Some(listener) = self.listener.as_mut() {
            listener.on_pattern_finished(&code);
        }
    }
}
