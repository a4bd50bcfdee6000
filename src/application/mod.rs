// アプリケーション層 - ポインタイベントとジェスチャ状態機械

pub mod board;
pub mod events;

pub use board::{DisplayMode, GestureState, PatternBoard, PatternListener};
pub use events::{PointerEvent, PointerPhase};
