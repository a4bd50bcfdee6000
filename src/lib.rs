// パターンロックウィジェット - ライブラリモジュール

pub mod constants;
pub mod domain;       // ドメイン層
pub mod application;  // アプリケーション層
pub mod presentation; // プレゼンテーション層
pub mod app;          // egui アプリケーション
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use application::{
    DisplayMode, GestureState, PatternBoard, PatternListener, PointerEvent, PointerPhase,
};
pub use constants::{BIG_CIRCLE_RADIUS, CELL_COUNT, GRID_SIZE};
pub use domain::{Cell, CellId, Grid, PatternPath, Point};
pub use presentation::{render, Color, DrawSurface, RecordingSurface};
