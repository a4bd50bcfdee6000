// プレゼンテーション層 - 描画プリミティブの抽象とレンダラ

pub mod renderer;
pub mod surface;

pub use renderer::{render, CELL_FILL_COLOR, CORRECT_COLOR, WRONG_COLOR};
pub use surface::{Color, DrawCmd, DrawSurface, RecordingSurface};
