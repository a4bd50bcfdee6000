// アプリケーション（egui）

pub mod state;
pub mod stats;
pub mod ui;
pub mod widget;

pub use state::App;
pub use stats::{AttemptRecord, AttemptStats};
pub use ui::install_japanese_fonts;
