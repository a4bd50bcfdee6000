// パターンロック GUI のエントリポイント

use anyhow::{anyhow, Result};
use eframe::egui;

use patternlock::app::{install_japanese_fonts, App};

fn main() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1200.0, 820.0)),
        ..Default::default()
    };

    eframe::run_native(
        "パターンロック 3×3 — Rust GUI",
        options,
        Box::new(|cc| {
            install_japanese_fonts(&cc.egui_ctx);
            Box::new(App::default())
        }),
    )
    .map_err(|e| anyhow!("GUI起動に失敗: {e}"))
}
