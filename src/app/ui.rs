// UIのエントリポイント（eframe::App 実装）

use eframe::egui;
use egui::{Color32, RichText};

use crate::app::{widget, App};
use crate::application::{DisplayMode, GestureState};
use crate::logging;

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 初回起動時にログファイルと詳細ログの状態を同期
        static INITIALIZED: std::sync::atomic::AtomicBool =
            std::sync::atomic::AtomicBool::new(false);
        if !INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            let log_path = "pattern_log.txt";
            if let Err(e) = logging::init_log_file(log_path) {
                eprintln!("ログファイルの初期化に失敗: {e:#}");
            } else {
                println!("試行ログを {log_path} に出力します");
            }
            logging::set_verbose(self.verbose_logging);
        }

        // 完成したパターンを取り込む
        let finished: Vec<String> = self.rx.try_iter().collect();
        for pattern in finished {
            self.handle_finished(pattern);
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.heading("パターンロック 3×3 — Rust GUI（ジェスチャ追跡＋ヒット判定）");
        });

        egui::SidePanel::left("left")
            .min_width(380.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing = egui::Vec2::new(8.0, 8.0);

                        self.draw_secret_controls(ui);
                        ui.separator();
                        self.draw_board_controls(ui);
                        ui.separator();
                        self.draw_stats(ui);
                        ui.separator();

                        ui.label("ログ");
                        for line in &self.log_lines {
                            ui.monospace(line);
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            widget::show(&mut self.board, ui);
        });
    }
}

impl App {
    fn draw_secret_controls(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("シークレット（照合用のパターンコード）");
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.secret_input)
                        .hint_text("例: 0485")
                        .desired_width(120.0),
                );
                if ui.button("設定").clicked() {
                    self.apply_secret();
                }
                if ui.button("ランダム生成").clicked() {
                    self.random_secret();
                }
            });
            match &self.secret {
                Some(code) => {
                    ui.monospace(format!("現在のシークレット: {code}"));
                }
                None => {
                    ui.label(
                        RichText::new("（未設定 — 入力は記録のみ）")
                            .italics()
                            .color(Color32::GRAY),
                    );
                }
            }
        });
    }

    fn draw_board_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("リセット").clicked() {
                self.board.reset();
                self.push_log("ボードをリセット".into());
            }
            if ui
                .checkbox(&mut self.verbose_logging, "詳細ログ")
                .changed()
            {
                logging::set_verbose(self.verbose_logging);
            }
        });

        let mode = match self.board.display_mode() {
            DisplayMode::Correct => "Correct",
            DisplayMode::Wrong => "Wrong",
        };
        let state = match self.board.state() {
            GestureState::Idle => "待機中",
            GestureState::Tracking => "追跡中",
            GestureState::Resolved => "確定済み",
        };
        ui.monospace(format!("表示モード: {mode} / 状態: {state}"));
    }

    fn draw_stats(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("試行統計");
            ui.monospace(format!(
                "試行 {} / 一致 {} / 不一致 {}",
                self.stats.attempts, self.stats.matched, self.stats.mismatched
            ));
            if let Some(last) = &self.last_pattern {
                ui.monospace(format!("直近のパターン: {last}"));
            }
        });
    }
}

/// 日本語フォントのインストール（Windows用）
pub fn install_japanese_fonts(ctx: &egui::Context) {
    use egui::{FontData, FontDefinitions, FontFamily};

    let mut fonts = FontDefinitions::default();

    // Windows フォント候補
    let windir = std::env::var("WINDIR").unwrap_or_else(|_| "C:\\Windows".to_string());
    let fontdir = std::path::Path::new(&windir).join("Fonts");
    let candidates = [
        "meiryo.ttc",
        "meiryob.ttc",
        "YuGothR.ttc",
        "YuGothM.ttc",
        "YuGothB.ttc",
        "msgothic.ttc",
        "msmincho.ttc",
    ];

    let mut loaded = false;
    for name in candidates.iter() {
        let path = fontdir.join(name);
        if let Ok(bytes) = std::fs::read(&path) {
            let key = format!("jp-{}", name.to_lowercase());
            fonts.font_data.insert(key.clone(), FontData::from_owned(bytes));
            for family in [FontFamily::Proportional, FontFamily::Monospace] {
                if let Some(list) = fonts.families.get_mut(&family) {
                    list.insert(0, key.clone());
                }
            }
            loaded = true;
            break;
        }
    }

    if loaded {
        ctx.set_fonts(fonts);
    } else if cfg!(windows) {
        eprintln!("日本語フォントを見つけられませんでした。C:\\Windows\\Fonts を確認してください。");
    }
}
