// パターンボードの egui ウィジェットアダプタ

use eframe::egui;
use egui::{Color32, Pos2, Stroke};

use crate::application::{PatternBoard, PointerEvent};
use crate::domain::Point;
use crate::presentation::{render, Color, DrawSurface};

/// ボードを正方形ウィジェットとして描画し、ポインタ入力を流し込む
///
/// 利用可能領域の短辺を一辺とする正方形を確保する。
/// 最初に確保できた一辺がレイアウトを確定する（以後のリサイズは無視）。
pub fn show(board: &mut PatternBoard, ui: &mut egui::Ui) -> egui::Response {
    let side = ui.available_size().min_elem();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::drag());

    board.layout(side);

    // egui のドラッグ状態をポインタ局面へ変換する
    let mut repaint = false;
    if let Some(pos) = response.interact_pointer_pos() {
        let local = Point::new(pos.x - rect.min.x, pos.y - rect.min.y);
        if response.drag_started() {
            repaint |= board.handle_event(PointerEvent::down(local));
        } else if response.dragged() {
            repaint |= board.handle_event(PointerEvent::moved(local));
        }
        if response.drag_stopped() {
            repaint |= board.handle_event(PointerEvent::up(local));
        }
    } else if response.drag_stopped() {
        repaint |= board.handle_event(PointerEvent::up(Point::default()));
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, Color32::WHITE);

    let mut surface = EguiSurface {
        painter,
        origin: rect.min,
    };
    render(board, &mut surface);

    if repaint {
        ui.ctx().request_repaint();
    }

    response
}

/// egui::Painter を DrawSurface として見せるアダプタ
struct EguiSurface {
    painter: egui::Painter,
    origin: Pos2,
}

impl EguiSurface {
    fn to_pos(&self, p: Point) -> Pos2 {
        egui::pos2(self.origin.x + p.x, self.origin.y + p.y)
    }
}

fn to_color32(c: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

impl DrawSurface for EguiSurface {
    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }
        let pts: Vec<Pos2> = points.iter().map(|p| self.to_pos(*p)).collect();
        self.painter
            .add(egui::Shape::line(pts, Stroke::new(width, to_color32(color))));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color) {
        self.painter.circle_stroke(
            self.to_pos(center),
            radius,
            Stroke::new(width, to_color32(color)),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.painter
            .circle_filled(self.to_pos(center), radius, to_color32(color));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let pts: Vec<Pos2> = points.iter().map(|p| self.to_pos(*p)).collect();
        self.painter.add(egui::Shape::convex_polygon(
            pts,
            to_color32(color),
            Stroke::NONE,
        ));
    }
}
