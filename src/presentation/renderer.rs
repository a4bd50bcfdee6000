// レンダラ - ボード状態から描画コマンドへの純関数

use crate::application::{DisplayMode, PatternBoard};
use crate::constants::{
    ANGLE_LENGTH, ANGLE_MARGIN, BIG_CIRCLE_RADIUS, PATH_STROKE_WIDTH, SMALL_CIRCLE_RADIUS,
};
use crate::domain::{bearing_degrees, rotate_around, Grid, Point};
use crate::presentation::surface::{Color, DrawSurface};

/// 通常時のアクセント色
pub const CORRECT_COLOR: Color = Color::rgb(0x1F, 0x8E, 0xE9);
/// Wrong 表示時のアクセント色
pub const WRONG_COLOR: Color = Color::rgb(0xF4, 0x33, 0x3C);
/// 選択済みセルの背景色
pub const CELL_FILL_COLOR: Color = Color::WHITE;

/// 現在のボード状態をサーフェスへ描画する
///
/// 状態は一切変更しない。レイアウト前（グリッド未確定）は何も描かない。
/// 描画順はストローク → セル → 矢印マーカー。
pub fn render(board: &PatternBoard, surface: &mut dyn DrawSurface) {
    let Some(grid) = board.grid() else {
        return;
    };

    if board.stroke().len() >= 2 {
        surface.stroke_polyline(
            board.stroke(),
            PATH_STROKE_WIDTH,
            path_color(board.display_mode()),
        );
    }

    draw_cells(board, grid, surface);
    draw_angles(board, grid, surface);
}

fn path_color(mode: DisplayMode) -> Color {
    if mode == DisplayMode::Correct {
        CORRECT_COLOR
    } else {
        WRONG_COLOR
    }
}

/// セルのアクセント色。Wrong かつ訪問済みのセルだけ警告色になる
fn circle_color(mode: DisplayMode, visited: bool) -> Color {
    if mode == DisplayMode::Correct || !visited {
        CORRECT_COLOR
    } else {
        WRONG_COLOR
    }
}

fn draw_cells(board: &PatternBoard, grid: &Grid, surface: &mut dyn DrawSurface) {
    for cell in grid.cells() {
        let visited = board.path().is_visited(cell.id);
        let accent = circle_color(board.display_mode(), visited);

        if visited {
            surface.fill_circle(cell.center, BIG_CIRCLE_RADIUS, CELL_FILL_COLOR);
            surface.fill_circle(cell.center, SMALL_CIRCLE_RADIUS, accent);
        }

        surface.stroke_circle(cell.center, BIG_CIRCLE_RADIUS, PATH_STROKE_WIDTH, accent);
    }
}

/// Wrong 表示時、各訪問セル（最後を除く）に次セルへ向く矢印を描く
fn draw_angles(board: &PatternBoard, grid: &Grid, surface: &mut dyn DrawSurface) {
    if board.display_mode() != DisplayMode::Wrong {
        return;
    }

    let cells = board.path().cells();
    if cells.len() < 2 {
        return;
    }

    for pair in cells.windows(2) {
        let from = grid.center(pair[0]);
        let to = grid.center(pair[1]);
        let degrees = bearing_degrees(from, to);
        surface.fill_polygon(&arrow_head(from, degrees), WRONG_COLOR);
    }
}

/// セル中心 center から方位 degrees を向く矢印の三角形
///
/// 無回転（0°、右向き）のテンプレートは
///   先端:   (R - ANGLE_MARGIN, 0)
///   後端上: (R - ANGLE_LENGTH - ANGLE_MARGIN, -ANGLE_LENGTH)
///   後端下: (R - ANGLE_LENGTH - ANGLE_MARGIN, +ANGLE_LENGTH)
/// で、中心まわりに回転させる。
fn arrow_head(center: Point, degrees: f32) -> Vec<Point> {
    let template = [
        Point::new(center.x + BIG_CIRCLE_RADIUS - ANGLE_MARGIN, center.y),
        Point::new(
            center.x + BIG_CIRCLE_RADIUS - ANGLE_LENGTH - ANGLE_MARGIN,
            center.y - ANGLE_LENGTH,
        ),
        Point::new(
            center.x + BIG_CIRCLE_RADIUS - ANGLE_LENGTH - ANGLE_MARGIN,
            center.y + ANGLE_LENGTH,
        ),
    ];
    template
        .iter()
        .map(|p| rotate_around(*p, center, degrees))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::PointerEvent;
    use crate::presentation::surface::{DrawCmd, RecordingSurface};

    const SIDE: f32 = 900.0;

    fn center(row: u8, column: u8) -> Point {
        let coord = |i: u8| 175.0 + 275.0 * i as f32;
        Point::new(coord(column), coord(row))
    }

    /// 2セルなぞって離した状態のボード（mode=Wrong, path="01"）
    fn finished_board() -> PatternBoard {
        let mut board = PatternBoard::new();
        board.layout(SIDE);
        board.handle_event(PointerEvent::down(center(0, 0)));
        board.handle_event(PointerEvent::moved(center(0, 1)));
        board.handle_event(PointerEvent::up(center(0, 1)));
        board
    }

    fn count<F: Fn(&DrawCmd) -> bool>(surface: &RecordingSurface, f: F) -> usize {
        surface.commands.iter().filter(|c| f(c)).count()
    }

    #[test]
    fn render_before_layout_draws_nothing() {
        let board = PatternBoard::new();
        let mut surface = RecordingSurface::new();
        render(&board, &mut surface);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn idle_board_draws_nine_outlines_only() {
        let mut board = PatternBoard::new();
        board.layout(SIDE);
        let mut surface = RecordingSurface::new();
        render(&board, &mut surface);

        assert_eq!(surface.commands.len(), 9);
        assert_eq!(
            count(&surface, |c| matches!(c, DrawCmd::StrokeCircle { .. })),
            9
        );
        // 未訪問セルの輪郭は通常色
        for cmd in &surface.commands {
            if let DrawCmd::StrokeCircle { color, radius, .. } = cmd {
                assert_eq!(*color, CORRECT_COLOR);
                assert_eq!(*radius, BIG_CIRCLE_RADIUS);
            }
        }
    }

    #[test]
    fn finished_board_draws_full_decoration() {
        let board = finished_board();
        let mut surface = RecordingSurface::new();
        render(&board, &mut surface);

        // ストローク1本、輪郭9、訪問セル2つ分の背景+ドット、矢印1つ
        assert_eq!(
            count(&surface, |c| matches!(c, DrawCmd::StrokePolyline { .. })),
            1
        );
        assert_eq!(
            count(&surface, |c| matches!(c, DrawCmd::StrokeCircle { .. })),
            9
        );
        assert_eq!(
            count(&surface, |c| matches!(c, DrawCmd::FillCircle { .. })),
            4
        );
        assert_eq!(
            count(&surface, |c| matches!(c, DrawCmd::FillPolygon { .. })),
            1
        );
    }

    #[test]
    fn wrong_mode_uses_alert_colors_for_visited_only() {
        let board = finished_board();
        let mut surface = RecordingSurface::new();
        render(&board, &mut surface);

        let mut wrong_outlines = 0;
        let mut correct_outlines = 0;
        for cmd in &surface.commands {
            match cmd {
                DrawCmd::StrokePolyline { color, width, .. } => {
                    assert_eq!(*color, WRONG_COLOR);
                    assert_eq!(*width, PATH_STROKE_WIDTH);
                }
                DrawCmd::StrokeCircle { color, .. } => {
                    if *color == WRONG_COLOR {
                        wrong_outlines += 1;
                    } else {
                        correct_outlines += 1;
                    }
                }
                _ => {}
            }
        }
        assert_eq!(wrong_outlines, 2);
        assert_eq!(correct_outlines, 7);
    }

    #[test]
    fn correct_mode_has_no_arrows() {
        let mut board = finished_board();
        board.set_display_mode(DisplayMode::Correct);
        let mut surface = RecordingSurface::new();
        render(&board, &mut surface);

        assert_eq!(
            count(&surface, |c| matches!(c, DrawCmd::FillPolygon { .. })),
            0
        );
        // ストロークも通常色に戻る
        for cmd in &surface.commands {
            if let DrawCmd::StrokePolyline { color, .. } = cmd {
                assert_eq!(*color, CORRECT_COLOR);
            }
        }
    }

    #[test]
    fn horizontal_arrow_matches_template() {
        // (0,0) → (0,1) は方位 0° なのでテンプレートそのまま
        let board = finished_board();
        let mut surface = RecordingSurface::new();
        render(&board, &mut surface);

        let arrow = surface
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCmd::FillPolygon { points, .. } => Some(points.clone()),
                _ => None,
            })
            .unwrap();

        let c = center(0, 0);
        assert!((arrow[0].x - (c.x + BIG_CIRCLE_RADIUS - ANGLE_MARGIN)).abs() < 1e-3);
        assert!((arrow[0].y - c.y).abs() < 1e-3);
        assert!((arrow[1].y - (c.y - ANGLE_LENGTH)).abs() < 1e-3);
        assert!((arrow[2].y - (c.y + ANGLE_LENGTH)).abs() < 1e-3);
    }

    #[test]
    fn tracking_stroke_uses_live_extension() {
        let mut board = PatternBoard::new();
        board.layout(SIDE);
        board.handle_event(PointerEvent::down(center(0, 0)));
        board.handle_event(PointerEvent::moved(Point::new(300.0, 200.0)));

        let mut surface = RecordingSurface::new();
        render(&board, &mut surface);

        let stroke = surface
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCmd::StrokePolyline { points, .. } => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(stroke.len(), 2);
        assert_eq!(stroke[1], Point::new(300.0, 200.0));
    }
}
