// 描画サーフェス trait と記録用実装

use crate::domain::Point;

/// RGBA カラー（フレームワーク非依存）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// レンダラが要求する最小限の描画プリミティブ
///
/// 折れ線ストローク・円の塗り/輪郭・凸多角形の塗りだけを要求する。
/// 状態機械とレンダラをフレームワークから切り離すための継ぎ目。
pub trait DrawSurface {
    /// 折れ線を描く（2点未満なら何も描かれない）
    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Color);

    /// 円の輪郭を描く
    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color);

    /// 円を塗りつぶす
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// 凸多角形を塗りつぶす（矢印マーカー用）
    fn fill_polygon(&mut self, points: &[Point], color: Color);
}

/// 発行された描画コマンド
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    StrokePolyline {
        points: Vec<Point>,
        width: f32,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        width: f32,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    FillPolygon {
        points: Vec<Point>,
        color: Color,
    },
}

/// 描画コマンドをそのまま記録するサーフェス（テスト用）
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSurface for RecordingSurface {
    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Color) {
        self.commands.push(DrawCmd::StrokePolyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color) {
        self.commands.push(DrawCmd::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCmd::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCmd::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }
}
