// グリッドレイアウトとヒット判定

use crate::constants::{BIG_CIRCLE_RADIUS, CELL_COUNT, GRID_SIZE};
use crate::domain::cell::{Cell, CellId};
use crate::domain::geometry::Point;
use crate::domain::path::PatternPath;

/// 3×3 のセル配置（行優先で保持）
///
/// 正方形の描画領域に対して一度だけ計算される。
/// 再計算すると訪問状態が宙に浮くため、構築後は不変。
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// 一辺 side の正方形領域にセル中心を等間隔・等マージンで配置する
    ///
    /// margin = (side - 6R) / 4。列 i が x、行 j が y を決める:
    ///   x = margin*(i+1) + 2R*i + R
    ///   y = margin*(j+1) + 2R*j + R
    pub fn new(side: f32) -> Self {
        let r = BIG_CIRCLE_RADIUS;
        let margin = (side - r * 6.0) / 4.0;

        let mut cells = [Cell {
            id: CellId::new(0, 0),
            center: Point::default(),
        }; CELL_COUNT];

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                let id = CellId::new(row as u8, column as u8);
                let x = margin * (column as f32 + 1.0) + 2.0 * r * column as f32 + r;
                let y = margin * (row as f32 + 1.0) + 2.0 * r * row as f32 + r;
                cells[id.index()] = Cell {
                    id,
                    center: Point::new(x, y),
                };
            }
        }

        Self { cells }
    }

    /// 走査順（行優先）のセル一覧
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn center(&self, id: CellId) -> Point {
        self.cells[id.index()].center
    }

    /// タッチ座標に対するヒット判定
    ///
    /// 行 0..2 を外側、列 0..2 を内側に走査し、未訪問かつ
    /// 中心までの距離が半径以下の最初のセルを返す。
    /// 最近傍ではなく走査順で最初にヒットしたものが勝つ。
    /// 訪問済みセルは中心に重なっていてもヒットしない。
    pub fn hit_test(&self, point: Point, path: &PatternPath) -> Option<CellId> {
        for cell in &self.cells {
            if path.is_visited(cell.id) {
                continue;
            }
            if point.distance(cell.center) <= BIG_CIRCLE_RADIUS {
                return Some(cell.id);
            }
        }
        None
    }
}
