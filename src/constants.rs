// 盤面定数

/// ====== 盤面定数 ======
pub const GRID_SIZE: usize = 3;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// セル円（大円）の半径。レイアウトとヒット判定の基準
pub const BIG_CIRCLE_RADIUS: f32 = 100.0;
/// 選択済みセル中央のインジケータ円の半径
pub const SMALL_CIRCLE_RADIUS: f32 = 30.0;

// 矢印マーカー（Wrong 表示時）
pub const ANGLE_LENGTH: f32 = BIG_CIRCLE_RADIUS / 4.0;
pub const ANGLE_MARGIN: f32 = BIG_CIRCLE_RADIUS / 5.0;

pub const PATH_STROKE_WIDTH: f32 = 4.0;
