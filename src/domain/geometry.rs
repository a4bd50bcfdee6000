// 座標幾何 - 点、距離、方位角

/// 描画領域座標系の点（y は下向き）
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 2点間のユークリッド距離
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// from から to への方位角（度）を返す
///
/// 軸に平行な場合は 0°/90°/180°/270° に固定し、
/// それ以外は象限ごとに arctan で求める。
/// 右向きが 0°、y が下向きなので下向きが 90°。
pub fn bearing_degrees(from: Point, to: Point) -> f32 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dy == 0.0 && dx > 0.0 {
        0.0
    } else if dy == 0.0 && dx < 0.0 {
        180.0
    } else if dx == 0.0 && dy > 0.0 {
        90.0
    } else if dx == 0.0 && dy < 0.0 {
        270.0
    } else if dx > 0.0 && dy > 0.0 {
        (dy / dx).atan().to_degrees()
    } else if dx > 0.0 && dy < 0.0 {
        -((-dy / dx).atan().to_degrees())
    } else if dx < 0.0 && dy < 0.0 {
        180.0 + (dy / dx).atan().to_degrees()
    } else if dx < 0.0 && dy > 0.0 {
        180.0 - ((-dy / dx).atan().to_degrees())
    } else {
        0.0
    }
}

/// 点 p を center まわりに degrees 度（時計回り）回転する
pub fn rotate_around(p: Point, center: Point, degrees: f32) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}
