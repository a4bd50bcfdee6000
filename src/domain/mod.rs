// ドメイン層 - 座標幾何とパターン追跡の中核

pub mod cell;
pub mod geometry;
pub mod grid;
pub mod path;

pub use cell::{Cell, CellId};
pub use geometry::{bearing_degrees, rotate_around, Point};
pub use grid::Grid;
pub use path::PatternPath;
