// パターンパス - 訪問順序つきのセル集合

use anyhow::{anyhow, Result};

use crate::constants::CELL_COUNT;
use crate::domain::cell::CellId;

/// 1ジェスチャで訪問したセルの順序つき集合
///
/// 訪問順の列と訪問済みルックアップを並行して保持する。
/// 同じセルは構築上2度は入らない。
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatternPath {
    order: Vec<CellId>,
    visited: [bool; CELL_COUNT],
}

impl PatternPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// セルを末尾に追加する。すでに訪問済みなら何もせず false
    pub fn push(&mut self, id: CellId) -> bool {
        if self.visited[id.index()] {
            return false;
        }
        self.visited[id.index()] = true;
        self.order.push(id);
        true
    }

    pub fn is_visited(&self, id: CellId) -> bool {
        self.visited[id.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// 訪問順のセル列
    pub fn cells(&self) -> &[CellId] {
        &self.order
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.visited = [false; CELL_COUNT];
    }

    /// パターンコード（訪問順の通し番号を区切りなしで連結）
    pub fn code(&self) -> String {
        self.order.iter().map(|id| id.digit()).collect()
    }

    /// パターンコードから構築。不正な文字・範囲外・重複はエラー
    pub fn from_code(code: &str) -> Result<Self> {
        let mut path = Self::new();
        for ch in code.chars() {
            let id = CellId::from_digit(ch)
                .ok_or_else(|| anyhow!("パターンコードに不正な文字: {:?}", ch))?;
            if !path.push(id) {
                return Err(anyhow!("パターンコードにセルが重複: {}", ch));
            }
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_order_and_rejects_duplicates() {
        let mut path = PatternPath::new();
        assert!(path.push(CellId::new(0, 0)));
        assert!(path.push(CellId::new(1, 1)));
        assert!(path.push(CellId::new(2, 2)));

        // 重複は拒否され、順序は変わらない
        assert!(!path.push(CellId::new(1, 1)));
        assert_eq!(path.len(), 3);
        assert_eq!(
            path.cells(),
            &[CellId::new(0, 0), CellId::new(1, 1), CellId::new(2, 2)]
        );
    }

    #[test]
    fn code_concatenates_indices() {
        let mut path = PatternPath::new();
        path.push(CellId::new(0, 0));
        path.push(CellId::new(0, 1));
        path.push(CellId::new(1, 1));
        path.push(CellId::new(2, 2));
        assert_eq!(path.code(), "0148");
    }

    #[test]
    fn empty_path_has_empty_code() {
        assert_eq!(PatternPath::new().code(), "");
    }

    #[test]
    fn clear_resets_everything() {
        let mut path = PatternPath::new();
        path.push(CellId::new(0, 0));
        path.push(CellId::new(2, 1));
        path.clear();

        assert!(path.is_empty());
        assert_eq!(path.code(), "");
        // クリア後は再訪問できる
        assert!(path.push(CellId::new(0, 0)));
    }

    #[test]
    fn from_code_roundtrip() {
        let path = PatternPath::from_code("0485").unwrap();
        assert_eq!(path.code(), "0485");
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn from_code_rejects_invalid() {
        assert!(PatternPath::from_code("01a").is_err());
        assert!(PatternPath::from_code("09").is_err());
        assert!(PatternPath::from_code("010").is_err());
    }
}
