// 試行統計と試行レコード

use serde::Serialize;

/// 完了したジェスチャの集計
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttemptStats {
    pub attempts: u32,
    pub matched: u32,
    pub mismatched: u32,
}

impl AttemptStats {
    /// 1試行を記録する。verdict は照合結果（シークレット未設定なら None）
    pub fn record(&mut self, verdict: Option<bool>) {
        self.attempts += 1;
        match verdict {
            Some(true) => self.matched += 1,
            Some(false) => self.mismatched += 1,
            None => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// 詳細ログに書き出す1試行分のレコード（JSON Lines 形式）
#[derive(Clone, Debug, Serialize)]
pub struct AttemptRecord<'a> {
    pub pattern: &'a str,
    pub length: usize,
    /// 照合結果。シークレット未設定のときは None
    pub matched: Option<bool>,
}
