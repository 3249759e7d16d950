//! 取引先名のオートコンプリート

/// 入力を含む取引先名（大文字小文字を区別しない部分一致）
///
/// 入力が空なら候補なし。候補の順序は元リストの順序を保つ。
pub fn filter_vendors(pool: &[String], input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    pool.iter()
        .filter(|v| v.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// 候補リストの表示状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorSuggestions {
    pool: Vec<String>,
    candidates: Vec<String>,
    visible: bool,
}

impl VendorSuggestions {
    pub fn new(pool: Vec<String>) -> Self {
        Self {
            pool,
            ..Default::default()
        }
    }

    /// 取引先リストを差し替え（読み込み完了時）
    pub fn set_pool(&mut self, pool: Vec<String>, current_input: &str) {
        self.pool = pool;
        self.candidates = filter_vendors(&self.pool, current_input);
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// 入力変更時。候補を絞り込み、表示する
    pub fn on_input(&mut self, input: &str) {
        self.candidates = filter_vendors(&self.pool, input);
        self.visible = true;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// 候補を選択。候補一覧を消して選択値を返す
    pub fn select(&mut self, vendor: &str) -> String {
        self.candidates.clear();
        self.visible = false;
        vendor.to_string()
    }

    /// 表示すべき候補（非表示または0件なら空）
    pub fn visible_candidates(&self) -> &[String] {
        if self.visible {
            &self.candidates
        } else {
            &[]
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}
