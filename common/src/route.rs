//! 画面ルーティング
//!
//! ベースパス配下の `/scan` と `/data-entry`。`/` は `/scan` へ転送し、
//! それ以外は Not Found。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Scan,
    DataEntry,
    NotFound,
}

impl Route {
    /// ベースパスからの相対パス
    pub fn path(&self) -> &'static str {
        match self {
            Route::Scan => "/scan",
            Route::DataEntry => "/data-entry",
            Route::NotFound => "/404",
        }
    }

    /// ブラウザのパス名から画面を決定
    ///
    /// 戻り値の2番目は転送が必要か（`/` へのアクセス）。
    pub fn resolve(pathname: &str, base_path: &str) -> (Route, bool) {
        let base = base_path.trim_end_matches('/');
        let Some(rest) = pathname.strip_prefix(base) else {
            return (Route::NotFound, false);
        };
        // "/digitize-archive-nexusXYZ" のような前方一致は除外
        if !(rest.is_empty() || rest.starts_with('/')) {
            return (Route::NotFound, false);
        }
        match rest.trim_end_matches('/') {
            "" => (Route::Scan, true),
            "/scan" => (Route::Scan, false),
            "/data-entry" => (Route::DataEntry, false),
            _ => (Route::NotFound, false),
        }
    }

    /// ベースパス付きのURL
    pub fn href(&self, base_path: &str) -> String {
        format!("{}{}", base_path.trim_end_matches('/'), self.path())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Scan => "Scan (المسح)",
            Route::DataEntry => "Data Entry (إدخال البيانات)",
            Route::NotFound => "Not Found",
        }
    }
}
