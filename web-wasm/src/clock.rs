//! ブラウザ時刻と乱数

use chrono::{DateTime, Utc};

pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// サンプルファイル選択用の乱数値
pub fn random_roll() -> u32 {
    (js_sys::Math::random() * f64::from(u32::MAX)) as u32
}
