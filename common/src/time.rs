//! 相対時刻表示（"5 minutes ago" 形式）

use chrono::{DateTime, Utc};

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

/// `then` から `now` までの距離を英語で表す
///
/// 未来の時刻は "in ..."、過去は "... ago"。
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let future = delta.num_seconds() < 0;
    let seconds = delta.num_seconds().abs();

    let minutes = (seconds + 30) / 60;
    let hours = (minutes + 30) / 60;
    let days = (hours + 12) / 24;
    let months = (days + 15) / 30;

    let distance = if seconds < 30 {
        "less than a minute".to_string()
    } else if minutes < 45 {
        plural(minutes.max(1), "minute")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if hours < 24 {
        format!("about {}", plural(hours, "hour"))
    } else if hours < 42 {
        "1 day".to_string()
    } else if days < 30 {
        plural(days, "day")
    } else if months < 12 {
        plural(months.max(1), "month")
    } else {
        format!("about {}", plural((days + 182) / 365, "year"))
    };

    if future {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

/// RFC3339文字列版。解釈できない場合は "Unknown time"
pub fn format_relative_str(timestamp: &str, now: DateTime<Utc>) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(t) => format_relative(t.with_timezone(&Utc), now),
        Err(_) => "Unknown time".to_string(),
    }
}
