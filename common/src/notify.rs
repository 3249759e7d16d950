//! 通知（トースト）メッセージ

use std::fmt;

use serde::{Deserialize, Serialize};

/// 英語・アラビア語の併記テキスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub en: String,
    pub ar: String,
}

impl BilingualText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }
}

/// 表示形式: `English (العربية)`
impl fmt::Display for BilingualText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ar.is_empty() {
            write!(f, "{}", self.en)
        } else {
            write!(f, "{} ({})", self.en, self.ar)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

impl NotificationVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationVariant::Default => "default",
            NotificationVariant::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}
