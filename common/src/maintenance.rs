//! スキャナ保守メニュー

use crate::notify::{BilingualText, Notification};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceAction {
    FeederCleaningLog,
    RollerLifeCounter,
    ResetCounter,
}

impl MaintenanceAction {
    pub const ALL: [MaintenanceAction; 3] = [
        MaintenanceAction::FeederCleaningLog,
        MaintenanceAction::RollerLifeCounter,
        MaintenanceAction::ResetCounter,
    ];

    pub fn label(&self) -> BilingualText {
        match self {
            MaintenanceAction::FeederCleaningLog => {
                BilingualText::new("Feeder Cleaning Log", "سجل تنظيف المغذي")
            }
            MaintenanceAction::RollerLifeCounter => {
                BilingualText::new("Roller Life Counter", "عداد عمر الأسطوانات")
            }
            MaintenanceAction::ResetCounter => BilingualText::new("Reset Counter", "إعادة تعيين العداد"),
        }
    }

    /// 選択時の通知
    pub fn notification(&self) -> Notification {
        Notification::info("Maintenance Action", format!("{} selected", self.label().en))
    }
}
