//! Archive Nexus Common Library
//!
//! CLIとWeb(WASM)で共有される型と状態管理

pub mod config;
pub mod error;
pub mod form;
pub mod maintenance;
pub mod mock;
pub mod notify;
pub mod route;
pub mod session;
pub mod shelf;
pub mod time;
pub mod types;
pub mod vendor;
pub mod viewer;

pub use config::{AppConfig, ScanTiming};
pub use error::{Error, Result};
pub use form::{Field, InvoiceEntry, InvoiceForm, SaveAction, SaveOutcome, Violation};
pub use maintenance::MaintenanceAction;
pub use mock::MockData;
pub use notify::{BilingualText, Notification, NotificationVariant};
pub use route::Route;
pub use session::{ScanPhase, ScanSession, ScanTick};
pub use shelf::{Axis, ShelfLocation};
pub use types::{NewScannedFile, ScannedFileRecord};
pub use vendor::filter_vendors;
pub use viewer::{Carousel, Rotation, ViewTransform};
