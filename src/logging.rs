//! ログ初期化
//!
//! `RUST_LOG` があれば優先。なければ `archive_nexus=info`、`--verbose` で debug。

use tracing_subscriber::EnvFilter;

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "archive_nexus=debug,archive_nexus_common=debug"
    } else {
        "archive_nexus=info,archive_nexus_common=info"
    }
}

pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // 進捗バーと混ざらないよう stderr へ
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
