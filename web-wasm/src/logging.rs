//! ブラウザコンソールへのログ出力
//!
//! tracing-subscriber の fmt レイヤーを console.* に流す。
//! WASMでは時刻取得ができないためタイムスタンプは付けない。

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// 1イベント分をバッファし、破棄時にレベルに応じた console メソッドへ出力
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    pub fn buffered(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let message = self.buffered();
        if message.is_empty() {
            return;
        }
        let value = JsValue::from_str(&message);
        match self.level {
            Level::ERROR => console::error_1(&value),
            Level::WARN => console::warn_1(&value),
            Level::INFO => console::info_1(&value),
            _ => console::debug_1(&value),
        }
    }
}

pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// ログ初期化（二重初期化は無視）
pub fn init_logging() {
    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_ansi(false)
        .without_time()
        .with_max_level(max_level)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
