//! モックデータ（mock-scans.json）の取得
//!
//! 取得は各画面の初期化時に1回だけ。失敗時の再試行はしない。

use archive_nexus_common::MockData;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn js_error(e: JsValue) -> String {
    format!("{:?}", e)
}

/// モックデータを取得してパース
pub async fn fetch_mock_data(url: &str) -> Result<MockData, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or("window is not available")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(format!("HTTP error: {} ({})", resp.status(), url));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = text.as_string().ok_or("response body is not text")?;

    MockData::from_json(&text).map_err(|e| e.to_string())
}
