//! Detection Orchestration
//!
//! Reads the uploaded photo, waits the simulated analysis delay, runs the
//! estimator, and installs the result. The loading flag is reset on every
//! exit path; a failed run leaves the previous session state untouched.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::context::{AppContext, STATUS_DETECTING, STATUS_DONE, STATUS_ERROR};
use crate::estimator::{self, JsRandom, UuidIds};
use crate::store::SessionStore;

/// Fixed artificial analysis delay standing in for model inference time
pub const DETECTION_DELAY_MS: u32 = 900;

pub async fn run_detection(store: SessionStore, ctx: AppContext, file: web_sys::File) {
    if ctx.detecting.get_untracked() {
        return;
    }
    ctx.set_detecting(true);
    ctx.set_status(STATUS_DETECTING);

    match detect_from_file(store, &file).await {
        Ok(count) => {
            web_sys::console::log_1(
                &format!("[DETECT] {} item(s) from {:?}", count, file.name()).into(),
            );
            ctx.set_status(STATUS_DONE);
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[DETECT] {}", err).into());
            ctx.set_status(STATUS_ERROR);
        }
    }
    ctx.set_detecting(false);
}

async fn detect_from_file(store: SessionStore, file: &web_sys::File) -> Result<usize, String> {
    // the one real I/O step; nothing is mutated until it succeeds
    let data_url = read_as_data_url(file).await?;

    TimeoutFuture::new(DETECTION_DELAY_MS).await;

    let items = estimator::estimate(&file.name(), &mut JsRandom, &mut UuidIds);
    let count = items.len();
    store.install_detection(data_url, items);
    Ok(count)
}

/// Reads a File to a data URL, bridging FileReader's callbacks into a future.
async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let reader = match web_sys::FileReader::new() {
            Ok(reader) => reader,
            Err(err) => {
                let _ = reject.call1(&JsValue::NULL, &err);
                return;
            }
        };

        let reader_for_load = reader.clone();
        let reject_for_load = reject.clone();
        let onload = Closure::once_into_js(move |_: web_sys::Event| {
            match reader_for_load.result() {
                Ok(value) => {
                    let _ = resolve.call1(&JsValue::NULL, &value);
                }
                Err(err) => {
                    let _ = reject_for_load.call1(&JsValue::NULL, &err);
                }
            }
        });
        reader.set_onload(Some(onload.unchecked_ref()));

        let reject_for_error = reject.clone();
        let onerror = Closure::once_into_js(move |_: web_sys::Event| {
            let _ = reject_for_error.call1(&JsValue::NULL, &JsValue::from_str("read error"));
        });
        reader.set_onerror(Some(onerror.unchecked_ref()));

        if let Err(err) = reader.read_as_data_url(file) {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });

    let value = JsFuture::from(promise)
        .await
        .map_err(|err| format!("file read failed: {:?}", err))?;
    value
        .as_string()
        .ok_or_else(|| "file read produced no data".to_string())
}
