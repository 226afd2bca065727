//! Application Context
//!
//! Shared UI signals provided via Leptos Context API.

use leptos::prelude::*;

pub const STATUS_IDLE: &str = "写真をアップロードして解析を開始";
pub const STATUS_RESTORED: &str = "前回の解析結果を読み込みました";
pub const STATUS_DETECTING: &str = "AI が食品を検出中…";
pub const STATUS_DONE: &str = "検出が完了しました。内容を微調整できます。";
pub const STATUS_ERROR: &str = "解析中にエラーが発生しました";

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// True while a detection run is in flight - read
    pub detecting: ReadSignal<bool>,
    /// True while a detection run is in flight - write
    set_detecting: WriteSignal<bool>,
    /// Status line shown above the item list - read
    pub status: ReadSignal<String>,
    /// Status line shown above the item list - write
    set_status: WriteSignal<String>,
}

impl AppContext {
    pub fn new(
        detecting: (ReadSignal<bool>, WriteSignal<bool>),
        status: (ReadSignal<String>, WriteSignal<String>),
    ) -> Self {
        Self {
            detecting: detecting.0,
            set_detecting: detecting.1,
            status: status.0,
            set_status: status.1,
        }
    }

    pub fn set_detecting(&self, value: bool) {
        self.set_detecting.set(value);
    }

    pub fn set_status(&self, message: &str) {
        self.set_status.set(message.to_string());
    }
}
