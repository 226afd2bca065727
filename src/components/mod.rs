//! UI Components
//!
//! Reusable Leptos components.

mod add_custom_form;
mod detected_item_list;
mod summary_panel;
mod upload_box;

pub use add_custom_form::AddCustomForm;
pub use detected_item_list::DetectedItemList;
pub use summary_panel::SummaryPanel;
pub use upload_box::UploadBox;
