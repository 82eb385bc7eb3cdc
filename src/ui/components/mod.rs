//! Reusable UI components

pub mod picker_popup;
pub mod time_entry;

pub use picker_popup::PickerPopup;
pub use time_entry::TimeEntryComponent;
