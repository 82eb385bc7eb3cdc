//! Timedock - a themed time-picker widget for terminal dashboards
//!
//! The widget renders a labelled entry field bound to a popup time picker,
//! adapts its colors to a host-supplied theme, reports the selected time
//! back to the host as an "hh:mm am/pm" string, and keeps the embedding
//! frame's height in step with its rendered size, including the expanded
//! state while the picker popup is open.
//!
//! # Modules
//!
//! * [`config`] - Demo host configuration management
//! * [`host`] - Host-frame protocol: arguments in, value and height out
//! * [`theme`] - Theme token resolution to terminal styling
//! * [`ui`] - Widget, picker popup, and the demo host loop
//! * [`utils`] - Time parsing/formatting and color helpers

/// Configuration module for the demo host
pub mod config;

/// Application constants and default values
pub mod constants;

/// Host-frame protocol and frame-height synchronization
pub mod host;

/// File logging behind the `log` facade
pub mod logger;

/// Host theme tokens and their resolution
pub mod theme;

/// Terminal user interface components and the demo host
pub mod ui;

/// Utility functions for time handling and colors
pub mod utils;
