//! Terminal user interface for the widget and its demo host.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app::HostApp;
pub use layout::LayoutManager;
pub use renderer::run_app;
