pub mod app;
pub mod constants;
pub mod loader;
pub mod logging;
pub mod render;
pub mod settings;
