pub mod app;
pub mod effects;
pub mod logging;
pub mod oneshot;
pub mod ui;
