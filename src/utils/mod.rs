pub mod calendar;
pub mod dir;
pub mod logging;
pub mod progress;
