//! dashtop: terminal control surface for a single-host monitoring and
//! administration API. Streams live metrics over WebSocket, keeps bounded
//! history for the charts, and drives the admin panels over REST.

pub mod api;
pub mod app;
pub mod dispatch;
pub mod files;
pub mod history;
pub mod logging;
pub mod panels;
pub mod profiles;
pub mod thresholds;
pub mod types;
pub mod ui;
pub mod ws;
