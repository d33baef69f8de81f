//! System orchestration: startup, intent dispatch, navigation and shutdown.

pub mod board_system;
pub mod intent;
pub mod telemetry;

pub use board_system::*;
pub use intent::*;
pub use telemetry::*;
