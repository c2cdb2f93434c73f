pub mod error;
pub mod power;
pub mod state;

pub use error::{NotifyError, Result};
pub use power::PowerSource;
pub use state::BatteryReading;
