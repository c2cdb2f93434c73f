//! Battery and AC state from the Linux sysfs power-supply interface.

pub mod battery;

pub use battery::{is_ac_online, read_percentage, PowerSupply};
