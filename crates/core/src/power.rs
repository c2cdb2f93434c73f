use crate::state::BatteryReading;

/// Anything the popup loop can poll for battery and AC state.
///
/// Implementations must not fail: unreadable sources report an invalid
/// reading and `false` for AC.
pub trait PowerSource {
    fn reading(&self) -> BatteryReading;

    fn ac_online(&self) -> bool;

    fn percentage_message(&self) -> String {
        self.reading().message()
    }
}
