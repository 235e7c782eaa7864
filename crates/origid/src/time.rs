use std::time::{SystemTime, UNIX_EPOCH};

/// A trait for time sources that return wall-clock seconds.
///
/// This abstraction allows you to plug in the real system clock or a
/// mocked time source in tests. The unit is whole seconds since the
/// Unix epoch; ids carry no finer time resolution, and the sequence
/// counter is the tiebreaker within a second.
///
/// # Example
/// ```
/// use origid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn unix_secs(&self) -> u32 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedTime.unix_secs(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in whole seconds since the Unix epoch.
    fn unix_secs(&self) -> u32;
}

/// The system wall clock.
#[derive(Default, Clone, Copy, Debug)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn unix_secs(&self) -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before UNIX_EPOCH")
            .as_secs() as u32
    }
}
