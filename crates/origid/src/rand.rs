use crate::{Error, Result};

/// A source of cryptographically secure random bytes.
///
/// This abstraction allows you to plug in the real entropy pool or a
/// mocked source in tests. Seeding is the only fallible part of
/// generator construction, so the trait returns a [`Result`] rather
/// than panicking when entropy is unavailable.
///
/// # Example
/// ```
/// use origid::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn fill_bytes(&self, dest: &mut [u8]) -> origid::Result<()> {
///         dest.fill(0x42);
///         Ok(())
///     }
/// }
///
/// let mut buf = [0u8; 3];
/// FixedRand.fill_bytes(&mut buf).unwrap();
/// assert_eq!(buf, [0x42; 3]);
/// ```
pub trait RandSource {
    /// Fills `dest` with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;
}

/// A [`RandSource`] backed by the operating system's entropy pool.
///
/// Zero-sized; each call reads the OS source directly, so values are
/// safe to share freely across threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        getrandom::fill(dest).map_err(|_| Error::EntropyUnavailable)
    }
}
