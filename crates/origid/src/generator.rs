use crate::counter::Counter;
use crate::id::{OrigId, RAW_LEN};
use crate::{OsRandom, RandSource, Result, TimeSource, WallClock, machine};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Issues fresh [`OrigId`]s for this process.
///
/// The generator owns the three pieces of per-process state every id
/// embeds: the machine fingerprint, the truncated process id, and the
/// 24-bit sequence counter. Construct one at startup and share it
/// (for example behind an `Arc`) with every call site; [`next_id`]
/// takes `&self` and is safe to call from many threads at once — the
/// counter advance is the only shared mutation and it is a single
/// atomic read-modify-write.
///
/// # Example
/// ```
/// use origid::IdGenerator;
///
/// let generator = IdGenerator::new().expect("entropy available");
/// let id = generator.next_id();
/// assert_eq!(id.to_string().len(), 20);
/// ```
///
/// [`next_id`]: IdGenerator::next_id
pub struct IdGenerator<C = WallClock> {
    machine_id: [u8; 3],
    pid: u16,
    counter: Counter,
    clock: C,
}

impl IdGenerator<WallClock> {
    /// Creates a generator seeded from the host name, the OS process
    /// id, and the operating system's entropy pool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`] if secure randomness
    /// cannot be obtained for the counter seed, or for the machine
    /// fingerprint when the host name is also unavailable. A process
    /// in that state must not issue ids.
    ///
    /// [`Error::EntropyUnavailable`]: crate::Error::EntropyUnavailable
    pub fn new() -> Result<Self> {
        Self::with_clock(WallClock)
    }
}

impl<C: TimeSource> IdGenerator<C> {
    /// Like [`IdGenerator::new`], with a caller-provided clock.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all))]
    pub fn with_clock(clock: C) -> Result<Self> {
        Self::with_parts(clock, &OsRandom)
    }

    /// Fully explicit construction: a clock plus the random source
    /// used to seed the counter and the fingerprint fallback.
    pub fn with_parts<R: RandSource>(clock: C, rand: &R) -> Result<Self> {
        Ok(Self {
            machine_id: machine::machine_id(rand)?,
            pid: machine::process_id(),
            counter: Counter::seeded(rand)?,
            clock,
        })
    }

    /// Restores a generator from explicit component values.
    ///
    /// The first id issued carries a counter of `counter_seed + 1`.
    /// Useful for tests and for controlling the starting point
    /// manually; prefer [`IdGenerator::new`] otherwise.
    pub fn from_parts(machine_id: [u8; 3], pid: u16, counter_seed: u32, clock: C) -> Self {
        Self {
            machine_id,
            pid,
            counter: Counter::starting_at(counter_seed),
            clock,
        }
    }

    /// Returns a fresh id.
    ///
    /// Never fails: a constructed generator has everything it needs.
    /// Each call advances the shared counter exactly once, so ids
    /// issued within the same second still differ and preserve their
    /// relative issue order.
    pub fn next_id(&self) -> OrigId {
        let mut raw = [0u8; RAW_LEN];
        raw[0..4].copy_from_slice(&self.clock.unix_secs().to_be_bytes());
        raw[4..7].copy_from_slice(&self.machine_id);
        raw[7..9].copy_from_slice(&self.pid.to_be_bytes());
        let seq = self.counter.next();
        raw[9] = (seq >> 16) as u8;
        raw[10] = (seq >> 8) as u8;
        raw[11] = seq as u8;
        OrigId::from_bytes(raw)
    }
}
