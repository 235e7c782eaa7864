use crate::{RandSource, Result};
use sha2::{Digest, Sha256};

/// Derives the 3-byte machine fingerprint embedded in every id.
///
/// The host's network name is hashed and the first three digest bytes
/// are kept. A host without a resolvable name falls back to random
/// bytes; if the entropy source is also unavailable, the error
/// propagates and generator construction fails.
pub(crate) fn machine_id<R: RandSource>(rand: &R) -> Result<[u8; 3]> {
    let mut id = [0u8; 3];
    match hostname::get() {
        Ok(name) => {
            let digest = Sha256::digest(name.as_encoded_bytes());
            id.copy_from_slice(&digest[..3]);
        }
        Err(_) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("hostname unavailable, using a random machine fingerprint");
            rand.fill_bytes(&mut id)?;
        }
    }
    Ok(id)
}

/// The OS process id truncated to 16 bits.
///
/// The high bits are dropped on platforms with wider pids; uniqueness
/// relies on the full (time, machine, pid, counter) tuple, not on the
/// pid alone.
pub(crate) fn process_id() -> u16 {
    std::process::id() as u16
}
