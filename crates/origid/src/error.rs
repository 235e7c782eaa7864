/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `origid` can produce.
///
/// Id generation itself is infallible: every fallible path is either
/// parsing untrusted input or seeding a new generator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The text form was not exactly 20 characters of `0-9a-v`.
    ///
    /// Returned by parsing and decoding only; the caller can reject
    /// the input and ask for a new one. An invalid string is never
    /// substituted with a zero or default id.
    #[error("invalid id")]
    InvalidId,

    /// The operating system's entropy pool could not be read while
    /// seeding a generator.
    ///
    /// This is fatal for id issuance: without a random counter seed
    /// (or a fingerprint fallback), the uniqueness guarantee would be
    /// silently void. Treat it as a startup failure rather than
    /// retrying generation.
    #[error("entropy source unavailable")]
    EntropyUnavailable,

    /// A storage value held a scalar that is neither text nor bytes.
    #[error("unsupported storage value type: {0}")]
    TypeMismatch(&'static str),
}
