//! Error types for the generation pipeline.

use thiserror::Error;

/// Result type alias using our [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal pipeline errors.
///
/// None of these are recoverable: the generator aborts with a single-line
/// diagnostic and leaves no partial output behind. Deeper invariants that
/// only a broken build could violate are guarded with `debug_assert!`
/// instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The word list could not be opened or read.
    #[error("cannot read word list: {0}")]
    InputUnavailable(std::io::Error),

    /// An output binary could not be created or written.
    #[error("cannot write binary file: {0}")]
    OutputUnavailable(std::io::Error),

    /// The minimized graph has more nodes than the 20-bit child index field
    /// can address.
    #[error("node count {0} exceeds the 20-bit index limit of {max}", max = crate::codec::MAX_CHILD_INDEX)]
    CapacityExceeded(usize),

    /// The lexicon reconstructed from the encoded binary does not hash back
    /// to the checksum of the input word list.
    #[error("round-trip checksum mismatch between input and encoded graph")]
    IntegrityFailure,

    /// A graph or stream invariant was violated (programmer error).
    #[error("malformed internal state: {0}")]
    MalformedInternalState(&'static str),
}
