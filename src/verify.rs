//! Round-trip verification of an encoded graph.

use crate::checksum::{word_list_checksum, Checksum};
use crate::codec::Dawg;
use crate::error::{Error, Result};
use crate::wordlist::length_then_lex;

/// Reconstructs the lexicon from a 4-byte file image, restores canonical
/// order and checks its checksum against the checksum of the input list.
///
/// A mismatch means the build produced a graph that accepts a different
/// language than it was given; the pipeline treats that as fatal before any
/// file is written.
pub fn verify(dat: &[u8], expected: &Checksum) -> Result<()> {
    let dawg = Dawg::from_dat(dat)?;
    let mut words = dawg.words();
    words.sort_unstable_by(|a, b| length_then_lex(a, b));
    if word_list_checksum(&words) == *expected {
        Ok(())
    } else {
        Err(Error::IntegrityFailure)
    }
}
