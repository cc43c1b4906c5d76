// dawgen: build a DAWG index from Word-List.txt.
//
// Reads the word list from the working directory and writes two images next
// to it: Word-List.dat (4 bytes per node) and Word-List.pak (bit-packed).
// Paths are fixed by convention; there are no flags. Progress is reported
// through `tracing`, so RUST_LOG=debug shows per-depth merge counts.
//
// Exits 0 on success. Any failure prints a single-line diagnostic to
// standard error and exits 1, leaving no partial output behind.

use std::fs;
use std::process;

use dawgen::error::{Error, Result};

const WORD_LIST_FILE: &str = "Word-List.txt";
const ENCODED_FILE: &str = "Word-List.dat";
const PACKED_FILE: &str = "Word-List.pak";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = run() {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let text = fs::read_to_string(WORD_LIST_FILE).map_err(Error::InputUnavailable)?;
    let words = dawgen::wordlist::parse_word_list(&text);

    let artifacts = dawgen::generate(&words)?;

    fs::write(ENCODED_FILE, &artifacts.dat).map_err(Error::OutputUnavailable)?;
    fs::write(PACKED_FILE, &artifacts.packed).map_err(Error::OutputUnavailable)?;
    tracing::info!(
        nodes = artifacts.node_count,
        dat_bytes = artifacts.dat.len(),
        packed_bytes = artifacts.packed.len(),
        "index written"
    );
    Ok(())
}
