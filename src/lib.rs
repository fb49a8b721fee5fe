//!A small library to extract arbitrary lines from large seekable streams, indexing line offsets
//!lazily while reading

pub mod error;
/// The lazily built index of line start offsets
pub mod index;
/// Seek/scan navigation over the data stream
pub mod navigator;
/// The source of requested line numbers
pub mod requests;

pub use navigator::Navigator;
pub use requests::Requests;

use std::io::{BufRead, Read, Seek, Write};

pub type Result<T> = std::result::Result<T, error::Error>;

/// Drives a full extraction: every requested line is fetched through `navigator` and written to
/// `out` right away, in request order and with its line terminator intact.
///
/// Stops at the first error. Lines matched before it have already been written, so callers get
/// partial output followed by the error, never a rolled-back result.
pub fn extract<B, R, W>(
    requests: Requests<B>,
    navigator: &mut Navigator<R>,
    out: &mut W,
) -> Result<()>
where
    B: BufRead,
    R: Read + Seek,
    W: Write,
{
    for want in requests {
        out.write_all(navigator.fetch(want?)?)?;
    }

    Ok(())
}
