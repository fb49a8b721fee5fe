use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// A relative seek on the data stream failed
    Seek(std::io::Error),
    /// A line was expected but the stream ended first
    UnexpectedEof,
    /// A request token that is not a positive line number
    BadRequest(String),
    /// On request for a line whose offset was never recorded
    OutOfBounds,
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Seek(e) => write!(
                f,
                "seek failed: {} (is the input a pipe? Requesting lines out of order needs a seekable input)",
                e
            ),
            Error::UnexpectedEof => write!(f, "failed to read line (reached end of input?)"),
            Error::BadRequest(token) => {
                write!(f, "invalid line number {:?} in the request file", token)
            }
            Error::OutOfBounds => write!(f, "no offset recorded for the requested line"),
        }
    }
}
