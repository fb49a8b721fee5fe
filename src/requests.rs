use std::collections::VecDeque;
use std::io::BufRead;

use crate::{error::Error, Result};

/// Streams requested line numbers out of a reader.
///
/// The source holds whitespace/newline-separated 1-based line numbers; the iterator converts
/// them to zero-based indices one token at a time, so work done for earlier requests is not
/// lost when a later token turns out to be garbage.
#[derive(Debug)]
pub struct Requests<B> {
    source: B,
    line: String,
    pending: VecDeque<String>,
}

impl<B: BufRead> Requests<B> {
    #[inline]
    pub fn new(source: B) -> Requests<B> {
        Self {
            source,
            line: String::new(),
            pending: VecDeque::new(),
        }
    }

    /// Parse a single token as a 1-based line number and shift it to zero-based
    fn parse_token(token: &str) -> Result<usize> {
        match token.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n - 1),
            _ => Err(Error::BadRequest(token.to_owned())),
        }
    }
}

impl<B: BufRead> Iterator for Requests<B> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Self::parse_token(&token));
            }

            self.line.clear();
            match self.source.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }

            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
    }
}
