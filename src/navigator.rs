use std::io::{prelude::*, BufReader, SeekFrom};

use log::debug;

use crate::{error::Error, index::Index, Result};

/// A wrapper around `BufReader<R>` which hands out single lines by number and builds its line
/// index on the fly.
///
/// Lines that were already passed are reached by seeking to their recorded offset; lines beyond
/// the furthest visited point are reached by scanning forward, recording every new line boundary
/// on the way. The stream is expected to be positioned at offset 0 when handed over.
#[derive(Debug)]
pub struct Navigator<R: Read + Seek> {
    reader: BufReader<R>,
    index: Index,
    /// Line number the navigator considers itself positioned at. May lag the real stream
    /// position by one line right after a rewind.
    curr_line: usize,
    /// Highest line number whose starting offset has been recorded
    furthest: usize,
    /// Absolute byte offset of the stream position. Kept in sync with every read and seek and
    /// used as the origin for relative seeks.
    pos: u64,
    /// Reused for every line read
    line_buf: Vec<u8>,
}

impl<R: Read + Seek> Navigator<R> {
    #[inline]
    pub fn new(reader: R) -> Navigator<R> {
        Self {
            reader: BufReader::new(reader),
            index: Index::new(),
            curr_line: 0,
            furthest: 0,
            pos: 0,
            line_buf: Vec::with_capacity(1000),
        }
    }

    /// Find line `want` (zero-based) and return its raw bytes, newline included. The final line
    /// of the stream may come back without a trailing newline.
    ///
    /// Repeated and out-of-order requests are allowed. Rewinding leaves the navigator positioned
    /// *at* the delivered line while every forward strategy advances past it, so an overlapping
    /// request sequence re-delivers the line and then continues behind it.
    pub fn fetch(&mut self, want: usize) -> Result<&[u8]> {
        // The boundary the stream currently sits on is new whenever we are at (or past) the
        // furthest visited line. Record it before any strategy needs it as a seek target.
        if self.curr_line >= self.furthest {
            self.index.record(self.curr_line, self.pos);
        }

        // Rewind. The target offset is known: every line below curr_line was passed before.
        if want < self.curr_line {
            debug!("rewinding to line {}", want);
            self.seek_to_line(want)?;
            self.read_one_line()?;
            self.curr_line = want;
            return Ok(&self.line_buf);
        }

        if self.furthest > self.curr_line {
            // We have been further than this point before, so at least part of the way ahead is
            // already indexed.
            if want <= self.furthest {
                // Passed previously, then rewound: jump straight to it
                debug!("fast-forwarding to cached line {}", want);
                self.seek_to_line(want)?;
                self.read_one_line()?;
                self.curr_line = want + 1;
                return Ok(&self.line_buf);
            }

            // Wanted line is beyond anything visited: jump to the furthest known point and scan
            // the rest of the way
            debug!("fast-forwarding to furthest line {}", self.furthest);
            self.seek_to_line(self.furthest)?;
            self.curr_line = self.furthest;
        }

        // Advance line by line, recording each newly crossed boundary, until the wanted line
        // is the next one
        while self.curr_line < want {
            self.read_one_line()?;
            self.curr_line += 1;
            self.index.record(self.curr_line, self.pos);
        }

        self.read_one_line()?;
        self.curr_line += 1;
        self.furthest = self.furthest.max(self.curr_line);
        Ok(&self.line_buf)
    }

    /// Seek the stream to the recorded offset of `line`, as a relative jump from the current
    /// position. The seek always reaches the underlying stream, even for a zero delta, so a
    /// non-seekable input fails on the first jump rather than at some later one.
    fn seek_to_line(&mut self, line: usize) -> Result<()> {
        let target = self.index.get(line)?;
        let delta = target as i64 - self.pos as i64;

        let new_pos = self
            .reader
            .seek(SeekFrom::Current(delta))
            .map_err(Error::Seek)?;
        debug_assert_eq!(new_pos, target);

        self.pos = target;
        Ok(())
    }

    /// Read one line, including its newline, into the reused line buffer. Reaching end of
    /// stream instead of a line is an error.
    fn read_one_line(&mut self) -> Result<usize> {
        self.line_buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.line_buf)?;

        if n == 0 {
            return Err(Error::UnexpectedEof);
        }

        self.pos += n as u64;
        Ok(n)
    }

    /// Returns a reference to the line index built so far
    #[inline]
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// The line number the navigator is positioned at
    #[inline]
    pub fn current_line(&self) -> usize {
        self.curr_line
    }

    /// The highest line number whose offset has been recorded so far
    #[inline]
    pub fn furthest_line(&self) -> usize {
        self.furthest
    }
}
