//! Run a full extraction: line numbers from one file, data from another, matches to stdout

use std::fs::File;
use std::io::{self, BufReader, Write};

use seekline::{extract, Navigator, Requests};

fn main() {
    let requests = Requests::new(BufReader::new(File::open("<request file>").unwrap()));
    let mut navigator = Navigator::new(File::open("<data file>").unwrap());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    extract(requests, &mut navigator, &mut out).unwrap();
    out.flush().unwrap();
}
