//! Pull a single line directly out of an unindexed file

use seekline::Navigator;

fn main() {
    let file = std::fs::File::open("<some text file>").unwrap();
    let mut navigator = Navigator::new(file);

    // Read line 30 (zero-based 29)
    let line = navigator.fetch(29).unwrap();
    print!("{}", String::from_utf8_lossy(line));
}
