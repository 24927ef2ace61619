//! Prints line statistics for a file (or standard input) without allocating
//! a string per line.
//!
//! Run with
//!
//! ```bash
//! cargo run -p streamlines --example line_stats -- path/to/file.txt
//! ```
//!
//! The first whitespace-separated field of every line is tallied as well, to
//! show the reader and the splitter working together on borrowed text.

use std::{
    collections::BTreeMap,
    env,
    error::Error,
    fs::File,
    io::{self, Read},
};

use streamlines::{ReaderOptions, SplitExt, SplitMode, StreamLinesReader};

fn main() -> Result<(), Box<dyn Error>> {
    let source: Box<dyn Read> = match env::args().nth(1) {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin().lock()),
    };

    let options = ReaderOptions {
        byte_buffer_size: 64 * 1024,
        ..Default::default()
    };
    let mut reader = StreamLinesReader::with_options(source, options);

    let mut lines = 0usize;
    let mut empty = 0usize;
    let mut longest = 0usize;
    let mut first_fields: BTreeMap<String, usize> = BTreeMap::new();

    while let Some(line) = reader.try_read_line()? {
        lines += 1;
        if line.is_empty() {
            empty += 1;
        }
        longest = longest.max(line.chars().count());

        if let Some(field) = line.split_by(&[' ', '\t'], SplitMode::RemoveEmpty).next() {
            // Only distinct fields are copied out of the borrowed line.
            match first_fields.get_mut(field) {
                Some(count) => *count += 1,
                None => {
                    first_fields.insert(field.to_owned(), 1);
                }
            }
        }
    }

    println!("lines:            {lines}");
    println!("empty lines:      {empty}");
    println!("longest (chars):  {longest}");
    println!("char buffer size: {}", reader.char_buffer_capacity());

    let mut top: Vec<_> = first_fields.into_iter().collect();
    top.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (field, count) in top.into_iter().take(10) {
        println!("{count:>8}  {field}");
    }

    reader.dispose();
    Ok(())
}
