#![allow(missing_docs)]

use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

use streamlines::{ReaderOptions, SplitExt, SplitMode, StreamLinesReader};

struct TempFile(PathBuf);

impl TempFile {
    fn with_contents(name: &str, contents: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!("streamlines-{}-{name}", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        Self(path)
    }

    fn open(&self) -> File {
        File::open(&self.0).unwrap()
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn collect(reader: &mut StreamLinesReader<File>) -> Vec<String> {
    let mut lines = Vec::new();
    while let Some(line) = reader.try_read_line().unwrap() {
        lines.push(line.to_owned());
    }
    lines
}

#[test]
fn reads_a_large_file_with_mixed_terminators() {
    let mut contents = String::new();
    let mut expected = Vec::new();
    for i in 0..5_000 {
        let line = format!("{i}: {}", "€a𐍈".repeat(i % 17));
        contents.push_str(&line);
        contents.push_str(["\n", "\r\n", "\r"][i % 3]);
        expected.push(line);
    }
    let file = TempFile::with_contents("mixed.txt", contents.as_bytes());

    let options = ReaderOptions {
        byte_buffer_size: 61,
        char_buffer_size: 3,
        owns_stream: true,
    };
    let mut reader = StreamLinesReader::with_options(file.open(), options);
    assert_eq!(collect(&mut reader), expected);
    assert!(reader.is_eof());

    // Rewind the file itself and read everything again.
    reader.reset_to_start().unwrap();
    assert_eq!(collect(&mut reader), expected);
    assert!(reader.dispose().is_none());
}

#[test]
fn csv_like_fields_from_a_file() {
    let file = TempFile::with_contents("fields.csv", b"id,name,,tag\r\n1,alpha,,x\r\n2,beta,,\r\n");
    let mut reader = StreamLinesReader::new(file.open());

    let mut rows = Vec::new();
    while let Some(line) = reader.try_read_line().unwrap() {
        let keep: Vec<String> = line
            .split_by(&[','], SplitMode::KeepEmpty)
            .map(str::to_owned)
            .collect();
        let compact = line.split_by(&[','], SplitMode::RemoveEmpty).count();
        rows.push((keep, compact));
    }

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].0, ["id", "name", "", "tag"]);
    assert_eq!(rows[0].1, 3);
    assert_eq!(rows[2].0, ["2", "beta", "", ""]);
    assert_eq!(rows[2].1, 2);
}
