use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tap::Pipe;

#[derive(Debug, PartialEq)]
pub enum InputFormat {
    Plain,
    Gzip,
}

pub fn determine_input_format(file_path: &Path) -> InputFormat {
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    if file_name.ends_with(".gz") {
        InputFormat::Gzip
    } else {
        InputFormat::Plain
    }
}

/// Reads the RSID list at `file_path`, one identifier per line.
///
/// Gzip input is detected from the `.gz` extension.
pub fn read_rsids(file_path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(file_path)?;

    match determine_input_format(file_path) {
        InputFormat::Plain => BufReader::new(file).pipe(parse_rsids),
        InputFormat::Gzip => MultiGzDecoder::new(BufReader::new(file))
            .pipe(BufReader::new)
            .pipe(parse_rsids),
    }
}

/// Trims every line and drops the blank ones. Order and duplicates are kept.
pub fn parse_rsids<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut rsids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let rsid = line.trim();
        if !rsid.is_empty() {
            rsids.push(rsid.to_string());
        }
    }
    Ok(rsids)
}
