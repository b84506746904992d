use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Open the report stream named on the command line.
///
/// `-` selects standard input; anything else is opened as a file. The handle
/// is buffered and closed on drop, whichever way the run ends.
pub fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "SA: a/b/c/1.0/2.0").unwrap();
        drop(file);

        let mut reader = open(&path).unwrap();
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line, "SA: a/b/c/1.0/2.0\n");
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-report.txt");
        // Take the error by match: the Ok side is an opaque reader
        let err = match open(&path) {
            Ok(_) => panic!("open succeeded on a missing file"),
            Err(err) => err,
        };
        // The message names the path the user gave
        assert!(err.to_string().contains("no-such-report.txt"), "{}", err);
        match err {
            Error::Open { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_dash_selects_stdin() {
        assert!(open(Path::new("-")).is_ok());
    }
}
