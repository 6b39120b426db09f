use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub struct Reader {
    inner: BufReader<File>,
}

impl Reader {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Reader {
            inner: BufReader::new(file),
        })
    }

    // Lines come back with the trailing \n or \r\n already stripped; the
    // writer adds the newline back after normalization.
    pub fn lines(self) -> io::Lines<BufReader<File>> {
        self.inner.lines()
    }
}

#[cfg(test)]
mod tests {
    use super::Reader;

    #[test]
    fn yields_lines_without_their_newlines() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "one\ntwo\r\nthree").expect("write input");

        let lines: Vec<_> = Reader::open(&path)
            .expect("open input")
            .lines()
            .collect::<Result<_, _>>()
            .expect("read lines");

        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn open_reports_missing_files() {
        let dir = tempfile::tempdir().expect("create temp dir");

        assert!(Reader::open(dir.path().join("missing.txt")).is_err());
    }
}
