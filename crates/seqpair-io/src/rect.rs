use std::fs;
use std::path::Path;

use seqpair_core::layout::{FormatPolicy, Layout};

use crate::error::{Error, Result};

/// Read a rect file: one rectangle per line, `x_lb y_lb x_rt y_rt`.
///
/// Width/height are derived as `x_rt - x_lb` / `y_rt - y_lb`; the lower-left
/// corner is discarded since positions are overwritten by an evaluator.
pub fn read_rects(path: impl AsRef<Path>) -> Result<Layout> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;

    let mut layout = Layout::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let malformed = |detail: String| Error::Malformed { path: path.to_path_buf(), line: line_no + 1, detail };

        let [x_lb, y_lb, x_rt, y_rt] = tokens.as_slice() else {
            return Err(malformed(format!("expected 4 integers, found {}", tokens.len())));
        };
        let parse = |s: &str| s.parse::<i64>().map_err(|_| malformed(format!("'{s}' is not an integer")));
        let (x_lb, y_lb, x_rt, y_rt) = (parse(x_lb)?, parse(y_lb)?, parse(x_rt)?, parse(y_rt)?);

        let (width, height) = (x_rt - x_lb, y_rt - y_lb);
        if width < 1 || height < 1 {
            return Err(malformed(format!("non-positive rectangle dimensions ({width} x {height})")));
        }
        layout.push(width, height);
    }
    Ok(layout)
}

/// Write a layout's final placement, one `x_lb y_lb x_rt y_rt` line per rectangle.
pub fn write_rects(path: impl AsRef<Path>, layout: &Layout) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, layout.format(FormatPolicy::NoDelim)).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_widths_and_heights() {
        let dir = std::env::temp_dir().join(format!("seqpair-io-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rects.txt");

        let mut layout = Layout::new();
        layout.push(4, 6);
        layout.push(3, 7);
        write_rects(&path, &layout).unwrap();

        let read_back = read_rects(&path).unwrap();
        assert_eq!(read_back.widths(), layout.widths());
        assert_eq!(read_back.heights(), layout.heights());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn rejects_wrong_token_count() {
        let dir = std::env::temp_dir().join(format!("seqpair-io-test-malformed-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.txt");
        std::fs::write(&path, "0 0 4\n").unwrap();

        assert!(matches!(read_rects(&path), Err(Error::Malformed { .. })));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let dir = std::env::temp_dir().join(format!("seqpair-io-test-nonpos-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.txt");
        std::fs::write(&path, "0 0 0 4\n").unwrap();

        assert!(matches!(read_rects(&path), Err(Error::Malformed { .. })));
        std::fs::remove_dir_all(&dir).ok();
    }
}
