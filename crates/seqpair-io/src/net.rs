use std::fs;
use std::path::Path;

use seqpair_core::net::Net;

use crate::error::{Error, Result};

/// Read a net file: one `i j` pair per line, 0-based into the companion rect file.
///
/// Parsing does not partially apply: either every line is valid or the whole
/// read fails, and no partial `Vec` is returned.
pub fn read_nets(path: impl AsRef<Path>, num_rects: usize) -> Result<Vec<Net>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;

    let mut nets = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let malformed = |detail: String| Error::Malformed { path: path.to_path_buf(), line: line_no + 1, detail };

        let [i, j] = tokens.as_slice() else {
            return Err(malformed(format!("expected 2 integers, found {}", tokens.len())));
        };
        let parse = |s: &str| s.parse::<usize>().map_err(|_| malformed(format!("'{s}' is not a non-negative integer")));
        let (i, j) = (parse(i)?, parse(j)?);

        for &index in &[i, j] {
            if index >= num_rects {
                return Err(Error::Core(seqpair_core::Error::NetIndexOutOfRange { index, len: num_rects }));
            }
        }
        if i == j {
            return Err(malformed(format!("net endpoints must differ, found '{i} {j}'")));
        }
        nets.push(Net::new(i, j));
    }
    Ok(nets)
}

/// Write a net list, one `i j` line per net.
pub fn write_nets(path: impl AsRef<Path>, nets: &[Net]) -> Result<()> {
    let path = path.as_ref();
    let mut text = String::new();
    for net in nets {
        text.push_str(&format!("{} {}\n", net.a, net.b));
    }
    fs::write(path, text).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("seqpair-io-test-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("nets.txt")
    }

    #[test]
    fn reads_valid_net_list() {
        let path = scratch_path("nets-ok");
        std::fs::write(&path, "0 1\n1 2\n").unwrap();
        let nets = read_nets(&path, 3).unwrap();
        assert_eq!(nets, vec![Net::new(0, 1), Net::new(1, 2)]);
    }

    #[test]
    fn rejects_out_of_range_index_without_partial_result() {
        let path = scratch_path("nets-oob");
        std::fs::write(&path, "0 1\n5 2\n").unwrap();
        let err = read_nets(&path, 3).unwrap_err();
        assert!(matches!(err, Error::Core(seqpair_core::Error::NetIndexOutOfRange { index: 5, len: 3 })));
    }

    #[test]
    fn rejects_a_self_loop_without_panicking() {
        let path = scratch_path("nets-self-loop");
        std::fs::write(&path, "0 1\n3 3\n").unwrap();
        let err = read_nets(&path, 4).unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 2, .. }));
    }

    #[test]
    fn write_then_read_round_trips() {
        let path = scratch_path("nets-roundtrip");
        let nets = vec![Net::new(0, 1), Net::new(2, 3)];
        write_nets(&path, &nets).unwrap();
        assert_eq!(read_nets(&path, 4).unwrap(), nets);
    }
}
