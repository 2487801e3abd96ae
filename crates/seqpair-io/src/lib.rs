//! File I/O for rectangles, nets and SA options, plus a random test-case
//! generator and overlap/cost verification helpers.

pub mod error;
pub mod net;
pub mod options;
pub mod rect;
pub mod testgen;
pub mod verify;

pub use error::{Error, Result};
pub use net::{read_nets, write_nets};
pub use options::read_options;
pub use rect::{read_rects, write_rects};
