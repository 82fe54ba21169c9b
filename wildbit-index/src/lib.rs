#![allow(dead_code)]

mod bitmap;
mod builder;
mod index;
mod positional;


pub use bitmap::RowBitmap;
pub use builder::{build, DEFAULT_CAP_LEN};
pub use index::Index;
