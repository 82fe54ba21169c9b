#![allow(dead_code)]

mod atoms;
mod emit;
mod plan;
mod verify;

#[cfg(test)]
mod test;

pub use emit::{count, emit_ids, emit_rows};
pub use plan::query_bitmap;
