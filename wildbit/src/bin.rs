//! Illustrative only (spec.md §1/§6 keep the CLI/RPC surface out of scope):
//! reads newline-delimited corpus records from stdin, builds an index, and
//! runs one pattern supplied as the first argument.

use std::io::{BufRead, Write};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(pattern) = args.next() else {
        eprintln!("usage: wildbit <pattern>  (corpus fed as newline-delimited records on stdin)");
        std::process::exit(2);
    };

    let stdin = std::io::stdin();
    let source: Vec<Result<Vec<u8>, std::io::Error>> = stdin
        .lock()
        .lines()
        .map(|line| line.map(String::into_bytes))
        .collect();

    let handle = match wildbit::build(source) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("build failed: {err:?}");
            std::process::exit(1);
        }
    };

    let mut out = std::io::stdout().lock();
    for (id, bytes) in handle.query_rows(pattern.as_bytes()) {
        let _ = write_row(&mut out, id, bytes);
    }
}

// Writes raw bytes, not lossy UTF-8, since a record may not be valid text.
fn write_row(out: &mut impl std::io::Write, id: u32, bytes: &[u8]) -> std::io::Result<()> {
    write!(out, "{id}\t")?;
    out.write_all(bytes)?;
    out.write_all(b"\n")
}
