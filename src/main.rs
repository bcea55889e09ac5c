//! Thin command-line wrapper: reads URLs on stdin, writes
//! `canonical<TAB>surt` per line using the aggressive profile. Unparseable
//! lines are logged and skipped.

use std::io::{self, BufRead, Write};

use tracing::warn;
use tracing_subscriber::EnvFilter;

use surturl::{parse, Canonicalizer};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let canonicalizer = Canonicalizer::aggressive();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse(&line, false) {
            Ok(mut url) => {
                canonicalizer.canonicalize(&mut url);
                if writeln!(out, "{}\t{}", url.url_string(), url.surt_string(true)).is_err() {
                    break;
                }
            }
            Err(err) => warn!(url = %line, error = %err, "skipping unparseable URL"),
        }
    }
}
