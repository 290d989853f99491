//! dsviz-serve: line-oriented JSON front end for the dsviz structures.
//!
//! Reads one request per stdin line and writes one response per stdout line.
//! Logs go to stderr so they never interleave with responses.
//!
//! ```bash
//! echo '{"id":1,"op":"graph.new","args":[4]}' | dsviz-serve
//! dsviz-serve --hash-buckets 16 --log-level debug
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dsviz-serve")]
#[command(about = "Serve graph, AVL, heap and hash table operations over stdin/stdout")]
#[command(version)]
struct Args {
    /// Capacity of newly constructed binary heaps
    #[arg(long)]
    heap_capacity: Option<i64>,

    /// Bucket count of newly constructed hash tables
    #[arg(long)]
    hash_buckets: Option<i64>,

    /// Largest vertex count graph construction accepts
    #[arg(long)]
    max_vertices: Option<i64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .with_context(|| format!("invalid log filter '{}'", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let overrides = [
        ("heap_capacity", args.heap_capacity),
        ("hash_buckets", args.hash_buckets),
        ("max_vertices", args.max_vertices),
    ];
    for (name, value) in overrides {
        if let Some(value) = value {
            dsviz_ext::set_setting(name, value)
                .with_context(|| format!("--{}", name.replace('_', "-")))?;
        }
    }

    tracing::info!(settings = ?dsviz_ext::status().settings, "dsviz-serve ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut served = 0u64;
    for line in stdin.lock().lines() {
        let line = line.context("reading request")?;
        if line.trim().is_empty() {
            continue;
        }
        let response = dsviz_ext::handle_line(&line);
        writeln!(stdout, "{response}").context("writing response")?;
        stdout.flush().context("flushing response")?;
        served += 1;
    }

    tracing::info!(served, "stdin closed, exiting");
    Ok(())
}
