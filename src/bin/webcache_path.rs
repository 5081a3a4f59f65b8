/// Prints the original-site path for each cache-viewer URL.
/// URLs come from the arguments, or one per line on stdin when there are none.
use std::env;
use std::error::Error;
use std::io::{self, BufRead, BufWriter, Write};

use tracing_subscriber::EnvFilter;
use webcache_location::{extract_path, WrappedUrl};

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn write_path(out: &mut impl Write, url: &str) -> io::Result<()> {
    let url = url.trim();
    if url.is_empty() {
        return Ok(());
    }
    if WrappedUrl::parse(&webcache_location::decode_escapes(url)).is_none() {
        tracing::warn!(url, "not a cache-wrapped URL; printing it decoded");
    }
    writeln!(out, "{}", extract_path(url))
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        for line in io::stdin().lock().lines() {
            write_path(&mut out, &line?)?;
        }
    } else {
        for url in &args {
            write_path(&mut out, url)?;
        }
    }

    out.flush()?;
    Ok(())
}
