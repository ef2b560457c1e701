// src/log.rs
use std::io::{self, Write};
use std::sync::LazyLock;

use indicatif::MultiProgress;
use tracing_subscriber::{EnvFilter, fmt};

static BARS: LazyLock<MultiProgress> = LazyLock::new(MultiProgress::new);

/// Progress bars drawn on stderr. Bars added here are cleared while a log
/// line is written and redrawn after it.
pub fn bars() -> &'static MultiProgress {
    &BARS
}

/// Stderr writer that steps around any live progress bar.
pub struct BarAwareStderr;

impl Write for BarAwareStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        BARS.suspend(|| io::stderr().lock().write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        BARS.suspend(|| io::stderr().lock().write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// Install the stderr subscriber. Lines carry time elapsed since start.
/// `RUST_LOG` wins over `verbosity` (0 = info, 1 = debug, 2+ = trace).
pub fn init(verbosity: u8) {
    let default = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,cinemagia_scrape={default}")));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::uptime())
        .with_target(false)
        .with_writer(|| BarAwareStderr)
        .try_init();
}
