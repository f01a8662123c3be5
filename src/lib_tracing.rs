use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing_flame::{FlameLayer, FlushGuard};
use tracing_subscriber::{fmt, prelude::*};

use crate::error::Result;

/// Keeps the flamegraph writer alive, samples are flushed when it is dropped.
pub struct LibTracer {
    _flame_guard: Option<FlushGuard<BufWriter<File>>>,
}

pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

impl LibTracer {
    /// Installs the global subscriber: a stderr log filtered by verbosity and,
    /// if `flame` is set, a folded stack sample file for flamegraphs.
    pub fn init(verbosity: u8, flame: Option<&Path>) -> Result<Self> {
        let stderr_log = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(level_for_verbosity(verbosity));

        let (flame_layer, flame_guard) = match flame {
            Some(path) => {
                let (layer, guard) = FlameLayer::with_file(path)?;
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(stderr_log)
            .with(flame_layer)
            .try_init()?;

        Ok(LibTracer {
            _flame_guard: flame_guard,
        })
    }
}
