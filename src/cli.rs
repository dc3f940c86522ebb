//! Command-line options shared by the binaries.

use std::path::PathBuf;

use clap::Args;

use crate::config::{BoardConfig, DEFAULT_GRID_SIZE, DEFAULT_SIZE};

#[derive(Debug, Clone, Args)]
pub struct BoardArgs {
    /// Side of the board in pixels.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub size: u32,

    /// Cells per side.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: u32,

    /// Write the log here (truncated on start) instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl BoardArgs {
    pub fn config(&self) -> BoardConfig {
        BoardConfig::new(self.size, self.grid_size)
    }

    pub fn init_logging(&self) -> std::io::Result<()> {
        crate::logging::init(&self.log_level, self.log_file.as_deref())
    }
}
