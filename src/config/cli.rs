use crate::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_WORKERS, MAX_WORKERS};
use crate::domain::model::{Shape, ShapeLimits};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "voxel-dome")]
#[command(about = "Serves voxel circle and dome layouts as JSON")]
pub struct CliConfig {
    /// Address to bind [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, 0 picks a free port [default: 5000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Number of request worker threads [default: 4]
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    fn workers(&self) -> usize {
        self.workers.unwrap_or(DEFAULT_WORKERS)
    }

    fn limits(&self, shape: Shape) -> ShapeLimits {
        ShapeLimits::builtin(shape)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", self.host())?;
        validate_range("workers", self.workers(), 1, MAX_WORKERS)?;
        Ok(())
    }
}
