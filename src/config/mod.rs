pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

const LAUNCH_PAGE_URL: &str = "https://en.wikipedia.org/wiki/2019_in_spaceflight#Orbital_launches";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "launchtally")]
#[command(about = "Tallies successful 2019 orbital launches per day into a CSV")]
pub struct CliConfig {
    #[arg(long, default_value = LAUNCH_PAGE_URL)]
    pub source_url: String,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage for the run")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source_url", &self.source_url)?;
        validate_path("output_path", &self.output_path)
    }
}
