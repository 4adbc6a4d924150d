pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod scrape;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::EtlEngine, pipeline::LaunchPipeline};
pub use utils::error::{EtlError, Result};
