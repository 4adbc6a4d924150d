use crate::core::{ConfigProvider, DayCounter, Pipeline, RawContent, Storage};
use crate::output::csv::render_daily_csv;
use crate::scrape::{aggregate, table};
use crate::utils::error::Result;
use reqwest::{header, Client, StatusCode};

/// Fixed output filename, written relative to the configured output path.
pub const OUTPUT_FILE: &str = "output.csv";

// Wikipedia may reject requests with a bare client signature, so the
// download mimics a desktop browser.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/79.0.3945.117 Safari/537.36";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9";

pub struct LaunchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> LaunchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for LaunchPipeline<S, C> {
    async fn extract(&self) -> Result<RawContent> {
        tracing::debug!("Requesting page: {}", self.config.source_url());
        let response = self
            .client
            .get(self.config.source_url())
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, ACCEPT)
            .send()
            .await?;

        tracing::debug!("Response status: {}", response.status());

        if response.status() != StatusCode::OK {
            tracing::warn!(
                "Cannot download content from {} (status {}). Maybe check your network.",
                self.config.source_url(),
                response.status()
            );
            return Ok(None);
        }

        let body = response.bytes().await?;
        tracing::info!(
            "Downloaded {} bytes from {}",
            body.len(),
            self.config.source_url()
        );
        Ok(Some(body.to_vec()))
    }

    async fn transform(&self, content: RawContent) -> Result<DayCounter> {
        let bytes = match content {
            Some(bytes) => bytes,
            None => {
                tracing::warn!("Nothing to parse");
                return Ok(DayCounter::new());
            }
        };

        let html = String::from_utf8_lossy(&bytes);
        let rows = table::extract_launch_rows(&html)?;
        tracing::info!("Extracted {} rows from the launch table", rows.len());

        let counts = aggregate::tally_by_day(&rows)?;
        tracing::info!("Tallied launches across {} days", counts.len());
        Ok(counts)
    }

    async fn load(&self, counts: DayCounter) -> Result<String> {
        let rendered = render_daily_csv(&counts);
        self.storage
            .write_file(OUTPUT_FILE, rendered.as_bytes())
            .await?;

        let output_path = format!("{}/{}", self.config.output_path(), OUTPUT_FILE);
        tracing::info!("Daily tally written to {}", output_path);
        Ok(output_path)
    }
}
