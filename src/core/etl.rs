use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting launch tally...");

        println!("Downloading page...");
        let content = self.pipeline.extract().await?;
        match &content {
            Some(bytes) => println!("Downloaded {} bytes", bytes.len()),
            None => println!("Download failed, continuing with an empty tally"),
        }
        self.monitor.log_stats("download");

        println!("Counting launches...");
        let counts = self.pipeline.transform(content).await?;
        println!("Counted launches on {} days", counts.len());
        self.monitor.log_stats("count");

        println!("Writing daily CSV...");
        let output_path = self.pipeline.load(counts).await?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
