use chrono::Local;
use quotescrap::{info_time, run, CrawlConfig, Result, FILE_PATH};

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    run(&CrawlConfig::default(), FILE_PATH).await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
