use std::{path::Path, sync::Arc};

use chrono::Local;
use reqwest::Client;

use crate::parse::{parse_html, Selectors};
use crate::request::request_page_html;
use crate::write::write_table;
use crate::{info_time, CrawlConfig, Error, Quote, Result};

/// Crawls the site starting at `config.base_url` and writes every quote to `output_path`.
/// Returns the number of quotes written.
///
/// Nothing is written unless the whole crawl succeeds.
pub async fn run(config: &CrawlConfig, output_path: impl AsRef<Path>) -> Result<usize> {
    run_with_client(&Client::new(), config, output_path).await
}

/// Same as [`run`], with a caller-provided HTTP client.
pub async fn run_with_client(
    client: &Client,
    config: &CrawlConfig,
    output_path: impl AsRef<Path>,
) -> Result<usize> {
    let output_path = output_path.as_ref();
    let quotes = fetch_all(client, &config.base_url, config).await?;

    let local_now = Local::now();
    write_table(&quotes, output_path)?;
    info_time!(
        local_now,
        "Wrote {} quotes to file: {}",
        quotes.len(),
        output_path.display()
    );

    Ok(quotes.len())
}

/// Follows the pager's "next" links from `start_url` until a page has none,
/// collecting the quotes of every page in crawl order.
///
/// Fails on the first transport error, non-success status or malformed quote,
/// and with [`Error::PageLimitExceeded`] once more than `config.max_pages` pages would be fetched.
pub async fn fetch_all(client: &Client, start_url: &str, config: &CrawlConfig) -> Result<Vec<Quote>> {
    let start_time = Local::now();
    info_time!("Started scraping: {start_url}");

    let selectors = Arc::new(Selectors::new()?);
    let mut all_quotes = Vec::new();
    let mut next_url = Some(start_url.to_string());
    let mut page_num = 0;

    while let Some(url) = next_url.take() {
        if page_num >= config.max_pages {
            return Err(Error::PageLimitExceeded(config.max_pages));
        }
        page_num += 1;

        let html = request_page_html(client, &url).await?;
        let page = parse_html(html, selectors.clone()).await?;
        info_time!("Page {page_num}: {} quotes from {url}", page.records.len());

        all_quotes.extend(page.records);
        next_url = page
            .next_href
            .map(|href| resolve_next(&config.base_url, &href));
    }

    info_time!(
        start_time,
        "Finished scraping {} pages, {} quotes.",
        page_num,
        all_quotes.len()
    );
    Ok(all_quotes)
}

/// Joins a relative link onto the base address, dropping the base's trailing slashes.
pub fn resolve_next(base_url: &str, href: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), href)
}
