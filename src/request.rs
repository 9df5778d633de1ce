use reqwest::Client;

use crate::{Error, Result};

/// Requests a page and returns a `Result<String>` containing the HTML.
/// Any non-success status is an error, the body is discarded.
pub(crate) async fn request_page_html(client: &Client, url: &str) -> Result<String> {
    let res = client.get(url).send().await?;
    let status = res.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            url: url.into(),
            status,
        });
    }
    let html = res.text().await?;
    Ok(html)
}
