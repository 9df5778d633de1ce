//! Scrapes a paginated quotes listing and writes every quote to a CSV table.
//!
//! [`fetch_all`] follows the pager's "next" links page by page, [`write_table`]
//! serializes the collected quotes, and [`run`] does both.

mod config;
mod error;
mod macros;
mod parse;
mod process;
mod quote;
mod request;
mod write;

pub use config::CrawlConfig;
pub use error::{Error, Result};
#[doc(hidden)]
pub use macros::elapsed_secs;
pub use parse::{parse_page, ParsedPage};
pub use process::{fetch_all, resolve_next, run, run_with_client};
pub use quote::{Quote, TABLE_HEADER};
pub use write::{write_table, TAG_SEPARATOR};

pub const BASE_URL: &str = "https://quotes.toscrape.com/";
pub const FILE_PATH: &str = "quotes.csv";
/// Default bound on fetched pages, far above any real listing.
pub const MAX_PAGES: usize = 10_000;
