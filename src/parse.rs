use std::sync::Arc;

use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;

use crate::{Error, Quote, Result};

const QUOTE_SEL: &str = ".quote";
const TEXT_SEL: &str = ".text";
const AUTHOR_SEL: &str = ".author";
const TAG_SEL: &str = ".tag";
const NEXT_SEL: &str = ".pager .next a";

/// Everything extracted from a single listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    pub records: Vec<Quote>,
    /// Raw `href` of the pager's "next" link, not yet resolved against the base address.
    pub next_href: Option<String>,
}

/// A markup node that supports selecting its descendants by selector.
pub(crate) trait SelectNode<'a> {
    fn select_all(&self, selector: &Selector) -> Vec<ElementRef<'a>>;

    fn select_one(&self, selector: &Selector) -> Option<ElementRef<'a>>;

    /// Like `select_one`, but a missing node is an error.
    fn require(&self, selector: &Selector, sel_str: &str) -> Result<ElementRef<'a>> {
        self.select_one(selector).ok_or_else(|| Error::MissingNode {
            selector: sel_str.into(),
        })
    }
}

impl<'a> SelectNode<'a> for &'a Html {
    fn select_all(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        Html::select(*self, selector).collect()
    }

    fn select_one(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        Html::select(*self, selector).next()
    }
}

impl<'a> SelectNode<'a> for ElementRef<'a> {
    fn select_all(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.select(selector).collect()
    }

    fn select_one(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }
}

/// Compiled selectors, built once per crawl and shared by every page.
pub(crate) struct Selectors {
    quote: Selector,
    text: Selector,
    author: Selector,
    tag: Selector,
    next: Selector,
}

impl Selectors {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            quote: create_selector(QUOTE_SEL)?,
            text: create_selector(TEXT_SEL)?,
            author: create_selector(AUTHOR_SEL)?,
            tag: create_selector(TAG_SEL)?,
            next: create_selector(NEXT_SEL)?,
        })
    }
}

/// Parses the page on the blocking pool, the parsed document isn't `Send`.
pub(crate) async fn parse_html(html: String, sel: Arc<Selectors>) -> Result<ParsedPage> {
    spawn_blocking(move || parse_with(&html, &sel)).await?
}

/// Extracts all quotes, in document order, and the "next" link from a listing page.
pub fn parse_page(html: &str) -> Result<ParsedPage> {
    parse_with(html, &Selectors::new()?)
}

fn parse_with(html: &str, sel: &Selectors) -> Result<ParsedPage> {
    let doc = Html::parse_document(html);
    let doc_ref = &doc;

    let records = doc_ref
        .select_all(&sel.quote)
        .into_iter()
        .map(|container| parse_quote(container, sel))
        .collect::<Result<Vec<_>>>()?;

    let next_href = doc_ref
        .select_one(&sel.next)
        .and_then(|link| link.value().attr("href"))
        .map(String::from);

    Ok(ParsedPage { records, next_href })
}

fn parse_quote(container: ElementRef<'_>, sel: &Selectors) -> Result<Quote> {
    let text = text_content(container.require(&sel.text, TEXT_SEL)?);
    let author = text_content(container.require(&sel.author, AUTHOR_SEL)?);
    let tags = container
        .select_all(&sel.tag)
        .into_iter()
        .map(text_content)
        .collect();

    Ok(Quote::new(text, author, tags))
}

#[inline]
fn text_content(node: ElementRef<'_>) -> String {
    node.text().collect()
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}
