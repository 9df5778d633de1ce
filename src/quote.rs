/// A single scraped quotation.
///
/// Field order matches the columns of the written table, see [`TABLE_HEADER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    text: String,
    author: String,
    tags: Vec<String>,
}

/// Column names of the output table, in field order.
pub const TABLE_HEADER: [&str; 3] = ["text", "author", "tags"];

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
