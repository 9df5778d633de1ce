use std::{fs::File, path::Path};

use crate::{Quote, Result, TABLE_HEADER};

/// Joins the tags of a quote into a single cell.
pub const TAG_SEPARATOR: &str = ";";

/// Writes the quotes as CSV to `path`, creating or truncating it.
/// The first row is always the header, even when there are no quotes.
pub fn write_table(quotes: &[Quote], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(TABLE_HEADER)?;
    for quote in quotes {
        let tags = quote.tags().join(TAG_SEPARATOR);
        writer.write_record([quote.text(), quote.author(), tags.as_str()])?;
    }
    // Surface write errors here instead of losing them on drop.
    writer.flush()?;
    Ok(())
}
