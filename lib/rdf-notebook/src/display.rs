//! Rich output for [evcxr](https://github.com/evcxr/evcxr) Jupyter notebooks.
//!
//! The kernel picks up MIME bundles printed to stdout between `EVCXR_BEGIN_CONTENT` and
//! `EVCXR_END_CONTENT` markers. [`ResultTable`] and
//! [`CytoscapeWidget`](crate::visualize::CytoscapeWidget) implement the `evcxr_display` method the
//! kernel calls on the last expression of a cell.

use crate::table::ResultTable;
use std::io::{self, Write};

pub const HTML_MIME_TYPE: &str = "text/html";

/// Writes `content` as a MIME bundle of the given type.
pub fn write_mime_bundle<W: Write>(
    mut writer: W,
    mime_type: &str,
    content: &str,
) -> io::Result<()> {
    writeln!(writer, "EVCXR_BEGIN_CONTENT {mime_type}")?;
    writeln!(writer, "{content}")?;
    writeln!(writer, "EVCXR_END_CONTENT")?;
    writer.flush()
}

/// Prints `html` to stdout so that the notebook renders it.
pub fn display_html(html: &str) {
    if let Err(error) = write_mime_bundle(io::stdout().lock(), HTML_MIME_TYPE, html) {
        tracing::warn!("Could not write HTML output: {error}");
    }
}

/// Shows `table` in the notebook as an HTML table with clickable links.
pub fn display_result(table: &ResultTable) {
    display_html(&table.to_html());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_bundle_is_framed() -> io::Result<()> {
        let mut buffer = Vec::new();
        write_mime_bundle(&mut buffer, HTML_MIME_TYPE, "<b>hi</b>")?;
        assert_eq!(
            String::from_utf8_lossy(&buffer),
            "EVCXR_BEGIN_CONTENT text/html\n<b>hi</b>\nEVCXR_END_CONTENT\n"
        );
        Ok(())
    }
}
