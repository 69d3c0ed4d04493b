use crate::table::{Cell, ResultTable};
use std::borrow::Cow;
use std::fmt;
use url::Url;

/// URL schemes that are rendered as links.
const LINK_SCHEMES: [&str; 5] = ["http", "https", "ftp", "ftps", "file"];

/// Options of the HTML renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Whether text cells holding a URL become `<a>` links that open in a new tab.
    pub render_links: bool,
    /// Whether the HTML special characters of cells and headers are escaped.
    pub escape: bool,
    /// Whether the row number is shown as a leading header column.
    pub show_index: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            render_links: true,
            escape: true,
            show_index: true,
        }
    }
}

pub(super) fn render(table: &ResultTable, options: &HtmlOptions) -> String {
    HtmlTable { table, options }.to_string()
}

struct HtmlTable<'a> {
    table: &'a ResultTable,
    options: &'a HtmlOptions,
}

impl fmt::Display for HtmlTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = self.options;
        writeln!(f, "<table border=\"1\" class=\"dataframe\">")?;
        writeln!(f, "  <thead>")?;
        writeln!(f, "    <tr style=\"text-align: right;\">")?;
        if options.show_index {
            writeln!(f, "      <th></th>")?;
        }
        for column in self.table.columns() {
            writeln!(f, "      <th>{}</th>", text(column, options))?;
        }
        writeln!(f, "    </tr>")?;
        writeln!(f, "  </thead>")?;
        writeln!(f, "  <tbody>")?;
        let formatted_rows = self.table.formatted_rows();
        let rows = self.table.rows().iter().zip(&formatted_rows);
        for (index, (row, formatted_row)) in rows.enumerate() {
            writeln!(f, "    <tr>")?;
            if options.show_index {
                writeln!(f, "      <th>{index}</th>")?;
            }
            for (cell, formatted) in row.iter().zip(formatted_row) {
                match cell {
                    Cell::Text(value) if options.render_links && is_link(value) => {
                        let value = text(value, options);
                        writeln!(
                            f,
                            "      <td><a href=\"{value}\" target=\"_blank\">{value}</a></td>"
                        )?;
                    }
                    _ => writeln!(f, "      <td>{}</td>", text(formatted, options))?,
                }
            }
            writeln!(f, "    </tr>")?;
        }
        writeln!(f, "  </tbody>")?;
        write!(f, "</table>")
    }
}

fn text<'a>(value: &'a str, options: &HtmlOptions) -> Cow<'a, str> {
    if options.escape {
        html_escape(value)
    } else {
        Cow::Borrowed(value)
    }
}

fn is_link(value: &str) -> bool {
    if value.trim() != value || value.contains(char::is_whitespace) {
        return false;
    }
    Url::parse(value).is_ok_and(|url| LINK_SCHEMES.contains(&url.scheme()))
}

/// Escapes HTML special characters.
pub(crate) fn html_escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;"),
    )
}
