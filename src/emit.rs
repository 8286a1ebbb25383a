//! Result emitters: thin formatters over an ordered bookmark sequence.
//!
//! Emitters never fail and never exit; they turn any outcome (results,
//! empty, error message) into a complete output string for stdout.

use crate::cli::Format;
use crate::store::Bookmark;

pub trait Emitter {
    /// Output for the "no results yet" signal (unparseable partial query).
    fn empty(&self) -> String;
    fn results(&self, bookmarks: &[Bookmark]) -> String;
    fn error(&self, message: &str) -> String;
}

pub fn emitter(format: Format) -> Box<dyn Emitter> {
    match format {
        Format::Plain => Box::new(Plain),
        Format::Json => Box::new(Json),
        Format::Alfred => Box::new(Alfred),
    }
}

/// One tab-separated `title<TAB>url` line per bookmark.
struct Plain;

impl Emitter for Plain {
    fn empty(&self) -> String {
        String::new()
    }

    fn results(&self, bookmarks: &[Bookmark]) -> String {
        bookmarks
            .iter()
            .map(|b| format!("{}\t{}", b.title, b.url))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn error(&self, message: &str) -> String {
        message.to_string()
    }
}

/// Pretty-printed JSON array of bookmarks.
struct Json;

impl Emitter for Json {
    fn empty(&self) -> String {
        "[]".to_string()
    }

    fn results(&self, bookmarks: &[Bookmark]) -> String {
        serde_json::to_string_pretty(bookmarks).unwrap_or_else(|_| "[]".to_string())
    }

    fn error(&self, message: &str) -> String {
        serde_json::json!({ "error": message }).to_string()
    }
}

/// Launcher-integration XML: an `<items>` list where each item carries the
/// url as its action argument and the store identifier as its uid.
struct Alfred;

impl Emitter for Alfred {
    fn empty(&self) -> String {
        self.results(&[])
    }

    fn results(&self, bookmarks: &[Bookmark]) -> String {
        let mut out = String::from("<items>");
        if bookmarks.is_empty() {
            out.push_str("<item valid=\"NO\">");
            out.push_str("<title>No Results</title>");
            out.push_str(
                "<subtitle>Could not find any bookmark matching your search query</subtitle>",
            );
            out.push_str("</item>");
        } else {
            for bookmark in bookmarks {
                let title = xml_escape(&bookmark.title);
                let url = xml_escape(&bookmark.url);
                let uid = xml_escape(&bookmark.identifier);
                out.push_str(&format!("<item arg=\"{url}\" uid=\"{uid}\">"));
                out.push_str(&format!("<title>{title}</title>"));
                out.push_str(&format!("<subtitle>{url}</subtitle>"));
                out.push_str(&format!("<text type=\"copy\">{url}</text>"));
                out.push_str(&format!("<text type=\"largetype\">{title}</text>"));
                out.push_str("</item>");
            }
        }
        out.push_str("</items>");
        out
    }

    fn error(&self, message: &str) -> String {
        format!(
            "<items><item valid=\"NO\">\
             <title>There was an error while searching bookmarks</title>\
             <subtitle>{}</subtitle>\
             </item></items>",
            xml_escape(message)
        )
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
