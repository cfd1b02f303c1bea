//! RSS item extraction.

use quick_xml::events::Event;
use quick_xml::Reader;

use thainews_core::RawEntry;

use crate::error::FetchError;

/// Parse an RSS XML body into [`RawEntry`]s, in document order.
///
/// Reads `<title>`, `<link>`, `<pubDate>` and `<source>` from each `<item>`.
/// Text and CDATA pieces of one field are concatenated, then trimmed. Text
/// with an entity the parser cannot resolve is kept verbatim. Items missing a
/// title or link are skipped.
///
/// # Errors
///
/// Returns [`FetchError::Xml`] if the XML is malformed.
pub fn parse_rss_items(xml: &str) -> Result<Vec<RawEntry>, FetchError> {
    let mut reader = Reader::from_str(xml);

    let mut entries = Vec::new();
    let mut in_item = false;
    let mut current_tag = String::new();
    let mut item = RawEntry::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == "item" {
                    in_item = true;
                    item = RawEntry::default();
                }
                current_tag = name;
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"item" && in_item {
                    in_item = false;
                    let mut done = std::mem::take(&mut item);
                    trim_fields(&mut done);
                    if done.title.is_empty() || done.link.is_empty() {
                        tracing::debug!(title = %done.title, "skipping RSS item without title or link");
                    } else {
                        entries.push(done);
                    }
                }
                current_tag.clear();
            }
            Ok(Event::Text(e)) => {
                if in_item {
                    match e.unescape() {
                        Ok(text) => append_field(&mut item, &current_tag, &text),
                        Err(err) => {
                            let raw = String::from_utf8_lossy(&e);
                            tracing::debug!(
                                tag = %current_tag,
                                error = %err,
                                "keeping RSS text with unresolved entity as-is"
                            );
                            append_field(&mut item, &current_tag, &raw);
                        }
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if in_item {
                    let text = String::from_utf8_lossy(e.as_ref());
                    append_field(&mut item, &current_tag, &text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FetchError::Xml(e)),
            _ => {}
        }
    }

    Ok(entries)
}

fn append_field(item: &mut RawEntry, tag: &str, text: &str) {
    match tag {
        "title" => item.title.push_str(text),
        "link" => item.link.push_str(text),
        "pubDate" => item.published.get_or_insert_with(String::new).push_str(text),
        "source" => item.source.get_or_insert_with(String::new).push_str(text),
        _ => {}
    }
}

fn trim_fields(item: &mut RawEntry) {
    let fields = [
        Some(&mut item.title),
        Some(&mut item.link),
        item.published.as_mut(),
        item.source.as_mut(),
    ];
    for field in fields.into_iter().flatten() {
        *field = field.trim().to_string();
    }
}
