//! Episode feed (RSS) parser.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{RrysError, Result};
use crate::types::FeedItem;

const ITEM_PATH: [&str; 3] = ["rss", "channel", "item"];

/// Parse an episode feed from raw XML bytes.
///
/// Items are read from `rss/channel/item` in document order. The `title`,
/// `ed2k` and `magnet` children are copied verbatim; missing children become
/// empty strings.
///
/// # Errors
/// `RrysError::Decode` on malformed XML or when the root element is not `rss`.
pub fn parse_feed(xml: &[u8]) -> Result<Vec<FeedItem>> {
    let mut reader = Reader::from_reader(xml);

    let mut items = Vec::new();
    let mut buf = Vec::new();
    let mut path: Vec<String> = Vec::new();
    let mut current: Option<FeedItem> = None;
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if !seen_root {
                    check_root(&name)?;
                    seen_root = true;
                }
                path.push(name);
                if path == ITEM_PATH {
                    current = Some(FeedItem::default());
                }
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if !seen_root {
                    check_root(&name)?;
                    seen_root = true;
                }
                // A self-closing <item/> still counts as an entry.
                path.push(name);
                if path == ITEM_PATH {
                    items.push(FeedItem::default());
                }
                path.pop();
            }
            Ok(Event::End(_)) => {
                if path == ITEM_PATH {
                    if let Some(item) = current.take() {
                        items.push(item);
                    }
                }
                path.pop();
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| RrysError::Decode(format!("feed text: {}", e)))?;
                append_field(&path, current.as_mut(), &text);
            }
            Ok(Event::CData(e)) => {
                let raw = e.into_inner();
                let text = String::from_utf8_lossy(&raw);
                append_field(&path, current.as_mut(), &text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(RrysError::Decode(format!("feed XML: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(RrysError::Decode("feed XML: no root element".to_string()));
    }
    if !path.is_empty() {
        return Err(RrysError::Decode(format!(
            "feed XML: unexpected end of document inside <{}>",
            path.join("/")
        )));
    }

    Ok(items)
}

fn check_root(name: &str) -> Result<()> {
    if name == ITEM_PATH[0] {
        Ok(())
    } else {
        Err(RrysError::Decode(format!(
            "feed XML: expected <rss> root, found <{}>",
            name
        )))
    }
}

/// Append text to the item field the reader is currently inside, if any.
fn append_field(path: &[String], item: Option<&mut FeedItem>, text: &str) {
    let Some(item) = item else {
        return;
    };
    if path.len() != ITEM_PATH.len() + 1 || path[..ITEM_PATH.len()] != ITEM_PATH {
        return;
    }

    let field = match path[ITEM_PATH.len()].as_str() {
        "title" => &mut item.title,
        "ed2k" => &mut item.ed2k,
        "magnet" => &mut item.magnet,
        _ => return,
    };
    field.push_str(text);
}
