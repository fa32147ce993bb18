//! XML documents as JSON values.
//!
//! Elements become objects keyed by child tag name and repeated siblings
//! collect into an array. Text-only elements become scalars: `true` and
//! `false` as booleans, numeric text as numbers, anything else as a
//! string. Attributes, comments and processing instructions are dropped.
//! The root element is the single top-level key.

use crate::viewer::error::ViewerError;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::map::Entry;
use serde_json::{Map, Value as JsonValue};

struct Element {
    name: String,
    children: Map<String, JsonValue>,
    text: String,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Map::new(),
            text: String::new(),
        }
    }

    fn push_child(&mut self, name: String, value: JsonValue) {
        match self.children.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                JsonValue::Array(items) => items.push(value),
                existing => {
                    let first = existing.take();
                    *existing = JsonValue::Array(vec![first, value]);
                }
            },
        }
    }

    fn finish(self) -> (String, JsonValue) {
        let text = self.text.trim();
        if self.children.is_empty() {
            return (self.name, scalar(text));
        }

        let mut children = self.children;
        // Mixed content keeps its text beside the child elements
        if !text.is_empty() {
            children.insert("#text".to_string(), scalar(text));
        }
        (self.name, JsonValue::Object(children))
    }
}

fn scalar(text: &str) -> JsonValue {
    match text {
        "true" => return JsonValue::Bool(true),
        "false" => return JsonValue::Bool(false),
        _ => {}
    }
    if let Ok(n) = text.parse::<i64>() {
        return JsonValue::from(n);
    }
    text.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .and_then(serde_json::Number::from_f64)
        .map(JsonValue::Number)
        .unwrap_or_else(|| JsonValue::String(text.to_string()))
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

pub fn parse_document(content: &str) -> Result<JsonValue, ViewerError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut document = Element::new(String::new());
    let mut open: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(tag) => open.push(Element::new(tag_name(tag.name().as_ref()))),
            Event::Empty(tag) => open
                .last_mut()
                .unwrap_or(&mut document)
                .push_child(tag_name(tag.name().as_ref()), JsonValue::String(String::new())),
            Event::Text(text) => {
                let text = text.unescape()?;
                open.last_mut().unwrap_or(&mut document).text.push_str(&text);
            }
            Event::CData(data) => {
                let text = String::from_utf8_lossy(&data);
                open.last_mut().unwrap_or(&mut document).text.push_str(&text);
            }
            // End names are checked against start names by the reader
            Event::End(_) => {
                if let Some(element) = open.pop() {
                    let (name, value) = element.finish();
                    open.last_mut()
                        .unwrap_or(&mut document)
                        .push_child(name, value);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(element) = open.pop() {
        return Err(ViewerError::UnclosedElement(element.name));
    }

    Ok(JsonValue::Object(document.children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_repeated_siblings_become_array() {
        let value = parse_document(
            r#"<?xml version="1.0"?>
<catalog>
  <book id="1"><title>Dune</title><year>1965</year></book>
  <book id="2"><title>Emma</title><year>1815</year></book>
</catalog>"#,
        )
        .unwrap();
        assert_eq!(
            value,
            json!({
                "catalog": {
                    "book": [
                        {"title": "Dune", "year": 1965},
                        {"title": "Emma", "year": 1815}
                    ]
                }
            })
        );
    }

    #[test]
    fn test_scalars() {
        let value =
            parse_document("<r><a>true</a><b>2.5</b><c>007x</c><d/><e>a &amp; b</e></r>").unwrap();
        assert_eq!(
            value,
            json!({"r": {"a": true, "b": 2.5, "c": "007x", "d": "", "e": "a & b"}})
        );
    }

    #[test]
    fn test_cdata_and_mixed_text() {
        let value = parse_document("<r>note<x><![CDATA[<raw>]]></x></r>").unwrap();
        assert_eq!(value, json!({"r": {"x": "<raw>", "#text": "note"}}));
    }

    #[test]
    fn test_malformed_documents() {
        assert!(parse_document("<a><b></a>").is_err());
        assert!(parse_document("<a><b>1</b>").is_err());
    }
}
