//! Bidirectional index over a `strings.xml` resource file.
//!
//! The index is rebuilt from file contents on every extraction rather than
//! cached, so external edits between invocations are always picked up. It
//! answers the duplicate queries the confirmation step needs: "is this key
//! taken?" and "which keys already hold this value?".

use std::collections::{BTreeSet, HashMap};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::ExtractError;

/// In-memory key/value index of a resource file.
///
/// Key→value lookup is last-write-wins when the file carries duplicate keys;
/// the file-level inconsistency is surfaced by [`matches`](Self::matches),
/// not corrected here.
#[derive(Debug, Default, Clone)]
pub struct ResourceIndex {
    key_to_value: HashMap<String, String>,
    value_to_keys: HashMap<String, BTreeSet<String>>,
}

impl ResourceIndex {
    /// Parse a `strings.xml` document into an index.
    ///
    /// Only `<string name="...">` elements are considered; anything else
    /// (plurals, comments) is skipped. Unparsable markup is fatal for the
    /// operation that requested the index.
    pub fn parse(file_contents: &str) -> Result<Self, ExtractError> {
        let mut reader = Reader::from_str(file_contents);
        reader.config_mut().trim_text(true);

        let mut index = ResourceIndex::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"string" => {
                    let key = read_name_attribute(e)?;
                    let value = read_element_text(&mut reader)?;
                    index.add_entry(key, value);
                }
                Ok(Event::Empty(ref e)) if e.name().as_ref() == b"string" => {
                    let key = read_name_attribute(e)?;
                    index.add_entry(key, String::new());
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(ExtractError::MalformedResourceFile(e.to_string())),
            }
            buf.clear();
        }

        Ok(index)
    }

    /// Record an entry in both directions.
    pub fn add_entry(&mut self, key: String, value: String) {
        self.key_to_value.insert(key.clone(), value.clone());
        self.value_to_keys.entry(value).or_default().insert(key);
    }

    /// Keys that collide with the proposed entry: the key itself if taken,
    /// plus every key whose stored value equals `value`.
    pub fn matches(&self, key: &str, value: &str) -> BTreeSet<String> {
        let mut matched = BTreeSet::new();
        if self.key_to_value.contains_key(key) {
            matched.insert(key.to_string());
        }
        if let Some(keys) = self.value_to_keys.get(value) {
            matched.extend(keys.iter().cloned());
        }
        matched
    }

    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.key_to_value.get(key).map(String::as_str)
    }

    /// Keys whose stored value equals `value` exactly.
    pub fn keys_with_value(&self, value: &str) -> BTreeSet<String> {
        self.value_to_keys.get(value).cloned().unwrap_or_default()
    }

    /// Number of distinct resource values (not keys).
    pub fn len(&self) -> usize {
        self.value_to_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value_to_keys.is_empty()
    }

    /// All entries sorted by key, for display.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .key_to_value
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort();
        entries
    }
}

fn read_name_attribute(e: &BytesStart) -> Result<String, ExtractError> {
    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| ExtractError::MalformedResourceFile(e.to_string()))?;
        if attr.key.as_ref() == b"name" {
            let value = attr
                .unescape_value()
                .map_err(|e| ExtractError::MalformedResourceFile(e.to_string()))?;
            return Ok(value.to_string());
        }
    }
    Err(ExtractError::MalformedResourceFile(
        "string tag missing 'name' attribute".to_string(),
    ))
}

fn read_element_text(reader: &mut Reader<&[u8]>) -> Result<String, ExtractError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| ExtractError::MalformedResourceFile(e.to_string()))?;
                return Ok(text.to_string());
            }
            Ok(Event::CData(e)) => {
                return String::from_utf8(e.to_vec()).map_err(|e| {
                    ExtractError::MalformedResourceFile(e.to_string())
                });
            }
            Ok(Event::End(_)) => return Ok(String::new()),
            Ok(Event::Eof) => {
                return Err(ExtractError::MalformedResourceFile(
                    "unexpected end of file inside <string>".to_string(),
                ));
            }
            Ok(_) => {}
            Err(e) => return Err(ExtractError::MalformedResourceFile(e.to_string())),
        }
        buf.clear();
    }
}
