use std::collections::HashSet;
use std::fmt::Display;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::scalar::infer_scalar;
use crate::format::SourceFormat;
use crate::tree::{Scalar, TreeMap, TreeValue};
use crate::DotError;

const CONTENT_KEY: &str = "content";

/// An element under construction.
#[derive(Default)]
struct Frame {
    name: String,
    map: TreeMap,
    /// Keys already promoted to lists by a repeated name.
    repeated: HashSet<String>,
}

impl Frame {
    /// Insert, turning a second value under the same key into a list.
    fn accumulate(&mut self, key: String, value: TreeValue) {
        if self.repeated.contains(&key) {
            if let Some(TreeValue::List(items)) = self.map.get_mut(&key) {
                items.push(value);
            }
            return;
        }

        match self.map.get_mut(&key) {
            Some(existing) => {
                let first = std::mem::replace(existing, TreeValue::List(Vec::new()));
                *existing = TreeValue::List(vec![first, value]);
                self.repeated.insert(key);
            }
            None => {
                self.map.insert(key, value);
            }
        }
    }

    fn finish(mut self) -> (String, TreeValue) {
        let value = if self.map.len() == 1 && self.map.contains_key(CONTENT_KEY) {
            self.map
                .swap_remove(CONTENT_KEY)
                .unwrap_or(TreeValue::Scalar(Scalar::Null))
        } else {
            TreeValue::Map(self.map)
        };
        (self.name, value)
    }
}

pub(super) fn decode(text: &str) -> Result<TreeValue, DotError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut document = Frame::default();
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| xml_error(e, reader.buffer_position()))?;

        match event {
            Event::Start(start) => {
                stack.push(open_element(&start, reader.buffer_position())?);
            }
            Event::Empty(start) => {
                let (name, value) = open_element(&start, reader.buffer_position())?.finish();
                stack.last_mut().unwrap_or(&mut document).accumulate(name, value);
            }
            Event::End(_) => {
                let frame = stack.pop().ok_or_else(|| {
                    xml_error("closing tag without an open element", reader.buffer_position())
                })?;
                let (name, value) = frame.finish();
                stack.last_mut().unwrap_or(&mut document).accumulate(name, value);
            }
            Event::Text(t) => {
                let text = t
                    .unescape()
                    .map_err(|e| xml_error(e, reader.buffer_position()))?;
                let text = text.trim();
                if let (false, Some(frame)) = (text.is_empty(), stack.last_mut()) {
                    frame.accumulate(CONTENT_KEY.to_string(), infer_scalar(text));
                }
            }
            Event::CData(cdata) => {
                if let Some(frame) = stack.last_mut() {
                    let raw = cdata.into_inner();
                    let text = String::from_utf8_lossy(&raw).into_owned();
                    frame.accumulate(CONTENT_KEY.to_string(), TreeValue::from(text));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(xml_error(
            format!("element <{}> is never closed", open.name),
            reader.buffer_position(),
        ));
    }

    Ok(TreeValue::Map(document.map))
}

fn open_element(start: &BytesStart, position: impl Display) -> Result<Frame, DotError> {
    let mut frame = Frame {
        name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
        ..Frame::default()
    };

    for attr in start.attributes() {
        let attr = attr.map_err(|e| xml_error(e, &position))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| xml_error(e, &position))?;
        frame.accumulate(key, infer_scalar(&value));
    }

    Ok(frame)
}

fn xml_error(err: impl Display, position: impl Display) -> DotError {
    DotError::parse(SourceFormat::Xml, format!("{} at byte {}", err, position))
}
