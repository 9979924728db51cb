//! XML reading: text to [`Document`] tree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{EadError, Result};
use crate::tree::{Document, Element};

impl Document {
    /// Parse an XML document into a tree.
    ///
    /// Comments, processing instructions, and doctype declarations are
    /// skipped. CDATA is folded into element text. Whitespace-only text
    /// (serializer indentation) is dropped.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    stack.push(element_from_tag(&e)?);
                }
                Ok(Event::Empty(e)) => {
                    let el = element_from_tag(&e)?;
                    attach(&mut stack, &mut root, el)?;
                }
                Ok(Event::End(_)) => {
                    let el = stack
                        .pop()
                        .ok_or_else(|| EadError::malformed("unexpected closing tag"))?;
                    attach(&mut stack, &mut root, el)?;
                }
                Ok(Event::Text(t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| EadError::malformed(e.to_string()))?;
                    append_text(&mut stack, text.trim());
                }
                Ok(Event::CData(c)) => {
                    let bytes = c.into_inner();
                    append_text(&mut stack, &String::from_utf8_lossy(&bytes));
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(EadError::Xml(e)),
            }
        }

        if !stack.is_empty() {
            return Err(EadError::malformed("unclosed element"));
        }
        let root = root.ok_or_else(|| EadError::malformed("document has no root element"))?;
        Ok(Self { root })
    }
}

fn element_from_tag(tag: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
    let mut el = Element::new(name);
    for attr in tag.attributes() {
        let attr = attr.map_err(|e| EadError::malformed(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| EadError::malformed(e.to_string()))?
            .into_owned();
        el.attrs.push((key, value));
    }
    Ok(el)
}

/// A finished element joins its parent, or becomes the root.
fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, el: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None => {
            if root.is_some() {
                return Err(EadError::malformed("multiple root elements"));
            }
            *root = Some(el);
        }
    }
    Ok(())
}

fn append_text(stack: &mut Vec<Element>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(el) = stack.last_mut() {
        match &mut el.text {
            Some(existing) => existing.push_str(text),
            None => el.text = Some(text.to_string()),
        }
    }
}
