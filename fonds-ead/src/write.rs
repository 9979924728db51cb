//! XML writing: [`Document`] tree to text.

use std::fmt;
use std::fmt::Write as _;

use crate::tree::{Document, Element};

impl Document {
    /// Serialize the tree with 2-space indentation.
    ///
    /// Output is deterministic: attributes and children appear in document
    /// order, text and attribute values are escaped.
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        let _ = writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        write_element(&mut xml, &self.root, 0);
        xml
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}

fn write_element(xml: &mut String, el: &Element, depth: usize) {
    let pad = "  ".repeat(depth);
    let mut open = format!("{}<{}", pad, el.name);
    for (key, value) in &el.attrs {
        let _ = write!(open, r#" {}="{}""#, key, xml_escape(value));
    }

    match (el.text.as_deref(), el.children.is_empty()) {
        (None, true) => {
            let _ = writeln!(xml, "{} />", open);
        }
        (Some(text), true) => {
            let _ = writeln!(xml, "{}>{}</{}>", open, xml_escape(text), el.name);
        }
        (text, false) => {
            let _ = writeln!(xml, "{}>", open);
            if let Some(text) = text {
                if !text.is_empty() {
                    let _ = writeln!(xml, "{}  {}", pad, xml_escape(text));
                }
            }
            for child in &el.children {
                write_element(xml, child, depth + 1);
            }
            let _ = writeln!(xml, "{}</{}>", pad, el.name);
        }
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
