//! The in-memory document tree.
//!
//! An [`Element`] is a named node with ordered attributes, optional text, and
//! ordered children. Namespaced names (`xsi:type`) are stored verbatim;
//! namespace declarations are ordinary attributes. A [`Document`] owns the
//! root element for the duration of one export: parsed once, mutated in
//! place, serialized once, discarded.

/// One node in a finding aid document.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    /// Attributes in document order.
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// A new empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing one of the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(pair) => pair.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Text content, empty when unset.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Replace the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First child with the given name, mutable.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// All children with the given name, in document order.
    pub fn children_named(&self, name: &str) -> Vec<&Element> {
        self.children.iter().filter(|c| c.name == name).collect()
    }

    /// Append a child element.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }
}

/// A finding aid document: the root element plus serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub(crate) root: Element,
}

impl Document {
    /// Wrap an existing root element.
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The root element, mutable.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_set_and_replace() {
        let mut el = Element::new("unitdate");
        el.set_attr("datechar", "created");
        assert_eq!(el.attr("datechar"), Some("created"));
        el.set_attr("datechar", "inclusive");
        assert_eq!(el.attr("datechar"), Some("inclusive"));
        assert_eq!(el.attrs.len(), 1);
    }

    #[test]
    fn first_child_by_name() {
        let mut did = Element::new("did");
        let mut first = Element::new("unitdate");
        first.set_text("1942");
        did.push_child(first);
        let mut second = Element::new("unitdate");
        second.set_text("1945");
        did.push_child(second);

        assert_eq!(did.child("unitdate").unwrap().text(), "1942");
        assert_eq!(did.children_named("unitdate").len(), 2);
        assert!(did.child("unittitle").is_none());
    }

    #[test]
    fn text_defaults_to_empty() {
        let el = Element::new("unittitle");
        assert_eq!(el.text(), "");
    }
}
