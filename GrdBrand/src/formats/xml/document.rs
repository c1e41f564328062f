//! XML element structures

use indexmap::IndexMap;

/// An element of a parsed XML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Element name.
    pub tag: String,
    /// Attributes in document order.
    pub attributes: IndexMap<String, String>,
    /// Character data before the first child element, if any.
    pub text: Option<String>,
    /// Character data between this element's end tag and the next tag.
    pub tail: Option<String>,
    /// Child elements.
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Creates an empty element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        XmlElement {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, keeping its position if it already exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Direct children with the given tag.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    /// First descendant (not including `self`) with the given tag, in document order.
    #[must_use]
    pub fn find_descendant(&self, tag: &str) -> Option<&XmlElement> {
        for child in &self.children {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(tag) {
                return Some(found);
            }
        }
        None
    }

    /// Mutable variant of [`find_descendant`](Self::find_descendant).
    pub fn find_descendant_mut(&mut self, tag: &str) -> Option<&mut XmlElement> {
        for child in &mut self.children {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find_descendant_mut(tag) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants with the given tag, in document order.
    #[must_use]
    pub fn descendants_named(&self, tag: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        collect_named(self, tag, &mut found);
        found
    }
}

fn collect_named<'a>(element: &'a XmlElement, tag: &str, found: &mut Vec<&'a XmlElement>) {
    for child in &element.children {
        if child.tag == tag {
            found.push(child);
        }
        collect_named(child, tag, found);
    }
}
