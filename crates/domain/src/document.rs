//! In-memory XML element tree.
//!
//! Holds the parts of a descriptor that the model does not map to typed
//! fields, so they can be written back in their original order.

use crate::error::{DomainError, DomainResult};

/// A child node of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Character data, already unescaped.
    Text(String),
    /// A `<![CDATA[...]]>` section.
    CData(String),
    /// A `<!-- ... -->` comment, without the delimiters.
    Comment(String),
}

/// An XML element with its attributes and children in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Qualified element name.
    pub name: String,
    /// Attributes as `(name, unescaped value)` pairs.
    pub attributes: Vec<(String, String)>,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element holding a single text node.
    ///
    /// An empty `text` yields an element with no children.
    #[must_use]
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.set_text(text);
        element
    }

    /// Returns the value of attribute `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over the child elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Returns the first child element called `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|element| element.name == name)
    }

    /// Mutable variant of [`Element::child`].
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// Text and CDATA content of this element.
    ///
    /// Text pieces are trimmed when read, so two of them split by a comment
    /// are joined with a single space. CDATA is joined as is.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut previous_was_text = false;
        for node in &self.children {
            match node {
                Node::Text(text) if !text.is_empty() => {
                    if previous_was_text {
                        out.push(' ');
                    }
                    out.push_str(text);
                    previous_was_text = true;
                }
                Node::CData(text) => {
                    out.push_str(text);
                    previous_was_text = false;
                }
                Node::Text(_) | Node::Element(_) | Node::Comment(_) => {}
            }
        }
        out
    }

    /// Text of the first child element called `name`.
    #[must_use]
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(Self::text)
    }

    /// Replaces the text content, keeping any comments.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.children
            .retain(|node| !matches!(node, Node::Text(_) | Node::CData(_)));
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
    }

    /// Removes every child element called `name`. Returns true if any was removed.
    pub fn remove_child(&mut self, name: &str) -> bool {
        let before = self.children.len();
        self.children
            .retain(|node| !matches!(node, Node::Element(element) if element.name == name));
        before != self.children.len()
    }

    /// Applies `update` to the child element called `name`, inserting an
    /// empty one first if it is missing.
    ///
    /// A new child goes before the first existing sibling ranked after it in
    /// `order`; names absent from `order` are appended.
    pub fn update_child(&mut self, name: &str, order: &[&str], update: impl FnOnce(&mut Self)) {
        if let Some(existing) = self.child_mut(name) {
            update(existing);
            return;
        }
        let mut element = Self::new(name);
        update(&mut element);
        let index = self.insertion_index(name, order);
        self.children.insert(index, Node::Element(element));
    }

    /// Sets the text of child `name`, creating it at its ordered position if
    /// needed, or removes the child when `text` is `None`.
    pub fn set_child_text(&mut self, name: &str, text: Option<&str>, order: &[&str]) {
        match text {
            Some(text) => self.update_child(name, order, |child| child.set_text(text)),
            None => {
                self.remove_child(name);
            }
        }
    }

    fn insertion_index(&self, name: &str, order: &[&str]) -> usize {
        let Some(rank) = order.iter().position(|candidate| *candidate == name) else {
            return self.children.len();
        };
        self.children
            .iter()
            .position(|node| match node {
                Node::Element(element) => order
                    .iter()
                    .position(|candidate| *candidate == element.name)
                    .is_some_and(|other| other > rank),
                _ => false,
            })
            .unwrap_or(self.children.len())
    }
}

/// A whole descriptor document: comments ahead of the root, then the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDocument {
    /// Comments that precede the root element.
    pub leading_comments: Vec<String>,
    /// The root element.
    pub root: Element,
}

impl ProjectDocument {
    /// Wraps a root element with no leading comments.
    #[must_use]
    pub const fn new(root: Element) -> Self {
        Self {
            leading_comments: Vec::new(),
            root,
        }
    }
}

/// Checks that `name` can be written as an XML element name.
///
/// Accepts the usual ASCII name characters plus any non-ASCII letter; the
/// first character may not be a digit, `-` or `.`. Names starting with `xml`
/// are well-formed and accepted.
///
/// # Errors
///
/// Returns [`DomainError::InvalidElementName`] when the name is rejected.
pub fn validate_element_name(name: &str) -> DomainResult<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == ':');
    let valid_rest = chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'));

    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(DomainError::InvalidElementName(name.to_string()))
    }
}
