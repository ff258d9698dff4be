//! XML parsing and stable XML output for descriptor documents.

use quick_xml::Writer;
use quick_xml::encoding::Decoder;
use quick_xml::escape::partial_escape;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::reader::Reader;

use pomhelper_domain::{Element, Node, ProjectDocument, WriterSettings};

/// Error type for XML operations.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// The tokenizer rejected the input.
    #[error("XML syntax error at byte {position}: {source}")]
    Syntax {
        /// Byte offset where the error was detected.
        position: u64,
        /// Underlying parser error.
        #[source]
        source: quick_xml::Error,
    },

    /// An attribute is malformed.
    #[error("invalid attribute: {0}")]
    Attribute(#[from] AttrError),

    /// A name or value is not valid UTF-8.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The raw input cannot be decoded in its declared encoding.
    #[error("cannot decode input: {0}")]
    Encoding(String),

    /// A character or entity reference cannot be resolved.
    #[error("invalid escape: {0}")]
    Escape(String),

    /// The document has no root element.
    #[error("document has no root element")]
    NoRoot,

    /// The input ended inside an element.
    #[error("element <{0}> is never closed")]
    Unclosed(String),

    /// Elements or text follow the root element.
    #[error("unexpected content outside the root element")]
    OutsideRoot,

    /// Writing the output failed.
    #[error("XML write failed: {0}")]
    Write(String),
}

fn escape_failed(error: impl std::fmt::Display) -> XmlError {
    XmlError::Escape(error.to_string())
}

fn write_failed(error: impl std::fmt::Display) -> XmlError {
    XmlError::Write(error.to_string())
}

/// Decodes raw descriptor bytes into text.
///
/// The encoding is taken from a byte order mark or from the `encoding`
/// attribute of the XML declaration, and defaults to UTF-8. A leading byte
/// order mark is dropped.
///
/// # Errors
///
/// Returns [`XmlError::Encoding`] if the bytes are invalid in that encoding,
/// or [`XmlError::Syntax`] if the declaration itself is malformed.
pub fn decode_source(bytes: &[u8]) -> Result<String, XmlError> {
    let mut reader = Reader::from_reader(bytes);
    // the declaration, if any, is the first event and selects the decoder
    if let Err(source) = reader.read_event() {
        return Err(XmlError::Syntax {
            position: reader.error_position(),
            source,
        });
    }
    let text = reader
        .decoder()
        .decode(bytes)
        .map_err(|e| XmlError::Encoding(e.to_string()))?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
}

/// Parses descriptor text into an element tree.
///
/// Whitespace-only text is dropped and other text is trimmed. Comments
/// before the root are kept; the XML declaration, processing instructions,
/// the doctype and comments after the root are not.
///
/// # Errors
///
/// Returns an error if the input is not a single well-formed element tree.
pub fn parse_document(source: &str) -> Result<ProjectDocument, XmlError> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(true);

    let mut leading_comments = Vec::new();
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(source) => {
                return Err(XmlError::Syntax {
                    position: reader.error_position(),
                    source,
                });
            }
        };

        match event {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(XmlError::OutsideRoot);
                }
                open.push(element_from_start(&start, reader.decoder())?);
            }
            Event::Empty(start) => {
                if root.is_some() {
                    return Err(XmlError::OutsideRoot);
                }
                let element = element_from_start(&start, reader.decoder())?;
                close_element(element, &mut open, &mut root);
            }
            Event::End(_) => {
                // mismatched end tags are rejected by the reader
                let element = open.pop().ok_or(XmlError::OutsideRoot)?;
                close_element(element, &mut open, &mut root);
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(escape_failed)?.into_owned();
                push_child(&mut open, Node::Text(text))?;
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data)?.to_string();
                push_child(&mut open, Node::CData(text))?;
            }
            Event::Comment(comment) => {
                let text = std::str::from_utf8(&comment)?.to_string();
                match (open.last_mut(), &root) {
                    (Some(parent), _) => parent.children.push(Node::Comment(text)),
                    (None, None) => leading_comments.push(text),
                    (None, Some(_)) => tracing::debug!("dropping comment after the root element"),
                }
            }
            Event::Eof => break,
            // declaration, processing instructions and doctype are not retained
            _ => {}
        }
    }

    if let Some(unclosed) = open.pop() {
        return Err(XmlError::Unclosed(unclosed.name));
    }

    let root = root.ok_or(XmlError::NoRoot)?;
    Ok(ProjectDocument {
        leading_comments,
        root,
    })
}

fn element_from_start(start: &BytesStart<'_>, decoder: Decoder) -> Result<Element, XmlError> {
    let mut element = Element::new(std::str::from_utf8(start.name().as_ref())?);
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = std::str::from_utf8(attribute.key.as_ref())?.to_string();
        let value = attribute
            .decode_and_unescape_value(decoder)
            .map_err(escape_failed)?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn close_element(element: Element, open: &mut [Element], root: &mut Option<Element>) {
    match open.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None => *root = Some(element),
    }
}

fn push_child(open: &mut [Element], node: Node) -> Result<(), XmlError> {
    let parent = open.last_mut().ok_or(XmlError::OutsideRoot)?;
    parent.children.push(node);
    Ok(())
}

/// Serializes a document to stable XML.
///
/// Output format:
/// - Optional `<?xml version="1.0" encoding="UTF-8"?>` declaration
/// - `settings.indent_size`-space indentation, text-only elements on one line
/// - Childless elements self-closed
/// - Trailing newline
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn to_xml_stable(
    document: &ProjectDocument,
    settings: &WriterSettings,
) -> Result<String, XmlError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', settings.indent_size);

    if settings.xml_declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(write_failed)?;
    }
    for comment in &document.leading_comments {
        writer
            .write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))
            .map_err(write_failed)?;
    }
    write_element(&mut writer, &document.root)?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(write_failed)?;
    xml.push('\n');
    Ok(xml)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), XmlError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(write_failed);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(write_failed)?;
    for child in &element.children {
        match child {
            Node::Element(nested) => write_element(writer, nested)?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
                .map_err(write_failed)?,
            Node::CData(text) => writer
                .write_event(Event::CData(BytesCData::new(text.as_str())))
                .map_err(write_failed)?,
            Node::Comment(text) => writer
                .write_event(Event::Comment(BytesText::from_escaped(text.as_str())))
                .map_err(write_failed)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(write_failed)
}
