use roxmltree::{Document, Node, ParsingOptions};

use crate::document::tokenization::split_plaintext;
use crate::types::TokenSequence;

const WORD_TAG: &str = "w";
const PUNCTUATION_TAG: &str = "pc";
const BODY_TAG: &str = "body";
const ID_TAG: &str = "idno";
const ID_TYPE: &str = "pid";

/// How tokens are read out of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Text of every `<w>` and `<pc>` element, in document order.
    Structured,
    /// Whitespace-split text of the first `<body>` element.
    Plaintext,
}

fn parse(source: &str) -> Result<Document<'_>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(source, options)
}

/// Concatenated text of all text nodes below `node`.
fn inner_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Element names are compared without their namespace.
fn local_name<'input>(node: &Node<'_, 'input>) -> &'input str {
    node.tag_name().name()
}

pub fn extract_tokens(
    source: &str,
    mode: ExtractionMode,
) -> Result<TokenSequence, roxmltree::Error> {
    let document = parse(source)?;
    let mut elements = document.root().descendants().filter(Node::is_element);

    let tokens: TokenSequence = match mode {
        ExtractionMode::Structured => elements
            .filter(|node| matches!(local_name(node), WORD_TAG | PUNCTUATION_TAG))
            .map(inner_text)
            .collect(),
        ExtractionMode::Plaintext => elements
            .find(|node| local_name(node) == BODY_TAG)
            .map(|body| split_plaintext(&inner_text(body)))
            .unwrap_or_default(),
    };
    Ok(tokens)
}

/// An `idno`-like element typed as a persistent id. Untyped ones are passed over.
fn is_id_element(node: &Node<'_, '_>) -> bool {
    local_name(node).contains(ID_TAG) && node.attribute("type") == Some(ID_TYPE)
}

/// Persistent id from the first `<idno type="pid">`, if the document has one.
///
/// Documents that do not parse simply have no id.
pub fn extract_document_id(source: &str) -> Option<String> {
    let document = parse(source).ok()?;
    let id = document
        .root()
        .descendants()
        .filter(Node::is_element)
        .find(|node| is_id_element(node))?
        .text()?
        .to_string();
    Some(id)
}
