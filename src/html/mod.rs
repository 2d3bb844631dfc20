//! HTML tree utilities shared by the combiner and the link fixer.
//!
//! Pages are parsed into an html5ever tree (`kuchikiki`), edited in place and
//! written back through the configured document template.

pub mod link;
pub mod processor;
pub mod text;
pub mod toc;

pub use processor::LinkFixer;

use crate::config::TemplateConfig;
use crate::error::DocsError;
use kuchikiki::NodeRef;
use kuchikiki::traits::TendrilSink;
use std::fs;
use std::path::Path;

/// Inserted into the head of every fixed page.
pub const PROCESSED_MARKER: &str = "<meta name=\"docfix\" content=\"processed\">\n";

/// Parse a complete HTML document.
pub fn parse_document(html: &str) -> NodeRef {
    kuchikiki::parse_html().one(html)
}

/// Parse an HTML snippet into detached body-level nodes.
///
/// The snippet is wrapped in `<body>` so leading whitespace survives parsing.
pub fn parse_fragment(html: &str) -> Vec<NodeRef> {
    let document = parse_document(&format!("<body>{html}</body>"));
    document
        .select("body")
        .ok()
        .and_then(|mut bodies| bodies.next())
        .map(|body| body.as_node().children().collect())
        .unwrap_or_default()
}

/// Every element under `node` matching `selector`, in document order.
pub fn select_all(node: &NodeRef, selector: &str) -> Result<Vec<NodeRef>, DocsError> {
    let selection = node
        .select(selector)
        .map_err(|()| DocsError::InvalidSelector(selector.to_owned()))?;
    Ok(selection.map(|elem| elem.as_node().clone()).collect())
}

/// First element under `node` matching `selector`.
pub fn select_first(node: &NodeRef, selector: &str) -> Result<Option<NodeRef>, DocsError> {
    let mut selection = node
        .select(selector)
        .map_err(|()| DocsError::InvalidSelector(selector.to_owned()))?;
    Ok(selection.next().map(|elem| elem.as_node().clone()))
}

/// Like [`select_first`], but a missing element is an error naming `path`.
pub fn require(node: &NodeRef, selector: &str, path: &Path) -> Result<NodeRef, DocsError> {
    select_first(node, selector)?.ok_or_else(|| DocsError::MissingRegion {
        path: path.to_path_buf(),
        selector: selector.to_owned(),
    })
}

pub fn get_attr(node: &NodeRef, name: &str) -> Option<String> {
    let elem = node.as_element()?;
    elem.attributes.borrow().get(name).map(str::to_owned)
}

pub fn set_attr(node: &NodeRef, name: &str, value: String) {
    if let Some(elem) = node.as_element() {
        elem.attributes.borrow_mut().insert(name, value);
    }
}

/// Replace all children of `node` with a single text node.
pub fn set_text(node: &NodeRef, text: &str) {
    for child in node.children().collect::<Vec<_>>() {
        child.detach();
    }
    node.append(NodeRef::new_text(text));
}

/// Serialized markup of the children of `node`.
pub fn inner_html(node: &NodeRef) -> std::io::Result<String> {
    let mut buf = Vec::new();
    for child in node.children() {
        child.serialize(&mut buf)?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Whether the raw page already went through the link fixer.
pub fn is_processed(html: &str) -> bool {
    html.contains(PROCESSED_MARKER.trim_end())
}

/// Serialize a page through the document template.
///
/// Only the head and body contents are kept; anything else the parser
/// normalized into the tree is dropped.
pub fn render_document(
    document: &NodeRef,
    template: &TemplateConfig,
    path: &Path,
) -> Result<String, DocsError> {
    let head = require(document, "head", path)?;
    let body = require(document, "body", path)?;
    let to_write_error = |err| DocsError::Write(path.to_path_buf(), err);

    let mut html = String::new();
    html.push_str(&template.begin);
    html.push_str(&inner_html(&head).map_err(to_write_error)?);
    html.push_str(&template.join);
    html.push_str(&inner_html(&body).map_err(to_write_error)?);
    html.push_str(&template.end);
    Ok(html)
}

/// Serialize a page through the document template and write it to `path`.
pub fn write_document(
    document: &NodeRef,
    template: &TemplateConfig,
    path: &Path,
) -> Result<(), DocsError> {
    let html = render_document(document, template, path)?;
    fs::write(path, html).map_err(|err| DocsError::Write(path.to_path_buf(), err))
}

/// Read a page as text.
pub fn read_page(path: &Path) -> Result<String, DocsError> {
    fs::read_to_string(path).map_err(|err| DocsError::Read(path.to_path_buf(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>async</title></head>
<body><div id="main"><h1 class="page-title">Utils</h1><p>x</p></div></body>
</html>"#;

    #[test]
    fn test_render_document_uses_template() {
        let document = parse_document(PAGE);
        let html = render_document(&document, &TemplateConfig::default(), Path::new("p.html"))
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<title>async</title>"));
        assert!(html.contains("</head>\n<body><div id=\"main\">"));
        assert!(html.ends_with("</body>"));
        assert!(!html.contains("</html>"));
    }

    #[test]
    fn test_parse_fragment_keeps_leading_space() {
        let nodes = parse_fragment(" Modified. See <a href=\"x\">x</a> repo.");
        assert_eq!(nodes.len(), 3);
        assert_eq!(
            nodes[0].as_text().map(|t| t.borrow().clone()),
            Some(" Modified. See ".to_string())
        );
        assert_eq!(get_attr(&nodes[1], "href").as_deref(), Some("x"));
    }

    #[test]
    fn test_select_first_and_require() {
        let document = parse_document(PAGE);
        assert!(select_first(&document, "#main").unwrap().is_some());
        assert!(select_first(&document, "footer").unwrap().is_none());

        let err = require(&document, "footer", Path::new("p.html")).unwrap_err();
        assert!(matches!(err, DocsError::MissingRegion { .. }));
    }

    #[test]
    fn test_invalid_selector() {
        let document = parse_document(PAGE);
        let err = select_all(&document, "#[").unwrap_err();
        assert!(matches!(err, DocsError::InvalidSelector(_)));
    }

    #[test]
    fn test_attrs_and_text() {
        let document = parse_document(PAGE);
        let title = require(&document, ".page-title", Path::new("p.html")).unwrap();

        set_attr(&title, "id", "utils".into());
        assert_eq!(get_attr(&title, "id").as_deref(), Some("utils"));

        set_text(&title, "Methods:");
        assert_eq!(title.text_contents(), "Methods:");
        assert_eq!(inner_html(&title).unwrap(), "Methods:");
    }

    #[test]
    fn test_is_processed() {
        assert!(!is_processed(PAGE));

        let marked = PAGE.replace("</head>", &format!("{PROCESSED_MARKER}</head>"));
        assert!(is_processed(&marked));

        // survives a parse and render round trip
        let rendered = render_document(
            &parse_document(&marked),
            &TemplateConfig::default(),
            Path::new("p.html"),
        )
        .unwrap();
        assert!(is_processed(&rendered));
    }
}
