//! Deterministic pretty printer.
//!
//! Siblings are written in the order they were added and every nesting level
//! is indented by [`INDENT`]. Leaf elements with text stay on one line.
//! Raw fragments are written unchanged after the first line's indent.

use super::{Element, Node};

/// Indentation unit.
pub const INDENT: &str = "    ";

/// XML declaration written ahead of the root element.
pub const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>"#;

/// Serializes `root` as a complete document, declaration included.
pub fn to_document_string(root: &Element) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(DECLARATION);
    out.push('\n');
    write_element(&mut out, root, 0);
    // Trailing newline is added by the sink.
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

/// Serializes a single element without declaration.
pub fn element_to_string(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element, 0);
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Element(element) => write_element(out, element, depth),
        Node::Comment(text) => {
            indent(out, depth);
            out.push_str("<!-- ");
            out.push_str(&escape_comment(text));
            out.push_str(" -->\n");
        }
        Node::Raw(markup) => {
            // Written byte for byte; only the first line is indented.
            indent(out, depth);
            out.push_str(markup);
            if !markup.ends_with('\n') {
                out.push('\n');
            }
        }
    }
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    indent(out, depth);
    out.push('<');
    out.push_str(element.name());
    for (name, value) in element.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }

    if element.is_empty() {
        out.push_str("/>\n");
        return;
    }
    out.push('>');

    if element.children().is_empty() {
        if let Some(text) = element.text() {
            out.push_str(&escape_text(text));
        }
    } else {
        out.push('\n');
        if let Some(text) = element.text() {
            indent(out, depth + 1);
            out.push_str(&escape_text(text));
            out.push('\n');
        }
        for child in element.children() {
            write_node(out, child, depth + 1);
        }
        indent(out, depth);
    }

    out.push_str("</");
    out.push_str(element.name());
    out.push_str(">\n");
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("&#10;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `--` may not appear inside a comment.
fn escape_comment(text: &str) -> String {
    let mut escaped = text.to_string();
    while escaped.contains("--") {
        escaped = escaped.replace("--", "- -");
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::izpack::markup::WithAttributes;

    #[test]
    fn nested_output_is_indented() {
        let root = Element::new("packs").child(
            Element::new("pack")
                .with_attr("name", "Core")
                .child(Element::with_text("description", "Core & co"))
                .child(Node::comment("no files")),
        );

        let expected = "<packs>\n    <pack name=\"Core\">\n        <description>Core &amp; co</description>\n        <!-- no files -->\n    </pack>\n</packs>";
        assert_eq!(element_to_string(&root), expected);
    }

    #[test]
    fn empty_elements_self_close() {
        let root = Element::new("res").with_attr("id", "a\"b");
        assert_eq!(element_to_string(&root), "<res id=\"a&quot;b\"/>");
    }

    #[test]
    fn raw_fragments_are_not_escaped() {
        let root = Element::new("info").child(Node::raw("<custom flag=\"x\"/>"));
        assert_eq!(
            element_to_string(&root),
            "<info>\n    <custom flag=\"x\"/>\n</info>"
        );
    }

    #[test]
    fn multi_line_raw_fragments_are_written_unchanged() {
        let fragment = "<variable name=\"motd\" value=\"line1\nline2\"/>";
        let cdata = "<script><![CDATA[echo hi   \n]]></script>";
        let root = Element::new("variables")
            .child(Node::raw(fragment))
            .child(Node::raw(cdata));

        let out = element_to_string(&root);
        assert!(out.contains(&format!("    {fragment}\n")));
        assert!(out.contains(&format!("    {cdata}\n")));
    }

    #[test]
    fn document_starts_with_declaration() {
        let doc = to_document_string(&Element::new("installation"));
        assert!(doc.starts_with(DECLARATION));
        assert!(doc.ends_with("<installation/>"));
    }

    #[test]
    fn comments_never_contain_double_dash() {
        assert_eq!(escape_comment("a--b"), "a- -b");
        assert!(!escape_comment("x---y").contains("--"));
    }
}
