//! Minimal XML element tree.
//!
//! The profile documents are small and their schema is fixed, so a full XML
//! crate is overkill — but raw string interpolation cannot guarantee
//! well-formed output. This builder escapes text and attributes and keeps
//! constant vs. derived fields explicit at the call site.

#[derive(Debug, Clone)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

#[derive(Debug, Clone)]
enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Leaf element containing only text, e.g. `<sec>1000</sec>`.
    pub fn leaf(name: &'static str, value: impl ToString) -> Self {
        Self::new(name).text(value)
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn text(mut self, value: impl ToString) -> Self {
        self.children.push(Node::Text(value.to_string()));
        self
    }

    /// Render as a standalone document with an XML declaration and trailing
    /// newline.
    pub fn to_document(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.render(&mut out, 0);
        out
    }

    fn render(&self, out: &mut String, depth: usize) {
        let pad = "    ".repeat(depth);
        out.push_str(&pad);
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attrs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }

        match self.children.as_slice() {
            [] => {
                out.push_str("/>\n");
            }
            // Text-only content stays on one line: <sec>1000</sec>
            [Node::Text(text)] => {
                out.push('>');
                out.push_str(&escape_text(text));
                out.push_str("</");
                out.push_str(self.name);
                out.push_str(">\n");
            }
            children => {
                out.push_str(">\n");
                for child in children {
                    match child {
                        Node::Element(el) => el.render(out, depth + 1),
                        Node::Text(text) => {
                            out.push_str(&"    ".repeat(depth + 1));
                            out.push_str(&escape_text(text));
                            out.push('\n');
                        }
                    }
                }
                out.push_str(&pad);
                out.push_str("</");
                out.push_str(self.name);
                out.push_str(">\n");
            }
        }
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
