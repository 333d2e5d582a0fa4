/// Compact attribute formatting for f64 values: up to two decimals,
/// trailing zeros trimmed, so output stays byte-stable and diff-friendly.
pub fn fmt_num(value: f64) -> String {
    let mut out = format!("{value:.2}");
    while out.ends_with('0') {
        out.pop();
    }
    if out.ends_with('.') {
        out.pop();
    }
    if out == "-0" {
        out = "0".to_string();
    }
    out
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// One markup element: tag, ordered attributes, children, optional text
/// content. Renderers build trees of these; serialization happens once at
/// the end of the pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    pub fn attr_num(self, name: &'static str, value: f64) -> Self {
        self.attr(name, fmt_num(value))
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.text = Some(content.into());
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(element);
        self
    }

    pub fn children(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(elements);
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn child_elements(&self) -> &[Element] {
        &self.children
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_xml(value));
            out.push('"');
        }
        if self.children.is_empty() && self.text.is_none() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(text) = &self.text {
            // <style> carries CSS verbatim; escaping would corrupt selectors.
            if self.tag == "style" {
                out.push_str(text);
            } else {
                out.push_str(&escape_xml(text));
            }
        }
        for child in &self.children {
            child.write_to(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// A self-contained SVG document with explicit dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    width: f64,
    height: f64,
    elements: Vec<Element>,
}

impl Document {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.elements.extend(elements);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Depth-first search over the whole tree, used by tests to assert on
    /// structure instead of string-diffing markup.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        for element in &self.elements {
            collect_by_tag(element, tag, &mut found);
        }
        found
    }

    pub fn to_svg(&self) -> String {
        let width = fmt_num(self.width);
        let height = fmt_num(self.height);
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
        );
        for element in &self.elements {
            element.write_to(&mut out);
        }
        out.push_str("</svg>");
        out
    }
}

fn collect_by_tag<'a>(element: &'a Element, tag: &str, found: &mut Vec<&'a Element>) {
    if element.tag == tag {
        found.push(element);
    }
    for child in element.child_elements() {
        collect_by_tag(child, tag, found);
    }
}
