//! Minimal element tree handed to plugins as an output context.
//!
//! Text is stored literally. Escaping only happens when the tree is
//! serialized with [`Element::to_html`].

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    text: Option<String>,
    classes: Vec<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: None,
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append a new child element and return it for further building.
    pub fn create_el(&mut self, tag: impl Into<String>) -> &mut Element {
        self.append(Element::new(tag))
    }

    pub fn create_el_with_text(
        &mut self,
        tag: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Element {
        let child = self.create_el(tag);
        child.set_text(text);
        child
    }

    pub fn append(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    /// Remove all children and text, keeping the tag and classes.
    pub fn empty(&mut self) {
        self.text = None;
        self.children.clear();
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }

    /// All descendants with the given tag, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_tag(tag, &mut found);
        found
    }

    fn collect_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.tag == tag {
                found.push(child);
            }
            child.collect_tag(tag, found);
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(
                &self.classes.join(" "),
            ));
            out.push('"');
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&html_escape::encode_text(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_el_appends_in_order() {
        let mut root = Element::new("div");
        root.create_el_with_text("span", "one");
        root.create_el_with_text("span", "two");

        let texts: Vec<_> = root.children().iter().filter_map(Element::text).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn empty_clears_text_and_children() {
        let mut root = Element::new("div");
        root.add_class("modal-content");
        root.set_text("Woah!");
        root.create_el("p");

        root.empty();

        assert!(root.is_empty());
        assert!(root.has_class("modal-content"));
    }

    #[test]
    fn add_class_ignores_duplicates() {
        let mut el = Element::new("div");
        el.add_class("a");
        el.add_class("a");

        assert_eq!(el.classes(), ["a".to_string()]);
    }

    #[test]
    fn find_all_walks_nested_children() {
        let mut root = Element::new("table");
        let body = root.create_el("tbody");
        body.create_el("tr").create_el("td");
        body.create_el("tr").create_el("td");

        assert_eq!(root.find_all("tr").len(), 2);
        assert_eq!(root.find_all("td").len(), 2);
        assert!(root.find_all("th").is_empty());
    }

    #[test]
    fn html_escapes_text_but_tree_keeps_literal() {
        let mut root = Element::new("td");
        root.set_text("<b>&</b>");

        assert_eq!(root.text(), Some("<b>&</b>"));
        insta::assert_snapshot!(root.to_html(), @"<td>&lt;b&gt;&amp;&lt;/b&gt;</td>");
    }

    #[test]
    fn html_includes_classes() {
        let mut root = Element::new("div");
        root.add_class("status-bar-item");
        root.add_class("plugin-sample");
        root.create_el_with_text("span", "x");

        insta::assert_snapshot!(
            root.to_html(),
            @r#"<div class="status-bar-item plugin-sample"><span>x</span></div>"#
        );
    }
}
