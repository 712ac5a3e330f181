//! Copy-on-write cursor over a document tree.
//!
//! A cursor starts out borrowing the source document and stays borrowed while
//! steps only descend into existing children. Steps that assemble new nodes
//! (collected or flattened sequences, selections) switch it to an owned node.
//! The source tree is never modified, so many evaluations can share it.

use crate::document::node::YamlNode;
use std::borrow::Cow;

/// The subtree a filter pipeline has produced so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor<'a>(Cow<'a, YamlNode>);

impl<'a> Cursor<'a> {
    pub fn borrowed(node: &'a YamlNode) -> Self {
        Cursor(Cow::Borrowed(node))
    }

    pub fn owned(node: YamlNode) -> Self {
        Cursor(Cow::Owned(node))
    }

    pub fn absent() -> Self {
        Cursor::owned(YamlNode::absent())
    }

    pub fn node(&self) -> &YamlNode {
        &self.0
    }

    /// Returns true while the cursor still points into the source document.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.0, Cow::Borrowed(_))
    }

    pub fn into_node(self) -> YamlNode {
        self.0.into_owned()
    }

    /// Replaces the cursor with its `key` child, or the absent value.
    pub fn descend(self, key: &str) -> Self {
        let child = match self.0 {
            Cow::Borrowed(node) => node.get(key).map(Cursor::borrowed),
            Cow::Owned(node) => node.into_child(key).map(Cursor::owned),
        };
        child.unwrap_or_else(Cursor::absent)
    }

    /// `.key`: on a sequence, collects the non-sequence `key` child of every
    /// element in order; otherwise descends into `key`.
    pub fn collect_key(self, key: &str) -> Self {
        if let Some(items) = self.node().as_sequence() {
            let collected = items
                .iter()
                .filter_map(|item| item.get(key))
                .filter(|child| !child.is_sequence())
                .cloned()
                .collect();
            return Cursor::owned(YamlNode::sequence(collected));
        }
        self.descend(key)
    }

    /// `.key[]`: on a sequence, concatenates the sequence-valued `key` child
    /// of every element in order; otherwise descends into `key`.
    pub fn flatten_key(self, key: &str) -> Self {
        if let Some(items) = self.node().as_sequence() {
            let mut flattened = YamlNode::sequence(Vec::new());
            for inner in items.iter().filter_map(|item| item.get(key)) {
                if let Some(members) = inner.as_sequence() {
                    for member in members {
                        flattened.push(member.clone());
                    }
                }
            }
            return Cursor::owned(flattened);
        }
        self.descend(key)
    }

    /// `.[]`: keeps a sequence as-is and turns anything else into the absent value.
    pub fn flatten(self) -> Self {
        if self.node().is_sequence() {
            self
        } else {
            Cursor::absent()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_yaml_document;

    #[test]
    fn test_descend_stays_borrowed() {
        let doc = parse_yaml_document("a: {b: 5}").unwrap();
        let cursor = Cursor::borrowed(&doc).descend("a").descend("b");
        assert!(cursor.is_borrowed());
        assert_eq!(cursor.node(), &YamlNode::integer(5));
    }

    #[test]
    fn test_descend_missing_key_is_absent() {
        let doc = parse_yaml_document("a: 1").unwrap();
        assert!(Cursor::borrowed(&doc).descend("zzz").node().is_absent());
        assert!(Cursor::borrowed(&doc).descend("a").descend("b").node().is_absent());
    }

    #[test]
    fn test_descend_owned_moves_child() {
        let doc = parse_yaml_document("a: {b: [1, 2]}").unwrap();
        let cursor = Cursor::owned(doc.clone()).descend("a").descend("b");
        assert!(!cursor.is_borrowed());
        assert_eq!(Some(cursor.node()), doc.get("a").and_then(|a| a.get("b")));
    }

    #[test]
    fn test_collect_key_drops_sequences() {
        let doc = parse_yaml_document("[{name: x}, {other: 1}, {name: [1, 2]}]").unwrap();
        let cursor = Cursor::borrowed(&doc).collect_key("name");
        assert_eq!(cursor.into_node(), YamlNode::sequence(vec![YamlNode::string("x")]));
    }

    #[test]
    fn test_flatten_key_concatenates() {
        let doc = parse_yaml_document("[{items: [1, 2]}, {items: [3]}, {other: 1}, {items: 4}]")
            .unwrap();
        let cursor = Cursor::borrowed(&doc).flatten_key("items");
        let expected: Vec<YamlNode> = (1..=3).map(YamlNode::integer).collect();
        assert_eq!(cursor.into_node(), YamlNode::sequence(expected));
    }

    #[test]
    fn test_flatten_non_sequence() {
        let doc = parse_yaml_document("a: 1").unwrap();
        assert!(Cursor::borrowed(&doc).flatten().node().is_absent());
        let seq = parse_yaml_document("[1]").unwrap();
        assert!(Cursor::borrowed(&seq).flatten().is_borrowed());
    }
}
