//! YAML node representation consumed by the filter engine.
//!
//! A document is a tree of `YamlNode` values. Containers hold further nodes,
//! mappings keep their insertion order, and the dedicated `Absent` value marks
//! "nothing here", which is what a path step produces when it matches nothing.
//!
//! # Example
//!
//! ```
//! use yamlfilter::document::node::{YamlNode, YamlValue};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), YamlNode::string("yamlfilter"));
//! map.insert("version".to_string(), YamlNode::integer(1));
//! let node = YamlNode::mapping(map);
//!
//! assert!(node.is_mapping());
//! assert_eq!(node.get("version").and_then(|v| v.scalar_text()), Some("1".to_string()));
//! assert!(matches!(node.get("missing"), None));
//! assert!(matches!(YamlNode::absent().value(), YamlValue::Absent));
//! ```

use indexmap::IndexMap;

/// Represents YAML numbers (integer or float)
#[derive(Debug, Clone, PartialEq)]
pub enum YamlNumber {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for YamlNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YamlNumber::Integer(i) => write!(f, "{}", i),
            YamlNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl YamlNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            YamlNumber::Integer(i) => *i as f64,
            YamlNumber::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, YamlNumber::Integer(_))
    }
}

/// A YAML value.
///
/// Mappings and sequences contain `YamlNode` instances so the whole tree is
/// made of the same node type.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlValue {
    /// Key-value pairs in document order
    Mapping(IndexMap<String, YamlNode>),
    /// Ordered values
    Sequence(Vec<YamlNode>),
    String(String),
    Number(YamlNumber),
    Boolean(bool),
    Null,
    /// No value at all; the result of a lookup that matched nothing
    Absent,
}

impl YamlValue {
    /// Returns the YAML type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            YamlValue::Mapping(_) => "mapping",
            YamlValue::Sequence(_) => "sequence",
            YamlValue::String(_) => "string",
            YamlValue::Number(_) => "number",
            YamlValue::Boolean(_) => "boolean",
            YamlValue::Null => "null",
            YamlValue::Absent => "absent",
        }
    }
}

/// A node of a YAML document tree.
///
/// `YamlNode` is the cursor type of the filter engine: every filter step takes
/// a node and produces a node, composing new ones instead of editing the
/// source tree.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlNode {
    pub(crate) value: YamlValue,
}

impl YamlNode {
    /// Creates a new `YamlNode` with the given value.
    pub fn new(value: YamlValue) -> Self {
        Self { value }
    }

    pub fn mapping(entries: IndexMap<String, YamlNode>) -> Self {
        Self::new(YamlValue::Mapping(entries))
    }

    pub fn sequence(items: Vec<YamlNode>) -> Self {
        Self::new(YamlValue::Sequence(items))
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self::new(YamlValue::String(text.into()))
    }

    pub fn integer(value: i64) -> Self {
        Self::new(YamlValue::Number(YamlNumber::Integer(value)))
    }

    pub fn float(value: f64) -> Self {
        Self::new(YamlValue::Number(YamlNumber::Float(value)))
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(YamlValue::Boolean(value))
    }

    pub fn null() -> Self {
        Self::new(YamlValue::Null)
    }

    /// Creates the empty value a filter step yields when nothing matched.
    pub fn absent() -> Self {
        Self::new(YamlValue::Absent)
    }

    /// Returns an immutable reference to the node's value.
    pub fn value(&self) -> &YamlValue {
        &self.value
    }

    /// Consumes the node and returns its value.
    pub fn into_value(self) -> YamlValue {
        self.value
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self.value, YamlValue::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self.value, YamlValue::Mapping(_))
    }

    /// Returns true for strings, numbers, booleans and null.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self.value,
            YamlValue::String(_) | YamlValue::Number(_) | YamlValue::Boolean(_) | YamlValue::Null
        )
    }

    pub fn is_absent(&self) -> bool {
        matches!(self.value, YamlValue::Absent)
    }

    /// Returns the items of a sequence node.
    pub fn as_sequence(&self) -> Option<&[YamlNode]> {
        match &self.value {
            YamlValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up the child stored under `key` in a mapping node.
    ///
    /// Any other node has no keyed children and returns `None`.
    pub fn get(&self, key: &str) -> Option<&YamlNode> {
        match &self.value {
            YamlValue::Mapping(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Consumes a mapping node and returns the child stored under `key`.
    pub fn into_child(self, key: &str) -> Option<YamlNode> {
        match self.value {
            YamlValue::Mapping(mut entries) => entries.shift_remove(key),
            _ => None,
        }
    }

    /// Returns the children in document order.
    ///
    /// Mapping children carry their key, sequence items carry `None`. Scalars
    /// and absent nodes have no children.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlfilter::document::node::YamlNode;
    ///
    /// let seq = YamlNode::sequence(vec![YamlNode::integer(1), YamlNode::integer(2)]);
    /// let children = seq.children();
    /// assert_eq!(children.len(), 2);
    /// assert_eq!(children[0].0, None);
    /// ```
    pub fn children(&self) -> Vec<(Option<&str>, &YamlNode)> {
        match &self.value {
            YamlValue::Mapping(entries) => entries
                .iter()
                .map(|(key, child)| (Some(key.as_str()), child))
                .collect(),
            YamlValue::Sequence(items) => items.iter().map(|item| (None, item)).collect(),
            _ => Vec::new(),
        }
    }

    /// Returns the textual form of a scalar node, or `None` for containers
    /// and absent nodes.
    pub fn scalar_text(&self) -> Option<String> {
        match &self.value {
            YamlValue::String(s) => Some(s.clone()),
            YamlValue::Number(n) => Some(n.to_string()),
            YamlValue::Boolean(b) => Some(b.to_string()),
            YamlValue::Null => Some("null".to_string()),
            _ => None,
        }
    }

    /// Appends `node` to a sequence.
    ///
    /// An absent or null node turns into a one-element sequence. Returns
    /// `false` and leaves `self` untouched for any other kind of node.
    pub fn push(&mut self, node: YamlNode) -> bool {
        match &mut self.value {
            YamlValue::Sequence(items) => {
                items.push(node);
                true
            }
            YamlValue::Absent | YamlValue::Null => {
                self.value = YamlValue::Sequence(vec![node]);
                true
            }
            _ => false,
        }
    }
}

impl From<&str> for YamlNode {
    fn from(text: &str) -> Self {
        YamlNode::string(text)
    }
}

impl From<i64> for YamlNode {
    fn from(value: i64) -> Self {
        YamlNode::integer(value)
    }
}

impl From<bool> for YamlNode {
    fn from(value: bool) -> Self {
        YamlNode::boolean(value)
    }
}

impl From<Vec<YamlNode>> for YamlNode {
    fn from(items: Vec<YamlNode>) -> Self {
        YamlNode::sequence(items)
    }
}
