//! Class hierarchy index for the documentation site.
//!
//! The index is a tree of `(name, reference, children)` triples: generic base
//! types at the root, the concrete boards, strategies and UIs beneath the
//! instantiation they implement. It is written as the `hierarchy.js` data file
//! a static documentation page loads, or as plain JSON.

use crate::catalog::{GameKind, GameVisitor};
use crate::framework::{Board, FirstFreeStrategy, MinimaxStrategy, Ui};
use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any::type_name;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

const JS_PREFIX: &str = "var hierarchy =";
const ROOT_INDENT: usize = 4;
const STEP_INDENT: usize = 2;

/// Malformed index content.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IndexError {
    /// A node has an empty display name.
    #[display("Node at '{}' has an empty name", path)]
    EmptyName {
        /// Slash-separated names leading to the node.
        path: String,
    },

    /// A node's link target is not an HTML page.
    #[display("Node at '{}' has invalid reference '{}'", path, reference)]
    BadReference {
        /// Slash-separated names leading to the node.
        path: String,
        /// The offending reference.
        reference: String,
    },

    /// A node lists children but the list is empty.
    #[display("Node at '{}' has an empty child list", path)]
    EmptyChildren {
        /// Slash-separated names leading to the node.
        path: String,
    },

    /// The text could not be read as an index.
    #[display("Could not parse hierarchy: {}", _0)]
    Parse(String),
}

impl std::error::Error for IndexError {}

/// One entry of the index.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct IndexNode {
    /// Display name, HTML-escaped.
    name: String,
    /// Page the entry links to.
    reference: String,
    /// Derived entries; `None` for a leaf.
    children: Option<Vec<IndexNode>>,
}

impl IndexNode {
    /// A node without children.
    pub fn leaf(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
            children: None,
        }
    }

    /// A node with children; an empty list makes a leaf.
    pub fn branch(name: impl Into<String>, reference: impl Into<String>, children: Vec<IndexNode>) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
            children: (!children.is_empty()).then_some(children),
        }
    }

    /// This node and all of its descendants.
    pub fn len(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(IndexNode::len)
            .sum::<usize>()
    }

    /// Always false: a node counts itself.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn find(&self, name: &str) -> Option<&IndexNode> {
        if self.name == name {
            return Some(self);
        }
        self.children
            .iter()
            .flatten()
            .find_map(|child| child.find(name))
    }

    fn validate(&self, parent: &str) -> Result<(), IndexError> {
        let path = if parent.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", parent, self.name)
        };
        if self.name.trim().is_empty() {
            return Err(IndexError::EmptyName { path });
        }
        let stem = self.reference.strip_suffix(".html").unwrap_or_default();
        if stem.is_empty() || stem.contains(char::is_whitespace) {
            return Err(IndexError::BadReference {
                path,
                reference: self.reference.clone(),
            });
        }
        match &self.children {
            Some(children) if children.is_empty() => Err(IndexError::EmptyChildren { path }),
            Some(children) => children.iter().try_for_each(|child| child.validate(&path)),
            None => Ok(()),
        }
    }

    fn write_js(&self, out: &mut String, indent: usize) {
        let pad = " ".repeat(indent);
        let name = js_string(&self.name);
        let reference = js_string(&self.reference);
        match &self.children {
            Some(children) if !children.is_empty() => {
                out.push_str(&format!("{}[ {}, {}, [\n", pad, name, reference));
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        out.push_str(",\n");
                    }
                    child.write_js(out, indent + STEP_INDENT);
                }
                out.push_str(&format!("\n{}] ]", pad));
            }
            _ => out.push_str(&format!("{}[ {}, {}, null ]", pad, name, reference)),
        }
    }
}

impl Serialize for IndexNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.name, &self.reference, &self.children).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IndexNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (name, reference, children) =
            <(String, String, Option<Vec<IndexNode>>)>::deserialize(deserializer)?;
        Ok(Self {
            name,
            reference,
            children,
        })
    }
}

/// The whole index: an ordered list of root entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
#[serde(transparent)]
pub struct ClassIndex {
    /// Root entries in display order.
    roots: Vec<IndexNode>,
}

impl ClassIndex {
    /// Wraps root entries.
    pub fn new(roots: Vec<IndexNode>) -> Self {
        Self { roots }
    }

    /// Index of this crate's framework: the generic traits and, under each
    /// instantiation, every concrete type implementing it.
    #[instrument]
    pub fn framework() -> Self {
        let games: Vec<GameTypes> = GameKind::iter().map(|kind| kind.accept(DescribeTypes)).collect();

        let mut boards: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        let mut uis: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for game in &games {
            boards.entry(game.symbol).or_default().push(game.board);
            uis.entry(game.symbol).or_default().push(game.ui);
        }

        let mut roots = vec![
            generic("GameManager", "T", Vec::new()),
            generic("Move", "T", Vec::new()),
            generic("Player", "T", Vec::new()),
            generic(
                "Player",
                "char",
                vec![
                    short_name(type_name::<FirstFreeStrategy>()),
                    short_name(type_name::<MinimaxStrategy>()),
                ],
            ),
        ];
        for (base, members) in [("Board", boards), ("Ui", uis)] {
            roots.push(generic(base, "T", Vec::new()));
            for (symbol, names) in members {
                roots.push(generic(base, symbol, names));
            }
        }
        roots.sort_by(|a, b| a.name.cmp(&b.name));

        let index = Self { roots };
        debug!(nodes = index.len(), "Built framework index");
        index
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.roots.iter().map(IndexNode::len).sum()
    }

    /// True when there are no roots.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// First node named `name`, searched depth-first.
    pub fn find(&self, name: &str) -> Option<&IndexNode> {
        self.roots.iter().find_map(|root| root.find(name))
    }

    /// Checks every node is well formed.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), IndexError> {
        self.roots.iter().try_for_each(|root| root.validate(""))
    }

    /// Renders the `hierarchy.js` data file.
    pub fn to_js(&self) -> String {
        let mut out = format!("{}\n[\n", JS_PREFIX);
        for (i, root) in self.roots.iter().enumerate() {
            if i > 0 {
                out.push_str(",\n");
            }
            root.write_js(&mut out, ROOT_INDENT);
        }
        out.push_str("\n];");
        out
    }

    /// Reads a `hierarchy.js` data file.
    #[instrument(skip(text))]
    pub fn from_js(text: &str) -> Result<Self, IndexError> {
        let body = text
            .trim()
            .strip_prefix(JS_PREFIX)
            .ok_or_else(|| IndexError::Parse(format!("missing '{}'", JS_PREFIX)))?;
        let body = body.trim().strip_suffix(';').unwrap_or(body).trim();
        Self::from_json(body)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, IndexError> {
        serde_json::to_string_pretty(self).map_err(|e| IndexError::Parse(e.to_string()))
    }

    /// Reads the JSON form.
    pub fn from_json(text: &str) -> Result<Self, IndexError> {
        serde_json::from_str(text).map_err(|e| IndexError::Parse(e.to_string()))
    }
}

/// Doxygen-style page name for a class.
///
/// Uppercase letters become `_` plus the lowercase letter and `_` is doubled:
/// `FourInARow_Board` links to `class_four_in_a_row___board.html`.
pub fn doc_reference(name: &str) -> String {
    let mut out = String::from("class");
    for c in name.chars() {
        match c {
            '_' => out.push_str("__"),
            c if c.is_ascii_uppercase() => {
                out.push('_');
                out.push(c.to_ascii_lowercase());
            }
            c => out.push(c),
        }
    }
    out.push_str(".html");
    out
}

/// Escapes `&`, `<` and `>` for display in HTML.
pub fn html_escape(name: &str) -> String {
    name.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn short_name(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// `Base< param >` pointing at the base type's page, with sorted children.
fn generic(base: &str, param: &str, mut children: Vec<&str>) -> IndexNode {
    children.sort_unstable();
    let children = children
        .into_iter()
        .map(|name| IndexNode::leaf(html_escape(name), doc_reference(name)))
        .collect();
    IndexNode::branch(
        html_escape(&format!("{}< {} >", base, param)),
        doc_reference(base),
        children,
    )
}

/// Type names one game contributes to the index.
struct GameTypes {
    board: &'static str,
    ui: &'static str,
    symbol: &'static str,
}

struct DescribeTypes;

impl GameVisitor for DescribeTypes {
    type Output = GameTypes;

    fn visit<B: Board, U: Ui<B>>(self, _ui: U) -> GameTypes {
        GameTypes {
            board: short_name(type_name::<B>()),
            ui: short_name(type_name::<U>()),
            symbol: short_name(type_name::<B::Symbol>()),
        }
    }
}
