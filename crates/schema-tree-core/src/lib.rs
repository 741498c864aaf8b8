//! # schema-tree-core
//!
//! Ordered field tree used by the schema-tree notation parser.
//!
//! A [`TreeNode`] holds a label and an optional ordered list of children.
//! Children are appended along the rightmost path of the tree, rendered as
//! an indented bullet list, and can be sorted alphabetically at every level.
//!
//! # Example
//!
//! ```
//! use schema_tree_core::TreeNode;
//!
//! let mut root = TreeNode::default();
//! root.insert_children_at_depth(0, ["name", "id", "custom_fields"]).unwrap();
//! root.insert_children_at_depth(1, ["c1", "c2"]).unwrap();
//!
//! assert_eq!(root.render(), "- name\n- id\n- custom_fields\n\t- c1\n\t- c2");
//! ```

pub mod error;
pub mod node;
pub mod style;

pub use error::TreeError;
pub use node::TreeNode;
pub use style::RenderStyle;
