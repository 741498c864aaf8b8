use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::style::RenderStyle;

/// A labelled node in an ordered field tree.
///
/// `children` is `None` for a leaf that has never been expanded. Insertion
/// only creates the list together with its first child, so a node never
/// holds an empty list unless one is deserialized that way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Creates a leaf node with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Direct children in their current order; empty for a leaf.
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn last_child(&self) -> Option<&TreeNode> {
        self.children().last()
    }

    /// Number of nodes below this one, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.children()
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Number of populated levels below this node (0 for a leaf).
    pub fn height(&self) -> usize {
        match &self.children {
            None => 0,
            Some(children) => 1 + children.iter().map(Self::height).max().unwrap_or(0),
        }
    }

    /// Appends one leaf per item under the node reached by descending `depth`
    /// levels along the last child at each level.
    ///
    /// `depth == 0` appends directly under `self`. Items are appended in
    /// iteration order.
    ///
    /// # Errors
    ///
    /// - [`TreeError::NegativeDepth`] if `depth < 0`.
    /// - [`TreeError::NoChildren`] if the walk reaches a node without
    ///   children before `depth` levels have been descended. Nothing is
    ///   inserted in that case.
    pub fn insert_children_at_depth<I>(
        &mut self,
        depth: isize,
        items: I,
    ) -> Result<(), TreeError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        if depth < 0 {
            return Err(TreeError::NegativeDepth { depth });
        }

        let mut node = self;
        let mut remaining = depth;
        while remaining > 0 {
            node = node
                .children
                .as_mut()
                .and_then(|children| children.last_mut())
                .ok_or(TreeError::NoChildren { depth: remaining })?;
            remaining -= 1;
        }

        let mut new_children = items.into_iter().map(TreeNode::new).peekable();
        if new_children.peek().is_some() {
            node.children
                .get_or_insert_with(Vec::new)
                .extend(new_children);
        }
        Ok(())
    }

    /// Renders the children as a tab-indented `"- "` bullet list.
    ///
    /// A leaf renders as its bare label.
    pub fn render(&self) -> String {
        self.render_with(&RenderStyle::default())
    }

    pub fn render_with(&self, style: &RenderStyle) -> String {
        match &self.children {
            None => self.label.clone(),
            Some(children) => {
                let mut lines = Vec::new();
                collect_lines(children, style, 0, &mut lines);
                lines.join("\n")
            }
        }
    }

    /// Sorts children by label at every level, in place.
    ///
    /// Comparison is byte-wise on the label text. Order among equal labels is
    /// left as it was.
    pub fn sort_alphabetically(&mut self) {
        if let Some(children) = &mut self.children {
            children.sort_by(|a, b| a.label.cmp(&b.label));
            for child in children.iter_mut() {
                child.sort_alphabetically();
            }
        }
    }

    /// Returns a copy of this tree sorted with [`sort_alphabetically`](Self::sort_alphabetically).
    pub fn sorted_alphabetically(&self) -> TreeNode {
        let mut sorted = self.clone();
        sorted.sort_alphabetically();
        sorted
    }
}

fn collect_lines(
    children: &[TreeNode],
    style: &RenderStyle,
    depth: usize,
    lines: &mut Vec<String>,
) {
    for child in children {
        let mut line = style.indent.repeat(depth);
        line.push_str(&style.bullet);
        line.push_str(&child.label);
        lines.push(line);

        if let Some(grandchildren) = &child.children {
            collect_lines(grandchildren, style, depth + 1, lines);
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(TreeNode::label).collect()
    }

    fn custom_fields_tree() -> TreeNode {
        let mut root = TreeNode::default();
        root.insert_children_at_depth(0, ["name", "id", "customFields"])
            .unwrap();
        root.insert_children_at_depth(1, ["c1", "c2", "c3"]).unwrap();
        root.insert_children_at_depth(0, ["last"]).unwrap();
        root
    }

    #[test]
    fn insert_at_top_level() {
        let mut root = TreeNode::default();
        root.insert_children_at_depth(0, ["name", "id"]).unwrap();

        assert_eq!(labels(root.children()), vec!["name", "id"]);
        assert!(root.children().iter().all(TreeNode::is_leaf));
    }

    #[test]
    fn insert_descends_along_last_child() {
        let root = custom_fields_tree();

        let custom_fields = &root.children()[2];
        assert_eq!(custom_fields.label(), "customFields");
        assert_eq!(labels(custom_fields.children()), vec!["c1", "c2", "c3"]);
        assert_eq!(root.last_child().unwrap().label(), "last");
        assert!(root.last_child().unwrap().is_leaf());
    }

    #[test]
    fn insert_accepts_owned_strings() {
        let mut root = TreeNode::default();
        let items = vec![String::from("a"), String::from("b")];
        root.insert_children_at_depth(0, items).unwrap();
        assert_eq!(labels(root.children()), vec!["a", "b"]);
    }

    #[test]
    fn negative_depth_is_rejected() {
        let mut root = TreeNode::default();
        let err = root.insert_children_at_depth(-1, ["a"]).unwrap_err();
        assert_eq!(err, TreeError::NegativeDepth { depth: -1 });
        assert!(root.is_leaf());
    }

    #[test]
    fn descending_into_empty_root_fails() {
        let mut root = TreeNode::default();
        let err = root.insert_children_at_depth(1, ["a"]).unwrap_err();
        assert_eq!(err, TreeError::NoChildren { depth: 1 });
    }

    #[test]
    fn descending_past_leaf_fails_without_inserting() {
        let mut root = TreeNode::default();
        root.insert_children_at_depth(0, ["a", "b"]).unwrap();

        let err = root.insert_children_at_depth(2, ["x"]).unwrap_err();
        assert_eq!(err, TreeError::NoChildren { depth: 1 });
        assert_eq!(root.descendant_count(), 2);
        assert!(root.last_child().unwrap().is_leaf());
    }

    #[test]
    fn empty_items_do_not_create_children() {
        let mut root = TreeNode::default();
        root.insert_children_at_depth(0, ["a"]).unwrap();
        root.insert_children_at_depth(1, Vec::<String>::new()).unwrap();

        assert!(root.last_child().unwrap().is_leaf());
        assert_eq!(root.render(), "- a");
    }

    #[test]
    fn render_flat() {
        let mut root = TreeNode::default();
        root.insert_children_at_depth(0, ["name", "id"]).unwrap();
        assert_eq!(root.render(), "- name\n- id");
    }

    #[test]
    fn render_nested() {
        let root = custom_fields_tree();
        assert_eq!(
            root.render(),
            "- name\n- id\n- customFields\n\t- c1\n\t- c2\n\t- c3\n- last"
        );
    }

    #[test]
    fn render_leaf_is_bare_label() {
        assert_eq!(TreeNode::new("solo").render(), "solo");
        assert_eq!(TreeNode::default().render(), "");
    }

    #[test]
    fn render_with_custom_style() {
        let root = custom_fields_tree();
        let style = RenderStyle::new("  ", "* ");
        assert_eq!(
            root.render_with(&style),
            "* name\n* id\n* customFields\n  * c1\n  * c2\n  * c3\n* last"
        );
    }

    #[test]
    fn display_matches_render() {
        let root = custom_fields_tree();
        assert_eq!(root.to_string(), root.render());
    }

    #[test]
    fn sort_orders_every_level() {
        let mut root = TreeNode::default();
        root.insert_children_at_depth(0, ["b", "a", "c"]).unwrap();
        root.insert_children_at_depth(1, ["z", "y"]).unwrap();

        root.sort_alphabetically();

        assert_eq!(labels(root.children()), vec!["a", "b", "c"]);
        assert_eq!(labels(root.children()[2].children()), vec!["y", "z"]);
    }

    #[test]
    fn sort_is_ordinal() {
        let mut root = TreeNode::default();
        root.insert_children_at_depth(0, ["b", "B", "a", "A"]).unwrap();
        root.sort_alphabetically();
        assert_eq!(labels(root.children()), vec!["A", "B", "a", "b"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let once = custom_fields_tree().sorted_alphabetically();
        let twice = once.sorted_alphabetically();
        assert_eq!(once, twice);
    }

    #[test]
    fn sorted_copy_leaves_original_untouched() {
        let root = custom_fields_tree();
        let sorted = root.sorted_alphabetically();

        assert_eq!(root.children()[0].label(), "name");
        assert_eq!(sorted.children()[0].label(), "customFields");
    }

    #[test]
    fn counts_and_height() {
        let root = custom_fields_tree();
        assert_eq!(root.descendant_count(), 7);
        assert_eq!(root.height(), 2);
        assert_eq!(TreeNode::new("leaf").height(), 0);
    }

    #[test]
    fn serde_omits_absent_children() {
        let mut root = TreeNode::default();
        root.insert_children_at_depth(0, ["a"]).unwrap();

        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "label": "", "children": [{ "label": "a" }] })
        );

        let back: TreeNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, root);
    }
}
