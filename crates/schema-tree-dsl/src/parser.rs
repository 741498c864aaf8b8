use schema_tree_core::TreeNode;
use tracing::{debug, trace};

use crate::error::{DslError, Span};
use crate::scan::{extract_items, scan, SymbolPositions};
use crate::symbol::Symbol;

/// Parses the bracketed field notation into a [`TreeNode`].
///
/// Parsing happens on construction; a `Parser` value always holds a
/// complete tree. The tree is only changed afterwards by
/// [`output_alphabetical`](Self::output_alphabetical).
#[derive(Debug, Clone)]
pub struct Parser {
    input: String,
    root: TreeNode,
}

impl Parser {
    /// Parses `input` into a fresh tree.
    ///
    /// # Errors
    ///
    /// Returns `DslError::MissingSymbols` for truncated or unbalanced input and
    /// `DslError::Tree` when a group opens where no item exists to hold it.
    pub fn new(input: impl Into<String>) -> Result<Self, DslError> {
        Self::with_root(input, TreeNode::default())
    }

    /// Parses `input`, appending the top-level items to `root`.
    pub fn with_root(input: impl Into<String>, mut root: TreeNode) -> Result<Self, DslError> {
        let input = input.into();
        build(&input, &mut root)?;
        Ok(Self { input, root })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn structure(&self) -> &TreeNode {
        &self.root
    }

    pub fn into_structure(self) -> TreeNode {
        self.root
    }

    /// Scans the parser's own input for its two earliest symbols.
    pub fn symbol_positions(&self) -> Result<SymbolPositions, DslError> {
        scan(&self.input, 0)
    }

    /// Renders the tree in parse order.
    pub fn output(&self) -> String {
        self.root.render()
    }

    /// Sorts the tree alphabetically at every level, then renders it.
    ///
    /// The sort is kept: later calls to [`output`](Self::output) see the
    /// sorted order.
    pub fn output_alphabetical(&mut self) -> String {
        self.root.sort_alphabetically();
        self.root.render()
    }
}

/// Parses `input` and returns the resulting tree.
pub fn parse(input: &str) -> Result<TreeNode, DslError> {
    Parser::new(input).map(Parser::into_structure)
}

/// Consumes `input` left to right, one pair of symbols per step.
///
/// Items between the pair are inserted at the current level, then the second
/// symbol moves the level and becomes the first symbol of the next step. The
/// outermost `)` takes the level to -1 and ends the loop.
fn build(input: &str, root: &mut TreeNode) -> Result<(), DslError> {
    let mut cursor = 0;
    let mut level: isize = 0;
    let mut steps = 0usize;

    while level > -1 {
        let remaining = &input[cursor..];
        let positions = scan(remaining, cursor)?;

        let window = &remaining[positions.first_index + 1..positions.second_index];
        let items = extract_items(window);
        trace!(level, window, items = items.len(), "scan step");

        root.insert_children_at_depth(level, items)
            .map_err(|source| DslError::Tree {
                source,
                span: Span::new(
                    cursor + positions.first_index,
                    cursor + positions.second_index + 1,
                ),
            })?;

        match positions.second_symbol {
            Symbol::Close => level -= 1,
            Symbol::Open => level += 1,
        }

        cursor += positions.second_index;
        steps += 1;
    }

    debug!(
        input_len = input.len(),
        steps,
        nodes = root.descendant_count(),
        "parsed field notation"
    );
    Ok(())
}
