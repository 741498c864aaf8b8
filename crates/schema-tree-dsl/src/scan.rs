use logos::Logos;

use crate::error::{DslError, Span};
use crate::symbol::Symbol;

/// Separator between items inside a group. The space is required.
const ITEM_SEPARATOR: &str = ", ";

/// The two earliest symbols of a scanned text.
///
/// Indices are byte offsets into the scanned text, with
/// `first_index < second_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolPositions {
    pub first_symbol: Symbol,
    pub second_symbol: Symbol,
    pub first_index: usize,
    pub second_index: usize,
}

/// Locates the two earliest symbols in `input`.
///
/// Candidates are the first and second `(` and the first and second `)`;
/// whichever exist are ordered by position and the two smallest are kept.
///
/// # Errors
///
/// Returns `DslError::MissingSymbols` if fewer than two candidates exist.
pub fn symbol_positions(input: &str) -> Result<SymbolPositions, DslError> {
    scan(input, 0)
}

/// Same as [`symbol_positions`], reporting error spans relative to `base`,
/// the offset of `input` inside the full notation.
pub(crate) fn scan(input: &str, base: usize) -> Result<SymbolPositions, DslError> {
    let mut opens: [Option<usize>; 2] = [None, None];
    let mut closes: [Option<usize>; 2] = [None, None];
    let mut recorded = 0;

    for (result, range) in Symbol::lexer(input).spanned() {
        // every byte is either skipped or a symbol, so the lexer cannot fail
        let Ok(symbol) = result else { continue };
        let slots = match symbol {
            Symbol::Open => &mut opens,
            Symbol::Close => &mut closes,
        };
        if let Some(slot) = slots.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(range.start);
            recorded += 1;
        }
        // the two earliest symbols are always the two smallest candidates
        if recorded == 2 {
            break;
        }
    }

    let mut candidates: Vec<(usize, Symbol)> = opens
        .iter()
        .map(|index| (*index, Symbol::Open))
        .chain(closes.iter().map(|index| (*index, Symbol::Close)))
        .filter_map(|(index, symbol)| index.map(|index| (index, symbol)))
        .collect();
    candidates.sort_by_key(|&(index, _)| index);

    match candidates[..] {
        [(first_index, first_symbol), (second_index, second_symbol), ..] => Ok(SymbolPositions {
            first_symbol,
            second_symbol,
            first_index,
            second_index,
        }),
        _ => Err(DslError::MissingSymbols {
            found: candidates.len(),
            span: Span::new(base, base + input.len()),
        }),
    }
}

/// Splits the text between two symbols into item labels.
///
/// Brackets are removed, the rest is split on `", "` and empty items are
/// dropped. No other trimming happens, so `"a,b"` stays a single item.
pub fn extract_items(window: &str) -> Vec<String> {
    let stripped: String = window.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    stripped
        .split(ITEM_SEPARATOR)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
