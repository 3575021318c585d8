use crate::Formula;
use alloc::vec::Vec;
use hashbrown::HashSet;

/// Collect the distinct atom names occurring in the given formulas.
///
/// The iteration order of the result is unspecified.
pub fn extract_symbols<'a>(fms: impl IntoIterator<Item = &'a Formula>) -> HashSet<&'a str> {
    fms.into_iter().flat_map(|fm| fm.atoms()).collect()
}

/// Distinct atom names of the given formulas, in ascending order.
pub fn sorted_symbols<'a>(fms: impl IntoIterator<Item = &'a Formula>) -> Vec<&'a str> {
    let mut symbols: Vec<_> = extract_symbols(fms).into_iter().collect();
    symbols.sort_unstable();
    symbols
}
