//! Operator selection handling
//!
//! Selections are comma-separated 1-based positions into the inventory.
//! One bad token rejects the whole input.

use crate::domain::DaemonRecord;
use crate::error::SelectionError;
use crate::inventory::Inventory;

/// Parses a comma-separated selection into 1-based positions
///
/// Tokens are trimmed. Repeated positions are kept once, in order of first
/// mention. Blank input selects nothing.
pub fn parse_selection(input: &str, inventory_len: usize) -> Result<Vec<usize>, SelectionError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut positions = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        let position = token
            .parse::<usize>()
            .ok()
            .filter(|p| (1..=inventory_len).contains(p))
            .ok_or_else(|| SelectionError::invalid_token(token, inventory_len))?;
        if !positions.contains(&position) {
            positions.push(position);
        }
    }
    Ok(positions)
}

/// Builds the pre-filled prompt answer from outdated positions
pub fn default_selection(positions: &[usize]) -> Option<String> {
    if positions.is_empty() {
        return None;
    }
    Some(
        positions
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(","),
    )
}

/// Resolves positions into inventory records
pub fn resolve<'a>(inventory: &'a Inventory, positions: &[usize]) -> Vec<&'a DaemonRecord> {
    positions.iter().filter_map(|p| inventory.get(*p)).collect()
}
