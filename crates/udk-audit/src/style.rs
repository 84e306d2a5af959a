//! Inline style declaration parsing

use serde::{Deserialize, Serialize};

/// One `property: value` declaration from an inline `style` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Property name, lowercased.
    pub property: String,
    /// Value with surrounding whitespace trimmed.
    pub value: String,
}

/// Split an inline `style` attribute into declarations.
///
/// Pieces without a `:` or with an empty property are skipped; the parser
/// never fails. Values keep their original case so markers like `var(--`
/// can be matched verbatim.
pub fn parse_declarations(style: &str) -> Vec<Declaration> {
    style
        .split(';')
        .filter_map(|piece| {
            let (property, value) = piece.split_once(':')?;
            let property = property.trim();
            if property.is_empty() {
                return None;
            }
            Some(Declaration {
                property: property.to_lowercase(),
                value: value.trim().to_string(),
            })
        })
        .collect()
}
