//! Canonicalization of raw schema text.
//!
//! Schema text is commonly written across several lines with free-form
//! spacing around punctuation. [`normalize()`] rewrites it into a single
//! canonical line:
//!
//! - no whitespace next to `{ } [ ] ( ) : , !`, except that
//! - a declaration that ends in a name, `!` or `]` and is followed by
//!   another declaration keeps exactly one space between the two
//! - every other whitespace run (spaces, tabs, line breaks) and every `;`
//!   collapses to a single space between names
//! - no leading or trailing whitespace
//!
//! So fields and enum values are separated by one space and parameters by a
//! bare comma:
//!
//! ```
//! use libgraphql_shape_parser::normalize;
//!
//! let raw = "{
//!     id : ID !
//!     roll ( numRolls : Int! , sides: Int ) : [ Int ]
//!     friends: [Character];
//! }";
//! assert_eq!(
//!     normalize(raw),
//!     "{id:ID! roll(numRolls:Int!,sides:Int):[Int] friends:[Character]}",
//! );
//! ```
//!
//! The output is the fixed point of the local rewrite rules (drop the space
//! beside a punctuator, collapse doubled separators, trim the ends). Each
//! rule only looks at the characters on either side of a separator run, so
//! the fixed point is computed in one left-to-right pass.

use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;

/// Characters that never need whitespace next to them.
pub(crate) fn is_punctuator(ch: char) -> bool {
    GraphQLTokenKind::punctuator_from_char(ch).is_some()
}

/// Characters folded into a single separator: lexer whitespace and `;`.
pub(crate) fn is_separator(ch: char) -> bool {
    ch == ';' || StrGraphQLTokenSource::is_whitespace(ch)
}

/// Decides whether a separator run between `prev` and `next` survives.
///
/// It does when it is the only thing keeping two declarations apart: the
/// left side ends a type expression or a name and the right side starts a
/// new name.
fn keeps_separator(prev: char, next: char) -> bool {
    let prev_ends_declaration = prev == '!' || prev == ']' || !is_punctuator(prev);
    prev_ends_declaration && !is_punctuator(next)
}

/// Returns the canonical single-line form of `text`.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last_emitted: Option<char> = None;
    let mut pending_separator = false;

    for ch in text.chars() {
        if is_separator(ch) {
            pending_separator = true;
            continue;
        }

        if pending_separator
            && let Some(prev) = last_emitted
            && keeps_separator(prev, ch)
        {
            output.push(' ');
        }

        pending_separator = false;
        output.push(ch);
        last_emitted = Some(ch);
    }

    log::trace!(
        "normalized {} bytes of schema text into {} bytes",
        text.len(),
        output.len(),
    );
    output
}

/// `true` if `text` is already in canonical form.
pub fn is_normalized(text: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if is_separator(ch) {
            if ch != ' ' {
                return false;
            }
            let (Some(before), Some(&after)) = (prev, chars.peek()) else {
                return false;
            };
            if is_separator(after) || !keeps_separator(before, after) {
                return false;
            }
        }
        prev = Some(ch);
    }

    true
}
