//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The source text the token was scanned from
/// * `$location` - Where the token's first character sits
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), location);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $location:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: $literal,
            location: $location,
        }
    };
}
