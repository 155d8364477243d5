pub mod first_follow;
pub mod grammar;
pub mod parse;
pub mod parsing_table;
pub mod pretty_print;
pub mod validate;
pub use grammar::{Grammar, Rule};
pub use validate::Validation;

/// Terminal standing for the empty string inside rule text.
pub const EMPTY: char = 'e';
/// End-of-input marker, always a member of the terminal alphabet.
pub const END_MARK: char = '$';
/// How the empty marker and the empty sentential form are displayed.
pub const EPSILON: &str = "ε";

/// Bracket punctuation that is transparent to analysis and matching but
/// kept when rendering rule text.
pub const DELIMITERS: [char; 8] = ['(', ')', '[', ']', '{', '}', '<', '>'];
