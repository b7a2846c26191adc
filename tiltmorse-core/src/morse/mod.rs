//! Morse alphabet, code table and symbol-group validation

pub mod symbol;
pub mod table;
pub mod validator;

pub use symbol::{is_mark_byte, Symbol, DASH, DOT, SEPARATOR};
pub use table::{lookup, SYMBOL_TABLE};
pub use validator::{
    check_group, clear_invalid_characters, GroupVerdict, InvalidGroup, Validation, MAX_GROUP_LEN,
};
