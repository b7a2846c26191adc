//! Symbol-group validation and rollback
//!
//! A group is the run of dots and dashes between two separators. It is
//! checked once the separator closing it has been accepted; an unknown or
//! overlong group is removed together with its closing separator.

use crate::message::MessageBuffer;

use super::symbol::SEPARATOR;
use super::table::lookup;

/// Longest encoding in the code table
pub const MAX_GROUP_LEN: usize = 5;

/// Why a group was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidGroup {
    /// More symbols than any known encoding
    TooLong(usize),
    /// Not found in the code table
    Unknown,
}

/// Verdict for one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GroupVerdict {
    /// No symbols between the separators
    Empty,
    /// Known encoding of the given letter
    Valid(char),
    Invalid(InvalidGroup),
}

impl GroupVerdict {
    /// Empty groups are harmless, so they count as valid
    pub fn is_valid(&self) -> bool {
        !matches!(self, GroupVerdict::Invalid(_))
    }
}

/// What the validator did to the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Validation {
    /// Buffer untouched
    Kept(GroupVerdict),
    /// Group and its closing separator removed
    RolledBack { reason: InvalidGroup, removed: usize },
}

/// Check a single dot/dash group
pub fn check_group(group: &[u8]) -> GroupVerdict {
    if group.is_empty() {
        return GroupVerdict::Empty;
    }
    if group.len() > MAX_GROUP_LEN {
        return GroupVerdict::Invalid(InvalidGroup::TooLong(group.len()));
    }
    match lookup(group) {
        Some(letter) => GroupVerdict::Valid(letter),
        None => GroupVerdict::Invalid(InvalidGroup::Unknown),
    }
}

/// Validate the most recently closed group and roll it back if invalid
///
/// Afterwards the buffer is either empty or ends at a separator.
pub fn clear_invalid_characters<const N: usize>(buffer: &mut MessageBuffer<N>) -> Validation {
    let bytes = buffer.as_bytes();
    let body = match bytes.split_last() {
        Some((&SEPARATOR, rest)) => rest,
        _ => bytes,
    };
    let start = body
        .iter()
        .rposition(|&b| b == SEPARATOR)
        .map_or(0, |i| i + 1);

    match check_group(&body[start..]) {
        GroupVerdict::Invalid(reason) => {
            let removed = buffer.rollback_to(start);
            Validation::RolledBack { reason, removed }
        }
        verdict => Validation::Kept(verdict),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Alphabet, AppendOutcome};
    use crate::morse::SYMBOL_TABLE;
    use proptest::prelude::*;

    fn buffer_from(bytes: &[u8]) -> MessageBuffer<64> {
        let mut buf = MessageBuffer::new();
        for &b in bytes {
            let _ = buf.append(b, Alphabet::Morse);
        }
        buf
    }

    #[test]
    fn test_table_entries_valid() {
        for (letter, code) in SYMBOL_TABLE {
            assert_eq!(check_group(code.as_bytes()), GroupVerdict::Valid(letter));
        }
    }

    #[test]
    fn test_group_rules() {
        assert_eq!(check_group(b""), GroupVerdict::Empty);
        assert!(check_group(b"").is_valid());
        assert_eq!(
            check_group(b".-----"),
            GroupVerdict::Invalid(InvalidGroup::TooLong(6))
        );
        assert_eq!(check_group(b"-----"), GroupVerdict::Invalid(InvalidGroup::Unknown));
    }

    #[test]
    fn test_two_valid_groups() {
        let mut buf = MessageBuffer::<64>::new();
        for &b in b".- " {
            let _ = buf.append(b, Alphabet::Morse);
        }
        assert_eq!(
            clear_invalid_characters(&mut buf),
            Validation::Kept(GroupVerdict::Valid('A'))
        );
        for &b in b"-... " {
            let _ = buf.append(b, Alphabet::Morse);
        }
        assert_eq!(
            clear_invalid_characters(&mut buf),
            Validation::Kept(GroupVerdict::Valid('B'))
        );
        assert_eq!(buf.as_bytes(), b".- -... ");
    }

    #[test]
    fn test_overlong_group_rolled_back_to_empty() {
        let mut buf = buffer_from(b".----- ");
        assert_eq!(
            clear_invalid_characters(&mut buf),
            Validation::RolledBack {
                reason: InvalidGroup::TooLong(6),
                removed: 7
            }
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn test_unknown_group_rolled_back_to_prior_separator() {
        let mut buf = buffer_from(b"--- ----- ");
        let result = clear_invalid_characters(&mut buf);
        assert_eq!(
            result,
            Validation::RolledBack {
                reason: InvalidGroup::Unknown,
                removed: 6
            }
        );
        assert_eq!(buf.as_bytes(), b"--- ");
    }

    #[test]
    fn test_double_separator_is_noop() {
        let mut buf = buffer_from(b"... ");
        let _ = buf.append(b' ', Alphabet::Morse);
        assert_eq!(clear_invalid_characters(&mut buf), Validation::Kept(GroupVerdict::Empty));
        assert_eq!(buf.as_bytes(), b"...  ");
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf = MessageBuffer::<8>::new();
        assert_eq!(clear_invalid_characters(&mut buf), Validation::Kept(GroupVerdict::Empty));
    }

    proptest! {
        #[test]
        fn prop_non_table_groups_invalid(group in "[.-]{1,7}") {
            let known = SYMBOL_TABLE.iter().any(|(_, code)| *code == group);
            prop_assert_eq!(check_group(group.as_bytes()).is_valid(), known);
        }

        #[test]
        fn prop_never_underflows(groups in proptest::collection::vec("[.-]{0,7}", 1..5)) {
            let mut buf = MessageBuffer::<64>::new();
            for group in groups {
                for b in group.bytes() {
                    let _ = buf.append(b, Alphabet::Morse);
                }
                if buf.append(b' ', Alphabet::Morse) != AppendOutcome::Accepted {
                    break;
                }
                let _ = clear_invalid_characters(&mut buf);
                let bytes = buf.as_bytes();
                prop_assert!(bytes.is_empty() || bytes.last() == Some(&SEPARATOR));
            }
        }
    }
}
