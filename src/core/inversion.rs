//! Inversion table.
//!
//! Pairs each operation with the operation that undoes it. The table stores
//! each pair once and is read in both directions, so `inverse(inverse(a)) == a`
//! holds for every entry.

use crate::core::operation::Operation;

const PAIRS: &[(Operation, Operation)] = &[
    (Operation::ToBase64, Operation::FromBase64),
    (Operation::ToHex, Operation::FromHex),
    (Operation::CaesarEncrypt, Operation::CaesarDecrypt),
    (Operation::AesEncrypt, Operation::AesDecrypt),
];

/// All inverse pairs, each listed once.
pub fn pairs() -> &'static [(Operation, Operation)] {
    PAIRS
}

impl Operation {
    /// The operation that undoes this one, if it has one.
    pub fn inverse(self) -> Option<Operation> {
        PAIRS.iter().find_map(|&(a, b)| {
            if a == self {
                Some(b)
            } else if b == self {
                Some(a)
            } else {
                None
            }
        })
    }
}

/// Look up the inverse of an operation by display name.
///
/// Unknown names have no inverse.
pub fn inverse_of(name: &str) -> Option<&'static str> {
    name.parse::<Operation>()
        .ok()
        .and_then(Operation::inverse)
        .map(Operation::name)
}
