//! Exact positional-numeral sort keys.
//!
//! A signature `[s0, s1, ..., sk]` encodes to `s0 + s1·b + ... + sk·b^k` where
//! `b` is one more than the maximum degree. Keys grow without bound as
//! signatures lengthen, so the key stores its base-`b` digits and compares
//! them directly instead of materialising the integer.

use std::cmp::Ordering;
use std::fmt;

const DECIMAL_LIMB: u64 = 1_000_000_000;

/// Arbitrary-precision sort key in positional notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey {
    base: u64,
    // Little-endian digits without high-order zeros; zero has no digits.
    digits: Vec<u64>,
}

impl SortKey {
    /// Encodes `digits` (least significant first) in the given base.
    ///
    /// Every digit must be smaller than `base`.
    pub fn from_digits(base: u64, digits: &[usize]) -> Self {
        debug_assert!(digits.iter().all(|&digit| (digit as u64) < base.max(1)));
        let significant = digits
            .iter()
            .rposition(|&digit| digit != 0)
            .map_or(0, |last| last + 1);
        Self {
            base,
            digits: digits[..significant]
                .iter()
                .map(|&digit| digit as u64)
                .collect(),
        }
    }

    /// The numeral base shared by all keys of one round.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Whether the key encodes zero.
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the value when it fits in 128 bits.
    pub fn to_u128(&self) -> Option<u128> {
        self.digits.iter().rev().try_fold(0u128, |acc, &digit| {
            acc.checked_mul(u128::from(self.base))?
                .checked_add(u128::from(digit))
        })
    }

    /// Renders the exact value in decimal.
    pub fn to_decimal(&self) -> String {
        // Base 10^9 limbs, least significant first.
        let mut limbs: Vec<u64> = Vec::new();
        for &digit in self.digits.iter().rev() {
            let mut carry = u128::from(digit);
            for limb in limbs.iter_mut() {
                let value = u128::from(*limb) * u128::from(self.base) + carry;
                *limb = (value % u128::from(DECIMAL_LIMB)) as u64;
                carry = value / u128::from(DECIMAL_LIMB);
            }
            while carry > 0 {
                limbs.push((carry % u128::from(DECIMAL_LIMB)) as u64);
                carry /= u128::from(DECIMAL_LIMB);
            }
        }
        let Some((head, tail)) = limbs.split_last() else {
            return "0".to_string();
        };
        let mut rendered = head.to_string();
        for limb in tail.iter().rev() {
            rendered.push_str(&format!("{limb:09}"));
        }
        rendered
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert_eq!(self.base, other.base, "keys from different rounds");
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}
