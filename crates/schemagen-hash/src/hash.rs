//! Rolling polynomial hash
//!
//! `H(s) = Σ s[i]·Bⁱ (mod M)` over the bytes of `s`, together with the
//! string length, so that hashes of concatenations can be derived from
//! the hashes of the parts.

use std::fmt::{self, Display, Formatter};

/// Hash modulus (largest prime below 2³²)
pub const MODULUS: u32 = 0xFFFF_FFFB;

/// Polynomial base
pub const BASE: u32 = 0x101;

/// Hash of a string together with its length in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashValue {
    value: u32,
    length: usize,
}

impl HashValue {
    /// Create from raw parts
    #[inline]
    #[must_use]
    pub const fn new(value: u32, length: usize) -> Self {
        Self { value, length }
    }

    /// Reduced hash value
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Length of the hashed string
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }
}

impl Display for HashValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}/{}", self.value, self.length)
    }
}

/// `(x + y) mod m`, assuming `x, y < m`
#[inline]
#[must_use]
pub const fn add_mod(x: u32, y: u32, m: u32) -> u32 {
    let sum = x as u64 + y as u64;
    let m = m as u64;
    if sum >= m {
        (sum - m) as u32
    } else {
        sum as u32
    }
}

/// `(x · y) mod m`
#[inline]
#[must_use]
pub const fn mul_mod(x: u32, y: u32, m: u32) -> u32 {
    ((x as u64 * y as u64) % m as u64) as u32
}

/// Hash engine with a memoized table of powers of [`BASE`]
///
/// One instance serves one computation; the power table grows lazily to
/// the longest string seen.
#[derive(Debug, Clone, Default)]
pub struct PolyHash {
    powers: Vec<u32>,
}

impl PolyHash {
    /// Create engine with an empty power table
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { powers: Vec::new() }
    }

    /// Hash a string
    pub fn calc(&mut self, s: &str) -> HashValue {
        let bytes = s.as_bytes();
        self.extend_powers(bytes.len());
        let value = bytes
            .iter()
            .zip(&self.powers)
            .fold(0, |acc, (&byte, &power)| {
                add_mod(acc, mul_mod(u32::from(byte), power, MODULUS), MODULUS)
            });
        HashValue::new(value, bytes.len())
    }

    /// Hash of the concatenation of the strings hashed to `first` and `second`
    pub fn join(&mut self, first: HashValue, second: HashValue) -> HashValue {
        self.extend_powers(first.length + 1);
        let shifted = mul_mod(second.value, self.powers[first.length], MODULUS);
        HashValue::new(
            add_mod(first.value, shifted, MODULUS),
            first.length + second.length,
        )
    }

    /// Number of memoized powers
    #[inline]
    #[must_use]
    pub fn table_len(&self) -> usize {
        self.powers.len()
    }

    fn extend_powers(&mut self, limit: usize) {
        if self.powers.is_empty() {
            self.powers.push(1);
        }
        while self.powers.len() < limit {
            let last = self.powers[self.powers.len() - 1];
            self.powers.push(mul_mod(last, BASE, MODULUS));
        }
    }
}
