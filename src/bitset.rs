//! Compact bit strings for search-state keys.
//!
//! A [`BitString`] is an ordered sequence of bits backed by `u64` words,
//! with stack-like `push`/`pop` so the backtracking search can maintain the
//! assignment prefix in place. Bits past `len` are always zero, which keeps
//! derived equality and hashing consistent.

use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct BitString {
    /// Storage: bit `i` lives in word `i / 64` at position `i % 64`
    words: Vec<u64>,
    /// Number of bits in the string
    len: usize,
}

impl BitString {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty bit string with room for `capacity` bits.
    pub fn with_capacity(capacity: usize) -> Self {
        let num_words = capacity.div_ceil(Self::BITS_PER_WORD);
        Self {
            words: Vec::with_capacity(num_words),
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index {} out of range for length {}", index, self.len);
        let (word, bit) = Self::word_and_bit(index);
        (self.words[word] >> bit) & 1 == 1
    }

    /// Appends a bit.
    #[inline]
    pub fn push(&mut self, value: bool) {
        let (word, bit) = Self::word_and_bit(self.len);
        if word == self.words.len() {
            self.words.push(0);
        }
        if value {
            self.words[word] |= 1u64 << bit;
        }
        self.len += 1;
    }

    /// Removes and returns the last bit.
    #[inline]
    pub fn pop(&mut self) -> Option<bool> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let (word, bit) = Self::word_and_bit(self.len);
        let value = (self.words[word] >> bit) & 1 == 1;
        self.words[word] &= !(1u64 << bit);
        if bit == 0 {
            self.words.pop();
        }
        Some(value)
    }

    /// Returns the bitwise complement (same length).
    pub fn complement(&self) -> Self {
        let mut words: Vec<u64> = self.words.iter().map(|w| !w).collect();
        let (_, tail) = Self::word_and_bit(self.len);
        if tail != 0 {
            if let Some(last) = words.last_mut() {
                *last &= (1u64 << tail) - 1;
            }
        }
        Self { words, len: self.len }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitString::default();
        for b in iter {
            bits.push(b);
        }
        bits
    }
}

/// Lexicographic order over bit positions (`0 < 1`, shorter prefix first).
impl Ord for BitString {
    fn cmp(&self, other: &Self) -> Ordering {
        let common = self.words.len().min(other.words.len());
        for i in 0..common {
            let diff = self.words[i] ^ other.words[i];
            if diff != 0 {
                let bit = diff.trailing_zeros() as usize;
                let index = i * Self::BITS_PER_WORD + bit;
                if index < self.len.min(other.len) {
                    return if (self.words[i] >> bit) & 1 == 0 {
                        Ordering::Less
                    } else {
                        Ordering::Greater
                    };
                }
                break;
            }
        }
        self.len.cmp(&other.len)
    }
}

impl PartialOrd for BitString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString(\"{}\")", self)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.iter() {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}
