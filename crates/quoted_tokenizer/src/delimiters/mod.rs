//! Immutable delimiter membership set.
//!
//! ASCII members are packed into a 128-bit mask, so the common case is a
//! shift and a test. Non-ASCII members live in a sorted, deduplicated
//! `Vec<char>` searched by binary search. Delimiter sets are a handful of
//! characters in practice, so the slow side never matters.

/// A fixed set of delimiter characters.
///
/// Built once (from a `&str`, a `char` slice, or any `char` iterator) and
/// never mutated afterwards. An empty set is valid and means "never split".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DelimiterSet {
    /// Bit `n` is set when `char::from(n)` is a member (`n < 128`).
    ascii: u128,
    /// Non-ASCII members, sorted and deduplicated.
    wide: Vec<char>,
}

impl DelimiterSet {
    /// The empty set. A tokenizer over it yields the whole remaining text
    /// as a single fragment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if `c` is a delimiter.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii & (1u128 << u32::from(c)) != 0
        } else {
            self.wide.binary_search(&c).is_ok()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ascii == 0 && self.wide.is_empty()
    }

    /// Number of distinct delimiter characters.
    pub fn len(&self) -> usize {
        self.ascii.count_ones() as usize + self.wide.len()
    }

    /// Members in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.ascii_members()
            .map(char::from)
            .chain(self.wide.iter().copied())
    }

    /// ASCII members as bytes, ascending.
    pub(crate) fn ascii_members(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..128).filter(move |&b| self.ascii & (1u128 << b) != 0)
    }

    /// Returns `true` if every member is ASCII.
    ///
    /// Only then can the scanner search raw bytes: an ASCII byte never
    /// occurs inside a multi-byte UTF-8 sequence.
    pub(crate) fn is_ascii_only(&self) -> bool {
        self.wide.is_empty()
    }

    fn insert(&mut self, c: char) {
        if c.is_ascii() {
            self.ascii |= 1u128 << u32::from(c);
        } else if let Err(at) = self.wide.binary_search(&c) {
            self.wide.insert(at, c);
        }
    }
}

impl FromIterator<char> for DelimiterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::empty();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl From<&str> for DelimiterSet {
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}

impl From<&String> for DelimiterSet {
    fn from(chars: &String) -> Self {
        Self::from(chars.as_str())
    }
}

impl From<&[char]> for DelimiterSet {
    fn from(chars: &[char]) -> Self {
        chars.iter().copied().collect()
    }
}

impl<const N: usize> From<[char; N]> for DelimiterSet {
    fn from(chars: [char; N]) -> Self {
        chars.into_iter().collect()
    }
}

impl From<char> for DelimiterSet {
    fn from(c: char) -> Self {
        let mut set = Self::empty();
        set.insert(c);
        set
    }
}
