/// The `Word` trait allows a type to be stored in a [`Trie`](crate::Trie).
///
/// A word is a sequence of symbols from a 256-letter alphabet. Text is
/// mapped one character to one symbol by code point, so only characters in
/// `U+0000..=U+00FF` are representable. Anything wider yields `None` and the
/// trie rejects the whole word.
pub trait Word {
    /// Yields one symbol per character, `None` for characters outside the
    /// alphabet.
    fn symbols(&self) -> impl Iterator<Item = Option<u8>>;

    /// Renders the word as text for error messages and logs.
    fn to_text(&self) -> String;

    /// Collects the symbols, or `None` if any character is out of range.
    fn to_symbols(&self) -> Option<Vec<u8>> {
        self.symbols().collect()
    }
}

/// Turns a symbol path back into text, one character per symbol.
pub(crate) fn decode(symbols: &[u8]) -> String {
    symbols.iter().copied().map(char::from).collect()
}

impl Word for str {
    fn symbols(&self) -> impl Iterator<Item = Option<u8>> {
        self.chars().map(|c| u8::try_from(c).ok())
    }

    fn to_text(&self) -> String {
        self.to_owned()
    }
}

impl Word for String {
    fn symbols(&self) -> impl Iterator<Item = Option<u8>> {
        self.as_str().symbols()
    }

    fn to_text(&self) -> String {
        self.clone()
    }
}

impl Word for [char] {
    fn symbols(&self) -> impl Iterator<Item = Option<u8>> {
        self.iter().map(|&c| u8::try_from(c).ok())
    }

    fn to_text(&self) -> String {
        self.iter().collect()
    }
}

impl Word for [u8] {
    fn symbols(&self) -> impl Iterator<Item = Option<u8>> {
        self.iter().copied().map(Some)
    }

    fn to_text(&self) -> String {
        decode(self)
    }
}

impl Word for Vec<u8> {
    fn symbols(&self) -> impl Iterator<Item = Option<u8>> {
        self.as_slice().symbols()
    }

    fn to_text(&self) -> String {
        decode(self)
    }
}

impl<const N: usize> Word for [u8; N] {
    fn symbols(&self) -> impl Iterator<Item = Option<u8>> {
        self.as_slice().symbols()
    }

    fn to_text(&self) -> String {
        decode(self)
    }
}

impl<W: Word + ?Sized> Word for &W {
    fn symbols(&self) -> impl Iterator<Item = Option<u8>> {
        W::symbols(*self)
    }

    fn to_text(&self) -> String {
        W::to_text(*self)
    }
}
