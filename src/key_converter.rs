//! Defines the trait for turning caller-supplied keys into character sequences.
use std::borrow::Cow;

use crate::error::{Result, TrieError};

/// A type that can be read as a sequence of characters.
///
/// Text types convert infallibly. Byte types convert only when they hold
/// valid UTF-8; anything else is rejected with
/// [`TrieError::InvalidArgument`].
pub trait CharKey {
    /// Converts the key into a `Cow<str>`.
    /// `Cow` allows for borrowing if the key already is text,
    /// or owning (e.g., via `String`) if a conversion is necessary.
    fn to_chars(&self) -> Result<Cow<'_, str>>;
}

impl CharKey for str {
    fn to_chars(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self))
    }
}

impl CharKey for String {
    fn to_chars(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl CharKey for [char] {
    fn to_chars(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Owned(self.iter().collect()))
    }
}

impl CharKey for Vec<char> {
    fn to_chars(&self) -> Result<Cow<'_, str>> {
        self.as_slice().to_chars()
    }
}

impl CharKey for [u8] {
    fn to_chars(&self) -> Result<Cow<'_, str>> {
        std::str::from_utf8(self).map(Cow::Borrowed).map_err(|err| {
            TrieError::invalid_argument(format!("not a valid character sequence: {}", err))
        })
    }
}

impl CharKey for Vec<u8> {
    fn to_chars(&self) -> Result<Cow<'_, str>> {
        self.as_slice().to_chars()
    }
}

impl<T: CharKey + ?Sized> CharKey for &T {
    fn to_chars(&self) -> Result<Cow<'_, str>> {
        (**self).to_chars()
    }
}
