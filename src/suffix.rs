//! Suffix counting and validated prefix checks over a trie.

use log::debug;

use crate::error::Result;
use crate::key_converter::CharKey;
use crate::trie::Trie;

/// Counts the stored keys that end with `pattern`.
///
/// Every key ends with the empty pattern, so `""` counts all of them. The
/// count is taken by filtering the full key set; there is no suffix index.
///
/// # Errors
///
/// Returns [`TrieError::InvalidArgument`](crate::TrieError::InvalidArgument)
/// if `pattern` is not a valid character sequence.
///
/// # Examples
///
/// ```
/// use char_trie::{count_words_with_suffix, Trie};
///
/// let mut trie = Trie::new();
/// for (i, word) in ["apple", "application", "banana", "cat"].iter().enumerate() {
///     trie.put(*word, i).unwrap();
/// }
///
/// assert_eq!(count_words_with_suffix(&trie, "ion").unwrap(), 1);
/// assert_eq!(count_words_with_suffix(&trie, "").unwrap(), 4);
/// ```
pub fn count_words_with_suffix<V, K>(trie: &Trie<V>, pattern: &K) -> Result<usize>
where
    K: CharKey + ?Sized,
{
    let pattern = pattern.to_chars().map_err(|err| {
        debug!("rejected suffix pattern: {}", err);
        err
    })?;

    Ok(trie
        .keys()
        .filter(|word| word.ends_with(&*pattern))
        .count())
}

/// Returns `true` if some path in `trie` spells `prefix`.
///
/// This is [`Trie::has_node`] behind argument validation.
///
/// # Errors
///
/// Returns [`TrieError::InvalidArgument`](crate::TrieError::InvalidArgument)
/// if `prefix` is not a valid character sequence.
pub fn has_prefix<V, K>(trie: &Trie<V>, prefix: &K) -> Result<bool>
where
    K: CharKey + ?Sized,
{
    let prefix = prefix.to_chars().map_err(|err| {
        debug!("rejected prefix: {}", err);
        err
    })?;

    Ok(trie.has_node(&prefix))
}
