//! Longest common prefix over a list of strings.

/// Finds the longest prefix shared by every string in `strings`.
///
/// The candidate starts as the first string and loses one trailing
/// character at a time until each following string starts with it. An
/// empty input, or any pair with nothing in common, gives `""`.
///
/// # Examples
///
/// ```
/// use char_trie::find_longest_common_word;
///
/// assert_eq!(find_longest_common_word(&["flower", "flow", "flight"]), "fl");
/// assert_eq!(find_longest_common_word(&["dog", "racecar", "car"]), "");
/// ```
pub fn find_longest_common_word<S: AsRef<str>>(strings: &[S]) -> String {
    let (first, rest) = match strings.split_first() {
        Some(split) => split,
        None => return String::new(),
    };

    let mut prefix = first.as_ref().to_string();
    for word in rest {
        let word = word.as_ref();
        while !word.starts_with(prefix.as_str()) {
            prefix.pop();
            if prefix.is_empty() {
                return prefix;
            }
        }
    }

    prefix
}
