//! Counting stored words by suffix and checking prefixes
use char_trie::{count_words_with_suffix, has_prefix, Trie};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Store each word with its position in the list
    let mut trie = Trie::new();
    let words = ["apple", "application", "banana", "cat"];
    for (i, word) in words.iter().enumerate() {
        trie.put(*word, i)?;
    }

    println!("Words ending with a suffix:");
    for suffix in &["e", "ion", "a", "at"] {
        println!("  '{}' → {}", suffix, count_words_with_suffix(&trie, *suffix)?);
    }

    println!("\nPrefix existence check:");
    for prefix in &["app", "bat", "ban", "ca"] {
        println!("  '{}' exists: {}", prefix, has_prefix(&trie, *prefix)?);
    }

    Ok(())
}
