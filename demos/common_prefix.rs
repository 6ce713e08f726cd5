//! Finding the longest prefix shared by a list of words
use char_trie::find_longest_common_word;

fn main() {
    let lists: [&[&str]; 4] = [
        &["flower", "flow", "flight"],
        &["interspecies", "interstellar", "interstate"],
        &["dog", "racecar", "car"],
        &[],
    ];

    for strings in &lists {
        println!(
            "Longest common prefix of {:?}: '{}'",
            strings,
            find_longest_common_word(*strings)
        );
    }
}
