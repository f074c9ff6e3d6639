// Character classification, letters and syllables

// ---------------------------------------------------------------------------
// Klingon alphabet
// ---------------------------------------------------------------------------

/// Multi-character letters, tried before single characters.
const DIGRAPHS: &[&str] = &["ch", "gh", "ng", "tlh"];

/// Letters written with a single character.
const SINGLE_LETTERS: &[char] = &[
    'a', 'b', 'D', 'e', 'H', 'I', 'j', 'l', 'm', 'n', 'o', 'p', 'q', 'Q', 'r', 'S', 't', 'u',
    'v', 'w', 'y', '\'',
];

const VOWELS: &[&str] = &["a", "e", "I", "o", "u"];

/// Consonant clusters that close a syllable together (`-w'`, `-y'`, `-rgh`).
const FINAL_CLUSTERS: &[&str] = &["w'", "y'", "rgh"];

/// Returns `true` if `c` may appear inside a word token: ASCII letters,
/// digits and the apostrophe (which is a letter in Klingon).
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\''
}

/// Returns `true` if the letter is a vowel.
pub fn is_vowel(letter: &str) -> bool {
    VOWELS.contains(&letter)
}

/// Returns `true` if the last character of `text` is a vowel.
pub fn ends_in_vowel(text: &str) -> bool {
    text.chars()
        .next_back()
        .is_some_and(|c| matches!(c, 'a' | 'e' | 'I' | 'o' | 'u'))
}

/// Split a word into Klingon letters.
///
/// Characters that are not part of any letter are skipped, so the word must
/// not contain spaces or foreign letters for the result to concatenate back
/// into the original word.
pub fn split_to_letters(word: &str) -> Vec<&str> {
    let mut letters = Vec::new();
    let mut rest = word;

    while let Some(c) = rest.chars().next() {
        let len = if let Some(digraph) = DIGRAPHS.iter().find(|d| rest.starts_with(**d)) {
            digraph.len()
        } else if SINGLE_LETTERS.contains(&c) {
            c.len_utf8()
        } else {
            rest = &rest[c.len_utf8()..];
            continue;
        };
        letters.push(&rest[..len]);
        rest = &rest[len..];
    }

    letters
}

/// Split a word into syllables.
///
/// A new syllable starts at a consonant that is followed by a vowel, or at a
/// consonant that follows another consonant outside the clusters `w'`, `y'`
/// and `rgh`. The word should follow Klingon phonotactics.
pub fn split_to_syllables(word: &str) -> Vec<String> {
    let letters = split_to_letters(word);
    let mut syllables = vec![String::new()];

    for (i, &cur) in letters.iter().enumerate() {
        let prev = if i > 0 { Some(letters[i - 1]) } else { None };
        let succ = letters.get(i + 1).copied();

        let starts_syllable = !is_vowel(cur)
            && (succ.is_some_and(is_vowel)
                || prev.is_some_and(|p| {
                    !is_vowel(p) && !FINAL_CLUSTERS.contains(&format!("{p}{cur}").as_str())
                }));

        match syllables.last_mut() {
            Some(last) if !last.is_empty() && starts_syllable => {
                syllables.push(cur.to_string());
            }
            Some(last) => last.push_str(cur),
            None => syllables.push(cur.to_string()),
        }
    }

    syllables
}
