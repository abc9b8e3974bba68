use crate::error::{DrillError, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;

// =============================================================================
// Milestone 1: Reversal and palindromes
// =============================================================================

pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Byte-wise in-place reversal, the way a C `char[]` would be reversed.
pub fn reverse_ascii_in_place(bytes: &mut [u8]) {
    crate::arrays::reverse(bytes);
}

fn palindrome_by<I>(chars: I) -> bool
where
    I: IntoIterator<Item = char>,
{
    let chars: Vec<char> = chars.into_iter().collect();
    if chars.is_empty() {
        return true;
    }
    let (mut left, mut right) = (0, chars.len() - 1);
    while left < right {
        if chars[left] != chars[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

pub fn is_palindrome(s: &str) -> bool {
    palindrome_by(s.chars())
}

pub fn is_palindrome_ignore_case(s: &str) -> bool {
    palindrome_by(s.chars().flat_map(char::to_lowercase))
}

/// "A man, a plan, a canal: Panama" counts as a palindrome.
pub fn is_palindrome_alphanumeric(s: &str) -> bool {
    palindrome_by(
        s.chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase),
    )
}

// =============================================================================
// Milestone 2: Anagrams and character counts
// =============================================================================

pub fn are_anagrams(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts = [0i32; 256];
    for (&x, &y) in a.as_bytes().iter().zip(b.as_bytes()) {
        counts[x as usize] += 1;
        counts[y as usize] -= 1;
    }
    counts.iter().all(|&c| c == 0)
}

pub fn are_anagrams_ignore_case(a: &str, b: &str) -> bool {
    are_anagrams(&a.to_ascii_lowercase(), &b.to_ascii_lowercase())
}

pub fn char_frequency(s: &str) -> BTreeMap<char, usize> {
    let mut freq = BTreeMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

/// Most common character; ties go to whichever appears first in `s`.
pub fn most_frequent(s: &str) -> Option<char> {
    let freq = char_frequency(s);
    let mut best: Option<(char, usize)> = None;
    for c in s.chars() {
        let count = freq[&c];
        if best.map_or(true, |(_, b)| count > b) {
            best = Some((c, count));
        }
    }
    best.map(|(c, _)| c)
}

pub fn remove_duplicate_chars(s: &str) -> String {
    let mut seen = FxHashSet::default();
    s.chars().filter(|c| seen.insert(*c)).collect()
}

pub fn first_non_repeating(s: &str) -> Option<char> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    s.chars().find(|c| counts[c] == 1)
}

/// Character position (not byte offset) of the first non-repeating character.
pub fn first_non_repeating_index(s: &str) -> Option<usize> {
    let target = first_non_repeating(s)?;
    s.chars().position(|c| c == target)
}

// =============================================================================
// Milestone 3: Rotation and substring search
// =============================================================================

pub fn is_rotation(a: &str, b: &str) -> bool {
    a.len() == b.len() && format!("{a}{a}").contains(b)
}

pub fn is_rotation_manual(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let n = a.len();
    (0..n).any(|shift| (0..n).all(|i| b[i] == a[(i + shift) % n]))
}

/// Naive O(n*m) search returning the byte offset of the first match.
pub fn find_substring(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() {
        return Some(0);
    }
    if n.len() > h.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| &h[i..i + n.len()] == n)
}

// =============================================================================
// Milestone 4: Common prefix and word counting
// =============================================================================

/// Vertical scan: compare column by column across every string.
pub fn longest_common_prefix(strs: &[&str]) -> String {
    let Some((&first, rest)) = strs.split_first() else {
        return String::new();
    };
    let mut others: Vec<std::str::Chars> = rest.iter().map(|s| s.chars()).collect();

    for (i, c) in first.char_indices() {
        if others.iter_mut().any(|it| it.next() != Some(c)) {
            return first[..i].to_string();
        }
    }
    first.to_string()
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map_or(0, |((i, c), _)| i + c.len_utf8())
}

/// Horizontal scan: shrink the prefix against each string in turn.
pub fn longest_common_prefix_horizontal(strs: &[&str]) -> String {
    let Some((&first, rest)) = strs.split_first() else {
        return String::new();
    };
    let mut prefix = first;
    for s in rest {
        prefix = &prefix[..common_prefix_len(prefix, s)];
        if prefix.is_empty() {
            break;
        }
    }
    prefix.to_string()
}

pub fn count_words(s: &str) -> usize {
    let mut in_word = false;
    let mut words = 0;
    for c in s.chars() {
        if c.is_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            words += 1;
        }
    }
    words
}

pub fn count_words_split(s: &str) -> usize {
    s.split_whitespace().count()
}

// =============================================================================
// Milestone 5: Count-and-say, longest palindromic substring
// =============================================================================

pub fn count_and_say(n: usize) -> Result<String> {
    if n == 0 {
        return Err(DrillError::invalid_argument("n", "sequence starts at 1"));
    }
    let mut term = String::from("1");
    for _ in 1..n {
        let mut next = String::new();
        let bytes = term.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            let digit = bytes[i];
            let mut run = 1;
            while i + run < bytes.len() && bytes[i + run] == digit {
                run += 1;
            }
            next.push_str(&run.to_string());
            next.push(digit as char);
            i += run;
        }
        term = next;
    }
    Ok(term)
}

fn char_span<'a>(s: &'a str, offsets: &[usize], start: usize, len: usize) -> &'a str {
    if len == 0 {
        return "";
    }
    let begin = offsets[start];
    let end = offsets.get(start + len).copied().unwrap_or(s.len());
    &s[begin..end]
}

/// Expands around each of the 2n-1 centres; returns the first longest palindrome.
pub fn longest_palindromic_substring(s: &str) -> &str {
    let chars: Vec<char> = s.chars().collect();
    let offsets: Vec<usize> = s.char_indices().map(|(i, _)| i).collect();
    let n = chars.len();
    let (mut best_start, mut best_len) = (0, 0);

    let expand = |mut left: isize, mut right: isize| -> (usize, usize) {
        while left >= 0 && (right as usize) < n && chars[left as usize] == chars[right as usize] {
            left -= 1;
            right += 1;
        }
        ((left + 1) as usize, (right - left - 1) as usize)
    };

    for center in 0..n {
        for (start, len) in [
            expand(center as isize, center as isize),
            expand(center as isize, center as isize + 1),
        ] {
            if len > best_len {
                best_start = start;
                best_len = len;
            }
        }
    }
    char_span(s, &offsets, best_start, best_len)
}

pub fn longest_palindromic_substring_brute(s: &str) -> &str {
    let chars: Vec<char> = s.chars().collect();
    let offsets: Vec<usize> = s.char_indices().map(|(i, _)| i).collect();
    let (mut best_start, mut best_len) = (0, 0);

    for start in 0..chars.len() {
        for end in start..chars.len() {
            let len = end - start + 1;
            if len > best_len && palindrome_by(chars[start..=end].iter().copied()) {
                best_start = start;
                best_len = len;
            }
        }
    }
    char_span(s, &offsets, best_start, best_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_string() {
        assert_eq!(reverse_string("hello"), "olleh");
        assert_eq!(reverse_string(""), "");
        let mut bytes = *b"embedded";
        reverse_ascii_in_place(&mut bytes);
        assert_eq!(&bytes, b"deddebme");
    }

    #[test]
    fn test_palindromes() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome(""));
        assert!(!is_palindrome("Racecar"));
        assert!(is_palindrome_ignore_case("Racecar"));
        assert!(is_palindrome_alphanumeric("A man, a plan, a canal: Panama"));
        assert!(!is_palindrome_alphanumeric("race a car"));
    }

    #[test]
    fn test_anagrams() {
        assert!(are_anagrams("listen", "silent"));
        assert!(!are_anagrams("hello", "world"));
        assert!(!are_anagrams("abc", "ab"));
        assert!(are_anagrams_ignore_case("Listen", "Silent"));
    }

    #[test]
    fn test_frequency() {
        let freq = char_frequency("hello");
        assert_eq!(freq[&'l'], 2);
        assert_eq!(freq[&'h'], 1);
        assert_eq!(most_frequent("hello"), Some('l'));
        assert_eq!(most_frequent("abab"), Some('a'));
        assert_eq!(most_frequent(""), None);
    }

    #[test]
    fn test_remove_duplicates() {
        assert_eq!(remove_duplicate_chars("programming"), "progamin");
        assert_eq!(remove_duplicate_chars("aaaa"), "a");
    }

    #[test]
    fn test_first_non_repeating() {
        assert_eq!(first_non_repeating("swiss"), Some('w'));
        assert_eq!(first_non_repeating_index("swiss"), Some(1));
        assert_eq!(first_non_repeating("aabb"), None);
    }

    #[test]
    fn test_rotation() {
        assert!(is_rotation("waterbottle", "erbottlewat"));
        assert!(!is_rotation("abc", "acb"));
        assert!(is_rotation_manual("waterbottle", "erbottlewat"));
        assert!(!is_rotation_manual("abc", "abcd"));
        assert!(is_rotation_manual("", ""));
    }

    #[test]
    fn test_find_substring() {
        assert_eq!(find_substring("hello world", "world"), Some(6));
        assert_eq!(find_substring("hello", ""), Some(0));
        assert_eq!(find_substring("hello", "xyz"), None);
        assert_eq!(find_substring("ab", "abc"), None);
    }

    #[test]
    fn test_longest_common_prefix() {
        let strs = ["flower", "flow", "flight"];
        assert_eq!(longest_common_prefix(&strs), "fl");
        assert_eq!(longest_common_prefix_horizontal(&strs), "fl");
        assert_eq!(longest_common_prefix(&["dog", "racecar"]), "");
        assert_eq!(longest_common_prefix(&[]), "");
        assert_eq!(longest_common_prefix(&["solo"]), "solo");
        assert_eq!(longest_common_prefix_horizontal(&["abc", "abc"]), "abc");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("  hello   world  "), 2);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words_split("one two\tthree\nfour"), 4);
    }

    #[test]
    fn test_count_and_say() {
        assert_eq!(count_and_say(1).unwrap(), "1");
        assert_eq!(count_and_say(4).unwrap(), "1211");
        assert_eq!(count_and_say(5).unwrap(), "111221");
        assert!(count_and_say(0).is_err());
    }

    #[test]
    fn test_longest_palindromic_substring() {
        assert_eq!(longest_palindromic_substring("babad"), "bab");
        assert_eq!(longest_palindromic_substring("cbbd"), "bb");
        assert_eq!(longest_palindromic_substring(""), "");
        assert_eq!(longest_palindromic_substring("forgeeksskeegfor"), "geeksskeeg");
        assert_eq!(longest_palindromic_substring_brute("babad"), "bab");
        assert_eq!(longest_palindromic_substring_brute("cbbd"), "bb");
    }
}
