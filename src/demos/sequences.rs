use super::{agree, brute_sample_len, check, random_values};
use crate::catalog::Demo;
use crate::config::DrillConfig;
use crate::error::{DrillError, Result};
use crate::report::Reporter;
use crate::{arrays, sliding_window, strings, two_pointer};

pub(super) static ARRAYS: &[Demo] = &[
    Demo {
        name: "reverse_rotate",
        run: reverse_rotate,
    },
    Demo {
        name: "missing_duplicate",
        run: missing_duplicate,
    },
    Demo {
        name: "order_checks",
        run: order_checks,
    },
    Demo {
        name: "merge",
        run: merge,
    },
    Demo {
        name: "zeros_majority_kadane",
        run: zeros_majority_kadane,
    },
    Demo {
        name: "pair_with_sum",
        run: pair_with_sum,
    },
];

pub(super) static STRINGS: &[Demo] = &[
    Demo {
        name: "reverse_palindrome",
        run: reverse_palindrome,
    },
    Demo {
        name: "anagram_frequency",
        run: anagram_frequency,
    },
    Demo {
        name: "rotation_search",
        run: rotation_search,
    },
    Demo {
        name: "prefix_words",
        run: prefix_words,
    },
    Demo {
        name: "count_say_palindromes",
        run: count_say_palindromes,
    },
];

pub(super) static SLIDING_WINDOW: &[Demo] = &[
    Demo {
        name: "fixed_windows",
        run: fixed_windows,
    },
    Demo {
        name: "variable_windows",
        run: variable_windows,
    },
    Demo {
        name: "subarray_sum",
        run: subarray_sum,
    },
];

pub(super) static TWO_POINTER: &[Demo] = &[
    Demo {
        name: "sorted_pairs",
        run: sorted_pairs,
    },
    Demo {
        name: "in_place",
        run: in_place,
    },
];

// =============================================================================
// Arrays
// =============================================================================

fn reverse_rotate(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut values = vec![1, 2, 3, 4, 5, 6, 7];
    arrays::reverse(&mut values);
    check(r, "reversed", values.clone(), vec![7, 6, 5, 4, 3, 2, 1])?;

    let mut values = vec![1, 2, 3, 4, 5, 6, 7];
    arrays::rotate_right(&mut values, 3);
    check(r, "rotated right by 3", values.clone(), vec![5, 6, 7, 1, 2, 3, 4])?;
    arrays::rotate_left(&mut values, 3);
    check(r, "and back left", values, vec![1, 2, 3, 4, 5, 6, 7])
}

fn missing_duplicate(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let with_gap = [1, 2, 4, 5, 6];
    agree(
        r,
        "missing number (sum, xor)",
        arrays::find_missing_sum(&with_gap),
        arrays::find_missing_xor(&with_gap),
    )?;
    check(r, "missing", arrays::find_missing_sum(&with_gap), 3)?;

    let with_dup = [1, 3, 4, 2, 2];
    agree(
        r,
        "duplicate (sorting, Floyd)",
        arrays::find_duplicate_sorting(&with_dup),
        arrays::find_duplicate_floyd(&with_dup),
    )?;
    check(r, "duplicate", arrays::find_duplicate_floyd(&with_dup), Some(2))
}

fn order_checks(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    check(r, "second largest", arrays::second_largest(&[12, 35, 1, 10, 34, 1]), Some(34))?;
    check(r, "second largest of [5, 5]", arrays::second_largest(&[5, 5]), None)?;
    check(r, "[1, 2, 2, 3] sorted", arrays::is_sorted(&[1, 2, 2, 3]), true)?;
    check(r, "[3, 2, 1] sorted", arrays::is_sorted(&[3, 2, 1]), true)?;
    check(r, "[3, 4, 5, 1, 2] rotated sorted", arrays::is_sorted_rotated(&[3, 4, 5, 1, 2]), true)
}

fn merge(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let merged = arrays::merge_sorted(&[1, 3, 5, 7], &[2, 4, 6]);
    check(r, "merged", merged, vec![1, 2, 3, 4, 5, 6, 7])?;

    let mut buf = [1, 3, 5, 0, 0, 0];
    arrays::merge_into(&mut buf, 3, &[2, 4, 6])?;
    check(r, "merged in place", buf, [1, 2, 3, 4, 5, 6])
}

fn zeros_majority_kadane(r: &mut Reporter, config: &DrillConfig) -> Result<()> {
    let mut values = [0, 1, 0, 3, 12];
    arrays::move_zeros(&mut values);
    check(r, "zeros moved", values, [1, 3, 12, 0, 0])?;

    check(r, "majority", arrays::majority_element(&[2, 2, 1, 1, 1, 2, 2]), Some(2))?;
    check(r, "no majority", arrays::majority_element(&[1, 2, 3]), None)?;

    let mut colors = [2, 0, 2, 1, 1, 0];
    arrays::dutch_national_flag(&mut colors)?;
    check(r, "dutch flag", colors, [0, 0, 1, 1, 2, 2])?;

    let best = arrays::max_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4])
        .ok_or_else(|| DrillError::empty("array"))?;
    check(r, "max subarray (sum, start, end)", (best.sum, best.start, best.end), (6, 3, 6))?;

    let sample = random_values(config, brute_sample_len(config), 100);
    let mut brute: Option<i64> = None;
    for i in 0..sample.len() {
        let mut sum = 0i64;
        for &x in &sample[i..] {
            sum += x as i64;
            brute = Some(brute.map_or(sum, |b| b.max(sum)));
        }
    }
    r.detail(format!("random sample of {} values", sample.len()));
    agree(r, "Kadane and brute force", arrays::max_subarray_sum(&sample), brute)
}

fn pair_with_sum(r: &mut Reporter, config: &DrillConfig) -> Result<()> {
    check(
        r,
        "pair summing to 6 in [1, 2, 3, 4, 6]",
        arrays::pair_with_sum_sorted(&[1, 2, 3, 4, 6], 6),
        Some((1, 3)),
    )?;

    let sample = random_values(config, brute_sample_len(config), 50);
    let target = 17;
    let brute = arrays::pair_with_sum_brute(&sample, target);
    let hashed = arrays::pair_with_sum_hashed(&sample, target);
    agree(r, "pair found (brute, hashed)", brute.is_some(), hashed.is_some())?;
    if let Some((i, j)) = hashed {
        check(r, "hashed pair sum", sample[i] as i64 + sample[j] as i64, target)?;
    }
    Ok(())
}

// =============================================================================
// Strings
// =============================================================================

fn reverse_palindrome(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    check(r, "reversed", strings::reverse_string("hello"), "olleh".to_string())?;
    let mut bytes = *b"embedded";
    strings::reverse_ascii_in_place(&mut bytes);
    check(r, "reversed in place", &bytes, b"deddebme")?;

    check(r, "'racecar' palindrome", strings::is_palindrome("racecar"), true)?;
    check(r, "'Racecar' ignoring case", strings::is_palindrome_ignore_case("Racecar"), true)?;
    check(
        r,
        "'A man, a plan, a canal: Panama'",
        strings::is_palindrome_alphanumeric("A man, a plan, a canal: Panama"),
        true,
    )
}

fn anagram_frequency(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    check(r, "listen/silent anagrams", strings::are_anagrams("listen", "silent"), true)?;
    check(
        r,
        "Dormitory/Dirtyroom anagrams",
        strings::are_anagrams_ignore_case("Dormitory", "Dirtyroom"),
        true,
    )?;

    let freq = strings::char_frequency("hello");
    r.detail(format!("frequencies: {freq:?}"));
    check(r, "count of 'l'", freq.get(&'l').copied(), Some(2))?;
    check(r, "most frequent", strings::most_frequent("hello"), Some('l'))?;
    check(
        r,
        "without duplicates",
        strings::remove_duplicate_chars("programming"),
        "progamin".to_string(),
    )?;
    check(r, "first non-repeating", strings::first_non_repeating("swiss"), Some('w'))?;
    check(r, "at index", strings::first_non_repeating_index("swiss"), Some(1))
}

fn rotation_search(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    agree(
        r,
        "rotation (concat, manual)",
        strings::is_rotation("waterbottle", "erbottlewat"),
        strings::is_rotation_manual("waterbottle", "erbottlewat"),
    )?;
    check(r, "'world' found at", strings::find_substring("hello world", "world"), Some(6))?;
    check(r, "'xyz' found at", strings::find_substring("hello world", "xyz"), None)
}

fn prefix_words(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let words = ["flower", "flow", "flight"];
    agree(
        r,
        "common prefix (vertical, horizontal)",
        strings::longest_common_prefix(&words),
        strings::longest_common_prefix_horizontal(&words),
    )?;
    check(r, "common prefix", strings::longest_common_prefix(&words), "fl".to_string())?;

    let text = "  the quick\tbrown   fox\n";
    agree(
        r,
        "word counts (state machine, split)",
        strings::count_words(text),
        strings::count_words_split(text),
    )?;
    check(r, "words", strings::count_words(text), 4)
}

fn count_say_palindromes(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    for n in 1..=5 {
        r.detail(format!("term {n}: {}", strings::count_and_say(n)?));
    }
    check(r, "count-and-say(5)", strings::count_and_say(5)?, "111221".to_string())?;

    let text = "forgeeksskeegfor";
    agree(
        r,
        "longest palindrome (centres, brute)",
        strings::longest_palindromic_substring(text),
        strings::longest_palindromic_substring_brute(text),
    )?;
    check(r, "longest palindrome", strings::longest_palindromic_substring(text), "geeksskeeg")
}

// =============================================================================
// Sliding window
// =============================================================================

fn fixed_windows(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    check(
        r,
        "max sum of 3 in [2, 1, 5, 1, 3, 2]",
        sliding_window::max_sum_window(&[2, 1, 5, 1, 3, 2], 3),
        Some(9),
    )?;
    check(
        r,
        "anagrams of 'abc' in 'cbaebabacd'",
        sliding_window::count_anagram_occurrences("cbaebabacd", "abc"),
        2,
    )
}

fn variable_windows(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    check(
        r,
        "shortest run summing to 7",
        sliding_window::min_subarray_len(7, &[2, 3, 1, 2, 4, 3]),
        Some(2),
    )?;
    check(
        r,
        "longest unique run in 'abcabcbb'",
        sliding_window::longest_unique_substring("abcabcbb"),
        3,
    )?;
    check(
        r,
        "longest ones with 2 flips",
        sliding_window::longest_ones_with_flips(&[1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0], 2),
        6,
    )
}

fn subarray_sum(r: &mut Reporter, config: &DrillConfig) -> Result<()> {
    check(
        r,
        "longest run summing to 15",
        sliding_window::longest_subarray_sum_positive(&[10, 5, 2, 7, 1, 9], 15),
        4,
    )?;
    let mixed = [10, 5, 2, 7, 1, -10];
    agree(
        r,
        "with negatives (prefix map, brute)",
        sliding_window::longest_subarray_sum_mixed(&mixed, 15),
        sliding_window::longest_subarray_sum_brute(&mixed, 15),
    )?;

    let sample = random_values(config, brute_sample_len(config), 10);
    agree(
        r,
        "random sample (prefix map, brute)",
        sliding_window::longest_subarray_sum_mixed(&sample, 5),
        sliding_window::longest_subarray_sum_brute(&sample, 5),
    )
}

// =============================================================================
// Two pointers
// =============================================================================

fn sorted_pairs(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    check(r, "two sum 9", two_pointer::two_sum_sorted(&[2, 7, 11, 15], 9), Some((0, 1)))?;
    check(
        r,
        "most water",
        two_pointer::container_most_water(&[1, 8, 6, 2, 5, 4, 8, 3, 7]),
        49,
    )?;

    let mut values = [1, 1, 2, 2, 2, 3];
    let unique = two_pointer::remove_duplicates_sorted(&mut values);
    check(r, "unique prefix", &values[..unique], &[1, 2, 3][..])
}

fn in_place(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    check(r, "'racecar'", two_pointer::is_palindrome_two_pointer("racecar"), true)?;
    check(
        r,
        "'No lemon, no melon'",
        two_pointer::is_palindrome_alphanumeric_two_pointer("No lemon, no melon"),
        true,
    )?;

    let mut values = [1, 2, 3, 4];
    two_pointer::reverse_in_place(&mut values);
    check(r, "reversed", values, [4, 3, 2, 1])?;

    let mut values = [0, 0, 1];
    two_pointer::move_zeros(&mut values);
    check(r, "zeros moved", values, [1, 0, 0])
}
