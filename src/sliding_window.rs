//! Fixed and variable-size window techniques.

use rustc_hash::FxHashMap;

// =============================================================================
// Milestone 1: Fixed-size windows
// =============================================================================

/// Largest sum of `k` consecutive elements; absent when no such window exists.
pub fn max_sum_window(arr: &[i32], k: usize) -> Option<i64> {
    if k == 0 || k > arr.len() {
        return None;
    }
    let mut window: i64 = arr[..k].iter().map(|&x| x as i64).sum();
    let mut best = window;
    for i in k..arr.len() {
        window += arr[i] as i64 - arr[i - k] as i64;
        best = best.max(window);
    }
    Some(best)
}

/// Counts windows of `text` that are permutations of `pattern`.
pub fn count_anagram_occurrences(text: &str, pattern: &str) -> usize {
    let text: Vec<char> = text.chars().collect();
    let k = pattern.chars().count();
    if k == 0 || k > text.len() {
        return 0;
    }

    let mut need: FxHashMap<char, usize> = FxHashMap::default();
    for c in pattern.chars() {
        *need.entry(c).or_insert(0) += 1;
    }

    let mut window: FxHashMap<char, usize> = FxHashMap::default();
    let mut count = 0;
    for (i, &c) in text.iter().enumerate() {
        *window.entry(c).or_insert(0) += 1;
        if i >= k {
            let out = text[i - k];
            if let Some(n) = window.get_mut(&out) {
                *n -= 1;
                if *n == 0 {
                    window.remove(&out);
                }
            }
        }
        if i + 1 >= k && window == need {
            count += 1;
        }
    }
    count
}

// =============================================================================
// Milestone 2: Variable-size windows
// =============================================================================

/// Shortest run with sum >= `target`. A zero target is met by the empty run.
pub fn min_subarray_len(target: u64, arr: &[u32]) -> Option<usize> {
    if target == 0 {
        return Some(0);
    }
    let mut best: Option<usize> = None;
    let mut sum = 0u64;
    let mut left = 0;
    for right in 0..arr.len() {
        sum += arr[right] as u64;
        while sum >= target {
            let len = right - left + 1;
            best = Some(best.map_or(len, |b| b.min(len)));
            sum -= arr[left] as u64;
            left += 1;
        }
    }
    best
}

/// Length in characters of the longest substring without a repeated character.
pub fn longest_unique_substring(s: &str) -> usize {
    let mut last_seen: FxHashMap<char, usize> = FxHashMap::default();
    let mut start = 0;
    let mut best = 0;
    for (i, c) in s.chars().enumerate() {
        if let Some(&prev) = last_seen.get(&c) {
            if prev >= start {
                start = prev + 1;
            }
        }
        last_seen.insert(c, i);
        best = best.max(i - start + 1);
    }
    best
}

/// Longest run of 1s when up to `k` zeros may be flipped.
pub fn longest_ones_with_flips(bits: &[u8], k: usize) -> usize {
    let mut left = 0;
    let mut zeros = 0;
    let mut best = 0;
    for right in 0..bits.len() {
        if bits[right] == 0 {
            zeros += 1;
        }
        while zeros > k {
            if bits[left] == 0 {
                zeros -= 1;
            }
            left += 1;
        }
        best = best.max(right + 1 - left);
    }
    best
}

// =============================================================================
// Milestone 3: Longest run with a given sum
// =============================================================================

/// Non-negative input only: the window sum grows monotonically with `right`.
pub fn longest_subarray_sum_positive(arr: &[u32], target: u64) -> usize {
    let mut left = 0;
    let mut sum = 0u64;
    let mut best = 0;
    for right in 0..arr.len() {
        sum += arr[right] as u64;
        while sum > target && left <= right {
            sum -= arr[left] as u64;
            left += 1;
        }
        if sum == target && left <= right {
            best = best.max(right - left + 1);
        }
    }
    best
}

/// Handles negatives with prefix sums: a run `(j, i]` sums to `target` exactly
/// when `prefix[i] - prefix[j] == target`. Only the first index of each prefix
/// sum is kept, which maximizes the length.
pub fn longest_subarray_sum_mixed(arr: &[i32], target: i64) -> usize {
    let mut first_seen: FxHashMap<i64, usize> = FxHashMap::default();
    // Prefix positions are shifted by one: position 0 is the empty prefix.
    first_seen.insert(0, 0);

    let mut prefix = 0i64;
    let mut best = 0;
    for (i, &x) in arr.iter().enumerate() {
        prefix += x as i64;
        let end = i + 1;
        if let Some(&start) = first_seen.get(&(prefix - target)) {
            best = best.max(end - start);
        }
        first_seen.entry(prefix).or_insert(end);
    }
    best
}

pub fn longest_subarray_sum_brute(arr: &[i32], target: i64) -> usize {
    let mut best = 0;
    for i in 0..arr.len() {
        let mut sum = 0i64;
        for j in i..arr.len() {
            sum += arr[j] as i64;
            if sum == target {
                best = best.max(j - i + 1);
            }
        }
    }
    best
}
