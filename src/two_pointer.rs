use std::cmp::Ordering;

/// Indices `(i, j)`, `i < j`, of two elements of a sorted slice that sum to `target`.
pub fn two_sum_sorted(arr: &[i32], target: i64) -> Option<(usize, usize)> {
    if arr.len() < 2 {
        return None;
    }
    let (mut left, mut right) = (0, arr.len() - 1);
    while left < right {
        let sum = arr[left] as i64 + arr[right] as i64;
        match sum.cmp(&target) {
            Ordering::Equal => return Some((left, right)),
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }
    None
}

/// Compacts unique values to the front of a sorted slice and returns how many
/// there are. Elements past the returned length are left in unspecified order.
pub fn remove_duplicates_sorted<T: PartialEq>(arr: &mut [T]) -> usize {
    if arr.is_empty() {
        return 0;
    }
    let mut write = 0;
    for read in 1..arr.len() {
        if arr[read] != arr[write] {
            write += 1;
            arr.swap(write, read);
        }
    }
    write + 1
}

/// Largest area between two lines. Moving the shorter side is the only move
/// that can increase the area.
pub fn container_most_water(heights: &[u32]) -> u64 {
    if heights.len() < 2 {
        return 0;
    }
    let (mut left, mut right) = (0, heights.len() - 1);
    let mut best = 0u64;
    while left < right {
        let h = heights[left].min(heights[right]) as u64;
        best = best.max(h * (right - left) as u64);
        if heights[left] < heights[right] {
            left += 1;
        } else {
            right -= 1;
        }
    }
    best
}

pub fn is_palindrome_two_pointer(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
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

/// Skips non-alphanumeric characters and ignores case.
pub fn is_palindrome_alphanumeric_two_pointer(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return true;
    }
    let (mut left, mut right) = (0, chars.len() - 1);
    while left < right {
        if !chars[left].is_alphanumeric() {
            left += 1;
        } else if !chars[right].is_alphanumeric() {
            right -= 1;
        } else {
            if !chars[left].to_lowercase().eq(chars[right].to_lowercase()) {
                return false;
            }
            left += 1;
            right -= 1;
        }
    }
    true
}

pub fn reverse_in_place<T>(arr: &mut [T]) {
    crate::arrays::reverse(arr);
}

pub fn move_zeros(arr: &mut [i32]) {
    crate::arrays::move_zeros(arr);
}
