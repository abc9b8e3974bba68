use crate::error::{DrillError, Result};
use rustc_hash::FxHashMap;

// =============================================================================
// Milestone 1: Reversal and rotation
// =============================================================================

/// Reverses a slice in place by swapping from both ends toward the middle.
pub fn reverse<T>(arr: &mut [T]) {
    if arr.is_empty() {
        return;
    }
    let mut left = 0;
    let mut right = arr.len() - 1;
    while left < right {
        arr.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Rotates right by `k` using three reversals; `k` wraps around the length.
pub fn rotate_right<T>(arr: &mut [T], k: usize) {
    if arr.is_empty() {
        return;
    }
    let k = k % arr.len();
    reverse(arr);
    reverse(&mut arr[..k]);
    reverse(&mut arr[k..]);
}

pub fn rotate_left<T>(arr: &mut [T], k: usize) {
    if arr.is_empty() {
        return;
    }
    let k = k % arr.len();
    reverse(&mut arr[..k]);
    reverse(&mut arr[k..]);
    reverse(arr);
}

// =============================================================================
// Milestone 2: Missing and duplicate numbers
// =============================================================================

/// `arr` holds every value of `1..=arr.len() + 1` except one.
pub fn find_missing_sum(arr: &[u32]) -> u32 {
    let n = arr.len() as u64 + 1;
    let expected = n * (n + 1) / 2;
    let actual: u64 = arr.iter().map(|&v| v as u64).sum();
    (expected - actual) as u32
}

pub fn find_missing_xor(arr: &[u32]) -> u32 {
    let n = arr.len() as u32 + 1;
    let all = (1..=n).fold(0, |acc, v| acc ^ v);
    arr.iter().fold(all, |acc, &v| acc ^ v)
}

pub fn find_duplicate_sorting(arr: &[usize]) -> Option<usize> {
    let mut sorted = arr.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).find(|w| w[0] == w[1]).map(|w| w[0])
}

/// Floyd's cycle detection over "value as next index".
///
/// Requires `n + 1` values drawn from `1..=n`; anything else yields `None`.
pub fn find_duplicate_floyd(arr: &[usize]) -> Option<usize> {
    let len = arr.len();
    if len < 2 || arr.iter().any(|&v| v == 0 || v >= len) {
        return None;
    }

    let mut slow = arr[0];
    let mut fast = arr[arr[0]];
    while slow != fast {
        slow = arr[slow];
        fast = arr[arr[fast]];
    }

    // Entry of the cycle is the duplicated value.
    slow = 0;
    while slow != fast {
        slow = arr[slow];
        fast = arr[fast];
    }
    Some(slow)
}

// =============================================================================
// Milestone 3: Order checks and second largest
// =============================================================================

pub fn second_largest(arr: &[i32]) -> Option<i32> {
    let mut largest: Option<i32> = None;
    let mut second: Option<i32> = None;

    for &value in arr {
        match largest {
            Some(max) if value > max => {
                second = largest;
                largest = Some(value);
            }
            Some(max) if value < max => {
                if second.map_or(true, |s| value > s) {
                    second = Some(value);
                }
            }
            Some(_) => {}
            None => largest = Some(value),
        }
    }
    second
}

pub fn is_sorted_ascending<T: PartialOrd>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

pub fn is_sorted_descending<T: PartialOrd>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] >= w[1])
}

pub fn is_sorted<T: PartialOrd>(arr: &[T]) -> bool {
    is_sorted_ascending(arr) || is_sorted_descending(arr)
}

/// True when `arr` is an ascending sequence rotated by some amount.
pub fn is_sorted_rotated<T: PartialOrd>(arr: &[T]) -> bool {
    let n = arr.len();
    if n <= 1 {
        return true;
    }
    let descents = (0..n).filter(|&i| arr[i] > arr[(i + 1) % n]).count();
    descents <= 1
}

// =============================================================================
// Milestone 4: Merging sorted arrays
// =============================================================================

/// Stable merge: on ties the element from `left` comes first.
pub fn merge_sorted<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Merges `other` into `buf`, whose first `m` slots hold sorted data and whose
/// remaining slots are scratch space. Fills from the back so nothing is overwritten early.
pub fn merge_into<T: Ord + Clone>(buf: &mut [T], m: usize, other: &[T]) -> Result<()> {
    if buf.len() != m + other.len() {
        return Err(DrillError::invalid_argument(
            "buf",
            format!(
                "length {} must equal m ({}) + other ({})",
                buf.len(),
                m,
                other.len()
            ),
        ));
    }

    let mut i = m;
    let mut j = other.len();
    let mut k = buf.len();
    while j > 0 {
        if i > 0 && buf[i - 1] > other[j - 1] {
            buf[k - 1] = buf[i - 1].clone();
            i -= 1;
        } else {
            buf[k - 1] = other[j - 1].clone();
            j -= 1;
        }
        k -= 1;
    }
    Ok(())
}

// =============================================================================
// Milestone 5: Move zeros, majority, Kadane
// =============================================================================

pub fn move_zeros(arr: &mut [i32]) {
    let mut write = 0;
    for read in 0..arr.len() {
        if arr[read] != 0 {
            arr[write] = arr[read];
            write += 1;
        }
    }
    for slot in &mut arr[write..] {
        *slot = 0;
    }
}

pub fn move_zeros_swap(arr: &mut [i32]) {
    let mut write = 0;
    for read in 0..arr.len() {
        if arr[read] != 0 {
            arr.swap(write, read);
            write += 1;
        }
    }
}

/// Boyer-Moore vote. The candidate is only the majority if one exists.
pub fn majority_candidate<T: PartialEq + Clone>(arr: &[T]) -> Option<T> {
    let mut candidate: Option<T> = None;
    let mut count = 0usize;

    for value in arr {
        if count == 0 {
            candidate = Some(value.clone());
            count = 1;
        } else if candidate.as_ref() == Some(value) {
            count += 1;
        } else {
            count -= 1;
        }
    }
    candidate
}

/// Element occurring more than `n / 2` times.
pub fn majority_element<T: PartialEq + Clone>(arr: &[T]) -> Option<T> {
    let candidate = majority_candidate(arr)?;
    let count = arr.iter().filter(|&v| *v == candidate).count();
    (count > arr.len() / 2).then_some(candidate)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subarray {
    pub sum: i64,
    pub start: usize,
    /// Inclusive.
    pub end: usize,
}

pub fn max_subarray(arr: &[i32]) -> Option<Subarray> {
    let first = *arr.first()? as i64;
    let mut best = Subarray {
        sum: first,
        start: 0,
        end: 0,
    };
    let mut current = first;
    let mut current_start = 0;

    for (i, &value) in arr.iter().enumerate().skip(1) {
        let value = value as i64;
        if current < 0 {
            current = value;
            current_start = i;
        } else {
            current += value;
        }
        if current > best.sum {
            best = Subarray {
                sum: current,
                start: current_start,
                end: i,
            };
        }
    }
    Some(best)
}

pub fn max_subarray_sum(arr: &[i32]) -> Option<i64> {
    max_subarray(arr).map(|s| s.sum)
}

// =============================================================================
// Milestone 6: Dutch National Flag
// =============================================================================

/// Single-pass three-way partition of 0s, 1s and 2s.
///
/// Invariant while scanning: `[0, low)` are 0s, `[low, mid)` are 1s,
/// `[high, len)` are 2s and `[mid, high)` is unexplored.
pub fn dutch_national_flag(arr: &mut [u8]) -> Result<()> {
    let mut low = 0;
    let mut mid = 0;
    let mut high = arr.len();

    while mid < high {
        match arr[mid] {
            0 => {
                arr.swap(low, mid);
                low += 1;
                mid += 1;
            }
            1 => mid += 1,
            2 => {
                high -= 1;
                arr.swap(mid, high);
            }
            other => {
                return Err(DrillError::invalid_argument(
                    "arr",
                    format!("value {other} at index {mid} is not 0, 1 or 2"),
                ))
            }
        }
    }
    Ok(())
}

// =============================================================================
// Milestone 7: Pair with given sum
// =============================================================================

pub fn pair_with_sum_sorted(arr: &[i32], target: i64) -> Option<(usize, usize)> {
    if arr.len() < 2 {
        return None;
    }
    let mut left = 0;
    let mut right = arr.len() - 1;
    while left < right {
        let sum = arr[left] as i64 + arr[right] as i64;
        if sum == target {
            return Some((left, right));
        } else if sum < target {
            left += 1;
        } else {
            right -= 1;
        }
    }
    None
}

pub fn pair_with_sum_brute(arr: &[i32], target: i64) -> Option<(usize, usize)> {
    for i in 0..arr.len() {
        for j in i + 1..arr.len() {
            if arr[i] as i64 + arr[j] as i64 == target {
                return Some((i, j));
            }
        }
    }
    None
}

pub fn pair_with_sum_hashed(arr: &[i32], target: i64) -> Option<(usize, usize)> {
    let mut seen: FxHashMap<i64, usize> = FxHashMap::default();
    for (j, &value) in arr.iter().enumerate() {
        let value = value as i64;
        if let Some(&i) = seen.get(&(target - value)) {
            return Some((i, j));
        }
        seen.entry(value).or_insert(j);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        let mut arr = vec![1, 2, 3, 4, 5];
        reverse(&mut arr);
        assert_eq!(arr, vec![5, 4, 3, 2, 1]);

        let mut empty: Vec<i32> = vec![];
        reverse(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_rotate() {
        let mut arr = vec![1, 2, 3, 4, 5, 6, 7];
        rotate_right(&mut arr, 3);
        assert_eq!(arr, vec![5, 6, 7, 1, 2, 3, 4]);
        rotate_left(&mut arr, 3);
        assert_eq!(arr, vec![1, 2, 3, 4, 5, 6, 7]);
        rotate_right(&mut arr, 14);
        assert_eq!(arr, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_find_missing() {
        let arr = [1, 2, 4, 5, 6];
        assert_eq!(find_missing_sum(&arr), 3);
        assert_eq!(find_missing_xor(&arr), 3);
        assert_eq!(find_missing_sum(&[]), 1);
        assert_eq!(find_missing_xor(&[1]), 2);
    }

    #[test]
    fn test_find_duplicate() {
        let arr = [1, 3, 4, 2, 2];
        assert_eq!(find_duplicate_sorting(&arr), Some(2));
        assert_eq!(find_duplicate_floyd(&arr), Some(2));

        let arr = [3, 1, 3, 4, 2];
        assert_eq!(find_duplicate_floyd(&arr), Some(3));
        assert_eq!(find_duplicate_floyd(&[1]), None);
        assert_eq!(find_duplicate_floyd(&[0, 1, 1]), None);
    }

    #[test]
    fn test_second_largest() {
        assert_eq!(second_largest(&[12, 35, 1, 10, 34, 1]), Some(34));
        assert_eq!(second_largest(&[10, 10, 10, 5, 3]), Some(5));
        assert_eq!(second_largest(&[-5, -1, -10, -3]), Some(-3));
        assert_eq!(second_largest(&[7, 7]), None);
        assert_eq!(second_largest(&[1]), None);
    }

    #[test]
    fn test_sorted_checks() {
        assert!(is_sorted_ascending(&[1, 2, 2, 3]));
        assert!(is_sorted_descending(&[3, 2, 2, 1]));
        assert!(is_sorted(&[3, 2, 1]));
        assert!(!is_sorted(&[1, 3, 2]));
        assert!(is_sorted_rotated(&[3, 4, 5, 1, 2]));
        assert!(!is_sorted_rotated(&[2, 1, 3, 4]));
        assert!(is_sorted_rotated::<i32>(&[]));
    }

    #[test]
    fn test_merge_sorted() {
        assert_eq!(merge_sorted(&[1, 3, 5], &[2, 4, 6]), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(merge_sorted(&[], &[1, 2]), vec![1, 2]);
    }

    #[test]
    fn test_merge_sorted_is_stable() {
        let left = [(1, 'l'), (2, 'l')];
        let right = [(1, 'r')];
        // Tuples compare by both fields; compare by key only via a wrapper.
        #[derive(Clone, Debug, PartialEq, Eq)]
        struct Key(i32, char);
        impl PartialOrd for Key {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Key {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }
        let l: Vec<Key> = left.iter().map(|&(k, c)| Key(k, c)).collect();
        let r: Vec<Key> = right.iter().map(|&(k, c)| Key(k, c)).collect();
        let merged = merge_sorted(&l, &r);
        let tags: Vec<char> = merged.iter().map(|k| k.1).collect();
        assert_eq!(tags, vec!['l', 'r', 'l']);
    }

    #[test]
    fn test_merge_into() {
        let mut buf = vec![1, 5, 9, 0, 0, 0];
        merge_into(&mut buf, 3, &[2, 6, 10]).unwrap();
        assert_eq!(buf, vec![1, 2, 5, 6, 9, 10]);

        let mut bad = vec![1, 2];
        assert!(merge_into(&mut bad, 2, &[3]).is_err());
    }

    #[test]
    fn test_move_zeros() {
        let mut a = vec![0, 1, 0, 3, 12];
        move_zeros(&mut a);
        assert_eq!(a, vec![1, 3, 12, 0, 0]);

        let mut b = vec![0, 1, 0, 3, 12];
        move_zeros_swap(&mut b);
        assert_eq!(b, vec![1, 3, 12, 0, 0]);
    }

    #[test]
    fn test_majority() {
        assert_eq!(majority_element(&[2, 2, 1, 1, 1, 2, 2]), Some(2));
        assert_eq!(majority_element(&[1, 2, 3]), None);
        assert_eq!(majority_element::<i32>(&[]), None);
        assert_eq!(majority_candidate(&[1, 2, 3]), Some(3));
    }

    #[test]
    fn test_max_subarray() {
        let arr = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
        assert_eq!(
            max_subarray(&arr),
            Some(Subarray {
                sum: 6,
                start: 3,
                end: 6
            })
        );
        assert_eq!(max_subarray_sum(&[-3, -1, -2]), Some(-1));
        assert_eq!(max_subarray_sum(&[]), None);
    }

    #[test]
    fn test_dutch_national_flag() {
        let mut arr = vec![2, 0, 2, 1, 1, 0];
        dutch_national_flag(&mut arr).unwrap();
        assert_eq!(arr, vec![0, 0, 1, 1, 2, 2]);

        let mut single = vec![2];
        dutch_national_flag(&mut single).unwrap();
        assert_eq!(single, vec![2]);

        let mut bad = vec![0, 3, 1];
        assert!(dutch_national_flag(&mut bad).is_err());
    }

    #[test]
    fn test_pair_with_sum() {
        let sorted = [1, 2, 4, 7, 11, 15];
        assert_eq!(pair_with_sum_sorted(&sorted, 15), Some((2, 4)));
        assert_eq!(pair_with_sum_sorted(&sorted, 100), None);

        let unsorted = [8, 7, 2, 5, 3, 1];
        assert_eq!(pair_with_sum_brute(&unsorted, 10), Some((0, 2)));
        assert_eq!(pair_with_sum_hashed(&unsorted, 10), Some((0, 2)));
        assert_eq!(pair_with_sum_hashed(&unsorted, 100), None);
    }
}
