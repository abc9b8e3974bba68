use std::cmp::Ordering;

// =============================================================================
// Milestone 1: Searching
// =============================================================================

pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|x| x == target)
}

/// Searches the half-open range `[low, high)`, so no index ever goes negative.
pub fn binary_search_iterative<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0, arr.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

pub fn binary_search_recursive<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    fn go<T: Ord>(arr: &[T], low: usize, high: usize, target: &T) -> Option<usize> {
        if low >= high {
            return None;
        }
        let mid = low + (high - low) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => Some(mid),
            Ordering::Less => go(arr, mid + 1, high, target),
            Ordering::Greater => go(arr, low, mid, target),
        }
    }
    go(arr, 0, arr.len(), target)
}

/// Keeps searching left after a hit.
pub fn first_occurrence<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0, arr.len());
    let mut found = None;
    while low < high {
        let mid = low + (high - low) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => {
                found = Some(mid);
                high = mid;
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    found
}

pub fn last_occurrence<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0, arr.len());
    let mut found = None;
    while low < high {
        let mid = low + (high - low) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => {
                found = Some(mid);
                low = mid + 1;
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    found
}

pub fn count_occurrences<T: Ord>(arr: &[T], target: &T) -> usize {
    match (first_occurrence(arr, target), last_occurrence(arr, target)) {
        (Some(first), Some(last)) => last - first + 1,
        _ => 0,
    }
}

/// Binary search in a sorted array of distinct values rotated at an unknown pivot.
/// One half around `mid` is always sorted; check whether the target lies in it.
pub fn search_rotated(arr: &[i32], target: i32) -> Option<usize> {
    let (mut low, mut high) = (0, arr.len());
    while low < high {
        let mid = low + (high - low) / 2;
        if arr[mid] == target {
            return Some(mid);
        }
        let last = arr[high - 1];
        if arr[low] <= arr[mid] {
            if target >= arr[low] && target < arr[mid] {
                high = mid;
            } else {
                low = mid + 1;
            }
        } else if target > arr[mid] && target <= last {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    None
}

/// Index of any element strictly greater than its neighbours. Climbs toward the
/// larger neighbour, which must lead to a peak.
pub fn find_peak(arr: &[i32]) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut low, mut high) = (0, arr.len() - 1);
    while low < high {
        let mid = low + (high - low) / 2;
        if arr[mid] < arr[mid + 1] {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Some(low)
}

pub fn find_peak_linear(arr: &[i32]) -> Option<usize> {
    let n = arr.len();
    (0..n).find(|&i| {
        let left_ok = i == 0 || arr[i] > arr[i - 1];
        let right_ok = i == n - 1 || arr[i] > arr[i + 1];
        left_ok && right_ok
    })
}

// =============================================================================
// Milestone 2: Sorting
// =============================================================================

/// Stops as soon as a pass makes no swap, so sorted input costs one pass.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Lomuto partition around the last element.
fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let pivot = arr.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if arr[i] <= arr[pivot] {
            arr.swap(i, store);
            store += 1;
        }
    }
    arr.swap(store, pivot);
    store
}

pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let p = partition(arr);
    let (left, right) = arr.split_at_mut(p);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

/// Top-down merge sort; stable.
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let mid = arr.len() / 2;
    merge_sort(&mut arr[..mid]);
    merge_sort(&mut arr[mid..]);

    let merged = crate::arrays::merge_sorted(&arr[..mid], &arr[mid..]);
    arr.clone_from_slice(&merged);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_searches() {
        let arr = [2, 5, 8, 12, 16, 23, 38, 56, 72, 91];
        assert_eq!(binary_search_iterative(&arr, &23), Some(5));
        assert_eq!(binary_search_recursive(&arr, &23), Some(5));
        assert_eq!(linear_search(&arr, &23), Some(5));
        assert_eq!(binary_search_iterative(&arr, &1), None);
        assert_eq!(binary_search_recursive(&arr, &100), None);
        assert_eq!(binary_search_iterative::<i32>(&[], &1), None);
        assert_eq!(binary_search_recursive(&arr, &2), Some(0));
        assert_eq!(binary_search_recursive(&arr, &91), Some(9));
    }

    #[test]
    fn test_occurrences() {
        let arr = [1, 2, 2, 2, 3, 4, 4];
        assert_eq!(first_occurrence(&arr, &2), Some(1));
        assert_eq!(last_occurrence(&arr, &2), Some(3));
        assert_eq!(count_occurrences(&arr, &2), 3);
        assert_eq!(count_occurrences(&arr, &4), 2);
        assert_eq!(count_occurrences(&arr, &5), 0);
        assert_eq!(first_occurrence(&arr, &0), None);
    }

    #[test]
    fn test_search_rotated() {
        let arr = [4, 5, 6, 7, 0, 1, 2];
        for (i, &v) in arr.iter().enumerate() {
            assert_eq!(search_rotated(&arr, v), Some(i));
        }
        assert_eq!(search_rotated(&arr, 3), None);
        assert_eq!(search_rotated(&[], 3), None);
        assert_eq!(search_rotated(&[1], 1), Some(0));
    }

    #[test]
    fn test_find_peak() {
        assert_eq!(find_peak(&[1, 3, 20, 4, 1, 0]), Some(2));
        assert_eq!(find_peak_linear(&[1, 3, 20, 4, 1, 0]), Some(2));
        assert_eq!(find_peak(&[1, 2, 3, 4]), Some(3));
        assert_eq!(find_peak(&[4, 3, 2]), Some(0));
        assert_eq!(find_peak(&[]), None);

        let arr = [1, 2, 1, 3, 5, 6, 4];
        let peak = find_peak(&arr).unwrap();
        assert!(peak == 1 || peak == 5);
    }

    #[test]
    fn test_sorts_agree_with_std() {
        let inputs: Vec<Vec<i32>> = vec![
            vec![],
            vec![1],
            vec![64, 34, 25, 12, 22, 11, 90],
            vec![5, 5, 1, 5, 1],
            vec![1, 2, 3, 4],
            vec![9, 7, 5, 3, 1],
        ];
        for input in inputs {
            let mut expected = input.clone();
            expected.sort();

            let sorts: [fn(&mut [i32]); 4] =
                [bubble_sort, insertion_sort, quick_sort, merge_sort];
            for sort in sorts {
                let mut v = input.clone();
                sort(&mut v);
                assert_eq!(v, expected);
            }
        }
    }

    #[test]
    fn test_merge_sort_is_stable() {
        #[derive(Clone, Debug, PartialEq, Eq)]
        struct Item(u8, char);
        impl PartialOrd for Item {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Item {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut items = vec![Item(2, 'a'), Item(1, 'b'), Item(2, 'c'), Item(1, 'd')];
        merge_sort(&mut items);
        let order: String = items.iter().map(|i| i.1).collect();
        assert_eq!(order, "bdac");
    }
}
