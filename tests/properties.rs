// Property tests: each fast or in-place routine against a simple reference.

use interview_drills::cyclic_list::NodeArena;
use interview_drills::embedded::{crc, endian, ring_buffer::RingBuffer, timer};
use interview_drills::{arrays, bits, linked_list, search_sort, sliding_window, stack_queue};
use interview_drills::string_library as cs;
use proptest::prelude::*;
use std::collections::VecDeque;

// ============================================================================
// Lists
// ============================================================================

proptest! {
    #[test]
    fn test_list_reversal(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let list = linked_list::from_slice(&values);
        let reversed = linked_list::reverse_iterative(list);
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(linked_list::to_vec(&reversed), expected);

        let restored = linked_list::reverse_recursive(reversed);
        prop_assert_eq!(linked_list::to_vec(&restored), values);
    }

    #[test]
    fn test_list_merge_sort(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        let sorted = linked_list::merge_sort(linked_list::from_slice(&values));
        let mut expected = values;
        expected.sort();
        prop_assert_eq!(linked_list::to_vec(&sorted), expected);
    }

    #[test]
    fn test_floyd_matches_visited_set(
        (values, loop_to) in prop::collection::vec(any::<i32>(), 1..60)
            .prop_flat_map(|v| { let len = v.len(); (Just(v), 0..len) })
    ) {
        let mut arena = NodeArena::new();
        let head = arena.chain(&values);
        let tail = arena.tail_of(head).unwrap();
        arena.set_next(tail, arena.nth(head, loop_to)).unwrap();

        prop_assert_eq!(arena.cycle_start(head), arena.cycle_start_by_visiting(head));
        prop_assert_eq!(arena.cycle_start(head), arena.nth(head, loop_to));
        prop_assert_eq!(arena.cycle_length(head), values.len() - loop_to);

        prop_assert!(arena.remove_cycle(head));
        prop_assert_eq!(arena.values_from(head, values.len() + 1), values);
    }
}

// ============================================================================
// Arrays, searching, sorting
// ============================================================================

proptest! {
    #[test]
    fn test_merge_sorted_is_sorted_union(
        mut a in prop::collection::vec(-100i32..100, 0..50),
        mut b in prop::collection::vec(-100i32..100, 0..50),
    ) {
        a.sort();
        b.sort();
        let merged = arrays::merge_sorted(&a, &b);
        let mut expected = [a, b].concat();
        expected.sort();
        prop_assert_eq!(merged, expected);
    }

    #[test]
    fn test_sorts_match_std(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut expected = values.clone();
        expected.sort();

        let mut quick = values.clone();
        search_sort::quick_sort(&mut quick);
        prop_assert_eq!(&quick, &expected);

        let mut merged = values.clone();
        search_sort::merge_sort(&mut merged);
        prop_assert_eq!(&merged, &expected);

        let mut insertion = values.clone();
        search_sort::insertion_sort(&mut insertion);
        prop_assert_eq!(&insertion, &expected);

        let mut bubble = values;
        search_sort::bubble_sort(&mut bubble);
        prop_assert_eq!(&bubble, &expected);
    }

    #[test]
    fn test_binary_search_finds_members(
        mut values in prop::collection::vec(-500i32..500, 0..100),
        target in -500i32..500,
    ) {
        values.sort();
        values.dedup();
        let found = search_sort::binary_search_iterative(&values, &target);
        prop_assert_eq!(found, values.iter().position(|&v| v == target));
        prop_assert_eq!(search_sort::binary_search_recursive(&values, &target), found);
    }

    #[test]
    fn test_kadane_at_least_every_element(values in prop::collection::vec(-50i32..50, 1..60)) {
        let best = arrays::max_subarray(&values).unwrap();
        let span: i64 = values[best.start..=best.end].iter().map(|&v| v as i64).sum();
        prop_assert_eq!(span, best.sum);
        for &v in &values {
            prop_assert!(best.sum >= v as i64);
        }
    }
}

// ============================================================================
// Windows and stacks
// ============================================================================

proptest! {
    #[test]
    fn test_prefix_map_matches_brute(
        values in prop::collection::vec(-5i32..5, 0..40),
        target in -10i64..10,
    ) {
        prop_assert_eq!(
            sliding_window::longest_subarray_sum_mixed(&values, target),
            sliding_window::longest_subarray_sum_brute(&values, target)
        );
    }

    #[test]
    fn test_largest_rectangle_matches_brute(heights in prop::collection::vec(0u32..20, 0..30)) {
        prop_assert_eq!(
            stack_queue::largest_rectangle(&heights),
            stack_queue::largest_rectangle_brute(&heights)
        );
    }

    #[test]
    fn test_ring_buffer_matches_deque(ops in prop::collection::vec(prop::option::of(any::<u8>()), 0..100)) {
        // Some(x) puts x, None takes one element.
        let mut rb: RingBuffer<u8, 8> = RingBuffer::new();
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                Some(x) => {
                    let accepted = rb.put(x).is_ok();
                    prop_assert_eq!(accepted, model.len() < 8);
                    if accepted {
                        model.push_back(x);
                    }
                }
                None => prop_assert_eq!(rb.get(), model.pop_front()),
            }
            prop_assert_eq!(rb.len(), model.len());
        }
        prop_assert!(rb.iter().copied().eq(model.iter().copied()));
    }
}

// ============================================================================
// Bits, strings, embedded
// ============================================================================

proptest! {
    #[test]
    fn test_bit_tricks_match_std(n in any::<u32>(), k in 0u32..64) {
        prop_assert_eq!(bits::count_set_bits_shift(n), n.count_ones());
        prop_assert_eq!(bits::count_set_bits_kernighan(n), n.count_ones());
        prop_assert_eq!(bits::count_set_bits_lookup(n), n.count_ones());
        prop_assert_eq!(bits::reverse_bits(n), n.reverse_bits());
        prop_assert_eq!(bits::reverse_bits_fast(n), n.reverse_bits());
        prop_assert_eq!(bits::rotate_left32(n, k), n.rotate_left(k));
        prop_assert_eq!(bits::rotate_right32(n, k), n.rotate_right(k));
        prop_assert_eq!(endian::swap32(n), n.swap_bytes());
    }

    #[test]
    fn test_swap_twice_is_identity(a: u32, b: u32) {
        let (mut x, mut y) = (a, b);
        bits::swap_xor(&mut x, &mut y);
        prop_assert_eq!((x, y), (b, a));
        bits::swap_xor(&mut x, &mut y);
        prop_assert_eq!((x, y), (a, b));
    }

    #[test]
    fn test_itoa_atoi(value in any::<i32>(), base in 2u32..=36) {
        let decimal = cs::itoa_decimal(value);
        prop_assert_eq!(&decimal, &value.to_string());
        prop_assert_eq!(cs::atoi(decimal.as_bytes()), value);
        prop_assert_eq!(cs::itoa(value, 10).unwrap(), decimal);

        // Outside base 10 negatives print their two's-complement bits.
        let text = cs::itoa(value, base).unwrap();
        if base == 10 {
            prop_assert_eq!(text, value.to_string());
        } else {
            prop_assert_eq!(u32::from_str_radix(&text, base).unwrap(), value as u32);
        }
    }

    #[test]
    fn test_crc8_table_matches_bitwise(data in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(crc::crc8(&data), crc::crc8_table(&data));
    }

    #[test]
    fn test_expiry_survives_wrap(now in any::<u32>(), delay in 0u32..(1 << 31)) {
        let expires = now.wrapping_add(delay);
        prop_assert!(timer::is_expired(expires, expires));
        prop_assert!(timer::is_expired(expires.wrapping_add(1), expires));
        if delay > 0 {
            prop_assert!(!timer::is_expired(now, expires));
        }
    }
}
