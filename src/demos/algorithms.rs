use super::{agree, brute_sample_len, check, random_values, rng};
use crate::bits;
use crate::catalog::Demo;
use crate::config::DrillConfig;
use crate::error::{DrillError, Result};
use crate::report::Reporter;
use crate::search_sort as ss;
use crate::string_library as cs;
use rand::Rng;
use std::cmp::Ordering;

pub(super) static BITS: &[Demo] = &[
    Demo {
        name: "recursion",
        run: recursion,
    },
    Demo {
        name: "counting",
        run: counting,
    },
    Demo {
        name: "single_bits",
        run: single_bits,
    },
    Demo {
        name: "reverse_rotate",
        run: reverse_rotate_bits,
    },
    Demo {
        name: "fields_bytes",
        run: fields_bytes,
    },
];

pub(super) static SEARCH_SORT: &[Demo] = &[
    Demo {
        name: "binary_search",
        run: binary_search,
    },
    Demo {
        name: "special_searches",
        run: special_searches,
    },
    Demo {
        name: "sorts",
        run: sorts,
    },
];

pub(super) static STRING_LIBRARY: &[Demo] = &[
    Demo {
        name: "copy_concat",
        run: copy_concat,
    },
    Demo {
        name: "compare",
        run: compare,
    },
    Demo {
        name: "memory",
        run: memory,
    },
    Demo {
        name: "search",
        run: search,
    },
    Demo {
        name: "conversion",
        run: conversion,
    },
];

// =============================================================================
// Recursion and bits
// =============================================================================

fn recursion(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    agree(
        r,
        "fib(20) (recursive, memo)",
        bits::fibonacci_recursive(20),
        bits::fibonacci_memo(20),
    )?;
    check(r, "fib(20)", bits::fibonacci_iterative(20), 6765)?;
    agree(
        r,
        "fib(90) (memo, iterative)",
        bits::fibonacci_memo(90),
        bits::fibonacci_iterative(90),
    )?;

    agree(
        r,
        "10! (recursive, tail)",
        bits::factorial_recursive(10),
        bits::factorial_tail(10),
    )?;
    check(r, "10!", bits::factorial_iterative(10), Some(3_628_800))?;
    check(r, "21! overflows u64", bits::factorial_iterative(21), None)
}

fn counting(r: &mut Reporter, config: &DrillConfig) -> Result<()> {
    for n in [0, 1, 16, 18, 1024] {
        let answers = (
            bits::is_power_of_two(n),
            bits::is_power_of_two_count(n),
            bits::is_power_of_two_division(n),
        );
        r.detail(format!("{n}: {answers:?}"));
        agree(r, &format!("power of two checks for {n}"), answers.0, answers.1)?;
        agree(r, &format!("power of two checks for {n}"), answers.0, answers.2)?;
    }

    check(r, "set bits in 0b1011_0110", bits::count_set_bits_kernighan(0b1011_0110), 5)?;
    let mut rng = rng(config);
    for _ in 0..brute_sample_len(config) {
        let n: u32 = rng.gen();
        let counts = [
            bits::count_set_bits_shift(n),
            bits::count_set_bits_kernighan(n),
            bits::count_set_bits_lookup(n),
        ];
        if counts.iter().any(|&c| c != n.count_ones()) {
            return Err(DrillError::mismatch(
                format!("set bit counts for {n:#x}"),
                n.count_ones(),
                counts,
            ));
        }
    }
    r.ok("shift, Kernighan and lookup counts agree on random words");

    check(r, "single number", bits::single_number(&[4, 1, 2, 1, 2]), 4)
}

fn single_bits(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let (mut a, mut b) = (5u32, 9u32);
    bits::swap_xor(&mut a, &mut b);
    check(r, "xor swap", (a, b), (9, 5))?;
    let (mut x, mut y) = (i32::MAX, -3);
    bits::swap_arithmetic(&mut x, &mut y);
    check(r, "arithmetic swap", (x, y), (-3, i32::MAX))?;

    let reg = 0b1000;
    check(r, "set bit 1", bits::set_bit(reg, 1)?, 0b1010)?;
    check(r, "clear bit 3", bits::clear_bit(0b1010, 3)?, 0b0010)?;
    check(r, "toggle bit 0", bits::toggle_bit(0b1010, 0)?, 0b1011)?;
    check(r, "bit 1 of 0b1010", bits::check_bit(0b1010, 1)?, true)?;
    check(r, "bit 32 rejected", bits::set_bit(reg, 32).is_err(), true)?;
    check(r, "-7 odd", (bits::is_odd(-7), bits::is_even(-7)), (true, false))
}

fn reverse_rotate_bits(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    agree(
        r,
        "reverse 0x0000_00F1 (loop, swaps)",
        bits::reverse_bits(0xF1),
        bits::reverse_bits_fast(0xF1),
    )?;
    check(
        r,
        "reversed",
        bits::format_binary32(bits::reverse_bits(0xF1)),
        "1000_1111_0000_0000_0000_0000_0000_0000".to_string(),
    )?;
    check(
        r,
        "reverse 8-bit",
        bits::format_binary8(bits::reverse_bits8(0b0000_0101)),
        "0b10100000".to_string(),
    )?;

    check(r, "rotl32 by 8", bits::rotate_left32(0x1234_5678, 8), 0x3456_7812)?;
    check(r, "rotr32 by 8", bits::rotate_right32(0x1234_5678, 8), 0x7812_3456)?;
    check(r, "rotl8 by 1", bits::rotate_left8(0b1000_0001, 1), 0b0000_0011)?;
    check(r, "rotr8 by 1", bits::rotate_right8(0b0000_0001, 1), 0b1000_0000)?;
    check(r, "4-bit rotl of 0b1000", bits::rotate_left_width(0b1000, 1, 4)?, 0b0001)?;
    check(r, "4-bit rotr of 0b0001", bits::rotate_right_width(0b0001, 1, 4)?, 0b1000)
}

fn fields_bytes(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    check(r, "bits 4..12 of 0xABCD", bits::extract_bits(0xABCD, 4, 8)?, 0xBC)?;
    check(r, "byte 1 of 0x12345678", bits::extract_byte(0x1234_5678, 1)?, 0x56)?;
    check(r, "field 4..8 set to 0xF", bits::set_bitfield(0xFF00, 4, 4, 0xF)?, 0xFFF0)?;

    check(r, "merge BE 16", bits::merge_bytes16(0x12, 0x34), 0x1234)?;
    check(r, "merge LE 16", bits::merge_bytes16_le(0x34, 0x12), 0x1234)?;
    check(r, "merge 32", bits::merge_bytes32(0x12, 0x34, 0x56, 0x78), 0x1234_5678)?;
    r.line("host is little endian", bits::is_little_endian());
    Ok(())
}

// =============================================================================
// Searching and sorting
// =============================================================================

fn binary_search(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let sorted = [1, 3, 5, 7, 9, 11, 13];
    for target in [7, 1, 13, 4] {
        let linear = ss::linear_search(&sorted, &target);
        agree(
            r,
            &format!("search {target} (iterative, recursive)"),
            ss::binary_search_iterative(&sorted, &target),
            ss::binary_search_recursive(&sorted, &target),
        )?;
        agree(
            r,
            &format!("search {target} (linear, binary)"),
            linear,
            ss::binary_search_iterative(&sorted, &target),
        )?;
    }

    let runs = [1, 2, 2, 2, 3, 5];
    check(r, "first 2", ss::first_occurrence(&runs, &2), Some(1))?;
    check(r, "last 2", ss::last_occurrence(&runs, &2), Some(3))?;
    check(r, "count of 2", ss::count_occurrences(&runs, &2), 3)?;
    check(r, "count of 4", ss::count_occurrences(&runs, &4), 0)
}

fn special_searches(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let rotated = [4, 5, 6, 7, 0, 1, 2];
    check(r, "0 in rotated array", ss::search_rotated(&rotated, 0), Some(4))?;
    check(r, "3 in rotated array", ss::search_rotated(&rotated, 3), None)?;

    let hills = [1, 3, 20, 4, 1, 0];
    agree(
        r,
        "peak (binary, linear)",
        ss::find_peak(&hills),
        ss::find_peak_linear(&hills),
    )?;
    check(r, "peak index", ss::find_peak(&hills), Some(2))
}

fn sorts(r: &mut Reporter, config: &DrillConfig) -> Result<()> {
    let sample = random_values(config, config.run.sample_size, 10_000);
    let mut expected = sample.clone();
    expected.sort();

    let mut quick = sample.clone();
    ss::quick_sort(&mut quick);
    agree(r, "quick sort matches std", quick == expected, true)?;

    let mut merged = sample.clone();
    ss::merge_sort(&mut merged);
    agree(r, "merge sort matches std", merged == expected, true)?;

    let small = &sample[..brute_sample_len(config)];
    let mut small_expected = small.to_vec();
    small_expected.sort();
    let mut bubble = small.to_vec();
    ss::bubble_sort(&mut bubble);
    agree(r, "bubble sort matches std", bubble == small_expected, true)?;
    let mut insertion = small.to_vec();
    ss::insertion_sort(&mut insertion);
    agree(r, "insertion sort matches std", insertion == small_expected, true)?;

    r.detail(format!(
        "{} values sorted, {} by the quadratic sorts",
        sample.len(),
        small.len()
    ));
    Ok(())
}

// =============================================================================
// C string library
// =============================================================================

/// The NUL-terminated prefix of `buf` as text.
fn text(buf: &[u8]) -> String {
    String::from_utf8_lossy(&buf[..cs::strlen(buf)]).into_owned()
}

fn copy_concat(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut buf = [0u8; 16];
    cs::strcpy(&mut buf, b"Hello")?;
    cs::strcat(&mut buf, b", World")?;
    check(r, "strcat", text(&buf), "Hello, World".to_string())?;
    check(r, "strlen", cs::strlen(&buf), 12)?;
    check(r, "overflowing strcat rejected", cs::strcat(&mut buf, b"!!!!").is_err(), true)?;

    let mut small = [b'x'; 6];
    cs::strncpy(&mut small, b"abc", 5)?;
    check(r, "strncpy pads with NUL", small, *b"abc\0\0x")?;

    let mut joined = [0u8; 8];
    cs::strcpy(&mut joined, b"ab")?;
    cs::strncat(&mut joined, b"cdefgh", 3)?;
    check(r, "strncat 3", text(&joined), "abcde".to_string())
}

fn compare(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    check(r, "strcmp apple/apples", cs::strcmp(b"apple", b"apples"), Ordering::Less)?;
    check(r, "strcmp b/a", cs::strcmp(b"b", b"a"), Ordering::Greater)?;
    check(r, "strncmp 5", cs::strncmp(b"apple", b"apples", 5), Ordering::Equal)?;
    check(r, "memcmp 3", cs::memcmp(b"ab\0c", b"ab\0d", 3)?, Ordering::Equal)?;
    check(r, "memcmp 4", cs::memcmp(b"ab\0c", b"ab\0d", 4)?, Ordering::Less)
}

fn memory(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut buf = *b"abcdefgh";
    cs::memmove(&mut buf, 0, 2, 5)?;
    check(r, "memmove forward overlap", &buf, b"ababcdeh")?;

    let mut buf = *b"abcdefgh";
    cs::memmove(&mut buf, 2, 0, 5)?;
    check(r, "memmove backward overlap", &buf, b"cdefgfgh")?;

    let mut block = [0u8; 6];
    cs::memset(&mut block, 0xAA, 4)?;
    check(r, "memset 4", block, [0xAA, 0xAA, 0xAA, 0xAA, 0, 0])?;
    cs::memcpy(&mut block, b"xyz", 3)?;
    check(r, "memcpy 3", block, [b'x', b'y', b'z', 0xAA, 0, 0])
}

fn search(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    check(r, "strchr 'l'", cs::strchr(b"hello", b'l'), Some(2))?;
    check(r, "strrchr 'l'", cs::strrchr(b"hello", b'l'), Some(3))?;
    check(r, "strchr NUL", cs::strchr(b"hello\0", 0), Some(5))?;
    check(r, "strstr 'wor'", cs::strstr(b"hello world", b"wor"), Some(6))?;
    check(r, "strstr 'xyz'", cs::strstr(b"hello world", b"xyz"), None)
}

fn conversion(r: &mut Reporter, config: &DrillConfig) -> Result<()> {
    check(r, "atoi '  -42abc'", cs::atoi(b"  -42abc"), -42)?;
    check(r, "atoi clamps", cs::atoi(b"99999999999"), i32::MAX)?;
    check(r, "atoi_simple '+17'", cs::atoi_simple(b"+17"), 17)?;
    check(r, "itoa 255 base 16", cs::itoa(255, 16)?, "ff".to_string())?;
    check(r, "itoa -10 base 10", cs::itoa(-10, 10)?, "-10".to_string())?;
    check(r, "itoa base 1 rejected", cs::itoa(5, 1).is_err(), true)?;

    let mut rng = rng(config);
    for _ in 0..brute_sample_len(config) {
        let value: i32 = rng.gen();
        let decimal = cs::itoa_decimal(value);
        if cs::atoi(decimal.as_bytes()) != value {
            return check(r, &format!("atoi(itoa({value}))"), cs::atoi(decimal.as_bytes()), value);
        }
    }
    r.ok("itoa then atoi round-trips random values");
    check(r, "itoa_decimal i32::MIN", cs::itoa_decimal(i32::MIN), i32::MIN.to_string())
}
