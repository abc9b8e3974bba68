use super::{agree, check};
use crate::catalog::Demo;
use crate::config::DrillConfig;
use crate::cyclic_list::NodeArena;
use crate::error::{DrillError, Result};
use crate::linked_list::{self as ll, Link};
use crate::report::Reporter;
use crate::stack_queue::{
    self as sq, ArrayQueue, ArrayStack, CircularQueue, MinStack, QueueViaStacks, StackViaQueues,
    TwoStacks,
};
use std::collections::VecDeque;

pub(super) static LINKED_LIST: &[Demo] = &[
    Demo {
        name: "reverse",
        run: reverse,
    },
    Demo {
        name: "middle_nth",
        run: middle_nth,
    },
    Demo {
        name: "merge_sort",
        run: merge_sort,
    },
    Demo {
        name: "palindrome_delete",
        run: palindrome_delete,
    },
    Demo {
        name: "add_numbers",
        run: add_numbers,
    },
];

pub(super) static CYCLIC_LIST: &[Demo] = &[
    Demo {
        name: "floyd",
        run: floyd,
    },
    Demo {
        name: "intersection",
        run: intersection,
    },
    Demo {
        name: "clone_random",
        run: clone_random,
    },
];

pub(super) static STACK_QUEUE: &[Demo] = &[
    Demo {
        name: "bounded_containers",
        run: bounded_containers,
    },
    Demo {
        name: "circular_queue",
        run: circular_queue,
    },
    Demo {
        name: "adapters",
        run: adapters,
    },
    Demo {
        name: "stack_problems",
        run: stack_problems,
    },
];

fn show(r: &mut Reporter, label: &str, list: &Link) {
    r.line(label, ll::format_list(list));
}

// =============================================================================
// Linked list
// =============================================================================

fn reverse(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let list = ll::from_slice(&[1, 2, 3, 4, 5]);
    show(r, "list", &list);
    let list = ll::reverse_iterative(list);
    show(r, "reversed", &list);
    check(r, "values", ll::to_vec(&list), vec![5, 4, 3, 2, 1])?;
    let list = ll::reverse_recursive(list);
    check(r, "reversed back", ll::to_vec(&list), vec![1, 2, 3, 4, 5])
}

fn middle_nth(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let odd = ll::from_slice(&[1, 2, 3, 4, 5]);
    let even = ll::from_slice(&[1, 2, 3, 4, 5, 6]);
    check(r, "middle of 5", ll::middle(&odd), Some(3))?;
    check(r, "middle of 6", ll::middle(&even), Some(4))?;
    check(r, "first middle of 6", ll::first_middle(&even), Some(3))?;

    let trimmed = ll::remove_nth_from_end(odd, 2)?;
    show(r, "2nd from end removed", &trimmed);
    check(r, "values", ll::to_vec(&trimmed), vec![1, 2, 3, 5])?;

    match ll::remove_nth_from_end(trimmed, 9) {
        Err(err) => {
            r.ok(&format!("n = 9 rejected: {err}"));
            Ok(())
        }
        Ok(list) => Err(DrillError::mismatch("n = 9", "an error", ll::to_vec(&list))),
    }
}

fn merge_sort(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let merged = ll::merge_sorted(ll::from_slice(&[1, 3, 5]), ll::from_slice(&[2, 4, 6]));
    show(r, "merged", &merged);
    check(r, "values", ll::to_vec(&merged), vec![1, 2, 3, 4, 5, 6])?;

    let sorted = ll::merge_sort(ll::from_slice(&[4, 2, 5, 1, 3]));
    show(r, "sorted", &sorted);
    check(r, "values", ll::to_vec(&sorted), vec![1, 2, 3, 4, 5])
}

fn palindrome_delete(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut list = ll::from_slice(&[1, 2, 3, 2, 1]);
    check(r, "1-2-3-2-1 palindrome", ll::is_palindrome(&mut list), true)?;
    check(r, "restored", ll::to_vec(&list), vec![1, 2, 3, 2, 1])?;

    let mut list = ll::from_slice(&[1, 1, 2, 3, 3, 3]);
    ll::remove_duplicates_sorted(&mut list);
    check(r, "deduplicated", ll::to_vec(&list), vec![1, 2, 3])?;

    check(r, "delete 2", ll::delete_value(&mut list, 2), true)?;
    check(r, "delete 9", ll::delete_value(&mut list, 9), false)?;
    if let Some(head) = list.as_deref_mut() {
        ll::delete_node_copy_next(head)?;
    }
    show(r, "after deleting head by copy", &list);
    check(r, "values", ll::to_vec(&list), vec![3])
}

fn add_numbers(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    // 342 + 465, least significant digit first.
    let a = ll::from_slice(&[2, 4, 3]);
    let b = ll::from_slice(&[5, 6, 4]);
    let sum = ll::add_two_numbers(&a, &b);
    show(r, "342 + 465", &sum);
    check(r, "digits", ll::to_vec(&sum), vec![7, 0, 8])?;

    let carry = ll::add_two_numbers(&ll::from_slice(&[9, 9]), &ll::from_slice(&[1]));
    check(r, "99 + 1", ll::to_vec(&carry), vec![0, 0, 1])
}

// =============================================================================
// Cycles and shared nodes
// =============================================================================

fn floyd(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut arena = NodeArena::new();
    let head = arena.chain(&[1, 2, 3, 4, 5, 6]);
    let tail = arena
        .tail_of(head)
        .ok_or_else(|| DrillError::empty("list"))?;
    arena.set_next(tail, arena.nth(head, 2))?;
    r.line("walk (first 10)", format!("{:?}", arena.values_from(head, 10)));

    check(r, "has cycle", arena.has_cycle(head), true)?;
    agree(
        r,
        "cycle start (Floyd, visited set)",
        arena.cycle_start(head),
        arena.cycle_start_by_visiting(head),
    )?;
    let start = arena.cycle_start(head).and_then(|id| arena.val(id));
    check(r, "cycle starts at", start, Some(3))?;
    check(r, "cycle length", arena.cycle_length(head), 4)?;

    check(r, "removed", arena.remove_cycle(head), true)?;
    check(r, "has cycle", arena.has_cycle(head), false)?;
    check(r, "values", arena.values_from(head, 10), vec![1, 2, 3, 4, 5, 6])
}

fn intersection(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut arena = NodeArena::new();
    let shared = arena.chain(&[8, 9]);
    let a = arena.chain_onto(&[1, 2, 3], shared);
    let b = arena.chain_onto(&[5], shared);
    r.line("a", format!("{:?}", arena.values_from(a, 10)));
    r.line("b", format!("{:?}", arena.values_from(b, 10)));

    check(r, "meet at shared node", arena.intersection(a, b), shared)?;
    let c = arena.chain(&[8, 9]);
    check(r, "equal values, no shared node", arena.intersection(a, c), None)
}

fn clone_random(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut arena = NodeArena::new();
    let head = arena.chain(&[1, 2, 3]);
    let nodes: Vec<_> = (0..3).filter_map(|i| arena.nth(head, i)).collect();
    if let [first, second, third] = nodes[..] {
        arena.set_random(first, Some(third))?;
        arena.set_random(second, Some(first))?;
        arena.set_random(third, Some(third))?;
    }

    let copy = arena.clone_with_random(head)?;
    check(r, "copy differs from original", copy != head, true)?;
    check(r, "copied values", arena.values_from(copy, 10), vec![1, 2, 3])?;
    check(r, "original intact", arena.values_from(head, 10), vec![1, 2, 3])?;

    let randoms: Vec<Option<i32>> = (0..3)
        .filter_map(|i| arena.nth(copy, i))
        .map(|id| arena.random(id).and_then(|rand| arena.val(rand)))
        .collect();
    check(r, "copied random targets", randoms, vec![Some(3), Some(1), Some(3)])?;

    let points_into_copy = (0..3)
        .filter_map(|i| arena.nth(copy, i))
        .filter_map(|id| arena.random(id))
        .all(|target| (0..3).any(|i| arena.nth(copy, i) == Some(target)));
    check(r, "randoms stay inside the copy", points_into_copy, true)
}

// =============================================================================
// Stacks and queues
// =============================================================================

fn bounded_containers(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut stack = ArrayStack::with_capacity(3);
    for v in [10, 20, 30] {
        stack.push(v)?;
    }
    check(r, "stack full", stack.is_full(), true)?;
    if let Err(err) = stack.push(40) {
        r.ok(&format!("push onto full stack rejected: {err}"));
    }
    check(r, "pop", stack.pop(), Some(30))?;
    check(r, "peek", stack.peek().copied(), Some(20))?;

    let mut queue = ArrayQueue::with_capacity(2);
    queue.enqueue('a')?;
    queue.enqueue('b')?;
    check(r, "queue full", queue.enqueue('c').is_err(), true)?;
    check(r, "dequeue", queue.dequeue(), Some('a'))?;
    queue.enqueue('c')?;
    check(r, "dequeue order", (queue.dequeue(), queue.dequeue()), (Some('b'), Some('c')))?;

    let mut shared = TwoStacks::with_capacity(4);
    shared.push1(1)?;
    shared.push2(9)?;
    shared.push2(8)?;
    shared.push1(2)?;
    check(r, "two stacks full", shared.is_full(), true)?;
    check(r, "pop1, pop2", (shared.pop1(), shared.pop2()), (Some(2), Some(8)))?;
    check(r, "lengths", (shared.len1(), shared.len2()), (1, 1))
}

fn circular_queue(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut queue = CircularQueue::new(5)?;
    for v in [10, 20, 30, 40] {
        queue.enqueue(v)?;
    }
    r.line("after 4 enqueues", queue.visualize());
    check(r, "full with one slot spare", queue.is_full(), true)?;

    check(r, "dequeue", queue.dequeue(), Some(10))?;
    queue.enqueue(50)?;
    let picture = queue.visualize();
    r.line("rear wrapped", &picture);
    check(r, "layout", picture.as_str(), "[_ 20 30 40 50] front=1 rear=0")?;
    check(r, "len", queue.len(), 4)
}

fn adapters(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    let mut queue = QueueViaStacks::new();
    for v in 1..=3 {
        queue.enqueue(v);
    }
    check(r, "queue front", queue.front().copied(), Some(1))?;
    queue.enqueue(4);
    let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
    check(r, "queue via stacks order", drained, vec![1, 2, 3, 4])?;

    let mut stack = StackViaQueues::new();
    for v in 1..=3 {
        stack.push(v);
    }
    check(r, "stack top", stack.top().copied(), Some(3))?;
    let drained: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
    check(r, "stack via queue order", drained, vec![3, 2, 1])?;

    let mut min_stack = MinStack::new();
    for v in [5, 3, 7, 3, 8] {
        min_stack.push(v);
        r.detail(format!("push {v}, min {:?}", min_stack.min()));
    }
    check(r, "min", min_stack.min().copied(), Some(3))?;
    min_stack.pop();
    min_stack.pop();
    check(r, "min after two pops", min_stack.min().copied(), Some(3))?;
    min_stack.pop();
    check(r, "min after three pops", min_stack.min().copied(), Some(3))?;
    min_stack.pop();
    check(r, "min after four pops", min_stack.min().copied(), Some(5))
}

fn stack_problems(r: &mut Reporter, _: &DrillConfig) -> Result<()> {
    for (expr, expected) in [("{[()]}", true), ("([)]", false), ("((", false), ("", true)] {
        check(r, &format!("'{expr}' balanced"), sq::is_balanced(expr), expected)?;
    }

    check(
        r,
        "next greater of [4, 5, 2, 25]",
        sq::next_greater_elements(&[4, 5, 2, 25]),
        vec![Some(5), Some(25), Some(25), None],
    )?;

    let heights = [2, 1, 5, 6, 2, 3];
    agree(
        r,
        "largest rectangle (stack, brute)",
        sq::largest_rectangle(&heights),
        sq::largest_rectangle_brute(&heights),
    )?;
    check(r, "largest rectangle", sq::largest_rectangle(&heights), 10)?;

    check(r, "reversed", sq::reverse_with_stack("stack"), "kcats".to_string())?;
    let mut queue: VecDeque<_> = (1..=4).collect();
    sq::reverse_queue(&mut queue);
    check(r, "queue reversed", Vec::from(queue), vec![4, 3, 2, 1])
}
