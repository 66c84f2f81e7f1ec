//! Integration tests for memoized, merged and windowed sequences

use std::sync::Barrier;
use std::thread;

use riverbed::sequence::{drop, find_first, first, memoize, merge_sorted, merge_sorted_by, take};
use riverbed::testing::CountingIter;
use riverbed::{assert_absent, assert_present, Maybe};

#[derive(Debug, Clone, PartialEq)]
struct Reading {
    at: u64,
    sensor: &'static str,
}

fn readings(sensor: &'static str, times: &[u64]) -> Vec<Reading> {
    times.iter().map(|&at| Reading { at, sensor }).collect()
}

#[test]
fn test_merge_example_from_two_sources() {
    let merged: Vec<_> = merge_sorted(vec![vec![1, 3, 5], vec![2, 3, 6]]).collect();
    assert_eq!(merged, vec![1, 2, 3, 3, 5, 6]);
}

#[test]
fn test_merge_event_streams_by_timestamp() {
    let streams = vec![
        readings("north", &[1, 4, 9]),
        readings("south", &[2, 4]),
        readings("east", &[]),
        readings("west", &[0, 10]),
    ];

    let merged: Vec<_> = merge_sorted_by(streams, |a: &Reading, b: &Reading| a.at.cmp(&b.at))
        .map(|r| (r.at, r.sensor))
        .collect();

    assert_eq!(
        merged,
        vec![
            (0, "west"),
            (1, "north"),
            (2, "south"),
            (4, "north"),
            (4, "south"),
            (9, "north"),
            (10, "west"),
        ]
    );
}

#[test]
fn test_memoize_concurrent_first_traversal_reads_once() {
    const THREADS: usize = 16;
    let source = CountingIter::new((0..256).map(|n| n.to_string()));
    let polls = source.polls();
    let memoized = memoize(source);
    let barrier = Barrier::new(THREADS);

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                barrier.wait();
                let collected: Vec<&String> = memoized.iter().collect();
                assert_eq!(collected.len(), 256);
                assert_eq!(collected[255], "255");
            });
        }
    });

    assert_eq!(polls.get(), 257);
    assert_eq!(memoized.evaluated(), 256);
}

#[test]
fn test_memoize_concurrent_cursors() {
    let source = CountingIter::new(1..=100u32);
    let polls = source.polls();
    let memoized = memoize(source);

    let sums: Vec<u32> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cursor = memoized.cursor();
                scope.spawn(move || cursor.sum::<u32>())
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(sums, vec![5050; 4]);
    assert_eq!(polls.get(), 101);
}

#[test]
fn test_memoize_feeds_merge_without_rereading() {
    let evens = CountingIter::new((0..10).step_by(2));
    let odds = CountingIter::new((1..10).step_by(2));
    let (even_polls, odd_polls) = (evens.polls(), odds.polls());
    let (evens, odds) = (memoize(evens), memoize(odds));

    for _ in 0..3 {
        let merged: Vec<_> = merge_sorted([&evens, &odds]).copied().collect();
        assert_eq!(merged, (0..10).collect::<Vec<_>>());
    }

    assert_eq!(even_polls.get(), 6);
    assert_eq!(odd_polls.get(), 6);
}

#[test]
fn test_windows_over_memoized_infinite_source() {
    let naturals = memoize(0u64..);

    let page = drop(10, take(15, &naturals));
    assert_eq!(page.iter().copied().collect::<Vec<_>>(), vec![10, 11, 12, 13, 14]);
    assert_eq!(naturals.evaluated(), 15);
    assert!(!naturals.is_exhausted());
}

#[test]
fn test_first_and_find_first_on_memoized() {
    let words = memoize(vec!["delta", "estuary", "ford"]);

    assert_present!(first(&words), &"delta");
    assert_present!(find_first(&words, |w| w.starts_with('f')), &"ford");
    assert_absent!(find_first(&words, |w| w.is_empty()));
    assert_eq!(words.head(), Maybe::Present(&"delta"));
}
