//! Page-parallel reduction and initialisation.
//!
//! Work is split into page-sized chunks of the backing storage: one chunk per
//! page for a paged array, [`PAGE_SIZE`] slices of the block for a
//! single-segment array. Chunks never overlap, so workers need no
//! synchronisation beyond the crossbeam channel that hands chunks out.
//!
//! Workers run in a `std::thread::scope`, borrowing the array for the
//! duration of the call. A panic in any worker is re-raised on the caller.

use crossbeam_channel::unbounded;

use crate::array::HugeLongArray;
use crate::config::ParallelConfig;
use crate::page::{PAGE_SHIFT, PAGE_SIZE};

/// Page-sized chunks of `segments`, each with the global index of its first
/// slot.
fn chunks(segments: &[Vec<i64>]) -> impl Iterator<Item = (usize, &[i64])> {
    segments.iter().enumerate().flat_map(|(s, segment)| {
        segment
            .chunks(PAGE_SIZE)
            .enumerate()
            .map(move |(c, chunk)| ((s << PAGE_SHIFT) + c * PAGE_SIZE, chunk))
    })
}

fn chunks_mut(segments: &mut [Vec<i64>]) -> impl Iterator<Item = (usize, &mut [i64])> {
    segments.iter_mut().enumerate().flat_map(|(s, segment)| {
        segment
            .chunks_mut(PAGE_SIZE)
            .enumerate()
            .map(move |(c, chunk)| ((s << PAGE_SHIFT) + c * PAGE_SIZE, chunk))
    })
}

/// Number of workers worth starting for `chunk_count` chunks.
fn worker_count(config: &ParallelConfig, chunk_count: usize) -> usize {
    config.resolved_worker_count().min(chunk_count).max(1)
}

/// Map every page to a partial result and combine the partials.
///
/// `map_page` receives the global index of the page's first slot and the
/// page's values. `combine` must be associative and commutative with
/// `identity` as its neutral element: pages are folded per worker in
/// arrival order and worker results are combined in spawn order.
pub fn par_reduce<T, M, C>(
    array: &HugeLongArray,
    config: &ParallelConfig,
    identity: T,
    map_page: M,
    combine: C,
) -> T
where
    T: Clone + Send,
    M: Fn(usize, &[i64]) -> T + Sync,
    C: Fn(T, T) -> T + Sync,
{
    let segments = array.segments();
    let chunk_count = chunks(segments).count();
    let workers = worker_count(config, chunk_count);

    if workers == 1 {
        return chunks(segments).fold(identity, |acc, (base, chunk)| {
            combine(acc, map_page(base, chunk))
        });
    }

    let (tx, rx) = unbounded();
    for chunk in chunks(segments) {
        let _ = tx.send(chunk);
    }
    drop(tx);

    let map_page = &map_page;
    let combine = &combine;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let rx = rx.clone();
                let mut acc = identity.clone();
                s.spawn(move || {
                    while let Ok((base, chunk)) = rx.recv() {
                        acc = combine(acc, map_page(base, chunk));
                    }
                    acc
                })
            })
            .collect();

        handles
            .into_iter()
            .fold(identity, |acc, handle| match handle.join() {
                Ok(partial) => combine(acc, partial),
                Err(payload) => std::panic::resume_unwind(payload),
            })
    })
}

/// Wrapping sum of every value, computed page-parallel.
pub fn par_sum(array: &HugeLongArray, config: &ParallelConfig) -> i64 {
    par_reduce(
        array,
        config,
        0i64,
        |_, page| page.iter().fold(0i64, |acc, &v| acc.wrapping_add(v)),
        i64::wrapping_add,
    )
}

/// Assign `f(i)` to every index `i`, page-parallel.
///
/// Each page is written by exactly one worker; within a page indices are
/// visited in ascending order. Across pages the order is unspecified.
pub fn par_set_all<F>(array: &mut HugeLongArray, config: &ParallelConfig, f: F)
where
    F: Fn(usize) -> i64 + Sync,
{
    let segments = array.segments_mut();
    let chunk_count = chunks(segments).count();
    let workers = worker_count(config, chunk_count);

    let fill_chunk = |base: usize, chunk: &mut [i64]| {
        for (offset, slot) in chunk.iter_mut().enumerate() {
            *slot = f(base + offset);
        }
    };

    if workers == 1 {
        for (base, chunk) in chunks_mut(segments) {
            fill_chunk(base, chunk);
        }
        return;
    }

    let (tx, rx) = unbounded();
    for chunk in chunks_mut(segments) {
        let _ = tx.send(chunk);
    }
    drop(tx);

    let fill_chunk = &fill_chunk;
    std::thread::scope(|s| {
        for _ in 0..workers {
            let rx = rx.clone();
            s.spawn(move || {
                while let Ok((base, chunk)) = rx.recv() {
                    fill_chunk(base, chunk);
                }
            });
        }
    });
}
