#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use rayon::prelude::*;

/// Maps collection and collects results into vector in parallel. The order of results is the
/// same as the order of source items.
pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).collect()
}

/// Maps collection either sequentially or in parallel depending on `is_parallel` flag. The result
/// is the same in both cases.
pub fn maybe_parallel_collect<T, F, R>(source: &[T], is_parallel: bool, map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    if is_parallel { parallel_collect(source, map_op) } else { source.iter().map(map_op).collect() }
}
