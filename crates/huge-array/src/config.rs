//! Runtime configuration for page-parallel execution.
//!
//! Page geometry is not configurable at runtime; see [`crate::page`].

/// Configuration for the page-parallel helpers in [`crate::parallel`].
#[derive(Clone, Debug, Default)]
pub struct ParallelConfig {
    /// Number of worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 64]`).
    pub worker_count: Option<usize>,
}

impl ParallelConfig {
    /// Upper bound on worker threads.
    pub const MAX_WORKERS: usize = 64;

    /// Config with an explicit worker count.
    pub fn with_workers(worker_count: usize) -> Self {
        Self {
            worker_count: Some(worker_count),
        }
    }

    /// Config that runs everything on the calling thread.
    pub fn sequential() -> Self {
        Self::with_workers(1)
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, MAX_WORKERS]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, Self::MAX_WORKERS),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, Self::MAX_WORKERS),
        }
    }
}
