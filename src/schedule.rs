//! Loop-scheduling policies and chunk planning.
//!
//! The four policies reproduce OpenMP's `schedule(...)` clauses as an
//! explicit, testable partitioning step: a policy turns the iteration
//! range into an ordered plan of contiguous chunks, and the worker pool
//! claims chunks from that plan either statically (round-robin by worker
//! index) or dynamically (shared atomic cursor).

use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Chunk size for the static-with-chunk policy.
pub const STATIC_CHUNK: u64 = 8_000;
/// Chunk size for the dynamic policy.
pub const DYNAMIC_CHUNK: u64 = 6_000;
/// Minimum chunk size for the guided policy.
pub const GUIDED_CHUNK: u64 = 20_000;

/// How a parallel pass divides its iteration range among workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulePolicy {
    /// One contiguous block per worker, sized as evenly as possible.
    Static,
    /// Fixed 8000-element blocks, dealt round-robin to workers up front.
    StaticChunk,
    /// Fixed 6000-element blocks, pulled greedily from a shared pool.
    Dynamic,
    /// Blocks start at `remaining / workers` and shrink toward a 20000
    /// floor, pulled from a shared pool like `Dynamic`.
    Guided,
}

/// All policies, in the order the runner executes them.
pub const ALL_POLICIES: [SchedulePolicy; 4] = [
    SchedulePolicy::Static,
    SchedulePolicy::StaticChunk,
    SchedulePolicy::Dynamic,
    SchedulePolicy::Guided,
];

impl SchedulePolicy {
    /// The mode label written to the timing table.
    pub fn mode_label(&self) -> &'static str {
        match self {
            SchedulePolicy::Static => "omp_static",
            SchedulePolicy::StaticChunk => "omp_static_chunk",
            SchedulePolicy::Dynamic => "omp_dynamic",
            SchedulePolicy::Guided => "omp_guided",
        }
    }

    /// The short tag used in console progress lines.
    pub fn console_tag(&self) -> &'static str {
        match self {
            SchedulePolicy::Static => "omp static",
            SchedulePolicy::StaticChunk => "omp static chunk",
            SchedulePolicy::Dynamic => "omp dynamic",
            SchedulePolicy::Guided => "omp guided",
        }
    }

    /// The chunk parameter, if the policy has one.
    pub fn chunk_size(&self) -> Option<u64> {
        match self {
            SchedulePolicy::Static => None,
            SchedulePolicy::StaticChunk => Some(STATIC_CHUNK),
            SchedulePolicy::Dynamic => Some(DYNAMIC_CHUNK),
            SchedulePolicy::Guided => Some(GUIDED_CHUNK),
        }
    }

    /// Whether chunks are claimed at runtime rather than preassigned.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, SchedulePolicy::Dynamic | SchedulePolicy::Guided)
    }
}

/// Build the ordered chunk plan for a range under a policy.
///
/// The returned chunks are contiguous, disjoint, non-empty, and cover
/// the range exactly. How they reach workers depends on the policy:
/// static policies preassign chunk `i` to worker `i % workers`, dynamic
/// policies hand the whole plan to a [`ChunkCursor`].
///
/// Guided sizing follows the classic rule: each grab takes
/// `max(remaining / workers, chunk)` elements, capped at what remains,
/// so early chunks are large and late chunks bottom out at the floor.
pub fn plan_chunks(range: Range<u64>, workers: usize, policy: SchedulePolicy) -> Vec<Range<u64>> {
    let len = range.end.saturating_sub(range.start);
    if len == 0 || workers == 0 {
        return vec![];
    }

    match policy {
        SchedulePolicy::Static => {
            let workers = workers as u64;
            let base = len / workers;
            let extra = len % workers;
            let mut chunks = Vec::with_capacity(workers as usize);
            let mut start = range.start;
            for w in 0..workers {
                let size = base + u64::from(w < extra);
                if size == 0 {
                    break;
                }
                chunks.push(start..start + size);
                start += size;
            }
            chunks
        }
        SchedulePolicy::StaticChunk => fixed_chunks(range, STATIC_CHUNK),
        SchedulePolicy::Dynamic => fixed_chunks(range, DYNAMIC_CHUNK),
        SchedulePolicy::Guided => {
            let mut chunks = Vec::new();
            let mut start = range.start;
            while start < range.end {
                let remaining = range.end - start;
                let size = (remaining / workers as u64).max(GUIDED_CHUNK).min(remaining);
                chunks.push(start..start + size);
                start += size;
            }
            chunks
        }
    }
}

/// Slice a range into fixed-size contiguous chunks (last one may be short).
fn fixed_chunks(range: Range<u64>, chunk: u64) -> Vec<Range<u64>> {
    let mut chunks = Vec::new();
    let mut start = range.start;
    while start < range.end {
        let end = range.end.min(start + chunk);
        chunks.push(start..end);
        start = end;
    }
    chunks
}

/// Shared cursor over a chunk plan for dynamic and guided scheduling.
///
/// Workers call [`claim`](ChunkCursor::claim) in a loop; each call hands
/// out the next unclaimed chunk exactly once. Claiming is a single
/// `fetch_add`, so there is no lock and no worker ever observes another
/// worker's chunk.
pub struct ChunkCursor<'a> {
    chunks: &'a [Range<u64>],
    next: AtomicUsize,
}

impl<'a> ChunkCursor<'a> {
    pub fn new(chunks: &'a [Range<u64>]) -> Self {
        Self {
            chunks,
            next: AtomicUsize::new(0),
        }
    }

    /// Claim the next unclaimed chunk, or `None` when the plan is drained.
    pub fn claim(&self) -> Option<Range<u64>> {
        let i = self.next.fetch_add(1, Ordering::Relaxed);
        self.chunks.get(i).cloned()
    }
}
