//! Memoized cycle detection keyed by graph shape
//!
//! Hosts that resolve the same provider graph many times can put a
//! [`CycleCache`] in front of the detector. Entries are keyed by a
//! [`GraphFingerprint`], a SHA-256 digest over the ordered keys and edge
//! lists, so any structural change to a map produces a new key and the old
//! result is simply never looked up again.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use sha2::{Digest, Sha256};

use crate::constants::cache::DEFAULT_MAX_ENTRIES;
use crate::detector::{CycleDetector, DetectionResult};
use crate::graph::DependencyMap;

/// SHA-256 digest of a dependency map's ordered structure
///
/// Key order and edge order are part of the digest because they determine
/// the order in which cycles are reported. Nodes are fed through their
/// `Hash` impl, so fingerprints of maps keyed by address-hashed identities
/// (such as [`ProviderToken`](crate::core::ProviderToken)) are only stable
/// within one process.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphFingerprint([u8; 32]);

impl GraphFingerprint {
    pub fn of<N: Eq + Hash>(graph: &DependencyMap<N>) -> Self {
        let mut hasher = DigestHasher::default();
        graph.len().hash(&mut hasher);
        for (node, deps) in graph.iter() {
            node.hash(&mut hasher);
            deps.hash(&mut hasher);
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hasher.digest.finalize());
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for GraphFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphFingerprint({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for GraphFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Adapter that lets any `Hash` impl write into a SHA-256 digest
#[derive(Default)]
struct DigestHasher {
    digest: Sha256,
}

impl Hasher for DigestHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.digest.update(bytes);
    }

    fn finish(&self) -> u64 {
        let digest = self.digest.clone().finalize();
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(prefix)
    }
}

/// Hit and miss counters of a [`CycleCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

type Slot<N> = Arc<OnceLock<Arc<DetectionResult<N>>>>;

struct CacheState<N> {
    slots: HashMap<GraphFingerprint, Slot<N>>,
    // Insertion order, oldest first, for eviction
    order: VecDeque<GraphFingerprint>,
}

/// Thread-safe memo of detection results per graph shape
///
/// At most one detection runs per fingerprint at a time: concurrent callers
/// asking for the same shape block until the first one has filled the slot.
/// When more than `max_entries` shapes are stored the oldest is evicted.
pub struct CycleCache<N> {
    max_entries: usize,
    state: Mutex<CacheState<N>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<N: Eq + Hash + Clone> Default for CycleCache<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash + Clone> CycleCache<N> {
    pub fn new() -> Self {
        Self::with_capacity_limit(DEFAULT_MAX_ENTRIES)
    }

    /// Create a cache holding at most `max_entries` shapes (minimum 1)
    pub fn with_capacity_limit(max_entries: usize) -> Self {
        Self {
            max_entries: max_entries.max(1),
            state: Mutex::new(CacheState {
                slots: HashMap::new(),
                order: VecDeque::new(),
            }),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Return the cached result for `graph`'s shape, detecting on a miss
    pub fn get_or_detect(&self, graph: &DependencyMap<N>) -> Arc<DetectionResult<N>> {
        let slot = self.slot(GraphFingerprint::of(graph));

        let mut computed = false;
        let result = slot.get_or_init(|| {
            computed = true;
            Arc::new(CycleDetector::new(graph).detect())
        });

        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }

        Arc::clone(result)
    }

    /// Cached result for `fingerprint`, without detecting
    pub fn get(&self, fingerprint: &GraphFingerprint) -> Option<Arc<DetectionResult<N>>> {
        self.lock()
            .slots
            .get(fingerprint)
            .and_then(|slot| slot.get().cloned())
    }

    /// Drop the entry for `fingerprint`, returning whether one existed
    pub fn invalidate(&self, fingerprint: &GraphFingerprint) -> bool {
        let mut state = self.lock();
        let removed = state.slots.remove(fingerprint).is_some();
        if removed {
            state.order.retain(|fp| fp != fingerprint);
        }
        removed
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.slots.clear();
        state.order.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn slot(&self, fingerprint: GraphFingerprint) -> Slot<N> {
        let mut state = self.lock();
        if let Some(slot) = state.slots.get(&fingerprint) {
            return Arc::clone(slot);
        }

        let slot: Slot<N> = Arc::default();
        state.slots.insert(fingerprint, Arc::clone(&slot));
        state.order.push_back(fingerprint);

        while state.order.len() > self.max_entries {
            if let Some(evicted) = state.order.pop_front() {
                state.slots.remove(&evicted);
            }
        }

        slot
    }

    // The state is a plain map, so a panic elsewhere cannot leave it
    // half-updated; recover the guard instead of propagating poison.
    fn lock(&self) -> MutexGuard<'_, CacheState<N>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
