//! Core type definitions
//!
//! Node identities for hosts whose providers are compared by reference
//! rather than by value.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A provider identity compared by reference
///
/// Two tokens are the same node only if they were cloned from the same
/// original; two tokens created separately with the same name are different
/// nodes. The name is for display only, so this type has no `Display` impl
/// and cycles over it are formatted with an explicit formatter.
///
/// ```
/// use cycle_sentinel::core::ProviderToken;
/// use cycle_sentinel::detector::CycleDetector;
/// use cycle_sentinel::graph::DependencyMap;
///
/// let users = ProviderToken::new("UserService");
/// let audit = ProviderToken::new("AuditService");
///
/// let mut graph = DependencyMap::new();
/// graph.add_dependency(users.clone(), audit.clone());
/// graph.add_dependency(audit.clone(), users.clone());
///
/// let result = CycleDetector::new(&graph).detect();
/// let text = result.cycles()[0].format_with(|token| token.name().to_string());
/// assert_eq!(text, "UserService → AuditService → UserService");
/// ```
#[derive(Clone)]
pub struct ProviderToken {
    inner: Arc<ProviderInfo>,
}

struct ProviderInfo {
    name: String,
}

impl ProviderToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ProviderInfo { name: name.into() }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    fn address(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }
}

impl PartialEq for ProviderToken {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for ProviderToken {}

// Hashes the allocation address, so fingerprints over tokens are only
// meaningful within one process.
impl Hash for ProviderToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl fmt::Debug for ProviderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderToken")
            .field("name", &self.inner.name)
            .field("address", &format_args!("{:#x}", self.address()))
            .finish()
    }
}
