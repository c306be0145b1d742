//! # Cycle Detection Module
//!
//! This module implements the depth-first cycle detector that checks a
//! [`DependencyMap`](crate::graph::DependencyMap) for circular dependencies.
//!
//! ## Algorithm
//!
//! A single depth-first walk visits every node once. Nodes on the active
//! descent path are tracked in a recursion stack; an edge that points back at
//! one of them is a back edge and closes a cycle. The reported cycle is the
//! slice of the current path from the back edge's target down to the current
//! node, closed by repeating the target. The walk is O(V + E).
//!
//! ## Key Components
//!
//! - **CycleDetector**: reusable detector bound to one dependency map
//! - **DetectionResult**: whether cycles exist, and each cycle found
//! - **Cycle**: one closed path, e.g. `[A, B, C, A]`
//!
//! ## Example
//!
//! ```
//! use cycle_sentinel::detector::CycleDetector;
//! use cycle_sentinel::graph::DependencyMap;
//!
//! let mut graph = DependencyMap::new();
//! graph.add_dependency("OrderService", "PaymentService");
//! graph.add_dependency("PaymentService", "OrderService");
//!
//! let mut detector = CycleDetector::new(&graph);
//! let result = detector.detect();
//!
//! assert!(result.has_cycles());
//! assert_eq!(result.cycle_count(), 1);
//! assert_eq!(
//!     result.cycles()[0].to_string(),
//!     "OrderService → PaymentService → OrderService"
//! );
//! ```

mod detector_impl;

pub use detector_impl::*;
