//! Board module tests.
//!
//! - `path.rs` - path clearance
//! - `check.rs` - attack and check detection
//! - `make_unmake.rs` - mutation/restore correctness
//! - `proptest.rs` - property-based tests
