//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts against reference values
//! - `make_unmake.rs` - Move execution and simulate/restore correctness
//! - `edge_cases.rs` - Castling refusals, en passant, mates and stalemates
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod perft;
mod proptest;
