//! Building blocks shared by the two scheme implementations.

pub mod generate;
