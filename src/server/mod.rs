//! TCP listener serving one connection at a time.

pub mod listener;
