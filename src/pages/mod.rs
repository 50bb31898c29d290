//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app has a single screen; the page owns submit orchestration and
//! delegates validation and the wire call to `state` and `net`.

pub mod sell;
