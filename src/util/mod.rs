//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure string-level helpers kept out of page and state modules so they
//! stay trivially unit testable.

pub mod input;
