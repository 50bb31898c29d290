//! Networking modules for the lead-intake HTTP exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the single outbound call, its wire DTOs, and the mapping
//! from transport/acknowledgment outcomes to user-facing messages.

pub mod api;
