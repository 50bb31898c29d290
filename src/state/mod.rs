//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain structs/enums so validation and phase transitions can
//! be unit tested without a browser; components hold them in signals.

pub mod form;
