//! Extension registry contracts.
//!
//! This module models the host plugin manager as an injected handle, the
//! namespace enumeration over it, and the explicit table of typed factories
//! that replaces reflective type probing.

pub mod capability;
pub mod manifest;
pub mod registry;
pub mod types;
