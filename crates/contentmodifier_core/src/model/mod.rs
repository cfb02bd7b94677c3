//! Value types shared by naming, enumeration and resolution.
//!
//! # Responsibility
//! - Define candidate type-name records and namespace prefixes.
//! - Define the opaque page context handed to renderer factories.
//!
//! # Invariants
//! - Every `CandidateClassName` is valid with or without a prefix (or both).
//! - `NamespacePrefix` values are never cached between resolution calls.

pub mod candidate;
pub mod namespace;
pub mod page;
