//! Output capability contracts and the main-content pipeline.
//!
//! # Responsibility
//! - Define the `Renderer` and `ContentModifier` capabilities third parties
//!   implement.
//! - Fold resolved modifiers over rendered main content.
//!
//! # Invariants
//! - Modifiers never mutate shared state; each returns a new content string.
//! - Appending requires a closing `</div>` anchor and never drops content
//!   silently.

pub mod modifier;
pub mod pipeline;
