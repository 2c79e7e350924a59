//! Utility helpers shared across viewer UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and display
//! formatting from component markup to improve reuse and testability.

pub mod format;
pub mod service_worker;
