//! Report view components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure functions of their props. The only local state is the
//! per-result `expanded` signal owned by each test/hook block and handed down
//! to the rows it hides and shows.

pub mod attachment;
pub mod entries;
pub mod placeholder;
pub mod report;
pub mod result;
pub mod step;
pub mod suite;
pub mod summary;
