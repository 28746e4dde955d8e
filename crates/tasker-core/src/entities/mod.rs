//! Entity structs for Tasker domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation.

mod task;

pub use task::{StoredTask, Task, TaskKind};
