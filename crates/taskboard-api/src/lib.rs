pub mod client;
pub mod coordinator;
pub mod describe;
pub mod traits;
pub mod types;

pub use client::HttpTaskService;
pub use coordinator::{MoveCoordinator, MoveOutcome};
pub use describe::{describe_or_fallback, fallback_description};
pub use traits::{DescriptionGenerator, TaskService};
