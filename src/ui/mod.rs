// Module declarations
mod app;
pub mod dashboard;
pub mod selector;
// Re-exports for external use
pub use app::{App, UIConfig, run};
