// Domain Layer - Pure business logic and entities

pub mod alert;
pub mod error;

// Re-exports
pub use alert::{
    ActionHandler, ActionRole, AlertAction, AlertDraft, AlertId, AlertKind, AlertRequest,
};
pub use error::DomainError;
