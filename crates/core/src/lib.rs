// FlowPOS Alert Core - Domain Logic & Ports
// NO UI or I/O dependencies - pure queue mechanics

pub mod application;
pub mod domain;
pub mod port;

pub use application::{AlertFeed, AlertQueue, QueueSnapshot};
pub use domain::{AlertDraft, AlertKind, AlertRequest, DomainError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
