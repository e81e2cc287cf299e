// Alert Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::error::DomainError;

/// Alert ID (UUID v4 in production, injected via IdProvider)
pub type AlertId = String;

/// Severity/styling category of an alert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    #[default]
    Default,
    Success,
    Warning,
    Error,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Default => write!(f, "DEFAULT"),
            AlertKind::Success => write!(f, "SUCCESS"),
            AlertKind::Warning => write!(f, "WARNING"),
            AlertKind::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for AlertKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEFAULT" => Ok(AlertKind::Default),
            "SUCCESS" => Ok(AlertKind::Success),
            "WARNING" => Ok(AlertKind::Warning),
            "ERROR" => Ok(AlertKind::Error),
            _ => Err(DomainError::UnknownKind(s.to_string())),
        }
    }
}

/// Semantic category of an alert action (button ordering/styling is a
/// presentation concern; the queue preserves caller-given order)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionRole {
    #[default]
    Default,
    Cancel,
    Destructive,
}

impl fmt::Display for ActionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionRole::Default => write!(f, "DEFAULT"),
            ActionRole::Cancel => write!(f, "CANCEL"),
            ActionRole::Destructive => write!(f, "DESTRUCTIVE"),
        }
    }
}

impl FromStr for ActionRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEFAULT" => Ok(ActionRole::Default),
            "CANCEL" => Ok(ActionRole::Cancel),
            "DESTRUCTIVE" => Ok(ActionRole::Destructive),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }
}

/// Callback attached to an alert action. The presentation layer invokes it
/// (via [`AlertAction::select`]) before calling dequeue.
pub type ActionHandler = Arc<dyn Fn() + Send + Sync + 'static>;

/// One selectable action on an alert
#[derive(Clone, Serialize, Deserialize)]
pub struct AlertAction {
    pub label: String,

    #[serde(default)]
    pub role: ActionRole,

    /// Not serialized: callbacks cannot cross a serialization boundary
    #[serde(skip)]
    pub on_select: Option<ActionHandler>,
}

impl AlertAction {
    pub fn new(label: impl Into<String>, role: ActionRole) -> Self {
        Self {
            label: label.into(),
            role,
            on_select: None,
        }
    }

    pub fn with_handler(mut self, handler: ActionHandler) -> Self {
        self.on_select = Some(handler);
        self
    }

    /// Invoke the attached handler, if any. Called by the presentation
    /// layer before the dialog is dequeued.
    pub fn select(&self) {
        if let Some(handler) = self.on_select.as_deref() {
            handler();
        }
    }
}

impl fmt::Debug for AlertAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertAction")
            .field("label", &self.label)
            .field("role", &self.role)
            .field("on_select", &self.on_select.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

/// Partial alert descriptor accepted by enqueue; missing fields are
/// defaulted on admission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertDraft {
    pub title: Option<String>,
    pub message: Option<String>,
    pub kind: Option<AlertKind>,
    pub actions: Option<Vec<AlertAction>>,
}

/// Alert Entity
///
/// One pending or active modal alert. `id` and `created_at` are injected
/// at enqueue time, never generated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRequest {
    pub id: AlertId,
    pub title: String,
    pub message: String,
    pub kind: AlertKind,
    pub actions: Vec<AlertAction>,
    pub created_at: i64, // epoch ms, diagnostics only: scheduling is pure FIFO
}

impl AlertRequest {
    /// Create a new alert from a draft
    ///
    /// # Arguments
    ///
    /// * `id` - Unique alert ID (injected, not generated)
    /// * `created_at` - Creation timestamp in epoch ms (injected, not system time)
    /// * `draft` - Partial descriptor; missing fields are defaulted
    pub fn new(id: impl Into<AlertId>, created_at: i64, draft: AlertDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title.unwrap_or_default(),
            message: draft.message.unwrap_or_default(),
            kind: draft.kind.unwrap_or_default(),
            actions: draft.actions.unwrap_or_default(),
            created_at,
        }
    }

    /// Create a test alert with deterministic ID and timestamp.
    ///
    /// Uses a simple counter (test-1, test-2, ...); timestamps start at
    /// 1000 and increment by 1000.
    ///
    /// **Note**: tests only. Production code always injects ID and time
    /// via the providers.
    pub fn new_test(draft: AlertDraft) -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(1);

        let counter = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        Self::new(format!("test-{}", counter), (counter * 1000) as i64, draft)
    }
}
