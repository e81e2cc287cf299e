//! Serial alert presentation demo
//!
//! Wires one shared AlertQueue at the composition root and shows how a
//! burst of overlapping alert triggers is presented one dialog at a time.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package flowpos-alert-core --example serial_prompts
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use flowpos_alert_core::domain::{ActionRole, AlertAction, AlertDraft, AlertKind};
use flowpos_alert_core::port::id_provider::UuidProvider;
use flowpos_alert_core::port::time_provider::SystemTimeProvider;
use flowpos_alert_core::AlertQueue;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("debug"))?;
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().pretty())
        .init();

    // Composition root: one queue, shared with every caller
    let queue = Arc::new(AlertQueue::new(
        Arc::new(UuidProvider),
        Arc::new(SystemTimeProvider),
    ));

    // Render task: reacts to transitions instead of polling
    let mut feed = queue.subscribe();
    let render = tokio::spawn(async move {
        loop {
            feed.changed().await;
            let snapshot = feed.snapshot();
            match &snapshot.current {
                Some(alert) => info!(
                    title = %alert.title,
                    kind = %alert.kind,
                    waiting = snapshot.waiting,
                    "presenting alert"
                ),
                None => {
                    info!("screen clear");
                    break;
                }
            }
        }
    });

    // Three triggers land in the same tick; only one dialog shows at a time
    queue.enqueue(Some(AlertDraft {
        title: Some("Stock limit reached".to_string()),
        message: Some("Only 3 units left for SKU-1042".to_string()),
        kind: Some(AlertKind::Warning),
        ..Default::default()
    }));
    queue.enqueue(Some(AlertDraft {
        title: Some("Clear cart?".to_string()),
        message: Some("This removes every line item.".to_string()),
        kind: Some(AlertKind::Warning),
        actions: Some(vec![
            AlertAction::new("Keep cart", ActionRole::Cancel),
            AlertAction::new("Clear cart", ActionRole::Destructive)
                .with_handler(Arc::new(|| info!("cart cleared"))),
        ]),
    }));
    // A misbehaving caller: ignored, never crashes the pipeline
    queue.enqueue(None);
    queue.enqueue(Some(AlertDraft {
        title: Some("Payment received".to_string()),
        message: Some("Order #8731 marked as paid".to_string()),
        kind: Some(AlertKind::Success),
        ..Default::default()
    }));

    // Simulated user: taps the last button on each dialog in turn
    while let Some(alert) = queue.current_alert() {
        tokio::time::sleep(Duration::from_millis(200)).await;
        if let Some(action) = alert.actions.last() {
            info!(label = %action.label, "user selected action");
            action.select();
        }
        queue.dequeue();
    }

    render.await?;
    Ok(())
}
