use std::time::Duration;

use futures::channel::oneshot;
use leptos::prelude::*;

use crate::contact::Delay;

/// Sleeps on the browser event loop via `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    async fn sleep(&self, duration: Duration) {
        let (tx, rx) = oneshot::channel::<()>();
        set_timeout(
            move || {
                let _ = tx.send(());
            },
            duration,
        );
        // a dropped sender just ends the wait early
        let _ = rx.await;
    }
}
