//! Stub submission shared by every form. There is no backend yet: the
//! payload is logged and success is reported after a fixed delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn simulate_submission(
    what: &'static str,
    payload: serde_json::Value,
    delay_ms: u32,
    is_submitting: RwSignal<bool>,
    on_success: Callback<()>,
) {
    is_submitting.set(true);
    log::info!("Submitting {}: {}", what, payload);

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        is_submitting.set(false);
        log::debug!("{} submission accepted", what);
        on_success.run(());
    });
}
