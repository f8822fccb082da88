//! Drains the [`RuntimeEffect`] queue the reducer fills: notification expiry timers, saved-file
//! writes, the document theme class, and external URL opens.

use leptos::*;

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Runs queued effects through the host in the order the reducer emitted them.
///
/// The queue is swapped out before anything runs, so an effect that dispatches another action
/// lands in the next batch instead of this one.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }
        let batch: Vec<RuntimeEffect> =
            runtime.effects.try_update(std::mem::take).unwrap_or_default();
        let host = runtime.host.get_value();
        batch
            .into_iter()
            .for_each(|effect| host.run_runtime_effect(runtime, effect));
    });
}
