use std::time::Duration;

use leptos::{create_effect, logging, on_cleanup, set_interval_with_handle, SignalSet};
use platform_host::{local_clock_now, unix_time_ms_now};

use crate::{
    host::DesktopHostContext, persistence, reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

const CLOCK_TICK: Duration = Duration::from_secs(1);

pub(super) fn install_boot_hydration(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let files = persistence::load_desktop_files(host.local_store().as_ref());
        if !files.is_empty() {
            runtime.dispatch_action(DesktopAction::HydrateDesktopFiles { files });
        }
    });

    tick(runtime);
    match set_interval_with_handle(move || tick(runtime), CLOCK_TICK) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("clock interval install failed: {err:?}"),
    }
}

fn tick(runtime: DesktopRuntimeContext) {
    let clock = local_clock_now();
    runtime.clock.set(clock);
    runtime.dispatch_action(DesktopAction::ClockTick {
        now_ms: unix_time_ms_now(),
        hour: clock.hour,
    });
}
