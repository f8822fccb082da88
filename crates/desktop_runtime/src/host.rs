//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! The reducer stays pure; everything that touches timers, storage, the document, or other
//! browsing contexts runs here behind [`DesktopHostContext`].

mod boot;
mod host_ui;

use std::{rc::Rc, time::Duration};

use leptos::{set_timeout, Callable, Callback, SignalGetUntracked};
use platform_host::KeyValueStore;
use platform_host_web::{WebLocalStore, WebSessionStore};

use crate::{
    model::Viewport,
    persistence,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    local_store: Rc<dyn KeyValueStore>,
    session_store: Rc<dyn KeyValueStore>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(Rc::new(WebLocalStore), Rc::new(WebSessionStore))
    }
}

impl DesktopHostContext {
    /// Creates a host context over explicit durable and tab-scoped stores.
    pub fn new(local_store: Rc<dyn KeyValueStore>, session_store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            local_store,
            session_store,
        }
    }

    /// Returns the durable (`localStorage`) store.
    pub fn local_store(&self) -> Rc<dyn KeyValueStore> {
        self.local_store.clone()
    }

    /// Returns the tab-scoped (`sessionStorage`) store.
    pub fn session_store(&self) -> Rc<dyn KeyValueStore> {
        self.session_store.clone()
    }

    /// Hydrates persisted desktop files and starts the one-second clock.
    pub fn install_boot_hydration(&self, runtime: DesktopRuntimeContext) {
        boot::install_boot_hydration(self.clone(), runtime);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ScheduleNotificationExpiry { id, delay_ms } => {
                schedule_notification_expiry(runtime.dispatch, id, delay_ms)
            }
            RuntimeEffect::PersistDesktopFiles => {
                let files = runtime.state.get_untracked().desktop_files;
                persistence::persist_desktop_files(self.local_store.as_ref(), &files);
            }
            RuntimeEffect::ApplyThemeClass(theme) => host_ui::apply_theme_class(theme),
            RuntimeEffect::OpenExternalUrl(url) => host_ui::open_external_url(&url),
        }
    }

    /// Returns the browser viewport used for maximized window geometry.
    pub fn viewport(&self) -> Viewport {
        host_ui::viewport()
    }
}

fn schedule_notification_expiry(
    dispatch: Callback<DesktopAction>,
    id: crate::model::NotificationId,
    delay_ms: u64,
) {
    set_timeout(
        move || dispatch.call(DesktopAction::ExpireNotification { id }),
        Duration::from_millis(delay_ms),
    );
}
