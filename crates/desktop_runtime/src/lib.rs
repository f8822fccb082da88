//! Desktop session runtime: state model, reducer, window geometry, shell services, and the Leptos
//! shell components that render them.

pub mod apps;
pub mod components;
pub mod dock;
mod effect_executor;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod shortcuts;
pub mod spotlight;
pub mod wallpaper;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::DesktopHostContext;
pub use model::*;
pub use persistence::{load_desktop_files, persist_desktop_files};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime_context::command_action;
