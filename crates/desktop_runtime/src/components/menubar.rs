use platform_host::random_unit;

use super::*;

const BRAND: &str = "WebOS";

const WIFI_NETWORKS: [&str; 10] = [
    "WebOS-Network",
    "HomeWifi",
    "Skynet",
    "FBI Surveillance Van",
    "Pretty Fly for a WiFi",
    "WiFi Art Thou Romeo",
    "The LAN Before Time",
    "Bill Wi the Science Fi",
    "Wu-Tang LAN",
    "Hide Yo Kids Hide Yo WiFi",
];

const LOW_BATTERY_THRESHOLD: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dropdown {
    File,
    Edit,
    View,
    Wifi,
    Battery,
}

struct AppMenu {
    dropdown: Dropdown,
    label: &'static str,
    items: &'static [&'static str],
}

static APP_MENUS: [AppMenu; 3] = [
    AppMenu {
        dropdown: Dropdown::File,
        label: "File",
        items: &["New Window", "Open...", "Close Window"],
    },
    AppMenu {
        dropdown: Dropdown::Edit,
        label: "Edit",
        items: &["Undo", "Redo", "Cut", "Copy", "Paste"],
    },
    AppMenu {
        dropdown: Dropdown::View,
        label: "View",
        items: &["Show Hidden Files", "Icon View", "List View"],
    },
];

/// Picks the decorative network name from a unit sample.
fn wifi_network_name(sample: f64) -> &'static str {
    let index = (sample.clamp(0.0, 1.0) * WIFI_NETWORKS.len() as f64) as usize;
    WIFI_NETWORKS[index.min(WIFI_NETWORKS.len() - 1)]
}

/// Decorative battery percentage in `15..=100` from a unit sample.
fn battery_level(sample: f64) -> u8 {
    ((sample.clamp(0.0, 1.0) * 86.0).floor() as u8).min(85) + 15
}

fn battery_status(level: u8) -> &'static str {
    if level > 80 {
        "Battery is fully charged"
    } else if level > LOW_BATTERY_THRESHOLD {
        "Battery is in good condition"
    } else {
        "Battery is running low"
    }
}

fn battery_glyph(level: u8) -> &'static str {
    if level >= 30 {
        "🔋"
    } else {
        "🪫"
    }
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let open = create_rw_signal(None::<Dropdown>);
    let wifi_name = wifi_network_name(random_unit());
    let battery = battery_level(random_unit());
    let battery_low = battery <= LOW_BATTERY_THRESHOLD;

    let toggle = move |dropdown: Dropdown| {
        open.update(|current| {
            *current = if *current == Some(dropdown) {
                None
            } else {
                Some(dropdown)
            };
        });
    };
    let is_open = move |dropdown: Dropdown| open.get() == Some(dropdown);

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if open.get_untracked().is_some() {
            open.set(None);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let is_dark = move || state.with(|desktop| desktop.theme.is_dark());

    view! {
        <header class="menubar">
            <div class="menubar-left">
                <span class="menubar-brand">{BRAND}</span>
                {APP_MENUS
                    .iter()
                    .map(|menu| {
                        let dropdown = menu.dropdown;
                        view! {
                            <div
                                class="menubar-menu"
                                on:mousedown=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                            >
                                <button
                                    type="button"
                                    class="menubar-item"
                                    class:open=move || is_open(dropdown)
                                    on:click=move |_| toggle(dropdown)
                                >
                                    {menu.label}
                                </button>
                                <Show when=move || is_open(dropdown) fallback=|| ()>
                                    <div class="menubar-dropdown" role="menu">
                                        {menu
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <button type="button" role="menuitem" on:click=move |_| open.set(None)>
                                                        {*item}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="menubar-right">
                <div class="menubar-menu" on:mousedown=move |ev: web_sys::MouseEvent| ev.stop_propagation()>
                    <button type="button" class="menubar-item" title="WiFi" on:click=move |_| toggle(Dropdown::Wifi)>
                        "📶"
                    </button>
                    <Show when=move || is_open(Dropdown::Wifi) fallback=|| ()>
                        <div class="menubar-dropdown menubar-status-panel">
                            <div class="menubar-panel-heading">
                                <span>"WiFi"</span>
                                <span class="menubar-switch on" aria-hidden="true"></span>
                            </div>
                            <div class="menubar-network connected">{wifi_name}</div>
                            <div class="menubar-network">"Neighbor's WiFi"</div>
                            <div class="menubar-network">"Coffee Shop"</div>
                            <hr />
                            <button type="button">"WiFi Settings"</button>
                            <button type="button">"Join Other..."</button>
                        </div>
                    </Show>
                </div>

                <div class="menubar-menu" on:mousedown=move |ev: web_sys::MouseEvent| ev.stop_propagation()>
                    <button type="button" class="menubar-item" title="Battery" on:click=move |_| toggle(Dropdown::Battery)>
                        {battery_glyph(battery)}
                        <span class="menubar-battery-level">{format!("{battery}%")}</span>
                    </button>
                    <Show when=move || is_open(Dropdown::Battery) fallback=|| ()>
                        <div class="menubar-dropdown menubar-status-panel">
                            <div class="menubar-panel-heading">"Battery"</div>
                            <div class="menubar-battery-percent">{format!("{battery}%")}</div>
                            <div class="menubar-battery-bar">
                                <div
                                    class="menubar-battery-fill"
                                    class:low=battery_low
                                    style=format!("width: {battery}%;")
                                ></div>
                            </div>
                            <div class="menubar-battery-status" class:low=battery_low>
                                {battery_status(battery)}
                            </div>
                            <button type="button">"Battery Settings"</button>
                        </div>
                    </Show>
                </div>

                <button
                    type="button"
                    class="menubar-item"
                    title=move || if is_dark() { "Switch to Light Mode" } else { "Switch to Dark Mode" }
                    on:click=move |_| toggle_theme(runtime)
                >
                    {move || if is_dark() { "☀️" } else { "🌙" }}
                </button>
                <button
                    type="button"
                    class="menubar-item"
                    title="Mission Control"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleMissionControl)
                >
                    "▦"
                </button>
                <button
                    type="button"
                    class="menubar-item"
                    title="Spotlight Search"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleSpotlight)
                >
                    "🔍"
                </button>
                <button
                    type="button"
                    class="menubar-item"
                    title="Notifications"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleNotificationCenter)
                >
                    "🔔"
                </button>
                <span class="menubar-clock">{move || runtime.clock.get().hh_mm()}</span>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_level_covers_fifteen_to_one_hundred() {
        assert_eq!(battery_level(0.0), 15);
        assert_eq!(battery_level(0.5), 58);
        assert_eq!(battery_level(0.9999), 100);
        assert_eq!(battery_level(1.0), 100);
    }

    #[test]
    fn battery_status_thresholds() {
        assert_eq!(battery_status(100), "Battery is fully charged");
        assert_eq!(battery_status(81), "Battery is fully charged");
        assert_eq!(battery_status(80), "Battery is in good condition");
        assert_eq!(battery_status(21), "Battery is in good condition");
        assert_eq!(battery_status(20), "Battery is running low");
        assert_eq!(battery_glyph(29), "🪫");
    }

    #[test]
    fn wifi_name_is_drawn_from_fixed_list() {
        assert_eq!(wifi_network_name(0.0), "WebOS-Network");
        assert_eq!(wifi_network_name(0.999), "Hide Yo Kids Hide Yo WiFi");
        assert_eq!(wifi_network_name(1.0), "Hide Yo Kids Hide Yo WiFi");
        assert!(WIFI_NETWORKS.contains(&wifi_network_name(0.42)));
    }
}
