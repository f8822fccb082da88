//! Weather window showing a fixed report behind a short simulated load.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod report;

use std::time::Duration;

use desktop_app_contract::AppMountContext;
use leptos::*;
use platform_host::{local_clock_now, random_unit};

use crate::report::{hourly_strip, HOURLY_SLOTS, SAN_FRANCISCO};

const SIMULATED_LOAD: Duration = Duration::from_millis(1000);

/// Mounts the Weather window contents.
pub fn mount(context: AppMountContext) -> View {
    view! { <WeatherApp context=context /> }.into_view()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeatherTab {
    Today,
    Forecast,
}

#[component]
/// Today and Forecast tabs over the San Francisco report.
pub fn WeatherApp(
    /// Runtime services for this window.
    context: AppMountContext,
) -> impl IntoView {
    let services = context.services;
    let tab = create_rw_signal(WeatherTab::Today);
    let loading = create_rw_signal(true);
    let report = SAN_FRANCISCO;

    match set_timeout_with_handle(move || loading.set(false), SIMULATED_LOAD) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => {
            logging::warn!("weather load timer failed: {err:?}");
            loading.set(false);
        }
    }

    let samples: Vec<f64> = (0..HOURLY_SLOTS).map(|_| random_unit()).collect();
    let hourly = hourly_strip(report.current.temp_f, local_clock_now().hour, &samples);

    let today = move || {
        let current = report.current;
        view! {
            <div class="weather-today">
                <h2>{report.location}</h2>
                <div class="weather-current">
                    <div class="weather-current-main">
                        <span class="weather-glyph-large" aria-hidden="true">{current.sky.glyph()}</span>
                        <div>
                            <div class="weather-temp">{format!("{}°F", current.temp_f)}</div>
                            <div class="weather-condition">{current.sky.label()}</div>
                        </div>
                    </div>
                    <div class="weather-card weather-metrics">
                        <span>{format!("🌡️ Feels like: {}°F", current.feels_like_f)}</span>
                        <span>{format!("💧 Humidity: {}%", current.humidity)}</span>
                        <span>{format!("💨 Wind: {} mph", current.wind_mph)}</span>
                    </div>
                </div>
                <h3>"Hourly Forecast"</h3>
                <div class="weather-card weather-hourly">
                    {hourly
                        .iter()
                        .map(|slot| {
                            view! {
                                <div class="weather-hour">
                                    <div>{slot.label.clone()}</div>
                                    <div aria-hidden="true">{slot.sky.glyph()}</div>
                                    <div class="weather-hour-temp">{format!("{}°", slot.temp_f)}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    };

    let forecast = move || {
        view! {
            <div class="weather-forecast">
                <h2>"5-Day Forecast"</h2>
                <div class="weather-card">
                    {report
                        .forecast
                        .iter()
                        .map(|day| {
                            view! {
                                <div class="weather-day">
                                    <span class="weather-day-name">{day.day}</span>
                                    <span aria-hidden="true">{day.sky.glyph()}</span>
                                    <span class="weather-day-temp">{format!("{}°", day.temp_f)}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <h3>"Weather Details"</h3>
                <div class="weather-card weather-details">
                    {report
                        .details
                        .iter()
                        .map(|(label, value)| {
                            view! {
                                <div>
                                    <div class="weather-detail-label">{*label}</div>
                                    <div class="weather-detail-value">{*value}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    };

    view! {
        <div class="app-shell app-weather-shell" class:dark=move || services.is_dark()>
            <div class="weather-tabs" role="tablist">
                <button
                    type="button"
                    role="tab"
                    class:active=move || tab.get() == WeatherTab::Today
                    on:click=move |_| tab.set(WeatherTab::Today)
                >
                    "Today"
                </button>
                <button
                    type="button"
                    role="tab"
                    class:active=move || tab.get() == WeatherTab::Forecast
                    on:click=move |_| tab.set(WeatherTab::Forecast)
                >
                    "Forecast"
                </button>
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="weather-loading"><div class="app-spinner" role="status"></div></div> }
            >
                {
                    let today = today.clone();
                    move || match tab.get() {
                        WeatherTab::Today => today().into_view(),
                        WeatherTab::Forecast => forecast().into_view(),
                    }
                }
            </Show>
        </div>
    }
}
