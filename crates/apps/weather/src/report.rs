//! Static weather report and the derived hourly strip.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Sky condition with its glyph.
pub enum Sky {
    /// Clear sky.
    Sunny,
    /// Overcast.
    Cloudy,
    /// Rain.
    Rainy,
}

impl Sky {
    /// Emoji glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sunny => "☀️",
            Self::Cloudy => "☁️",
            Self::Rainy => "🌧️",
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Current conditions.
pub struct CurrentConditions {
    /// Temperature in °F.
    pub temp_f: i32,
    /// Sky condition.
    pub sky: Sky,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Wind speed in mph.
    pub wind_mph: u8,
    /// Apparent temperature in °F.
    pub feels_like_f: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One day of the multi-day forecast.
pub struct DailyForecast {
    /// Short weekday label.
    pub day: &'static str,
    /// High in °F.
    pub temp_f: i32,
    /// Sky condition.
    pub sky: Sky,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Everything the Weather window shows.
pub struct WeatherReport {
    /// Location label.
    pub location: &'static str,
    /// Current conditions.
    pub current: CurrentConditions,
    /// Upcoming days.
    pub forecast: [DailyForecast; 5],
    /// Detail tiles as (label, value).
    pub details: [(&'static str, &'static str); 4],
}

/// The fixed San Francisco report.
pub const SAN_FRANCISCO: WeatherReport = WeatherReport {
    location: "San Francisco, CA",
    current: CurrentConditions {
        temp_f: 72,
        sky: Sky::Sunny,
        humidity: 45,
        wind_mph: 8,
        feels_like_f: 74,
    },
    forecast: [
        DailyForecast {
            day: "Mon",
            temp_f: 72,
            sky: Sky::Sunny,
        },
        DailyForecast {
            day: "Tue",
            temp_f: 68,
            sky: Sky::Cloudy,
        },
        DailyForecast {
            day: "Wed",
            temp_f: 65,
            sky: Sky::Rainy,
        },
        DailyForecast {
            day: "Thu",
            temp_f: 70,
            sky: Sky::Cloudy,
        },
        DailyForecast {
            day: "Fri",
            temp_f: 75,
            sky: Sky::Sunny,
        },
    ],
    details: [
        ("Sunrise", "6:42 AM"),
        ("Sunset", "7:38 PM"),
        ("Chance of Rain", "10%"),
        ("Pressure", "1012 hPa"),
    ],
};

/// Number of slots in the hourly strip.
pub const HOURLY_SLOTS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One slot of the hourly strip.
pub struct HourlySlot {
    /// `Now` or `H:00`.
    pub label: String,
    /// Sky condition.
    pub sky: Sky,
    /// Rounded temperature in °F.
    pub temp_f: i32,
}

/// Builds the hourly strip starting at `hour`.
///
/// Each slot cools by 2 °F and adds up to 5 °F of jitter drawn from the matching unit sample
/// (missing samples count as zero).
pub fn hourly_strip(current_temp_f: i32, hour: u32, samples: &[f64]) -> Vec<HourlySlot> {
    (0..HOURLY_SLOTS)
        .map(|slot| {
            let jitter = samples.get(slot).copied().unwrap_or(0.0).clamp(0.0, 1.0) * 5.0;
            let temp = f64::from(current_temp_f) - (slot as f64) * 2.0 + jitter;
            HourlySlot {
                label: if slot == 0 {
                    "Now".to_string()
                } else {
                    format!("{}:00", (hour as usize + slot) % 24)
                },
                sky: if slot % 3 == 0 { Sky::Sunny } else { Sky::Cloudy },
                temp_f: temp.round() as i32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hourly_strip_wraps_midnight_and_cools() {
        let strip = hourly_strip(72, 22, &[0.0; HOURLY_SLOTS]);
        assert_eq!(
            strip.iter().map(|slot| slot.label.as_str()).collect::<Vec<_>>(),
            vec!["Now", "23:00", "0:00", "1:00", "2:00", "3:00"]
        );
        assert_eq!(
            strip.iter().map(|slot| slot.temp_f).collect::<Vec<_>>(),
            vec![72, 70, 68, 66, 64, 62]
        );
        assert_eq!(strip[3].sky, Sky::Sunny);
        assert_eq!(strip[1].sky, Sky::Cloudy);
    }

    #[test]
    fn jitter_is_bounded_by_five_degrees() {
        let strip = hourly_strip(72, 9, &[1.0, 0.5]);
        assert_eq!(strip[0].temp_f, 77);
        assert_eq!(strip[1].temp_f, 73);
        assert_eq!(strip[2].temp_f, 68);
    }

    #[test]
    fn report_has_five_forecast_days() {
        assert_eq!(SAN_FRANCISCO.forecast.len(), 5);
        assert_eq!(SAN_FRANCISCO.current.sky.label(), "Sunny");
    }
}
