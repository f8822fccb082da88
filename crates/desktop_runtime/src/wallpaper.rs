//! Desktop background policy: solid fill versus image, theme overrides, and dynamic wallpapers.

use desktop_app_contract::{Theme, WallpaperSelection};
use platform_host::{
    is_custom_wallpaper, is_solid_color,
    wallpaper::{BIG_SUR, CATALINA, MOJAVE_DAY, MONTEREY},
};

use crate::model::DARK_MODE_BACKGROUND;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Time-of-day band used by the dynamic wallpaper.
pub enum DayPhase {
    /// 06:00 to 11:59.
    Morning,
    /// 12:00 to 17:59.
    Afternoon,
    /// 18:00 to 19:59.
    Evening,
    /// 20:00 to 05:59.
    Night,
}

impl DayPhase {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            18..=19 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Catalog image shown during this band.
    pub fn wallpaper_path(self) -> &'static str {
        match self {
            Self::Morning => MOJAVE_DAY.path,
            Self::Afternoon => CATALINA.path,
            Self::Evening => BIG_SUR.path,
            Self::Night => MONTEREY.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// How the desktop surface is painted.
pub enum BackgroundMode {
    /// Flat `background-color`.
    Solid {
        /// CSS color.
        color: String,
    },
    /// Cover-fitted `background-image`.
    Image {
        /// Image URL.
        url: String,
    },
}

impl BackgroundMode {
    /// Inline CSS for the desktop root element.
    pub fn css(&self) -> String {
        match self {
            Self::Solid { color } => format!("background-color: {color};"),
            Self::Image { url } => format!(
                "background-image: url('{url}'); background-size: cover; background-position: center;"
            ),
        }
    }
}

/// Resolves the background for the current selection, theme, and local hour.
pub fn resolve_background(
    selection: &WallpaperSelection,
    theme: Theme,
    hour: u32,
) -> BackgroundMode {
    let value = selection.value.as_str();
    if is_solid_color(value) {
        return BackgroundMode::Solid {
            color: value.to_string(),
        };
    }

    if theme.is_dark() {
        if is_custom_wallpaper(value) {
            return BackgroundMode::Image {
                url: value.to_string(),
            };
        }
        return BackgroundMode::Solid {
            color: DARK_MODE_BACKGROUND.to_string(),
        };
    }

    let url = if selection.is_dynamic {
        DayPhase::from_hour(hour).wallpaper_path().to_string()
    } else {
        value.to_string()
    };
    BackgroundMode::Image { url }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn image(url: &str) -> BackgroundMode {
        BackgroundMode::Image {
            url: url.to_string(),
        }
    }

    fn solid(color: &str) -> BackgroundMode {
        BackgroundMode::Solid {
            color: color.to_string(),
        }
    }

    #[test]
    fn catalog_image_is_solid_in_dark_mode_and_image_in_light_mode() {
        let selection = WallpaperSelection::fixed("/wallpapers/mojave-day.jpg");
        assert_eq!(
            resolve_background(&selection, Theme::Dark, 9),
            solid("#1a1a2e")
        );
        assert_eq!(
            resolve_background(&selection, Theme::Light, 9),
            image("/wallpapers/mojave-day.jpg")
        );
    }

    #[test]
    fn color_values_are_solid_in_both_themes() {
        let selection = WallpaperSelection::fixed("#2e1a2e");
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(resolve_background(&selection, theme, 9), solid("#2e1a2e"));
        }
    }

    #[test]
    fn custom_images_survive_dark_mode() {
        let selection = WallpaperSelection::fixed("blob:http://localhost/abc");
        assert_eq!(
            resolve_background(&selection, Theme::Dark, 9),
            image("blob:http://localhost/abc")
        );
    }

    #[test]
    fn dynamic_wallpaper_follows_hour_bands_in_light_mode() {
        let selection = WallpaperSelection {
            value: "/wallpapers/mojave-day.jpg".to_string(),
            is_dynamic: true,
        };
        let cases = [
            (6, "/wallpapers/mojave-day.jpg"),
            (11, "/wallpapers/mojave-day.jpg"),
            (12, "/wallpapers/catalina.jpg"),
            (18, "/wallpapers/big-sur.jpg"),
            (19, "/wallpapers/big-sur.jpg"),
            (20, "/wallpapers/monterey.jpg"),
            (3, "/wallpapers/monterey.jpg"),
        ];
        for (hour, expected) in cases {
            assert_eq!(
                resolve_background(&selection, Theme::Light, hour),
                image(expected),
                "hour={hour}"
            );
        }
        assert_eq!(
            resolve_background(&selection, Theme::Dark, 13),
            solid("#1a1a2e")
        );
    }

    #[test]
    fn css_renders_both_modes() {
        assert_eq!(solid("#121212").css(), "background-color: #121212;");
        assert!(image("/a.jpg").css().contains("url('/a.jpg')"));
    }
}
