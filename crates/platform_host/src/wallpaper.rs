//! Built-in wallpaper catalog shared by the desktop background and the wallpaper picker.

/// Path prefix of every bundled wallpaper image.
pub const BUNDLED_WALLPAPER_PREFIX: &str = "/wallpapers/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Picker sidebar categories for bundled wallpapers.
pub enum WallpaperCategory {
    /// Recent system releases.
    Featured,
    /// Nature photography.
    Landscapes,
    /// Abstract renders.
    Abstract,
    /// Flat colors (`path` is a `#rrggbb` value).
    SolidColors,
}

impl WallpaperCategory {
    /// Categories in sidebar order.
    pub const ALL: [WallpaperCategory; 4] = [
        Self::Featured,
        Self::Landscapes,
        Self::Abstract,
        Self::SolidColors,
    ];

    /// Sidebar label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::Landscapes => "Landscapes",
            Self::Abstract => "Abstract",
            Self::SolidColors => "Solid Colors",
        }
    }

    /// Presets listed under this category.
    pub fn presets(self) -> &'static [WallpaperPreset] {
        match self {
            Self::Featured => &FEATURED,
            Self::Landscapes => &LANDSCAPES,
            Self::Abstract => &ABSTRACT,
            Self::SolidColors => &SOLID_COLORS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One bundled wallpaper.
pub struct WallpaperPreset {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Image path or hex color.
    pub path: &'static str,
}

const fn preset(id: &'static str, name: &'static str, path: &'static str) -> WallpaperPreset {
    WallpaperPreset { id, name, path }
}

/// Mojave (Day), the default wallpaper.
pub const MOJAVE_DAY: WallpaperPreset =
    preset("mojave-day", "Mojave (Day)", "/wallpapers/mojave-day.jpg");
/// Catalina.
pub const CATALINA: WallpaperPreset = preset("catalina", "Catalina", "/wallpapers/catalina.jpg");
/// Big Sur.
pub const BIG_SUR: WallpaperPreset = preset("big-sur", "Big Sur", "/wallpapers/big-sur.jpg");
/// Monterey.
pub const MONTEREY: WallpaperPreset = preset("monterey", "Monterey", "/wallpapers/monterey.jpg");

const FEATURED: [WallpaperPreset; 5] = [
    MOJAVE_DAY,
    CATALINA,
    BIG_SUR,
    MONTEREY,
    preset("ventura", "Ventura", "/wallpapers/ventura.jpg"),
];

const LANDSCAPES: [WallpaperPreset; 4] = [
    preset("mountains", "Mountains", "/wallpapers/mountains.jpg"),
    preset("beach", "Beach", "/wallpapers/beach.jpg"),
    preset("forest", "Forest", "/wallpapers/forest.jpg"),
    preset("desert", "Desert", "/wallpapers/desert.jpg"),
];

const ABSTRACT: [WallpaperPreset; 3] = [
    preset("abstract1", "Waves", "/wallpapers/abstract1.jpg"),
    preset("abstract2", "Geometric", "/wallpapers/abstract2.jpg"),
    preset("abstract3", "Fluid", "/wallpapers/abstract3.jpg"),
];

const SOLID_COLORS: [WallpaperPreset; 5] = [
    preset("solid-blue", "Blue", "#1a1a2e"),
    preset("solid-dark", "Dark", "#121212"),
    preset("solid-green", "Green", "#1a2e1a"),
    preset("solid-purple", "Purple", "#2e1a2e"),
    preset("solid-navy", "Navy", "#0a192f"),
];

/// The time-of-day wallpaper entry; `path` is its preview image.
pub const DYNAMIC_WALLPAPER: WallpaperPreset =
    preset("mojave-dynamic", "Mojave Dynamic", "/wallpapers/mojave-day.jpg");

/// Returns `true` for `#rrggbb`-style color values.
pub fn is_solid_color(value: &str) -> bool {
    value.starts_with('#')
}

/// Returns `true` for user-provided images: anything outside the bundled prefix, or object URLs.
pub fn is_custom_wallpaper(value: &str) -> bool {
    !value.starts_with(BUNDLED_WALLPAPER_PREFIX) || value.starts_with("blob:")
}

/// Looks up a bundled preset by image path or color.
pub fn preset_by_path(path: &str) -> Option<&'static WallpaperPreset> {
    WallpaperCategory::ALL
        .iter()
        .flat_map(|category| category.presets())
        .find(|preset| preset.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_expected_category_sizes() {
        let sizes: Vec<usize> = WallpaperCategory::ALL
            .iter()
            .map(|category| category.presets().len())
            .collect();
        assert_eq!(sizes, vec![5, 4, 3, 5]);
    }

    #[test]
    fn custom_wallpaper_detection() {
        assert!(!is_custom_wallpaper("/wallpapers/beach.jpg"));
        assert!(is_custom_wallpaper("blob:http://localhost/1234"));
        assert!(is_custom_wallpaper("https://example.com/a.png"));
        assert!(is_solid_color("#0a192f"));
        assert!(!is_solid_color("/wallpapers/beach.jpg"));
    }

    #[test]
    fn preset_lookup_by_path() {
        assert_eq!(
            preset_by_path("#121212").map(|preset| preset.name),
            Some("Dark")
        );
        assert_eq!(preset_by_path("/wallpapers/unknown.jpg"), None);
    }
}
