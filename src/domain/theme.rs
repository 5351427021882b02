use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::domain::restaurant::{ColorOverrides, RestaurantVibe};

/// How energetic the microsite's animations are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationIntensity {
    Low,
    Medium,
    High,
}

impl AnimationIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationIntensity::Low => "low",
            AnimationIntensity::Medium => "medium",
            AnimationIntensity::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFonts {
    pub heading: &'static str,
    pub body: &'static str,
}

/// A fully resolved microsite theme. The per-vibe base themes are static
/// data; only the three brand colors can be overridden per restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
    pub fonts: ThemeFonts,
    pub animation: AnimationIntensity,
    pub dark_mode: bool,
}

struct BaseTheme {
    colors: ThemeColors,
    fonts: ThemeFonts,
    animation: AnimationIntensity,
    dark_mode: bool,
}

lazy_static! {
    static ref VIBE_THEMES: HashMap<RestaurantVibe, BaseTheme> = {
        let mut themes = HashMap::new();

        themes.insert(
            RestaurantVibe::Luxury,
            BaseTheme {
                colors: ThemeColors { primary: "#D4AF37", secondary: "#1a1a1a", accent: "#FFD700", background: "#0a0a0a", foreground: "#f5f5f5" },
                fonts: ThemeFonts { heading: "Playfair Display, serif", body: "Inter, sans-serif" },
                animation: AnimationIntensity::Medium,
                dark_mode: true,
            },
        );
        themes.insert(
            RestaurantVibe::Romantic,
            BaseTheme {
                colors: ThemeColors { primary: "#E91E63", secondary: "#2d1b2e", accent: "#FF6B9D", background: "#1a0f1a", foreground: "#f8e8f0" },
                fonts: ThemeFonts { heading: "Cormorant Garamond, serif", body: "Lato, sans-serif" },
                animation: AnimationIntensity::Low,
                dark_mode: true,
            },
        );
        themes.insert(
            RestaurantVibe::Party,
            BaseTheme {
                colors: ThemeColors { primary: "#FF6B35", secondary: "#1a1a2e", accent: "#FFB800", background: "#0f0f1e", foreground: "#ffffff" },
                fonts: ThemeFonts { heading: "Bebas Neue, sans-serif", body: "Roboto, sans-serif" },
                animation: AnimationIntensity::High,
                dark_mode: true,
            },
        );
        themes.insert(
            RestaurantVibe::Calm,
            BaseTheme {
                colors: ThemeColors { primary: "#4A90E2", secondary: "#2c3e50", accent: "#7FB3D3", background: "#1a2332", foreground: "#e8f4f8" },
                fonts: ThemeFonts { heading: "Merriweather, serif", body: "Open Sans, sans-serif" },
                animation: AnimationIntensity::Low,
                dark_mode: true,
            },
        );
        themes.insert(
            RestaurantVibe::Artistic,
            BaseTheme {
                colors: ThemeColors { primary: "#9B59B6", secondary: "#2c1810", accent: "#E74C3C", background: "#1a0f0a", foreground: "#f5e6d3" },
                fonts: ThemeFonts { heading: "Cinzel, serif", body: "Raleway, sans-serif" },
                animation: AnimationIntensity::Medium,
                dark_mode: true,
            },
        );

        themes
    };
}

/// Resolves the theme for a vibe, layering the restaurant's brand color
/// overrides over the base. An empty override string falls back to the
/// base color.
pub fn resolve_theme(vibe: RestaurantVibe, overrides: &ColorOverrides) -> ThemeConfig {
    // The table covers every vibe variant, so the lookup cannot miss.
    let base = &VIBE_THEMES[&vibe];

    ThemeConfig {
        primary: pick(&overrides.primary_color, base.colors.primary),
        secondary: pick(&overrides.secondary_color, base.colors.secondary),
        accent: pick(&overrides.accent_color, base.colors.accent),
        background: base.colors.background.to_string(),
        foreground: base.colors.foreground.to_string(),
        fonts: base.fonts.clone(),
        animation: base.animation,
        dark_mode: base.dark_mode,
    }
}

fn pick(custom: &Option<String>, base: &'static str) -> String {
    match custom {
        Some(color) if !color.is_empty() => color.clone(),
        _ => base.to_string(),
    }
}

/// Maps an animation intensity name to the CSS class the storefront uses.
/// Unknown names get the medium-intensity class, mirroring the original
/// switch's default arm.
pub fn animation_class(intensity: &str) -> &'static str {
    match intensity {
        "high" => "animate-pulse",
        "medium" => "animate-fade-in",
        "low" => "",
        _ => "animate-fade-in",
    }
}
