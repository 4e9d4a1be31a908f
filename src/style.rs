use serde::{Deserialize, Serialize};

/// Hex values for the named colors the diagrams use.
pub mod palette {
    pub const LIGHT_BLUE: &str = "#add8e6";
    pub const NAVY: &str = "#000080";
    pub const LIGHT_GREEN: &str = "#90ee90";
    pub const DARK_GREEN: &str = "#006400";
    pub const ORANGE: &str = "#ffa500";
    pub const DARK_ORANGE: &str = "#ff8c00";
    pub const LIGHT_CORAL: &str = "#f08080";
    pub const DARK_RED: &str = "#8b0000";
    pub const LIGHT_YELLOW: &str = "#ffffe0";
    pub const GOLD: &str = "#ffd700";
    pub const LIGHT_PINK: &str = "#ffb6c1";
    pub const PURPLE: &str = "#800080";
    pub const LIGHT_GRAY: &str = "#d3d3d3";
    pub const LIGHT_STEEL_BLUE: &str = "#b0c4de";
    pub const STEEL_BLUE: &str = "#4682b4";
    pub const MISTY_ROSE: &str = "#ffe4e1";
    pub const BLACK: &str = "#000000";
    pub const WHITE: &str = "#ffffff";
    pub const GRAY: &str = "#808080";
    pub const RED: &str = "#d62728";
    pub const GREEN: &str = "#2ca02c";
    pub const BLUE: &str = "#1f77b4";
    pub const YELLOW: &str = "#ffff99";
}

const BACKGROUND: &str = "#ffffff";
const TEXT: &str = "#1a1a1a";
const MUTED_TEXT: &str = "#666666";
const GRID: &str = "#cccccc";
const FONT_SCALE: f32 = 1.0;

/// Document-level styling, overridable from a TOML file. Per-shape
/// colors stay literal in the diagram data; this covers only the
/// ambient look (background, text colors, global font scaling).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Style {
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default = "default_text")]
    pub text_color: String,
    #[serde(default = "default_muted_text")]
    pub muted_text_color: String,
    #[serde(default = "default_grid")]
    pub grid_color: String,
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
}

fn default_background() -> String {
    BACKGROUND.to_string()
}
fn default_text() -> String {
    TEXT.to_string()
}
fn default_muted_text() -> String {
    MUTED_TEXT.to_string()
}
fn default_grid() -> String {
    GRID.to_string()
}
fn default_font_scale() -> f32 {
    FONT_SCALE
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background_color: default_background(),
            text_color: default_text(),
            muted_text_color: default_muted_text(),
            grid_color: default_grid(),
            font_scale: default_font_scale(),
        }
    }
}

impl Style {
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let style: Style =
            toml::from_str(content).map_err(|e| format!("Failed to parse style TOML: {}", e))?;
        if !style.font_scale.is_finite() || style.font_scale <= 0.0 {
            return Err(format!("Invalid font_scale value: {}", style.font_scale));
        }
        Ok(style)
    }

    /// Scale a font size by the configured factor.
    pub fn fs(&self, size: f32) -> f32 {
        size * self.font_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let style = Style::from_toml("").expect("parse");
        assert_eq!(style.background_color, BACKGROUND);
        assert_eq!(style.font_scale, 1.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let style =
            Style::from_toml("background_color = \"#101010\"\nfont_scale = 1.5").expect("parse");
        assert_eq!(style.background_color, "#101010");
        assert_eq!(style.font_scale, 1.5);
        assert_eq!(style.text_color, TEXT);
    }

    #[test]
    fn rejects_nonpositive_font_scale() {
        assert!(Style::from_toml("font_scale = 0.0").is_err());
        assert!(Style::from_toml("font_scale = -2.0").is_err());
    }

    #[test]
    fn palette_entries_are_hex_colors() {
        for color in [
            palette::LIGHT_BLUE,
            palette::NAVY,
            palette::MISTY_ROSE,
            palette::STEEL_BLUE,
        ] {
            assert!(color.starts_with('#') && color.len() == 7, "{color}");
            assert!(u32::from_str_radix(&color[1..], 16).is_ok(), "{color}");
        }
    }

    proptest! {
        #[test]
        fn font_scaling_is_linear(size in 1.0f32..100.0, scale in 0.1f32..4.0) {
            let style = Style { font_scale: scale, ..Style::default() };
            prop_assert!((style.fs(size) - size * scale).abs() < 1e-4);
        }
    }
}
