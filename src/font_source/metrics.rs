//! Font-wide information used for spacing previews

use norad::Font;

/// Units-per-em assumed when a source does not declare one
pub const DEFAULT_UNITS_PER_EM: f64 = 1000.0;

/// Font information
#[derive(Clone, Debug)]
pub struct FontInfo {
    pub family_name: String,
    pub style_name: String,
    pub units_per_em: f64,
}

impl Default for FontInfo {
    fn default() -> Self {
        Self {
            family_name: String::new(),
            style_name: String::new(),
            units_per_em: DEFAULT_UNITS_PER_EM,
        }
    }
}

impl FontInfo {
    /// Extract font info from norad Font
    pub fn from_norad_font(font: &Font) -> Self {
        let units_per_em = font
            .font_info
            .units_per_em
            .map(|v| v.as_f64())
            .filter(|upm| *upm > 0.0)
            .unwrap_or(DEFAULT_UNITS_PER_EM);

        Self {
            family_name: Self::extract_string_field(
                &font.font_info,
                |info| &info.family_name,
                "Untitled",
            ),
            style_name: Self::extract_string_field(
                &font.font_info,
                |info| &info.style_name,
                "Regular",
            ),
            units_per_em,
        }
    }

    /// Helper to extract string fields with defaults
    fn extract_string_field<F>(font_info: &norad::FontInfo, getter: F, default: &str) -> String
    where
        F: Fn(&norad::FontInfo) -> &Option<String>,
    {
        getter(font_info)
            .as_ref()
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Get a display name combining family and style names
    pub fn get_display_name(&self) -> String {
        let parts: Vec<&str> = [&self.family_name, &self.style_name]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect();

        if parts.is_empty() {
            "Untitled Font".to_string()
        } else {
            parts.join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_skips_empty_parts() {
        let info = FontInfo {
            family_name: "Source Serif".to_string(),
            ..FontInfo::default()
        };
        assert_eq!(info.get_display_name(), "Source Serif");
        assert_eq!(FontInfo::default().get_display_name(), "Untitled Font");
    }

    #[test]
    fn missing_units_per_em_uses_default() {
        let info = FontInfo::from_norad_font(&Font::new());
        assert_eq!(info.units_per_em, DEFAULT_UNITS_PER_EM);
        assert_eq!(info.family_name, "Untitled");
        assert_eq!(info.style_name, "Regular");
    }
}
