//! Font descriptor for label rendering.

/// Font configuration for label text.
///
/// Describes which font to use, including family name, weight, and style.
/// Every label step freezes a copy of the descriptor so later font changes
/// never restyle existing labels.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "JetBrains Mono")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Builds a Pango font description sized in device pixels.
    ///
    /// Labels are sized in surface pixels rather than points, so the size is
    /// applied with `set_absolute_size`.
    pub fn to_font_description(&self, size_px: f64) -> pango::FontDescription {
        let mut desc = pango::FontDescription::new();
        desc.set_family(&self.family);
        desc.set_weight(self.pango_weight());
        desc.set_style(self.pango_style());
        desc.set_absolute_size(size_px * pango::SCALE as f64);
        desc
    }

    fn pango_weight(&self) -> pango::Weight {
        let weight = self.weight.to_lowercase();
        if let Ok(numeric) = weight.parse::<u32>() {
            return match numeric {
                0..=150 => pango::Weight::Thin,
                151..=250 => pango::Weight::Ultralight,
                251..=350 => pango::Weight::Light,
                351..=450 => pango::Weight::Normal,
                451..=550 => pango::Weight::Medium,
                551..=650 => pango::Weight::Semibold,
                651..=750 => pango::Weight::Bold,
                751..=850 => pango::Weight::Ultrabold,
                _ => pango::Weight::Heavy,
            };
        }
        match weight.as_str() {
            "ultralight" => pango::Weight::Ultralight,
            "light" => pango::Weight::Light,
            "bold" => pango::Weight::Bold,
            "ultrabold" => pango::Weight::Ultrabold,
            "heavy" => pango::Weight::Heavy,
            _ => pango::Weight::Normal,
        }
    }

    fn pango_style(&self) -> pango::Style {
        match self.style.to_lowercase().as_str() {
            "italic" => pango::Style::Italic,
            "oblique" => pango::Style::Oblique,
            _ => pango::Style::Normal,
        }
    }
}
