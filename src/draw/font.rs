//! Font descriptor for text rendering.

/// Pixel size annotations are lettered at.
pub const TEXT_FONT_SIZE: f64 = 30.0;

/// Font configuration for text rendering.
///
/// Describes which font to use, including family name, weight, and style.
/// The size is not part of the descriptor: annotation text is always drawn
/// at [`TEXT_FONT_SIZE`] unless the configuration overrides it.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Avenir Next", "Sans", "JetBrains Mono")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Avenir Next".to_string(),
            weight: "bold".to_string(),
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

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight". The size is applied separately in
    /// absolute (pixel) units.
    /// Example: "Avenir Next Bold" or "Monospace Italic"
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.join(" ")
    }

    /// Canvas-style shorthand, e.g. `bold 30px Avenir Next`.
    pub fn to_css_string(&self, size_px: f64) -> String {
        let mut parts = Vec::new();
        if self.style.to_lowercase() != "normal" {
            parts.push(self.style.to_lowercase());
        }
        if self.weight.to_lowercase() != "normal" {
            parts.push(self.weight.to_lowercase());
        }
        parts.push(format!("{}px", size_px.round() as i32));
        parts.push(self.family.clone());
        parts.join(" ")
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
