use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    // Primary colors
    pub primary: ColorSpec,
    pub banner: ColorSpec,
    pub favorite: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,

    // Status colors
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
}

/// Plain RGB triple.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Return the theme matching the dark mode preference.
    ///
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Warm light theme.
    ///
    pub fn light() -> Self {
        Theme {
            name: "light",
            primary: ColorSpec::new(234, 88, 12), // Orange
            banner: ColorSpec::new(217, 119, 6), // Amber
            favorite: ColorSpec::new(220, 38, 38), // Red
            text: ColorSpec::new(31, 41, 55), // Gray 800
            text_muted: ColorSpec::new(107, 114, 128), // Gray 500
            background: ColorSpec::new(255, 251, 235), // Amber 50
            error: ColorSpec::new(185, 28, 28), // Red 700
            border_active: ColorSpec::new(234, 88, 12),
            border_normal: ColorSpec::new(209, 213, 219),
        }
    }

    /// Neutral dark theme.
    ///
    pub fn dark() -> Self {
        Theme {
            name: "dark",
            primary: ColorSpec::new(251, 146, 60), // Orange 400
            banner: ColorSpec::new(252, 211, 77), // Amber 300
            favorite: ColorSpec::new(248, 113, 113), // Red 400
            text: ColorSpec::new(243, 244, 246), // Gray 100
            text_muted: ColorSpec::new(156, 163, 175), // Gray 400
            background: ColorSpec::new(17, 24, 39), // Gray 900
            error: ColorSpec::new(248, 113, 113),
            border_active: ColorSpec::new(251, 146, 60),
            border_normal: ColorSpec::new(75, 85, 99),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_mode_selects_palette() {
        assert_eq!(Theme::for_mode(true).name, "dark");
        assert_eq!(Theme::for_mode(false).name, "light");
        assert_ne!(Theme::dark().background, Theme::light().background);
    }

    #[test]
    fn color_spec_to_color() {
        assert_eq!(ColorSpec::new(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
