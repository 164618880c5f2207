//! # Theme System
//!
//! Colour palettes used by the installer screens.
//!
//! ## Built-in Themes
//!
//! - **Nord** (default) - the arctic, north-bluish palette
//! - **Nordic** - a darker take on Nord with deeper blacks

use crate::component::Color;

/// Installer colours, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, matched case-insensitively by [`Theme::by_name`].
    pub name: &'static str,

    // -- Darks --
    pub black: Color,
    pub gray: Color,

    // -- Lights --
    /// Dimmed text (credits, hints).
    pub white0: Color,
    pub white1: Color,
    /// Primary text.
    pub white2: Color,

    // -- Accents --
    pub cyan: Color,
    pub blue: Color,
    pub red: Color,
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub magenta: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Nord).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

static BUILT_IN_THEMES: [Theme; 2] = [
    // 0 - Nord (default)
    Theme {
        name: "Nord",
        black: Color::from_static("#2E3440"),   // nord0
        gray: Color::from_static("#4C566A"),    // nord3
        white0: Color::from_static("#D8DEE9"),  // nord4
        white1: Color::from_static("#E5E9F0"),  // nord5
        white2: Color::from_static("#ECEFF4"),  // nord6
        cyan: Color::from_static("#88C0D0"),    // nord8
        blue: Color::from_static("#81A1C1"),    // nord9
        red: Color::from_static("#BF616A"),     // nord11
        orange: Color::from_static("#D08770"),  // nord12
        yellow: Color::from_static("#EBCB8B"),  // nord13
        green: Color::from_static("#A3BE8C"),   // nord14
        magenta: Color::from_static("#B48EAD"), // nord15
    },
    // 1 - Nordic
    Theme {
        name: "Nordic",
        black: Color::from_static("#191D24"),
        gray: Color::from_static("#3B4252"),
        white0: Color::from_static("#BBC3D4"),
        white1: Color::from_static("#D8DEE9"),
        white2: Color::from_static("#E5E9F0"),
        cyan: Color::from_static("#8FBCBB"),
        blue: Color::from_static("#5E81AC"),
        red: Color::from_static("#BF616A"),
        orange: Color::from_static("#D08770"),
        yellow: Color::from_static("#EBCB8B"),
        green: Color::from_static("#A3BE8C"),
        magenta: Color::from_static("#B48EAD"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_themes_count() {
        assert_eq!(Theme::all().len(), 2);
    }

    #[test]
    fn test_default_is_nord() {
        assert_eq!(Theme::default_theme().name, "Nord");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("nord").is_some());
        assert!(Theme::by_name("NORDIC").is_some());
        assert!(Theme::by_name("dracula").is_none());
    }

    #[test]
    fn test_palette_colors_are_valid() {
        for theme in Theme::all() {
            for color in [
                &theme.black,
                &theme.gray,
                &theme.white0,
                &theme.white1,
                &theme.white2,
                &theme.cyan,
                &theme.blue,
                &theme.red,
                &theme.orange,
                &theme.yellow,
                &theme.green,
                &theme.magenta,
            ] {
                assert!(
                    Color::new(color.as_str()).is_ok(),
                    "{}: {} is not a valid color",
                    theme.name,
                    color
                );
            }
        }
    }

    #[test]
    fn test_all_themes_have_distinct_names() {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(names.len(), unique.len(), "duplicate theme names found");
    }
}
