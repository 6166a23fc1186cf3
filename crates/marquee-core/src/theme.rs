//! Light and dark palettes for both apps.
//!
//! A palette maps named UI roles to colors. The theme itself is a two-state
//! toggle held in application state and never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Label of the button that switches away from this mode.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Colors of the movie app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoviePalette {
    pub background: Rgb,
    pub frame: Rgb,
    pub foreground: Rgb,
    pub entry: Rgb,
    pub button: Rgb,
    pub button_hover: Rgb,
    pub button_foreground: Rgb,
    pub text_area: Rgb,
    pub accent: Rgb,
}

impl MoviePalette {
    pub const DARK: Self = Self {
        background: Rgb(0x1e, 0x1e, 0x1e),
        frame: Rgb(0x2c, 0x2c, 0x2c),
        foreground: Rgb(0xff, 0xff, 0xff),
        entry: Rgb(0x33, 0x33, 0x33),
        button: Rgb(0x3d, 0xa5, 0x8a),
        button_hover: Rgb(0x50, 0xc2, 0xa4),
        button_foreground: Rgb(0xff, 0xff, 0xff),
        text_area: Rgb(0x25, 0x25, 0x25),
        accent: Rgb(0xff, 0x8c, 0xbf),
    };

    pub const LIGHT: Self = Self {
        background: Rgb(0xfd, 0xf6, 0xf0),
        frame: Rgb(0xf8, 0xe8, 0xe4),
        foreground: Rgb(0x00, 0x00, 0x00),
        entry: Rgb(0xff, 0xff, 0xff),
        button: Rgb(0xb5, 0xea, 0xd7),
        button_hover: Rgb(0x9d, 0xe7, 0xc7),
        button_foreground: Rgb(0x00, 0x00, 0x00),
        text_area: Rgb(0xff, 0xfa, 0xf0),
        accent: Rgb(0xff, 0x69, 0xb4),
    };

    pub const fn for_mode(mode: ThemeMode) -> &'static Self {
        match mode {
            ThemeMode::Dark => &Self::DARK,
            ThemeMode::Light => &Self::LIGHT,
        }
    }

    /// Role names paired with their colors.
    pub const fn roles(&self) -> [(&'static str, Rgb); 9] {
        [
            ("background", self.background),
            ("frame", self.frame),
            ("foreground", self.foreground),
            ("entry", self.entry),
            ("button", self.button),
            ("button_hover", self.button_hover),
            ("button_foreground", self.button_foreground),
            ("text_area", self.text_area),
            ("accent", self.accent),
        ]
    }
}

/// Colors of the quote app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotePalette {
    pub background: Rgb,
    pub foreground: Rgb,
    pub button: Rgb,
    pub entry: Rgb,
}

impl QuotePalette {
    pub const LIGHT: Self = Self {
        background: Rgb(0xf5, 0xf5, 0xf5),
        foreground: Rgb(0x00, 0x00, 0x00),
        button: Rgb(0xe0, 0xe0, 0xe0),
        entry: Rgb(0xff, 0xff, 0xff),
    };

    pub const DARK: Self = Self {
        background: Rgb(0x1e, 0x1e, 0x1e),
        foreground: Rgb(0xff, 0xff, 0xff),
        button: Rgb(0x33, 0x33, 0x33),
        entry: Rgb(0x2e, 0x2e, 0x2e),
    };

    pub const fn for_mode(mode: ThemeMode) -> &'static Self {
        match mode {
            ThemeMode::Light => &Self::LIGHT,
            ThemeMode::Dark => &Self::DARK,
        }
    }
}
