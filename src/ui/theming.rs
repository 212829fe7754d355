// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming with a persisted user choice.
//!
//! [`ColorScheme`] exposes its colors both as fields and as named tokens
//! ([`ColorScheme::token`]), so widgets can look colors up by name the same way
//! regardless of the active mode. [`ThemeProvider`] owns the chosen
//! [`ThemeMode`] and writes it to the settings file before switching.

use crate::config::{self, Config};
use crate::error::Result;
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub border: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            border: palette::GRAY_200,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
            border: palette::GRAY_700,
        }
    }

    /// Returns the color registered under `name`, e.g. `"surface-primary"`.
    #[must_use]
    pub fn token(&self, name: &str) -> Option<Color> {
        let color = match name {
            "surface-primary" => self.surface_primary,
            "surface-secondary" => self.surface_secondary,
            "text-primary" => self.text_primary,
            "text-secondary" => self.text_secondary,
            "brand-primary" => self.brand_primary,
            "error" => self.error,
            "warning" => self.warning,
            "success" => self.success,
            "info" => self.info,
            "overlay-background" => self.overlay_background,
            "border" => self.border,
            _ => return None,
        };
        Some(color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn color_scheme(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode: {other}")),
        }
    }
}

/// Owns the selected theme mode and its resolved color scheme.
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    mode: ThemeMode,
    colors: ColorScheme,
    settings_path: Option<PathBuf>,
}

impl ThemeProvider {
    /// Creates a provider that does not persist mode changes.
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            colors: mode.color_scheme(),
            settings_path: None,
        }
    }

    /// Creates a provider that writes mode changes to `path`.
    #[must_use]
    pub fn persisted(mode: ThemeMode, path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: Some(path.into()),
            ..Self::new(mode)
        }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    /// Switches to `mode`. The settings file is written first; in-memory state
    /// only changes once the write succeeded.
    pub fn set_mode(&mut self, mode: ThemeMode) -> Result<()> {
        if let Some(path) = &self.settings_path {
            let mut settings = if path.exists() {
                config::load_from_path(path)?
            } else {
                Config::default()
            };
            settings.theme_mode = mode;
            config::save_to_path(&settings, path)?;
        }
        self.mode = mode;
        self.colors = mode.color_scheme();
        tracing::debug!(?mode, "theme mode changed");
        Ok(())
    }

    /// Looks up a named color token in the active scheme.
    #[must_use]
    pub fn current_token(&self, name: &str) -> Option<Color> {
        self.colors.token(name)
    }

    /// Looks up a named color token as it would resolve in `mode`.
    #[must_use]
    pub fn token_for_mode(&self, name: &str, mode: ThemeMode) -> Option<Color> {
        mode.color_scheme().token(name)
    }

    /// Built-in Iced theme matching the active mode.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.colors == ColorScheme::dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(ThemeMode::System)
    }
}
