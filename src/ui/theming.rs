// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection and the theme toggle.

use crate::app::persisted_state::AppState;
use crate::config::defaults::THEME_TRANSITION_MS;
use crate::timing::{deadline_after, Clock, SystemClock};
use dark_light;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Parses a theme name as found in settings or the persisted store.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The opposite of the effective theme, always explicit.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Value of the document's `data-theme` attribute.
    #[must_use]
    pub fn data_theme(self) -> &'static str {
        if self.is_dark() {
            "dark"
        } else {
            "light"
        }
    }

    /// Icon of the toggle button: a sun offers to leave dark mode, a moon to enter it.
    #[must_use]
    pub fn icon(self) -> &'static str {
        if self.is_dark() {
            "fa-sun"
        } else {
            "fa-moon"
        }
    }

    /// Built-in iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

/// Owns the current theme and persists every toggle under the `"theme"` key.
#[derive(Debug)]
pub struct ThemeController<C = SystemClock> {
    mode: ThemeMode,
    state_dir: Option<PathBuf>,
    clock: C,
    transition_until: Option<Instant>,
}

impl ThemeController<SystemClock> {
    /// Loads the persisted theme, falling back to `fallback` when none was saved.
    ///
    /// Returns a warning key if the persisted store could not be read.
    pub fn load(fallback: ThemeMode, state_dir: Option<PathBuf>) -> (Self, Option<String>) {
        Self::load_with_clock(fallback, state_dir, SystemClock)
    }
}

impl<C: Clock> ThemeController<C> {
    pub fn load_with_clock(
        fallback: ThemeMode,
        state_dir: Option<PathBuf>,
        clock: C,
    ) -> (Self, Option<String>) {
        let (state, warning) = AppState::load_from(state_dir.clone());
        let controller = Self {
            mode: state.theme.unwrap_or(fallback),
            state_dir,
            clock,
            transition_until: None,
        };
        (controller, warning)
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Switches between light and dark and saves the choice.
    ///
    /// Returns a warning key if the choice could not be saved; the toggle
    /// itself always takes effect.
    pub fn toggle(&mut self) -> Option<String> {
        self.mode = self.mode.toggled();
        self.transition_until =
            Some(deadline_after(
                self.clock.now(),
                Duration::from_millis(THEME_TRANSITION_MS),
            ));

        let (mut state, _) = AppState::load_from(self.state_dir.clone());
        state.theme = Some(self.mode);
        state.save_to(self.state_dir.clone())
    }

    /// True during the color transition that follows a toggle.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition_until
            .is_some_and(|until| self.clock.now() < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::ManualClock;
    use tempfile::tempdir;

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn explicit_modes_toggle_into_each_other() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn icon_shows_sun_in_dark_mode_and_moon_in_light_mode() {
        assert_eq!(ThemeMode::Dark.icon(), "fa-sun");
        assert_eq!(ThemeMode::Light.icon(), "fa-moon");
        assert_eq!(ThemeMode::Dark.data_theme(), "dark");
        assert_eq!(ThemeMode::Light.data_theme(), "light");
    }

    #[test]
    fn parse_accepts_known_names_only() {
        assert_eq!(ThemeMode::parse(" Light "), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("system"), Some(ThemeMode::System));
        assert_eq!(ThemeMode::parse("sepia"), None);
    }

    #[test]
    fn system_mode_resolves_to_an_explicit_mode() {
        let toggled = ThemeMode::System.toggled();
        assert!(matches!(toggled, ThemeMode::Light | ThemeMode::Dark));
    }

    #[test]
    fn controller_uses_fallback_without_saved_theme() {
        let dir = tempdir().expect("create temp dir");
        let (controller, warning) =
            ThemeController::load(ThemeMode::Light, Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(controller.mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_persists_and_survives_reload() {
        let dir = tempdir().expect("create temp dir");
        let state_dir = Some(dir.path().to_path_buf());

        let (mut controller, _) = ThemeController::load(ThemeMode::Dark, state_dir.clone());
        assert!(controller.toggle().is_none());
        assert_eq!(controller.mode(), ThemeMode::Light);

        let (reloaded, _) = ThemeController::load(ThemeMode::Dark, state_dir);
        assert_eq!(reloaded.mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_keeps_saved_draft() {
        let dir = tempdir().expect("create temp dir");
        let state_dir = Some(dir.path().to_path_buf());
        let mut draft = crate::app::persisted_state::FormDraft::new();
        draft.insert("title".into(), "Emma".into());
        AppState {
            theme: None,
            draft: Some(draft.clone()),
        }
        .save_to(state_dir.clone());

        let (mut controller, _) = ThemeController::load(ThemeMode::Dark, state_dir.clone());
        controller.toggle();

        let (state, _) = AppState::load_from(state_dir);
        assert_eq!(state.draft, Some(draft));
        assert_eq!(state.theme, Some(ThemeMode::Light));
    }

    #[test]
    fn transition_lasts_three_hundred_ms() {
        let dir = tempdir().expect("create temp dir");
        let clock = ManualClock::new();
        let (mut controller, _) = ThemeController::load_with_clock(
            ThemeMode::Dark,
            Some(dir.path().to_path_buf()),
            clock.clone(),
        );
        assert!(!controller.is_transitioning());

        controller.toggle();
        assert!(controller.is_transitioning());
        clock.advance_ms(299);
        assert!(controller.is_transitioning());
        clock.advance_ms(1);
        assert!(!controller.is_transitioning());
    }
}
