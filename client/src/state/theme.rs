//! Theme catalogue and selection rules.
//!
//! DESIGN
//! ======
//! Themes come in dark/light pairs. The page picks a random theme from the
//! active mode's pool on every visit and the toggle swaps to the paired theme
//! of the other mode, so switching modes keeps the colour family.
//!
//! The map is an immutable value handed to each operation; randomness is
//! injected so selection is reproducible under test.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use rand::Rng;

use super::preference::{self, PreferenceStore};

/// Built-in dark → light pairs. The first pair is the fallback for
/// unrecognised themes.
pub const BUILTIN_THEME_PAIRS: &[(&str, &str)] = &[
    ("theme-default-dark", "theme-default-light"),
    ("theme-neon-cyber", "theme-neon-cyber-light"),
    ("theme-dark-ocean", "theme-ocean-light"),
    ("theme-midnight-purple", "theme-purple-light"),
    ("theme-terminal-green", "theme-terminal-green-light"),
    ("theme-blood-moon", "theme-rose-light"),
    ("theme-dark-forest", "theme-forest-light"),
    ("theme-obsidian", "theme-silver-light"),
    ("theme-deep-space", "theme-sky-light"),
    ("theme-noir-red", "theme-coral-light"),
    ("theme-carbon-gold", "theme-amber-light"),
];

// =============================================================================
// ERROR
// =============================================================================

/// Reasons a theme map fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeMapError {
    /// The map has no pairs, so there is nothing to pick from.
    #[error("theme map is empty")]
    Empty,

    /// The same dark theme is listed twice.
    #[error("dark theme `{0}` is listed more than once")]
    DuplicateDark(String),

    /// Two dark themes share one light counterpart.
    #[error("light theme `{0}` is paired with more than one dark theme")]
    DuplicateLight(String),

    /// An identifier is used as both a dark and a light theme.
    #[error("theme `{0}` is listed as both dark and light")]
    Overlap(String),
}

// =============================================================================
// MODE
// =============================================================================

/// Which pool the page draws themes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Decode the persisted `isDarkMode` flag. Only the literal `"false"`
    /// selects light mode; anything else, including absence, means dark.
    pub fn from_flag(raw: Option<&str>) -> Self {
        if raw == Some("false") {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// Encode as the persisted `isDarkMode` flag.
    pub fn as_flag(self) -> &'static str {
        match self {
            Self::Dark => "true",
            Self::Light => "false",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Glyph shown on the toggle button: the mode a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }

    /// Accessible label for the toggle button.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

// =============================================================================
// MAP
// =============================================================================

/// Validated dark → light theme pairing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeMap {
    pairs: Vec<(String, String)>,
}

impl ThemeMap {
    /// Build a map from `(dark, light)` pairs, rejecting empty maps, repeated
    /// identifiers, and identifiers that appear on both sides.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeMapError`] naming the first offending identifier.
    pub fn new<I, D, L>(pairs: I) -> Result<Self, ThemeMapError>
    where
        I: IntoIterator<Item = (D, L)>,
        D: Into<String>,
        L: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs.into_iter().map(|(d, l)| (d.into(), l.into())).collect();
        if pairs.is_empty() {
            return Err(ThemeMapError::Empty);
        }
        for (i, (dark, light)) in pairs.iter().enumerate() {
            let earlier = &pairs[..i];
            if earlier.iter().any(|(d, _)| d == dark) {
                return Err(ThemeMapError::DuplicateDark(dark.clone()));
            }
            if earlier.iter().any(|(_, l)| l == light) {
                return Err(ThemeMapError::DuplicateLight(light.clone()));
            }
        }
        if let Some((dark, _)) = pairs.iter().find(|(d, _)| pairs.iter().any(|(_, l)| l == d)) {
            return Err(ThemeMapError::Overlap(dark.clone()));
        }
        Ok(Self { pairs })
    }

    /// The site's built-in eleven-pair catalogue.
    pub fn builtin() -> Self {
        Self {
            pairs: BUILTIN_THEME_PAIRS
                .iter()
                .map(|(d, l)| ((*d).to_owned(), (*l).to_owned()))
                .collect(),
        }
    }

    pub fn dark_pool(&self) -> Vec<&str> {
        self.pairs.iter().map(|(d, _)| d.as_str()).collect()
    }

    pub fn light_pool(&self) -> Vec<&str> {
        self.pairs.iter().map(|(_, l)| l.as_str()).collect()
    }

    pub fn pool(&self, mode: ThemeMode) -> Vec<&str> {
        match mode {
            ThemeMode::Dark => self.dark_pool(),
            ThemeMode::Light => self.light_pool(),
        }
    }

    /// Light counterpart of a dark theme.
    pub fn light_for(&self, dark: &str) -> Option<&str> {
        self.pairs.iter().find(|(d, _)| d == dark).map(|(_, l)| l.as_str())
    }

    /// Dark counterpart of a light theme (reverse scan).
    pub fn dark_for(&self, light: &str) -> Option<&str> {
        self.pairs.iter().find(|(_, l)| l == light).map(|(d, _)| d.as_str())
    }

    pub fn default_dark(&self) -> &str {
        &self.pairs[0].0
    }

    pub fn default_light(&self) -> &str {
        &self.pairs[0].1
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

// =============================================================================
// SELECTION
// =============================================================================

/// Pick a theme uniformly from `mode`'s pool, re-drawing while the pick equals
/// `last`. A single-member pool returns its only theme even if it repeats.
pub fn pick_theme<'m, R>(map: &'m ThemeMap, mode: ThemeMode, last: Option<&str>, rng: &mut R) -> &'m str
where
    R: Rng + ?Sized,
{
    let pool = map.pool(mode);
    loop {
        let candidate = pool[rng.random_range(0..pool.len())];
        if pool.len() <= 1 || Some(candidate) != last {
            return candidate;
        }
    }
}

/// Theme and mode after a manual toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeSwitch<'m> {
    pub theme: &'m str,
    pub mode: ThemeMode,
}

/// Swap `current` for its counterpart in the other mode. Unrecognised themes
/// fall back to the map's default pair.
pub fn toggle_theme<'m>(map: &'m ThemeMap, mode: ThemeMode, current: Option<&str>) -> ThemeSwitch<'m> {
    let theme = match mode {
        ThemeMode::Dark => current.and_then(|t| map.light_for(t)).unwrap_or(map.default_light()),
        ThemeMode::Light => current.and_then(|t| map.dark_for(t)).unwrap_or(map.default_dark()),
    };
    ThemeSwitch { theme, mode: mode.toggled() }
}

/// Human-readable theme name for the change notification.
///
/// `theme-neon-cyber-light` becomes `neon cyber (light)`.
pub fn display_name(theme: &str) -> String {
    let name = theme.strip_prefix("theme-").unwrap_or(theme);
    let name = match name.strip_suffix("-light") {
        Some(base) => format!("{base} (light)"),
        None => name.to_owned(),
    };
    name.replace('-', " ")
}

// =============================================================================
// STATE
// =============================================================================

/// Theme currently applied to the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    /// `None` until the browser has picked a theme.
    pub theme: Option<String>,
    pub mode: ThemeMode,
}

impl ThemeState {
    /// Page-load selection: read the stored preference, pick a fresh theme
    /// from the stored mode's pool, and persist the result.
    pub fn initialize<S, R>(store: &S, map: &ThemeMap, rng: &mut R) -> Self
    where
        S: PreferenceStore + ?Sized,
        R: Rng + ?Sized,
    {
        let stored = preference::load(store);
        let theme = pick_theme(map, stored.mode, stored.theme.as_deref(), rng);
        preference::save(store, theme, stored.mode);
        Self { theme: Some(theme.to_owned()), mode: stored.mode }
    }

    /// Manual toggle: swap the applied theme for its pair in the other mode
    /// and persist. Works from the page's state, so a missing store still
    /// toggles back and forth.
    pub fn toggle<S>(&self, store: &S, map: &ThemeMap) -> Self
    where
        S: PreferenceStore + ?Sized,
    {
        let switch = toggle_theme(map, self.mode, self.theme.as_deref());
        preference::save(store, switch.theme, switch.mode);
        Self { theme: Some(switch.theme.to_owned()), mode: switch.mode }
    }
}
