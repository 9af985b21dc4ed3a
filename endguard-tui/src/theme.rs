//! Console theme selection.

use serde::{Deserialize, Serialize};
use tabula::theme::Palette;

/// Which palette the console renders with. Persisted across runs under
/// [`crate::settings::THEME_KEY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeChoice {
    Light,
    #[default]
    Dark,
}

impl ThemeChoice {
    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeChoice::Light => Palette::light(),
            ThemeChoice::Dark => Palette::dark(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeChoice::Light => "light",
            ThemeChoice::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two() {
        assert_eq!(ThemeChoice::Dark.toggled(), ThemeChoice::Light);
        assert_eq!(ThemeChoice::Dark.toggled().toggled(), ThemeChoice::Dark);
    }
}
