//! Theme palettes and dark mode handling.
//!
//! The palettes are static declarations; the only runtime behavior is
//! reading the stored preference and writing the active palette onto the
//! `<html>` element as CSS custom properties.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// localStorage key for the persisted theme preference.
#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "communeTheme";

/// Semantic color roles consumed by the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub error: &'static str,
}

pub const LIGHT: Palette = Palette {
    primary: "#FFFFFF",
    secondary: "#1D1135",
    accent: "#FFFF99",
    error: "#FF1744",
};

pub const DARK: Palette = Palette {
    primary: "#314455",
    secondary: "#C96567",
    accent: "#97AABD",
    error: "#FF5252",
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// CSS custom property assignments for a palette, in declaration order.
pub fn css_variables(palette: &Palette) -> [(&'static str, &'static str); 4] {
    [
        ("--color-primary", palette.primary),
        ("--color-secondary", palette.secondary),
        ("--color-accent", palette.accent),
        ("--color-error", palette.error),
    ]
}

/// Read the theme preference from localStorage, falling back to the system
/// `prefers-color-scheme` query when nothing is stored.
pub fn read_preference() -> ThemeMode {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return ThemeMode::Light;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return if val == "dark" { ThemeMode::Dark } else { ThemeMode::Light };
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(ThemeMode::Light, |mq| {
                if mq.matches() { ThemeMode::Dark } else { ThemeMode::Light }
            })
    }
    #[cfg(not(feature = "csr"))]
    {
        ThemeMode::Light
    }
}

/// Write the mode's palette onto the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let style = el.style();
        for (name, value) in css_variables(mode.palette()) {
            let _ = style.set_property(name, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = mode;
    }
}

/// Flip the mode, apply it, and persist the new preference.
pub fn toggle(current: ThemeMode) -> ThemeMode {
    let next = current.flipped();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(
                    STORAGE_KEY,
                    if next == ThemeMode::Dark { "dark" } else { "light" },
                );
            }
        }
    }
    next
}
