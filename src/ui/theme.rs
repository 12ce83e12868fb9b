/// Light and dark palettes for the dashboard chrome.

use crate::core::types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    /// Unrecognized names fall back to the light theme.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => ThemeKind::Dark,
            _ => ThemeKind::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }
}

impl Default for ThemeKind {
    fn default() -> Self {
        ThemeKind::Light
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub highlight: Color,
    pub navbar: Color,
    pub navbar_solid: Color,
    pub tag_bg: Color,
    pub tag_text: Color,
}

impl Theme {
    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }

    fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            background: Color::from_hex(0xF8FAFC, 1.0),
            surface: Color::from_hex(0xFFFFFF, 1.0),
            surface_raised: Color::from_hex(0xF1F5F9, 1.0),
            border: Color::from_hex(0xE2E8F0, 1.0),
            text: Color::from_hex(0x0F172A, 1.0),
            text_muted: Color::from_hex(0x64748B, 1.0),
            accent: Color::from_hex(0x8B5CF6, 1.0),
            accent_soft: Color::from_hex(0xEDE9FE, 1.0),
            highlight: Color::from_hex(0xFDE047, 1.0),
            navbar: Color::from_hex(0xFFFFFF, 0.7),
            navbar_solid: Color::from_hex(0xFFFFFF, 0.95),
            tag_bg: Color::from_hex(0xEDE9FE, 1.0),
            tag_text: Color::from_hex(0x6D28D9, 1.0),
        }
    }

    fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            background: Color::from_hex(0x0F172A, 1.0),
            surface: Color::from_hex(0x1E293B, 1.0),
            surface_raised: Color::from_hex(0x334155, 1.0),
            border: Color::from_hex(0x475569, 1.0),
            text: Color::from_hex(0xE2E8F0, 1.0),
            text_muted: Color::from_hex(0x94A3B8, 1.0),
            accent: Color::from_hex(0x8B5CF6, 1.0),
            accent_soft: Color::from_hex(0x4C1D95, 1.0),
            highlight: Color::from_hex(0xB45309, 1.0),
            navbar: Color::from_hex(0x0F172A, 0.7),
            navbar_solid: Color::from_hex(0x0F172A, 0.95),
            tag_bg: Color::from_hex(0x4C1D95, 1.0),
            tag_text: Color::from_hex(0xC4B5FD, 1.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_falls_back_to_light() {
        assert_eq!(ThemeKind::from_name("dark"), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("light"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("solarized"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name(""), ThemeKind::Light);
    }

    #[test]
    fn test_toggle_round_trips() {
        let kind = ThemeKind::Light;
        assert_eq!(kind.toggled(), ThemeKind::Dark);
        assert_eq!(kind.toggled().toggled(), ThemeKind::Light);
    }

    #[test]
    fn test_name_survives_round_trip() {
        for kind in [ThemeKind::Light, ThemeKind::Dark] {
            assert_eq!(ThemeKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn test_palettes_differ() {
        let light = Theme::for_kind(ThemeKind::Light);
        let dark = Theme::for_kind(ThemeKind::Dark);
        assert_ne!(light.background.r, dark.background.r);
        assert_eq!(light.kind, ThemeKind::Light);
        assert_eq!(dark.kind, ThemeKind::Dark);
    }
}
