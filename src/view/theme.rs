use ratatui::style::Color;

/// Persisted light/dark preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Stable storage value. Once published, do not rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown values return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::LIGHT,
            Self::Dark => Palette::DARK,
        }
    }
}

/// Colors used by the header widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub separator: Color,
    pub border: Color,
    pub button: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(0xf4, 0xf6, 0xf8),
        text: Color::Rgb(0x2a, 0x35, 0x3d),
        separator: Color::Rgb(0x6b, 0x72, 0x80),
        border: Color::Rgb(0xd1, 0xd5, 0xdb),
        button: Color::Rgb(0xff, 0xff, 0xff),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(0x17, 0x17, 0x17),
        text: Color::Rgb(0xe5, 0xe5, 0xe5),
        separator: Color::Rgb(0x6b, 0x72, 0x80),
        border: Color::Rgb(0x40, 0x40, 0x40),
        button: Color::Rgb(0x26, 0x26, 0x26),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_values_round_trip() {
        for theme in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(ThemePreference::parse("Dark"), None);
        assert_eq!(ThemePreference::parse(""), None);
    }

    #[test]
    fn toggled_twice_is_identity() {
        let theme = ThemePreference::default();
        assert_eq!(theme, ThemePreference::Light);
        assert_eq!(theme.toggled(), ThemePreference::Dark);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}
