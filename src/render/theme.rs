use crate::config::Variant;
use crate::foundation::core::{Canvas, Rgba8};

/// Which of the two loaded faces a text op uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontRole {
    Bold,
    Regular,
}

/// Face and pixel size for one kind of text on the card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub role: FontRole,
    pub size: f32,
}

impl TextStyle {
    pub const fn bold(size: f32) -> Self {
        Self {
            role: FontRole::Bold,
            size,
        }
    }

    pub const fn regular(size: f32) -> Self {
        Self {
            role: FontRole::Regular,
            size,
        }
    }

    /// Line box height used for overflow checks.
    pub fn line_height(self) -> f64 {
        f64::from(self.size) * 1.2
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Background {
    Solid(Rgba8),
    /// Row-by-row blend from `top` to `bottom`.
    VerticalGradient { top: Rgba8, bottom: Rgba8 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub accent: Rgba8,
    pub accent_secondary: Rgba8,
    pub divider: Rgba8,
    pub panel: Rgba8,
    pub highlight: Rgba8,
    pub text: Rgba8,
    pub text_muted: Rgba8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    pub brand: TextStyle,
    pub subtitle: TextStyle,
    pub title: TextStyle,
    pub tagline: TextStyle,
    pub section: TextStyle,
    pub body: TextStyle,
    pub small: TextStyle,
    pub price: TextStyle,
}

/// Fixed visual template for one card variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTemplate {
    pub variant: Variant,
    pub canvas: Canvas,
    pub background: Background,
    pub palette: Palette,
    pub type_scale: Typography,
    /// Column width for problem and description text.
    pub wrap_width: usize,
    /// `None` means uncapped.
    pub description_max_lines: Option<usize>,
    pub max_features: usize,
}

impl CardTemplate {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Pro => Self::pro(),
        }
    }

    pub fn classic() -> Self {
        Self {
            variant: Variant::Classic,
            canvas: Canvas {
                width: 1080,
                height: 1350,
            },
            background: Background::Solid(Rgba8::hex(0x1a1a2e)),
            palette: Palette {
                accent: Rgba8::hex(0xe94560),
                accent_secondary: Rgba8::hex(0xe94560),
                divider: Rgba8::hex(0x0f3460),
                panel: Rgba8::hex(0x16213e),
                highlight: Rgba8::hex(0xf5c518),
                text: Rgba8::hex(0xeaeaea),
                text_muted: Rgba8::hex(0xa0a0a0),
            },
            type_scale: Typography {
                brand: TextStyle::bold(16.0),
                subtitle: TextStyle::regular(20.0),
                title: TextStyle::bold(64.0),
                tagline: TextStyle::regular(32.0),
                section: TextStyle::bold(16.0),
                body: TextStyle::regular(24.0),
                small: TextStyle::regular(20.0),
                price: TextStyle::regular(32.0),
            },
            wrap_width: 45,
            description_max_lines: Some(5),
            max_features: 4,
        }
    }

    pub fn pro() -> Self {
        Self {
            variant: Variant::Pro,
            canvas: Canvas {
                width: 1080,
                height: 1920,
            },
            background: Background::VerticalGradient {
                top: Rgba8::rgb(15, 15, 35),
                bottom: Rgba8::rgb(26, 26, 62),
            },
            palette: Palette {
                accent: Rgba8::hex(0xff6b6b),
                accent_secondary: Rgba8::hex(0x4ecdc4),
                divider: Rgba8::hex(0x3a3a5c),
                panel: Rgba8::hex(0x1e1e42),
                highlight: Rgba8::hex(0xffd93d),
                text: Rgba8::hex(0xffffff),
                text_muted: Rgba8::hex(0xb0b0c0),
            },
            type_scale: Typography {
                brand: TextStyle::bold(24.0),
                subtitle: TextStyle::regular(22.0),
                title: TextStyle::bold(72.0),
                tagline: TextStyle::regular(36.0),
                section: TextStyle::bold(20.0),
                body: TextStyle::regular(28.0),
                small: TextStyle::regular(22.0),
                price: TextStyle::bold(48.0),
            },
            wrap_width: 40,
            description_max_lines: None,
            max_features: 4,
        }
    }
}
