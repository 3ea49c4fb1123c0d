use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Look a theme up by its configured name, falling back to the
    /// default.
    ///
    pub fn by_name(name: &str) -> Theme {
        match name {
            "rose-pine-dawn" => Self::rose_pine_dawn(),
            _ => Self::tokyo_night(),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            banner: ColorSpec {
                r: 187,
                g: 154,
                b: 247,
            }, // Purple
            text: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            },
            text_muted: ColorSpec {
                r: 86,
                g: 95,
                b: 137,
            },
            success: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            error: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            }, // Red
            border_active: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            },
            border_normal: ColorSpec {
                r: 59,
                g: 66,
                b: 97,
            },
            highlight_bg: ColorSpec {
                r: 41,
                g: 46,
                b: 66,
            },
            highlight_fg: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            },
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            }, // Purple
            banner: ColorSpec {
                r: 255,
                g: 109,
                b: 146,
            }, // Pink
            text: ColorSpec {
                r: 88,
                g: 82,
                b: 96,
            },
            text_muted: ColorSpec {
                r: 121,
                g: 117,
                b: 147,
            },
            success: ColorSpec {
                r: 86,
                g: 148,
                b: 159,
            },
            error: ColorSpec {
                r: 180,
                g: 99,
                b: 122,
            },
            border_active: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            },
            border_normal: ColorSpec {
                r: 152,
                g: 147,
                b: 165,
            },
            highlight_bg: ColorSpec {
                r: 244,
                g: 237,
                b: 232,
            },
            highlight_fg: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            },
        }
    }
}
