//! Theme registry — an immutable lookup table from the closed set of theme
//! identifiers to their render configuration. Read-only after construction;
//! the builder UI picks a theme id and the renderer reads the record.

use std::sync::LazyLock;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Executive,
    Engineer,
    Creative,
    Minimalist,
    Neon,
    VideoEditor,
    #[serde(rename = "3d_artist")]
    ThreeDArtist,
    GraphicDesigner,
    SoftwareEngineer,
    Photographer,
    Architect,
    Fashion,
    Musician,
    GameDev,
    Academic,
}

impl Theme {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "executive" => Some(Self::Executive),
            "engineer" => Some(Self::Engineer),
            "creative" => Some(Self::Creative),
            "minimalist" => Some(Self::Minimalist),
            "neon" => Some(Self::Neon),
            "video_editor" => Some(Self::VideoEditor),
            "3d_artist" => Some(Self::ThreeDArtist),
            "graphic_designer" => Some(Self::GraphicDesigner),
            "software_engineer" => Some(Self::SoftwareEngineer),
            "photographer" => Some(Self::Photographer),
            "architect" => Some(Self::Architect),
            "fashion" => Some(Self::Fashion),
            "musician" => Some(Self::Musician),
            "game_dev" => Some(Self::GameDev),
            "academic" => Some(Self::Academic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeColors {
    pub background: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub primary: &'static str,
    pub border: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeFonts {
    pub sans: &'static str,
    pub mono: &'static str,
    pub heading: &'static str,
}

/// Spring parameters driving the client's motion bindings.
#[derive(Debug, Clone, Serialize)]
pub struct SpringPhysics {
    pub stiffness: u32,
    pub damping: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    pub name: Theme,
    pub label: &'static str,
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
    pub physics: SpringPhysics,
    pub radius: &'static str,
}

const INTER: ThemeFonts = ThemeFonts {
    sans: "var(--font-inter)",
    mono: "var(--font-inter)",
    heading: "var(--font-inter)",
};

static THEMES: LazyLock<Vec<ThemeConfig>> = LazyLock::new(|| {
    vec![
        ThemeConfig {
            name: Theme::Executive,
            label: "Corporate Ethereal",
            colors: ThemeColors {
                background: "#0a0a0a",
                foreground: "#fafafa",
                muted: "#a1a1aa",
                primary: "#ffffff",
                border: "rgba(255,255,255,0.08)",
            },
            fonts: INTER,
            physics: SpringPhysics { stiffness: 50, damping: 20 },
            radius: "0.75rem",
        },
        ThemeConfig {
            name: Theme::Engineer,
            label: "Terminal Velocity",
            colors: ThemeColors {
                background: "#0c0c0c",
                foreground: "#22c55e",
                muted: "#15803d",
                primary: "#22c55e",
                border: "#14532d",
            },
            fonts: ThemeFonts { sans: "monospace", mono: "monospace", heading: "monospace" },
            physics: SpringPhysics { stiffness: 200, damping: 15 },
            radius: "0px",
        },
        ThemeConfig {
            name: Theme::Creative,
            label: "Chaos Theory",
            colors: ThemeColors {
                background: "#fff0f5",
                foreground: "#be185d",
                muted: "#831843",
                primary: "#be185d",
                border: "#fbcfe8",
            },
            fonts: ThemeFonts { sans: "sans-serif", mono: "monospace", heading: "serif" },
            physics: SpringPhysics { stiffness: 120, damping: 10 },
            radius: "1.5rem",
        },
        ThemeConfig {
            name: Theme::Minimalist,
            label: "Swiss Modern",
            colors: ThemeColors {
                background: "#ffffff",
                foreground: "#000000",
                muted: "#52525b",
                primary: "#000000",
                border: "#e4e4e7",
            },
            fonts: INTER,
            physics: SpringPhysics { stiffness: 80, damping: 25 },
            radius: "0px",
        },
        ThemeConfig {
            name: Theme::Neon,
            label: "Cyberpunk 2077",
            colors: ThemeColors {
                background: "#050510",
                foreground: "#00f0ff",
                muted: "#b026ff",
                primary: "#fcee0a",
                border: "rgba(0, 240, 255, 0.2)",
            },
            fonts: ThemeFonts { sans: "sans-serif", mono: "monospace", heading: "sans-serif" },
            physics: SpringPhysics { stiffness: 300, damping: 20 },
            radius: "4px",
        },
        ThemeConfig {
            name: Theme::VideoEditor,
            label: "Timeline Pro",
            colors: ThemeColors {
                background: "#1e1e1e",
                foreground: "#d4d4d4",
                muted: "#858585",
                primary: "#a855f7",
                border: "#3f3f46",
            },
            fonts: ThemeFonts { sans: "sans-serif", mono: "monospace", heading: "sans-serif" },
            physics: SpringPhysics { stiffness: 90, damping: 15 },
            radius: "0.5rem",
        },
        ThemeConfig {
            name: Theme::ThreeDArtist,
            label: "Viewport Shading",
            colors: ThemeColors {
                background: "#2d2d2d",
                foreground: "#e0e0e0",
                muted: "#a3a3a3",
                primary: "#f97316",
                border: "#404040",
            },
            fonts: ThemeFonts {
                sans: "var(--font-inter)",
                mono: "monospace",
                heading: "var(--font-inter)",
            },
            physics: SpringPhysics { stiffness: 70, damping: 18 },
            radius: "0.25rem",
        },
        ThemeConfig {
            name: Theme::GraphicDesigner,
            label: "Print Ready",
            colors: ThemeColors {
                background: "#ffffff",
                foreground: "#000000",
                muted: "#9ca3af",
                primary: "#06b6d4",
                border: "#e5e7eb",
            },
            fonts: ThemeFonts { sans: "sans-serif", mono: "sans-serif", heading: "sans-serif" },
            physics: SpringPhysics { stiffness: 100, damping: 20 },
            radius: "0px",
        },
        ThemeConfig {
            name: Theme::SoftwareEngineer,
            label: "Dark IDE",
            colors: ThemeColors {
                background: "#282c34",
                foreground: "#abb2bf",
                muted: "#5c6370",
                primary: "#61afef",
                border: "#3e4451",
            },
            fonts: ThemeFonts {
                sans: "var(--font-inter)",
                mono: "monospace",
                heading: "monospace",
            },
            physics: SpringPhysics { stiffness: 150, damping: 18 },
            radius: "0.375rem",
        },
        ThemeConfig {
            name: Theme::Photographer,
            label: "Darkroom",
            colors: ThemeColors {
                background: "#000000",
                foreground: "#e5e5e5",
                muted: "#525252",
                primary: "#ef4444",
                border: "#262626",
            },
            fonts: INTER,
            physics: SpringPhysics { stiffness: 60, damping: 25 },
            radius: "0px",
        },
        ThemeConfig {
            name: Theme::Architect,
            label: "Blueprint",
            colors: ThemeColors {
                background: "#f0f4f8",
                foreground: "#1e293b",
                muted: "#64748b",
                primary: "#3b82f6",
                border: "#cbd5e1",
            },
            fonts: ThemeFonts { sans: "sans-serif", mono: "monospace", heading: "sans-serif" },
            physics: SpringPhysics { stiffness: 100, damping: 30 },
            radius: "0px",
        },
        ThemeConfig {
            name: Theme::Fashion,
            label: "Editorial",
            colors: ThemeColors {
                background: "#171717",
                foreground: "#fafafa",
                muted: "#737373",
                primary: "#d4af37",
                border: "#404040",
            },
            fonts: ThemeFonts { sans: "sans-serif", mono: "serif", heading: "serif" },
            physics: SpringPhysics { stiffness: 60, damping: 40 },
            radius: "0px",
        },
        ThemeConfig {
            name: Theme::Musician,
            label: "Acoustic",
            colors: ThemeColors {
                background: "#2a2422",
                foreground: "#efeae5",
                muted: "#a8a29e",
                primary: "#d97706",
                border: "#57534e",
            },
            fonts: ThemeFonts { sans: "serif", mono: "monospace", heading: "serif" },
            physics: SpringPhysics { stiffness: 80, damping: 25 },
            radius: "1rem",
        },
        ThemeConfig {
            name: Theme::GameDev,
            label: "8-Bit Arcade",
            colors: ThemeColors {
                background: "#201a30",
                foreground: "#00ff9f",
                muted: "#bd34fe",
                primary: "#ff0055",
                border: "#00ff9f",
            },
            fonts: ThemeFonts { sans: "monospace", mono: "monospace", heading: "monospace" },
            physics: SpringPhysics { stiffness: 200, damping: 10 },
            radius: "0px",
        },
        ThemeConfig {
            name: Theme::Academic,
            label: "Journal",
            colors: ThemeColors {
                background: "#fcfbf7",
                foreground: "#292524",
                muted: "#78716c",
                primary: "#78350f",
                border: "#e7e5e4",
            },
            fonts: ThemeFonts { sans: "serif", mono: "serif", heading: "serif" },
            physics: SpringPhysics { stiffness: 60, damping: 35 },
            radius: "0.25rem",
        },
    ]
});

pub fn all_themes() -> &'static [ThemeConfig] {
    &THEMES
}

pub fn theme_config(theme: Theme) -> &'static ThemeConfig {
    // The table covers every enum variant; see test below.
    THEMES
        .iter()
        .find(|t| t.name == theme)
        .expect("theme table covers all variants")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_IDS: &[&str] = &[
        "executive",
        "engineer",
        "creative",
        "minimalist",
        "neon",
        "video_editor",
        "3d_artist",
        "graphic_designer",
        "software_engineer",
        "photographer",
        "architect",
        "fashion",
        "musician",
        "game_dev",
        "academic",
    ];

    #[test]
    fn test_table_has_all_fifteen_themes() {
        assert_eq!(all_themes().len(), ALL_IDS.len());
        for id in ALL_IDS {
            let theme = Theme::from_id(id).expect("known id parses");
            let config = theme_config(theme);
            assert_eq!(config.name, theme);
        }
    }

    #[test]
    fn test_unknown_id_rejected() {
        assert!(Theme::from_id("vaporwave").is_none());
        assert!(Theme::from_id("").is_none());
    }

    #[test]
    fn test_theme_id_serialization_matches_lookup_ids() {
        for id in ALL_IDS {
            let theme = Theme::from_id(id).unwrap();
            let json = serde_json::to_value(theme).unwrap();
            assert_eq!(json, serde_json::Value::String(id.to_string()));
        }
    }

    #[test]
    fn test_engineer_theme_is_monospace_terminal() {
        let config = theme_config(Theme::Engineer);
        assert_eq!(config.label, "Terminal Velocity");
        assert_eq!(config.fonts.mono, "monospace");
        assert_eq!(config.physics.stiffness, 200);
    }
}
