//! Study color themes.
//!
//! Maps a study's slug to a fixed presentation theme. The palette is a
//! build-time constant table; resolution is total and deterministic, so
//! the same slug always renders in the same colors.

use crate::models::theme::ColorTheme;

const TECOTECO: ColorTheme = ColorTheme::new(
    "#C3E88D",
    "rgba(195, 232, 141, 0.15)",
    "rgba(195, 232, 141, 0.3)",
    "rgba(195, 232, 141, 0.3)",
);

const ROUTINE11: ColorTheme = ColorTheme::new(
    "#82AAFF",
    "rgba(130, 170, 255, 0.15)",
    "rgba(130, 170, 255, 0.3)",
    "rgba(130, 170, 255, 0.3)",
);

const DEVLOG: ColorTheme = ColorTheme::new(
    "#F78C6C",
    "rgba(247, 140, 108, 0.15)",
    "rgba(247, 140, 108, 0.3)",
    "rgba(247, 140, 108, 0.3)",
);

const DEFAULT: ColorTheme = ColorTheme::new(
    "#C792EA",
    "rgba(199, 146, 234, 0.15)",
    "rgba(199, 146, 234, 0.3)",
    "rgba(199, 146, 234, 0.3)",
);

/// Theme for recruitment-deadline markers. Never derived from a slug, so
/// deadline entries stay visually distinct from the study's own events.
pub const RECRUITMENT: ColorTheme = ColorTheme::new(
    "#FF5370",
    "rgba(255, 83, 112, 0.15)",
    "rgba(255, 83, 112, 0.3)",
    "rgba(255, 83, 112, 0.3)",
);

struct ThemeRule {
    keywords: &'static [&'static str],
    theme: ColorTheme,
}

// First matching group wins; keywords are matched against the normalized
// slug (lowercased, separators stripped).
const THEME_RULES: &[ThemeRule] = &[
    ThemeRule {
        keywords: &["tecoteco", "테코"],
        theme: TECOTECO,
    },
    ThemeRule {
        keywords: &["11routine", "routine11", "11루틴"],
        theme: ROUTINE11,
    },
    ThemeRule {
        keywords: &["devlog", "데브로그"],
        theme: DEVLOG,
    },
];

/// Resolve the presentation theme for a study slug.
pub fn resolve_theme(slug: &str) -> ColorTheme {
    let normalized = normalize_slug(slug);
    for rule in THEME_RULES {
        if rule
            .keywords
            .iter()
            .any(|keyword| normalized.contains(keyword))
        {
            return rule.theme;
        }
    }
    DEFAULT
}

fn normalize_slug(slug: &str) -> String {
    slug.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '-' | '_') && !c.is_whitespace())
        .collect()
}
