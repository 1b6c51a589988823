//! UI strings emitted into rendered tag markup.
//!
//! The hosting site is bilingual; every string a tag renderer produces comes
//! from here so that one content string renders correctly for each audience.

/// Display language for rendered tag output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
    ZhTw,
}

impl Locale {
    /// Parse a language identifier as written in config files or `--lang`.
    /// Accepts `en`, `zh`, and `zh-TW` (or `zh_TW`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            "zh-TW" | "zh_TW" => Some(Locale::ZhTw),
            _ => None,
        }
    }

    /// The identifier form accepted by [`Locale::parse`].
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::ZhTw => "zh-TW",
        }
    }

    /// Heading shown before research-area chips.
    pub fn research_heading(self) -> &'static str {
        match self {
            Locale::En => "Research Areas:",
            Locale::Zh => "研究领域：",
            Locale::ZhTw => "研究領域：",
        }
    }

    /// Anchor text for a personal homepage link.
    pub fn visit_homepage(self) -> &'static str {
        match self {
            Locale::En => "Visit Homepage",
            Locale::Zh => "访问主页",
            Locale::ZhTw => "訪問主頁",
        }
    }

    /// Placeholder text shown while the host page resolves paper IDs.
    pub fn papers_loading(self) -> &'static str {
        match self {
            Locale::En => "Loading papers...",
            Locale::Zh => "论文加载中...",
            Locale::ZhTw => "論文加載中...",
        }
    }
}
