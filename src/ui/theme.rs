// Tue Jan 13 2026 - Alex

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub banner: String,
    pub exit: String,
    pub arrow: String,
}

impl Glyphs {
    pub fn unicode() -> Self {
        Self {
            banner: "🔴".to_string(),
            exit: "🟡".to_string(),
            arrow: "→".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            banner: "[x]".to_string(),
            exit: "[!]".to_string(),
            arrow: "->".to_string(),
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::unicode()
    }
}
