// Tue Jan 13 2026 - Alex

pub struct StringUtils;

impl StringUtils {
    /// Greedy word wrap on single spaces. Words are never split, so a word
    /// longer than `width` ends up alone on its own line.
    pub fn wrap(text: &str, width: usize) -> String {
        let mut result = String::with_capacity(text.len());
        let mut line_len = 0usize;
        let mut line_words = 0usize;

        for (i, word) in text.split(' ').enumerate() {
            let word_len = word.chars().count();

            if i > 0 {
                if line_words > 0 && line_len + 1 + word_len > width {
                    result.push('\n');
                    line_len = 0;
                    line_words = 0;
                } else {
                    result.push(' ');
                    line_len += 1;
                }
            }

            result.push_str(word);
            line_len += word_len;
            line_words += 1;
        }

        result
    }

    pub fn indent(text: &str, padding: isize) -> String {
        let pad = " ".repeat(padding.max(0) as usize);

        text.trim()
            .split('\n')
            .map(|line| format!("{}{}", pad, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// ECMAScript-style identifier check used for unquoted object keys.
    pub fn is_valid_identifier(s: &str) -> bool {
        let mut chars = s.chars();

        match chars.next() {
            Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
            _ => return false,
        }

        chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    }

    pub fn count_occurrences(s: &str, pattern: char) -> usize {
        s.chars().filter(|&c| c == pattern).count()
    }
}

pub fn wrap(text: &str, width: usize) -> String {
    StringUtils::wrap(text, width)
}

pub fn indent(text: &str, padding: isize) -> String {
    StringUtils::indent(text, padding)
}
