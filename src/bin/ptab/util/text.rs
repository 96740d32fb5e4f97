/// Greedy word wrap; always yields at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if line_width == 0 {
            line.push_str(word);
            line_width = word_width;
        } else if line_width + 1 + word_width <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_width = word_width;
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }

    lines
}

/// Shortens to `max_len` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 1 {
        return "…".repeat(max_len);
    }

    let kept: String = s.chars().take(max_len - 1).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_fits_on_one_line() {
        assert_eq!(wrap("effective nuclear charge", 30), vec![
            "effective nuclear charge"
        ]);
    }

    #[test]
    fn wrap_breaks_at_word_boundaries() {
        assert_eq!(wrap("no element matches query", 10), vec![
            "no element",
            "matches",
            "query"
        ]);
    }

    #[test]
    fn wrap_empty_yields_one_line() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn truncate_leaves_short_strings() {
        assert_eq!(truncate("Iron", 10), "Iron");
        assert_eq!(truncate("Iron", 4), "Iron");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("Rutherfordium", 8), "Rutherf…");
    }
}
