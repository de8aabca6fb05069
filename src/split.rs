// src/split.rs

/// Splits freeform entry text into `(title, body)`.
///
/// The title is everything before the first newline. The body is the text
/// with the title's characters removed, so the separating newline stays at the
/// front of the body.
pub fn split_entry(text: &str) -> (String, String) {
    let title = match text.find('\n') {
        Some(idx) => &text[..idx],
        None => text,
    };
    (title.to_string(), text[title.len()..].to_string())
}

/// Rebuilds the editor text of an entry. Inverse of [`split_entry`].
pub fn compose_entry(title: &str, body: &str) -> String {
    format!("{}{}", title, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_newline_is_all_title() {
        assert_eq!(split_entry("Hello"), ("Hello".to_string(), String::new()));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split_entry(""), (String::new(), String::new()));
    }

    #[test]
    fn test_body_keeps_separating_newline() {
        let (title, body) = split_entry("T\nB");
        assert_eq!(title, "T");
        assert_eq!(body, "\nB");
    }

    #[test]
    fn test_only_first_newline_splits() {
        let (title, body) = split_entry("Day one\nwoke up\nwent out\n");
        assert_eq!(title, "Day one");
        assert_eq!(body, "\nwoke up\nwent out\n");
    }

    #[test]
    fn test_empty_title_line() {
        let (title, body) = split_entry("\nbody only");
        assert_eq!(title, "");
        assert_eq!(body, "\nbody only");
    }

    #[test]
    fn test_carriage_return_stays_in_title() {
        let (title, body) = split_entry("T\r\nB");
        assert_eq!(title, "T\r");
        assert_eq!(body, "\nB");
    }

    #[test]
    fn test_multibyte_title() {
        let (title, body) = split_entry("오늘의 일기\n맑음");
        assert_eq!(title, "오늘의 일기");
        assert_eq!(body, "\n맑음");
    }

    #[test]
    fn test_compose_restores_original_text() {
        for text in ["", "Hello", "T\nB", "T\r\nB\n", "\n\n"] {
            let (title, body) = split_entry(text);
            assert_eq!(compose_entry(&title, &body), text);
        }
    }
}
