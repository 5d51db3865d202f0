use tracing::trace;

/// Split a `name | url` line at the first `|`, trimming both sides.
///
/// Returns `None` when the separator is missing; that is the only format
/// error. Extra `|` characters belong to the url side.
pub fn parse_gift_line(line: &str) -> Option<(String, String)> {
    trace!(?line, "Parsing gift line");
    let (name, url) = line.split_once('|')?;
    Some((name.trim().to_string(), url.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_gift_line;

    #[test]
    fn splits_and_trims() {
        assert_eq!(
            parse_gift_line("Headphones | http://x"),
            Some(("Headphones".to_string(), "http://x".to_string()))
        );
    }

    #[test]
    fn missing_separator_is_rejected() {
        assert_eq!(parse_gift_line("Headphones http://x"), None);
        assert_eq!(parse_gift_line(""), None);
    }

    #[test]
    fn only_first_separator_counts() {
        assert_eq!(
            parse_gift_line("a | b | c"),
            Some(("a".to_string(), "b | c".to_string()))
        );
    }

    #[test]
    fn empty_sides_still_parse() {
        assert_eq!(parse_gift_line("|"), Some((String::new(), String::new())));
    }
}
