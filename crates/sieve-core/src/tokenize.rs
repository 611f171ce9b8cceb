//! Delimiter tokenizer

/// Delimiter used when splitting queries into tokens.
pub const DEFAULT_DELIMITER: &str = " ";

/// Split `input` on `delimiter` into an ordered list of tokens.
///
/// No trimming and no empty-token filtering: consecutive delimiters produce
/// empty tokens. An empty delimiter yields the whole input as one token.
pub fn tokenize(input: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![input.to_string()];
    }
    input.split(delimiter).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_delimiter() {
        assert_eq!(tokenize("a,b,c", ","), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_default_delimiter() {
        assert_eq!(tokenize("pie apple", DEFAULT_DELIMITER), vec!["pie", "apple"]);
    }

    #[test]
    fn test_keeps_empty_tokens() {
        assert_eq!(tokenize("a  b", " "), vec!["a", "", "b"]);
        assert_eq!(tokenize(" a", " "), vec!["", "a"]);
        assert_eq!(tokenize("", " "), vec![""]);
    }

    #[test]
    fn test_multichar_delimiter() {
        assert_eq!(tokenize("one::two", "::"), vec!["one", "two"]);
    }

    #[test]
    fn test_empty_delimiter() {
        assert_eq!(tokenize("abc", ""), vec!["abc"]);
    }
}
