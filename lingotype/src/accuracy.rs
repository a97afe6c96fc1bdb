//! Live accuracy scoring for practice mode.

/// Percentage of correctly typed characters against a reference string.
///
/// Comparison is strictly positional over the overlapping prefix length:
/// a single inserted or deleted character shifts every subsequent position
/// and depresses the score until the streams realign. This is a deliberate
/// simplicity trade-off, not edit distance.
///
/// Returns a value in `0..=100`; an empty comparison (nothing typed yet,
/// or an empty reference) scores 100.
///
/// # Example
///
/// ```
/// use lingotype::accuracy::score;
///
/// assert_eq!(score("hxllo", "hello"), 80);
/// assert_eq!(score("", "hello"), 100);
/// ```
pub fn score(typed: &str, reference: &str) -> u8 {
    let mut compared = 0usize;
    let mut matches = 0usize;
    for (t, r) in typed.chars().zip(reference.chars()) {
        compared += 1;
        if t == r {
            matches += 1;
        }
    }
    if compared == 0 {
        return 100;
    }
    ((matches as f64 / compared as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_match() {
        assert_eq!(score("hello", "hello"), 100);
    }

    #[test]
    fn test_single_error() {
        assert_eq!(score("hxllo", "hello"), 80);
    }

    #[test]
    fn test_nothing_typed_is_fully_accurate() {
        assert_eq!(score("", "hello"), 100);
        assert_eq!(score("", ""), 100);
    }

    #[test]
    fn test_compared_length_capped_at_shorter_string() {
        assert_eq!(score("hello world", "hello"), 100);
        assert_eq!(score("hel", "hello"), 100);
    }

    #[test]
    fn test_rounding() {
        // 10 of 11 positions match: round(10/11 * 100) = 91.
        assert_eq!(score("Hello Worle", "Hello World"), 91);
    }

    #[test]
    fn test_positional_shift_depresses_score() {
        // A dropped leading char misaligns every later position; only the
        // accidental 'l' overlap still counts.
        assert_eq!(score("ello", "hello"), 25);
    }

    #[test]
    fn test_multibyte_chars_compare_per_char() {
        assert_eq!(score("天氣", "天氣"), 100);
        assert_eq!(score("天気", "天氣"), 50);
    }
}
