// Extractive summary: the first, middle and last sentence.
// Positional only; no sentence scoring.

/// Returns `text` untouched when it has three sentences or fewer. Otherwise
/// joins sentences `0`, `n / 2` and `n - 1` with `". "` and a final period.
///
/// The picks may repeat content for small `n` and are not deduplicated.
pub fn summarize<S: AsRef<str>>(text: &str, sentences: &[S]) -> String {
    let n = sentences.len();
    if n <= 3 {
        return text.to_string();
    }

    let picks = [0, n / 2, n - 1];
    let mut summary = picks
        .iter()
        .map(|&i| sentences[i].as_ref())
        .collect::<Vec<&str>>()
        .join(". ");
    summary.push('.');
    summary
}

pub fn summarize_text(text: &str) -> String {
    summarize(text, &super::tokenizer::split_sentences(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_short_text() {
        let short_text = "This is a short text. It has two sentences!";
        assert_eq!(summarize_text(short_text), short_text);
    }

    #[test]
    fn test_summarize_empty_text() {
        assert_eq!(summarize_text(""), "");
    }

    #[test]
    fn test_summarize_picks_first_middle_last() {
        let text = "One. Two. Three. Four. Five.";
        // untrimmed pieces keep their leading space
        assert_eq!(summarize_text(text), "One.  Three.  Five.");
    }

    #[test]
    fn test_four_sentences_use_index_two() {
        let sentences = vec!["a", "b", "c", "d"];
        assert_eq!(summarize("ignored", &sentences), "a. c. d.");
    }

    #[test]
    fn test_three_sentences_returned_verbatim() {
        let text = "Alpha!  Beta?? Gamma...";
        assert_eq!(summarize_text(text), text);
    }
}
