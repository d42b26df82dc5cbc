//! Strips reasoning markup from model output.
//!
//! Some models wrap their deliberation in `<think>…</think>` or
//! `<thinking>…</thinking>`. Every closed pair is removed, case-insensitively
//! and across newlines, using the shortest span per pair. An opening tag with
//! no closing tag (or a stray closing tag) is left as-is: the text after it
//! may well be the answer, and dropping it would leave the user with nothing.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static RE_REASONING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<think>.*?</think>|<thinking>.*?</thinking>").expect("valid regex")
});

/// Remove all closed reasoning blocks from `raw` and trim the result.
///
/// Removal repeats until nothing matches, so markup that only forms a pair
/// once an inner block is gone (`<thi<think>x</think>nk>…`) is removed too and
/// `sanitize(sanitize(x)) == sanitize(x)` holds.
pub fn sanitize(raw: &str) -> String {
    let mut text = raw.to_string();
    loop {
        let next = match RE_REASONING.replace_all(&text, "") {
            Cow::Borrowed(_) => break,
            Cow::Owned(next) => next,
        };
        text = next;
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_think_block() {
        assert_eq!(sanitize("<think>secret</think>visible"), "visible");
    }

    #[test]
    fn removes_thinking_block() {
        assert_eq!(sanitize("<thinking>plan</thinking>\nMerhaba!"), "Merhaba!");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(sanitize("<THINK>x</Think>cevap"), "cevap");
        assert_eq!(sanitize("<Thinking>x</THINKING>cevap"), "cevap");
    }

    #[test]
    fn spans_newlines() {
        let raw = "<think>\nline one\nline two\n</think>\n\nMerhaba, size nasıl yardımcı olabilirim?";
        assert_eq!(sanitize(raw), "Merhaba, size nasıl yardımcı olabilirim?");
    }

    #[test]
    fn removes_every_pair_but_keeps_text_between() {
        let raw = "<think>a</think>Bir <think>b</think>iki";
        assert_eq!(sanitize(raw), "Bir iki");
    }

    #[test]
    fn pair_forming_after_inner_removal_is_removed() {
        let raw = "<thi<think>x</think>nk>hidden</think>shown";
        assert_eq!(sanitize(raw), "shown");
    }

    #[test]
    fn clean_text_only_trimmed() {
        assert_eq!(sanitize("  Merhaba  \n"), "Merhaba");
        assert_eq!(sanitize("a < b ve c > d"), "a < b ve c > d");
    }

    #[test]
    fn unterminated_open_tag_left_untouched() {
        assert_eq!(sanitize("<think>never closed"), "<think>never closed");
    }

    #[test]
    fn stray_close_tag_left_untouched() {
        assert_eq!(sanitize("answer</think>"), "answer</think>");
    }

    #[test]
    fn nested_blocks_leave_outer_remainder() {
        let raw = "<think>a<think>b</think>c</think>d";
        assert_eq!(sanitize(raw), "c</think>d");
    }

    #[test]
    fn only_reasoning_yields_empty() {
        assert_eq!(sanitize("<think>all internal</think>"), "");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "<think>secret</think>visible",
            "<think>open only",
            "x</thinking>y",
            "<think>a<think>b</think>c</think>d",
            "  plain  ",
            "",
            "<thi<think>x</think>nk>hidden</think>shown",
        ];
        for s in samples {
            let once = sanitize(s);
            assert_eq!(sanitize(&once), once, "not idempotent for {s:?}");
        }
    }
}
