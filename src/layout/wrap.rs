use crate::font::Font;
use crate::units::Pt;

const TABSIZE: usize = 4;

/// Split `text` into lines no wider than `max_width` when rendered with
/// `font` at `size`.
///
/// Explicit newlines always break; CRLF is normalized and tabs expand to
/// four spaces. Within a line the split is greedy at the last space that
/// still fits; a single word wider than `max_width` is split at character
/// granularity so no line ever overflows. The space a wrap breaks on is
/// consumed. Always returns at least one line, even for empty input, and a
/// line that already fits comes back unchanged.
pub fn wrap_lines(font: &Font, size: Pt, text: &str, max_width: Pt) -> Vec<String> {
    let text = text.replace('\t', &" ".repeat(TABSIZE));
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    text.split('\n')
        .flat_map(|hard_line| wrap_hard_line(font, size, hard_line, max_width))
        .collect()
}

fn wrap_hard_line(font: &Font, size: Pt, line: &str, max_width: Pt) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = line.chars().collect();
    let mut lines: Vec<String> = Vec::new();
    let mut start = 0usize;
    let mut last_space: Option<usize> = None;
    let mut width = Pt(0.0);
    let mut i = 0usize;

    while i < chars.len() {
        let ch = chars[i];
        let advance = font.char_width(ch, size);

        if width + advance > max_width && i > start {
            if let Some(space) = last_space {
                // break at the last space that fit, consuming it
                lines.push(chars[start..space].iter().collect());
                start = space + 1;
                i = start;
            } else {
                // a single overlong word: hard split before this character
                lines.push(chars[start..i].iter().collect());
                start = i;
            }
            width = Pt(0.0);
            last_space = None;
            continue;
        }

        if ch == ' ' {
            last_space = Some(i);
        }
        width += advance;
        i += 1;
    }

    lines.push(chars[start..].iter().collect());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corefont::CoreFont;
    use pretty_assertions::assert_eq;

    fn helvetica() -> Font {
        Font::core(CoreFont::Helvetica)
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        assert_eq!(
            wrap_lines(&helvetica(), Pt(10.0), "", Pt(46.0)),
            vec![String::new()]
        );
    }

    #[test]
    fn fitting_text_comes_back_unchanged() {
        let lines = wrap_lines(&helvetica(), Pt(10.0), "hello", Pt(46.0));
        assert_eq!(lines, vec!["hello".to_string()]);
        // wrapping the wrapped output again is a fixed point
        assert_eq!(
            wrap_lines(&helvetica(), Pt(10.0), &lines[0], Pt(46.0)),
            lines
        );
    }

    #[test]
    fn breaks_at_the_last_fitting_space() {
        // "hello world" at 10pt Helvetica is 47.79pt wide, each word fits 46pt
        let lines = wrap_lines(&helvetica(), Pt(10.0), "hello world", Pt(46.0));
        assert_eq!(lines, vec!["hello".to_string(), "world".to_string()]);
    }

    #[test]
    fn overlong_word_splits_at_character_granularity() {
        // 'a' is 5.56pt at 10pt, so two fit within 12pt
        let lines = wrap_lines(&helvetica(), Pt(10.0), "aaaa", Pt(12.0));
        assert_eq!(lines, vec!["aa".to_string(), "aa".to_string()]);
    }

    #[test]
    fn explicit_newlines_always_break() {
        let lines = wrap_lines(&helvetica(), Pt(10.0), "a\n\nb", Pt(46.0));
        assert_eq!(
            lines,
            vec!["a".to_string(), String::new(), "b".to_string()]
        );
    }

    #[test]
    fn line_count_is_never_zero_and_deterministic() {
        let font = helvetica();
        let text = "The quick brown fox jumps over the lazy dog";
        let first = wrap_lines(&font, Pt(10.0), text, Pt(60.0));
        let second = wrap_lines(&font, Pt(10.0), text, Pt(60.0));
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
