use nu_ansi_term::Style;
use reedline::{Highlighter, StyledText};

use crate::lang::parse_highlight;

pub struct LangHighlighter;

impl Highlighter for LangHighlighter {
    fn highlight(&self, line: &str, _pos: usize) -> StyledText {
        let mut styled_text = StyledText::new();
        match parse_highlight(line) {
            Ok(pairs) => {
                for (text, style) in pairs.into_iter() {
                    styled_text.push((style.into(), text));
                }
                styled_text
            }
            Err(_) => {
                styled_text.push((Style::new(), line.to_string()));
                styled_text
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn highlighting_preserves_text() {
        let line = "v3 <- -3 * (v1 + 2 * v2).slice(0, 2) / 2 # done";
        let styled = LangHighlighter.highlight(line, 0);
        let text: String = styled.buffer.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(text, line);
    }
}
