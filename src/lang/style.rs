use super::Rule;

#[derive(Debug, Copy, Clone, Default, PartialEq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Style {
    Symbol,
    Call,
    Number,
    Operators,
    Assign,
    Brackets,
    Comment,
    #[default]
    None,
}

impl From<Rule> for Style {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::hl_sym => Self::Symbol,
            Rule::hl_callname | Rule::hl_method => Self::Call,
            Rule::hl_num => Self::Number,
            Rule::hl_ops => Self::Operators,
            Rule::hl_assign => Self::Assign,
            Rule::hl_brackets => Self::Brackets,
            Rule::hl_comment => Self::Comment,
            _ => Self::None,
        }
    }
}

#[cfg(feature = "repl")]
impl From<Style> for nu_ansi_term::Style {
    fn from(val: Style) -> Self {
        use super::Style::*;
        use nu_ansi_term::{Color, Style};

        match val {
            Symbol => Style::new().fg(Color::White).bold(),
            Call => Style::new().fg(Color::Rgb(122, 162, 247)).italic(),
            Number => Style::new().fg(Color::Rgb(240, 158, 130)),
            Comment => Style::new().fg(Color::Rgb(100, 100, 100)),
            Assign => Style::new().fg(Color::Rgb(187, 154, 246)),
            Brackets | Operators => Style::new().fg(Color::Rgb(170, 170, 190)),
            None => Style::new().fg(Color::White),
        }
    }
}
