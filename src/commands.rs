use intcalc::calc_engine::tokenize;

/// What a line typed into one of the interactive front-ends asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Empty,
    Quit,
    Clear,
    Help,
    /// `details` with nothing to evaluate.
    MissingExpression,
    Evaluate { expression: &'a str, detailed: bool },
}

const DETAILS: &str = "details";

pub fn classify(input: &str) -> Command<'_> {
    let input = input.trim();
    if input.is_empty() {
        return Command::Empty;
    }

    match input.to_lowercase().as_str() {
        "quit" | "exit" | "q" => return Command::Quit,
        "clear" | "reset" => return Command::Clear,
        "help" => return Command::Help,
        DETAILS => return Command::MissingExpression,
        _ => {}
    }

    let (detailed, expression) = if let Some(rest) = strip_keyword_prefix(input) {
        (true, rest.trim())
    } else if let Some(rest) = strip_keyword_suffix(input) {
        (true, rest.trim())
    } else {
        (false, input)
    };

    if expression.is_empty() {
        return Command::MissingExpression;
    }

    Command::Evaluate {
        expression,
        detailed,
    }
}

fn strip_keyword_prefix(input: &str) -> Option<&str> {
    let head = input.get(..DETAILS.len() + 1)?;
    if head.eq_ignore_ascii_case("details ") {
        input.get(DETAILS.len() + 1..)
    } else {
        None
    }
}

fn strip_keyword_suffix(input: &str) -> Option<&str> {
    let split = input.len().checked_sub(DETAILS.len() + 1)?;
    let tail = input.get(split..)?;
    if tail.eq_ignore_ascii_case(" details") {
        input.get(..split)
    } else {
        None
    }
}

/// Terminal coordinates and scroll offsets are `u16`; larger values clamp.
pub fn saturating_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Re-renders an expression with one space between tokens.
#[cfg_attr(not(feature = "line"), allow(dead_code))]
pub fn format_with_spaces(expression: &str) -> String {
    tokenize(expression).to_source()
}
