use intcalc::calc_engine::{tokenize, BinaryOp, Token};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec!["".to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            let mut remaining = word;
            while !remaining.is_empty() {
                let mut chunk = String::new();
                let mut chunk_width = 0;
                let mut chunk_byte_len = 0;

                for c in remaining.chars() {
                    let char_width = UnicodeWidthChar::width(c).unwrap_or(1);
                    if chunk_width + char_width > width && !chunk.is_empty() {
                        break;
                    }
                    chunk.push(c);
                    chunk_width += char_width;
                    chunk_byte_len += c.len_utf8();
                }

                if !current_line.is_empty() {
                    lines.push(current_line.clone());
                    current_line.clear();
                    current_width = 0;
                }

                lines.push(chunk);
                remaining = &remaining[chunk_byte_len..];
            }
            continue;
        }

        if current_width + word_width + 1 > width && !current_line.is_empty() {
            lines.push(current_line.clone());
            current_line.clear();
            current_width = 0;
        }

        if !current_line.is_empty() {
            current_line.push(' ');
            current_width += 1;
        }

        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Colours an expression token by token, as the scanner sees it. Characters
/// that are not one of the four operators are flagged red.
pub fn highlight_tokens(expr: &str, base_style: Style) -> Vec<Span<'static>> {
    let operator_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let number_style = Style::default().fg(Color::LightGreen);
    let invalid_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);

    let stream = tokenize(expr);
    let mut spans = Vec::new();

    for token in stream.tokens() {
        let style = match token {
            Token::Eof => break,
            Token::Integer(_) => number_style,
            Token::Op(c) if BinaryOp::try_from(*c).is_ok() => operator_style,
            Token::Op(_) | Token::Oversized(_) => invalid_style,
            Token::LParen | Token::RParen => base_style,
        };

        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(token.to_string(), style));
    }

    spans
}
