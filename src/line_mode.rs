use crate::commands::{classify, format_with_spaces, saturating_u16, Command};
use anyhow::Result;
use intcalc::calc_engine::{evaluate_traced, EvaluationTrace};
use std::io::{stdin, stdout, Write};
use termion::{
    clear::CurrentLine as ClearLine,
    cursor::{DetectCursorPos, Goto},
    event::Key,
    input::TermRead,
    raw::IntoRawMode,
};
use tracing::info;
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "Expression: ";

fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn remove_char_at(s: &mut String, char_index: usize) {
    let byte_idx = char_index_to_byte_index(s, char_index);
    if let Some(c) = s[byte_idx..].chars().next() {
        s.drain(byte_idx..byte_idx + c.len_utf8());
    }
}

pub fn run_line() -> Result<()> {
    println!("Integer Calculator");
    println!("Supports: +, -, *, / (truncating) and parentheses");
    println!("Navigation: ←/→, Backspace/Delete, Home/End, ↑/↓ for history");
    println!("Special commands: 'quit' to exit, 'clear' to reset history");
    println!("\rAdd 'details' before expression for step-by-step evaluation\n");

    let mut stdout = stdout().into_raw_mode()?;
    let mut history: Vec<String> = Vec::new();
    let mut history_index = 0;
    info!("line mode started");

    loop {
        write!(stdout, "{}{}", ClearLine, PROMPT)?;
        stdout.flush()?;

        let mut expression = String::new();
        let mut cursor_pos = 0;
        let (_, initial_y) = stdout.cursor_pos()?;

        let stdin = stdin();
        let mut keys = stdin.keys();

        loop {
            write!(
                stdout,
                "{}{}{}{}",
                Goto(1, initial_y),
                ClearLine,
                PROMPT,
                expression
            )?;

            let typed: String = expression.chars().take(cursor_pos).collect();
            let column = PROMPT.len() + 1 + typed.width();
            write!(stdout, "{}", Goto(saturating_u16(column), initial_y))?;
            stdout.flush()?;

            let key = match keys.next() {
                Some(key) => key?,
                None => {
                    write!(stdout, "\r\n")?;
                    return Ok(());
                }
            };

            match key {
                Key::Char('\n') => break,
                Key::Ctrl('c') | Key::Ctrl('d') => {
                    write!(stdout, "\r\n")?;
                    return Ok(());
                }
                Key::Char(c) => {
                    let byte_idx = char_index_to_byte_index(&expression, cursor_pos);
                    expression.insert(byte_idx, c);
                    cursor_pos += 1;
                }
                Key::Backspace if cursor_pos > 0 => {
                    cursor_pos -= 1;
                    remove_char_at(&mut expression, cursor_pos);
                }
                Key::Delete if cursor_pos < expression.chars().count() => {
                    remove_char_at(&mut expression, cursor_pos);
                }
                Key::Left if cursor_pos > 0 => cursor_pos -= 1,
                Key::Right if cursor_pos < expression.chars().count() => cursor_pos += 1,
                Key::Home => cursor_pos = 0,
                Key::End => cursor_pos = expression.chars().count(),
                Key::Up => {
                    if history_index > 0 {
                        history_index -= 1;
                        expression = history[history_index].clone();
                        cursor_pos = expression.chars().count();
                    }
                }
                Key::Down => {
                    if history_index < history.len().saturating_sub(1) {
                        history_index += 1;
                        expression = history[history_index].clone();
                        cursor_pos = expression.chars().count();
                    } else {
                        history_index = history.len();
                        expression.clear();
                        cursor_pos = 0;
                    }
                }
                _ => {}
            }
        }

        let (expr, detailed_mode) = match classify(&expression) {
            Command::Empty => {
                write!(stdout, "\r\n")?;
                continue;
            }
            Command::Quit => {
                write!(stdout, "\r\nGoodbye!\r\n")?;
                info!("line mode finished");
                return Ok(());
            }
            Command::Clear => {
                history.clear();
                history_index = 0;
                write!(stdout, "\r\nHistory cleared\r\n\r\n")?;
                continue;
            }
            Command::Help => {
                write!(stdout, "\r\nType an expression such as (2 + 3) * 4, or 'quit'\r\n\r\n")?;
                continue;
            }
            Command::MissingExpression => {
                write!(stdout, "\r\nPlease enter a valid expression after 'details'\r\n\r\n")?;
                continue;
            }
            Command::Evaluate {
                expression,
                detailed,
            } => (expression.to_string(), detailed),
        };

        history.push(expression.trim().to_string());
        history_index = history.len();

        let mut trace = EvaluationTrace::new(detailed_mode);
        let formatted_expr = format_with_spaces(&expr);

        match evaluate_traced(&expr, &mut trace) {
            Ok(result) => {
                write!(stdout, "\r\n  {} = {}\r\n", formatted_expr, result)?;

                if detailed_mode && !trace.steps.is_empty() {
                    write!(stdout, "\r\n  Step-by-step evaluation:\r\n")?;
                    for (i, step) in trace.steps.iter().enumerate() {
                        write!(
                            stdout,
                            "\r  Step {}: {} = {}\r\n",
                            i + 1,
                            step.operation,
                            step.result
                        )?;
                    }
                }
                write!(stdout, "\r\n")?;
            }
            Err(e) => {
                write!(stdout, "\r\n  {} = Error: {}\r\n\r\n", formatted_expr, e)?;
            }
        }
    }
}
