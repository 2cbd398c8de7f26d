use std::io::{self, Write};

use crate::error::InterpreterError;
use crate::instruction::scan;

/// Pretty-print a structured [`InterpreterError`] with caret positioning.
///
/// Error positions index the filtered instruction sequence, so the context
/// window is rendered over the filtered program rather than the raw source.
/// If `program` is `Some("braintape")`, messages are prefixed with
/// "braintape: ..." for CLI use.
pub fn print_interpreter_error(program: Option<&str>, source: &str, err: &InterpreterError) {
    let prefix_program = |msg: &str| {
        if let Some(p) = program {
            format!("{p}: {msg}")
        } else {
            msg.to_string()
        }
    };

    let filtered: String = scan(source).iter().map(|i| i.as_char()).collect();

    match err {
        InterpreterError::UnmatchedClose { position } => {
            let msg = prefix_program("Parse error: unmatched ']'");
            print_error_with_context(&msg, &filtered, *position);
        }
        InterpreterError::UnmatchedOpen { positions } => {
            let list = positions
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let msg = prefix_program("Parse error: unmatched '['");
            eprintln!("{msg} at instruction(s): {list}");
            // Caret on the outermost unmatched open.
            let first = positions.first().copied().unwrap_or(0);
            print_context_window(&filtered, first);
        }
        InterpreterError::NegativeTapePosition { ip } => {
            let msg = prefix_program("Runtime error: tape cursor moved below cell 0");
            print_error_with_context(&msg, &filtered, *ip);
        }
        InterpreterError::Io { ip, source } => {
            let msg = prefix_program(&format!("I/O error: {source}"));
            print_error_with_context(&msg, &filtered, *ip);
        }
        InterpreterError::StepLimitExceeded { limit } => {
            eprintln!(
                "{}",
                prefix_program(&format!(
                    "Execution aborted: step limit exceeded ({limit})"
                ))
            );
            let _ = io::stderr().flush();
        }
    }
}

/// Print a concise error with instruction index and a caret context window.
pub fn print_error_with_context(prefix: &str, code: &str, pos: usize) {
    eprintln!("{prefix} at instruction {pos}");
    print_context_window(code, pos);
}

/// Print a short window of the program around `pos` with a caret under it.
///
/// The filtered program is pure ASCII, so char and byte indices coincide.
fn print_context_window(code: &str, pos: usize) {
    const WINDOW_CHARS: usize = 32;

    let start = pos.saturating_sub(WINDOW_CHARS);
    let end = (pos + WINDOW_CHARS + 1).min(code.len());
    let slice = &code[start.min(end)..end];

    eprintln!("  {}", slice);

    // Caret under the exact position
    let caret_offset = pos.saturating_sub(start);
    let mut underline = String::new();
    for _ in 0..caret_offset {
        underline.push(' ');
    }
    underline.push('^');
    eprintln!("  {}", underline);
    let _ = io::stderr().flush();
}
