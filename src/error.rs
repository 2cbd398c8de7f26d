/// Errors that can occur while interpreting Brainfuck code.
#[derive(Debug, thiserror::Error)]
pub enum InterpreterError {
    /// A `]` has no preceding unmatched `[`. Detected before execution.
    #[error("Unmatched ']' at instruction {position}")]
    UnmatchedClose { position: usize },

    /// One or more `[` are never closed. Detected before execution; every
    /// unmatched position is reported, outermost first.
    #[error("Unmatched '[' at instruction(s): {}", join_positions(.positions))]
    UnmatchedOpen { positions: Vec<usize> },

    /// A `<` drove the cursor below cell 0. Aborts execution at that
    /// instruction; output already written stands.
    #[error("Tape cursor moved to a negative position at instruction {ip}")]
    NegativeTapePosition { ip: usize },

    /// An underlying I/O error occurred on the input or output channel.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: std::io::Error,
    },

    /// Execution aborted due to the configured step limit.
    #[error("Execution aborted: step limit exceeded ({limit})")]
    StepLimitExceeded { limit: usize },
}

fn join_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
