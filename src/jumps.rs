use crate::error::InterpreterError;
use crate::instruction::Instruction;

/// Matching-bracket positions for a filtered program.
///
/// `table[i]` holds the matching index for a `[` or `]` at instruction `i`,
/// and `None` at every non-bracket position. Built once before execution so
/// branch dispatch is an O(1) lookup, and validated so execution never sees
/// an unpaired bracket.
#[derive(Debug)]
pub struct JumpTable {
    table: Vec<Option<usize>>,
}

impl JumpTable {
    /// Scan the program once, pairing each `[` with its `]`.
    ///
    /// A `]` with no open `[` on the stack fails immediately with
    /// [`InterpreterError::UnmatchedClose`]. Any `[` still open after the
    /// scan fails with [`InterpreterError::UnmatchedOpen`], reporting every
    /// remaining position in the order they were pushed (outermost first).
    pub fn resolve(program: &[Instruction]) -> Result<Self, InterpreterError> {
        let mut table: Vec<Option<usize>> = vec![None; program.len()];
        let mut stack: Vec<usize> = Vec::new();

        for (i, instr) in program.iter().enumerate() {
            match instr {
                Instruction::LoopOpen => stack.push(i),
                Instruction::LoopClose => {
                    let Some(open_index) = stack.pop() else {
                        return Err(InterpreterError::UnmatchedClose { position: i });
                    };
                    table[open_index] = Some(i);
                    table[i] = Some(open_index);
                }
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(InterpreterError::UnmatchedOpen { positions: stack });
        }

        Ok(Self { table })
    }

    /// The matching bracket position for the bracket at `ip`, if any.
    pub fn target(&self, ip: usize) -> Option<usize> {
        self.table.get(ip).copied().flatten()
    }
}
