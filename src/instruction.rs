/// The eight Brainfuck instructions.
///
/// A program, once filtered, is a `Vec<Instruction>` indexed by instruction
/// pointer. The enum is closed and matched exhaustively, so extending the
/// instruction set cannot silently leave a kind unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `+` — add 1 to the current cell, wrapping at 256.
    IncrementCell,
    /// `-` — subtract 1 from the current cell, wrapping at 0.
    DecrementCell,
    /// `<` — move the cursor one cell left; fatal below cell 0.
    MoveLeft,
    /// `>` — move the cursor one cell right, growing the tape on demand.
    MoveRight,
    /// `.` — write the current cell as a character.
    OutputByte,
    /// `,` — read one character into the current cell.
    InputByte,
    /// `[` — jump past the matching `]` when the current cell is 0.
    LoopOpen,
    /// `]` — jump back to the matching `[` when the current cell is not 0.
    LoopClose,
}

impl Instruction {
    /// Map a character to its instruction, or `None` for a comment character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Instruction::IncrementCell),
            '-' => Some(Instruction::DecrementCell),
            '<' => Some(Instruction::MoveLeft),
            '>' => Some(Instruction::MoveRight),
            '.' => Some(Instruction::OutputByte),
            ',' => Some(Instruction::InputByte),
            '[' => Some(Instruction::LoopOpen),
            ']' => Some(Instruction::LoopClose),
            _ => None,
        }
    }

    /// The source character for this instruction.
    pub fn as_char(self) -> char {
        match self {
            Instruction::IncrementCell => '+',
            Instruction::DecrementCell => '-',
            Instruction::MoveLeft => '<',
            Instruction::MoveRight => '>',
            Instruction::OutputByte => '.',
            Instruction::InputByte => ',',
            Instruction::LoopOpen => '[',
            Instruction::LoopClose => ']',
        }
    }
}

/// Keep only Brainfuck instruction characters, preserving their order.
///
/// Everything else is a comment and is dropped silently; any input, including
/// the empty string, is valid.
pub fn scan(source: &str) -> Vec<Instruction> {
    source.chars().filter_map(Instruction::from_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_drops_comment_characters() {
        let program = scan("read a byte , then echo it . done");
        assert_eq!(
            program,
            vec![Instruction::InputByte, Instruction::OutputByte]
        );
    }

    #[test]
    fn scan_preserves_instruction_order() {
        let program = scan("+[->.]<,");
        let rendered: String = program.iter().map(|i| i.as_char()).collect();
        assert_eq!(rendered, "+[->.]<,");
    }

    #[test]
    fn scan_of_empty_or_comment_only_source_is_empty() {
        assert!(scan("").is_empty());
        assert!(scan("this text has no instructions at all!").is_empty());
    }

    #[test]
    fn from_char_and_as_char_agree() {
        for c in ['+', '-', '<', '>', '.', ',', '[', ']'] {
            let instr = Instruction::from_char(c).expect("instruction character");
            assert_eq!(instr.as_char(), c);
        }
        assert!(Instruction::from_char('a').is_none());
    }
}
