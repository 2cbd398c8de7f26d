use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::InterpreterError;
use crate::instruction::{Instruction, scan};
use crate::jumps::JumpTable;

/// The interpreter's view of the outside world.
///
/// `read_line` returns the next line of input without its terminator; an
/// empty string signals an empty line or end of input, both of which the
/// interpreter treats the same (the cell is set to 0). `write_char` emits one
/// character; characters must appear in the order they were written.
pub trait Channel {
    fn read_line(&mut self) -> io::Result<String>;
    fn write_char(&mut self, ch: char) -> io::Result<()>;
}

/// A [`Channel`] over the process's stdin and stdout, used by the CLI.
pub struct StdChannel;

impl Channel for StdChannel {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        trim_terminator(&mut line);
        Ok(line)
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{ch}")?;
        stdout.flush()
    }
}

/// A [`Channel`] over arbitrary reader/writer pairs, for embedding and tests.
pub struct IoChannel<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the channel, returning the writer with everything written.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Channel for IoChannel<R, W> {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        trim_terminator(&mut line);
        Ok(line)
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        write!(self.writer, "{ch}")
    }
}

fn trim_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// A Brainfuck interpreter over a grow-on-demand tape.
///
/// The interpreter maintains:
/// - the filtered program as a `Vec<Instruction>`,
/// - a memory tape that starts as a single zeroed cell and grows one cell at
///   a time as the cursor moves right past the end,
/// - a cursor indexing into that tape,
/// - a queue of pending input characters, refilled one line at a time.
pub struct Interpreter {
    program: Vec<Instruction>,
    tape: Vec<u8>,
    cursor: usize,
    pending_input: VecDeque<char>,
    max_steps: Option<usize>,
}

impl Interpreter {
    /// Create a new interpreter from Brainfuck `source`.
    ///
    /// Comment characters are dropped here; bracket validation happens when
    /// [`run`](Self::run) is called, before any instruction executes.
    pub fn new(source: &str) -> Self {
        Self {
            program: scan(source),
            tape: vec![0],
            cursor: 0,
            pending_input: VecDeque::new(),
            max_steps: None,
        }
    }

    /// Abort execution with [`InterpreterError::StepLimitExceeded`] once
    /// `limit` instructions have executed. No limit is imposed by default.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.max_steps = Some(limit);
        self
    }

    /// The memory tape. Useful for inspecting state after a run.
    pub fn tape(&self) -> &[u8] {
        &self.tape
    }

    /// The current cursor position on the tape.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Execute the program against `io` until it halts or fails.
    ///
    /// Bracket errors surface before execution starts; runtime errors abort
    /// mid-execution, and output already written through `io` stands.
    pub fn run(&mut self, io: &mut dyn Channel) -> Result<(), InterpreterError> {
        let jumps = JumpTable::resolve(&self.program)?;

        let mut ip = 0;
        let mut steps: usize = 0;

        while ip < self.program.len() {
            if let Some(limit) = self.max_steps {
                if steps >= limit {
                    return Err(InterpreterError::StepLimitExceeded { limit });
                }
            }

            match self.program[ip] {
                Instruction::IncrementCell => {
                    self.tape[self.cursor] = self.tape[self.cursor].wrapping_add(1);
                }
                Instruction::DecrementCell => {
                    self.tape[self.cursor] = self.tape[self.cursor].wrapping_sub(1);
                }
                Instruction::MoveLeft => {
                    if self.cursor == 0 {
                        return Err(InterpreterError::NegativeTapePosition { ip });
                    }
                    self.cursor -= 1;
                }
                Instruction::MoveRight => {
                    self.cursor += 1;
                    if self.cursor == self.tape.len() {
                        self.tape.push(0);
                    }
                }
                Instruction::OutputByte => {
                    let ch = char::from(self.tape[self.cursor]);
                    io.write_char(ch)
                        .map_err(|source| InterpreterError::Io { ip, source })?;
                }
                Instruction::InputByte => {
                    if self.pending_input.is_empty() {
                        let line = io
                            .read_line()
                            .map_err(|source| InterpreterError::Io { ip, source })?;
                        self.pending_input.extend(line.chars());
                    }
                    self.tape[self.cursor] = match self.pending_input.pop_front() {
                        // Low byte of the code point, so the cell stays in 0..=255.
                        Some(ch) => ch as u32 as u8,
                        None => 0,
                    };
                }
                Instruction::LoopOpen => {
                    if self.tape[self.cursor] == 0 {
                        ip = jumps.target(ip).expect("resolved bracket");
                    }
                }
                Instruction::LoopClose => {
                    if self.tape[self.cursor] != 0 {
                        ip = jumps.target(ip).expect("resolved bracket");
                    }
                }
            }

            steps += 1;
            // Move to the next instruction; applies after a jump as well.
            ip += 1;
        }

        Ok(())
    }
}

/// Filter `source`, validate its brackets, and execute it against `io`.
///
/// Convenience wrapper over [`Interpreter`] for callers that do not need to
/// inspect the tape afterwards.
pub fn run(source: &str, io: &mut dyn Channel) -> Result<(), InterpreterError> {
    Interpreter::new(source).run(io)
}
