//! A tiny Brainfuck interpreter library.
//!
//! This crate provides a minimal Brainfuck interpreter that operates on a
//! memory tape growing on demand from a single zeroed cell, with a single
//! data cursor.
//!
//! Features and behaviors:
//! - Any character outside the instruction set `><+-.,[]` is a comment and
//!   is silently discarded before execution.
//! - The tape starts as one zeroed cell and grows by one cell whenever `>`
//!   moves the cursor past the current end; there is no upper bound.
//! - Moving left from cell 0 is a fatal error.
//! - Cell arithmetic wraps modulo 256.
//! - Input `,` consumes one character per instruction from a line-buffered
//!   queue, reading a fresh line from the input channel only when the queue
//!   is empty; an empty line (or end of input) sets the current cell to 0.
//! - Output `.` writes the character whose code point is the current cell
//!   value, in execution order.
//! - Unmatched brackets are reported before any instruction executes.
//!
//! Quick start:
//!
//! ```no_run
//! use braintape::{run, StdChannel};
//!
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
//! run(code, &mut StdChannel).expect("program should run");
//! ```

pub mod cli_util;
mod error;
mod instruction;
mod interpreter;
mod jumps;

pub use error::InterpreterError;
pub use instruction::{Instruction, scan};
pub use interpreter::{Channel, Interpreter, IoChannel, StdChannel, run};
pub use jumps::JumpTable;
