use braintape::{Interpreter, StdChannel, cli_util};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "braintape",
    version,
    about = "Run a Brainfuck program on an unbounded, grow-on-demand tape",
    after_help = r#"Notes:
- The program may come from positional CODE parts (concatenated), --file,
  or stdin when neither is given.
- Input (`,`) reads one line at a time and hands the program one character
  per instruction; an empty line (or end of input) yields 0.
- Any characters outside of Brainfuck's ><+-.,[] are treated as comments."#
)]
struct Cli {
    /// Read the program text from PATH instead of positional CODE
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Abort execution after N instructions
    #[arg(long = "max-steps", value_name = "N")]
    max_steps: Option<usize>,

    /// Concatenated program text parts
    #[arg(value_name = "CODE", trailing_var_arg = true)]
    code: Vec<String>,
}

const PROGRAM: &str = "braintape";

fn run_cli(cli: Cli) -> i32 {
    if cli.file.is_some() && !cli.code.is_empty() {
        eprintln!("{PROGRAM}: cannot use positional CODE together with --file");
        let _ = io::stderr().flush();
        return 2;
    }

    let source = if let Some(path) = &cli.file {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{PROGRAM}: failed to read program file as UTF-8: {e}");
                let _ = io::stderr().flush();
                return 1;
            }
        }
    } else if !cli.code.is_empty() {
        cli.code.join("")
    } else {
        // Bare mode: the program itself arrives on stdin. Anything left on
        // stdin afterwards is end-of-input as far as `,` is concerned.
        let mut s = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut s) {
            eprintln!("{PROGRAM}: failed reading program from stdin: {e}");
            let _ = io::stderr().flush();
            return 1;
        }
        s
    };

    let mut bf = Interpreter::new(&source);
    if let Some(limit) = cli.max_steps {
        bf = bf.with_step_limit(limit);
    }

    if let Err(err) = bf.run(&mut StdChannel) {
        cli_util::print_interpreter_error(Some(PROGRAM), &source, &err);
        let _ = io::stderr().flush();
        return 1;
    }

    let _ = io::stdout().flush();
    0
}

fn main() {
    let cli = Cli::parse();
    process::exit(run_cli(cli));
}
