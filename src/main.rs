use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use franzcode::{
    interpreter::{
        evaluator::core::{Context, Outcome},
        lexer::tokenize,
        parser::core::parse,
    },
    run_source,
};

const BANNER: &str = "FranzCode — the scripting language that yells back.\n\
                      Type .help for commands, .exit to quit.";

const PROMPT_HELP: &str = "\
┌─────────────────────────────────────────────────────┐
│              FranzCode prompt commands              │
├─────────────────────────────────────────────────────┤
│  Type any FranzCode statement and press Enter.      │
│  IF and LOOP blocks run once they are closed.       │
│                                                     │
│  .help       Show this help message                 │
│  .vars       Show all current variables             │
│  .clear      Clear all variables                    │
│  .exit       Exit the prompt                        │
└─────────────────────────────────────────────────────┘";

/// FranzCode is a keyword-driven toy scripting language. Runs a `.franz`
/// script, or starts an interactive prompt when no script is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a .franz script. Starts the interactive prompt when omitted.
    script: Option<PathBuf>,

    /// Print the token stream instead of running the script.
    #[arg(long)]
    tokens: bool,

    /// Print the canonical form of the parsed program instead of running it.
    #[arg(long)]
    ast: bool,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path, args.tokens, args.ast),
        None => run_prompt(),
    }
}

/// Runs (or dumps) a script file, exiting non-zero on any pipeline error.
fn run_file(path: &Path, show_tokens: bool, show_ast: bool) {
    if path.extension() != Some(std::ffi::OsStr::new("franz")) {
        eprintln!("⚠️  Warning: '{}' doesn't have a .franz extension.", path.display());
    }

    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               path.display());
                     process::exit(1);
                 });

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(e) => report_and_exit("Lexer", &e),
    };

    if show_tokens {
        for (token, pos) in &tokens {
            println!("{pos}: {token:?}");
        }
        return;
    }

    let program = match parse(&tokens) {
        Ok(program) => program,
        Err(e) => report_and_exit("Parser", &e),
    };

    if show_ast {
        print!("{}", program.to_source());
        return;
    }

    let mut context = Context::new();
    if let Err(e) = context.run(&program) {
        report_and_exit("Runtime", &e);
    }
}

/// The interactive prompt.
///
/// Lines are buffered until every opened IF/LOOP block is closed again, then
/// the whole chunk runs against a context that survives between inputs.
/// Errors are reported and the session continues; STOP ends it.
fn run_prompt() {
    println!("{BANNER}\n");

    let mut context = Context::new();
    let mut buffer = String::new();
    let mut depth: usize = 0;

    loop {
        let prompt = if depth == 0 { "franz❯ " } else { "  ...❯ " };
        print!("{prompt}");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!("\n[FranzCode] Goodbye! 👋");
                break;
            },
            Ok(_) => {},
        }

        let trimmed = line.trim();

        if depth == 0 && trimmed.starts_with('.') {
            if !handle_meta(trimmed, &mut context) {
                break;
            }
            continue;
        }

        if trimmed.is_empty() && depth == 0 {
            continue;
        }

        depth = update_depth(depth, trimmed);
        buffer.push_str(&line);

        if depth == 0 {
            let source = std::mem::take(&mut buffer);
            if !run_chunk(&source, &mut context) {
                break;
            }
        }
    }
}

/// Tracks IF/LOOP nesting by the first word of each entered line.
fn update_depth(depth: usize, line: &str) -> usize {
    let first = line.split_whitespace()
                    .next()
                    .unwrap_or("")
                    .to_uppercase();

    match first.as_str() {
        "IF" | "LOOP" => depth + 1,
        "ENDIF" | "ENDLOOP" => depth.saturating_sub(1),
        _ => depth,
    }
}

/// Handles a `.command`. Returns `false` when the session should end.
fn handle_meta(command: &str, context: &mut Context) -> bool {
    match command {
        ".exit" => {
            println!("[FranzCode] Goodbye! 👋");
            false
        },
        ".help" => {
            println!("{PROMPT_HELP}");
            true
        },
        ".vars" => {
            let _ = run_source("DUMP", context);
            true
        },
        ".clear" => {
            *context = Context::new();
            println!("  Variables cleared.");
            true
        },
        _ => {
            println!("  Unknown command '{command}'. Type .help for options.");
            true
        },
    }
}

/// Runs one buffered chunk. Returns `false` when STOP ended the session.
fn run_chunk(source: &str, context: &mut Context) -> bool {
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(e) => {
            report("Lexer", &e);
            return true;
        },
    };

    let program = match parse(&tokens) {
        Ok(program) => program,
        Err(e) => {
            report("Parser", &e);
            return true;
        },
    };

    match context.run(&program) {
        Ok(Outcome::Completed) => true,
        Ok(Outcome::Stopped) => false,
        Err(e) => {
            report("Runtime", &e);
            true
        },
    }
}

/// Prints a stage-tagged error report.
fn report(stage: &str, error: &dyn std::fmt::Display) {
    eprintln!();
    eprintln!("  💥  FranzCode {stage} Error");
    eprintln!("  ────────────────────────────────────────");
    eprintln!("  {error}");
    eprintln!();
}

/// Prints a stage-tagged error report and exits non-zero.
fn report_and_exit(stage: &str, error: &dyn std::fmt::Display) -> ! {
    report(stage, error);
    process::exit(1);
}
