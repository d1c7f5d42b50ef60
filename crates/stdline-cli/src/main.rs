//! Stdline CLI tool
//!
//! Command-line front end for the stdline reader: echo stdin line by
//! line, or run one of the interactive prompts from a script.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use stdline::Readline;

#[derive(Parser)]
#[command(name = "stdline")]
#[command(about = "Line-oriented stdin reading and prompting", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Echo stdin line by line, newline-normalized and UTF-8-repaired
    Cat {
        /// Keep line terminators instead of stripping them
        #[arg(short, long)]
        keep_newline: bool,
        /// Number the output lines
        #[arg(short, long)]
        number: bool,
    },

    /// Show a prompt and print the answer; exit 1 on end-of-stream
    Prompt {
        /// Prompt text
        text: String,
        /// History file to load before prompting and save after
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Ask a yes/no question; the exit code encodes the answer
    Confirm {
        /// Question text
        text: String,
    },

    /// Present a numbered menu and print the chosen option
    Select {
        /// Menu heading
        text: String,
        /// Menu entries
        #[arg(required = true)]
        options: Vec<String>,
    },

    /// Prompt with echo disabled and print the entry
    Password {
        /// Prompt text
        text: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Cat {
            keep_newline,
            number,
        } => cat(keep_newline, number),
        Commands::Prompt { text, history } => prompt_command(&text, history.as_deref())?,
        Commands::Confirm { text } => {
            if stdline::confirm(&text) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Select { text, options } => {
            let refs: Vec<&str> = options.iter().map(String::as_str).collect();
            match stdline::select(&text, &refs) {
                Some(index) => {
                    println!("{}", options[index]);
                    ExitCode::SUCCESS
                }
                None => ExitCode::FAILURE,
            }
        }
        Commands::Password { text } => match stdline::password(&text) {
            Some(entry) => {
                println!("{}", entry);
                ExitCode::SUCCESS
            }
            None => ExitCode::FAILURE,
        },
    };

    Ok(code)
}

fn prompt_command(text: &str, history: Option<&Path>) -> Result<ExitCode> {
    let mut rl = Readline::new();
    if let Some(path) = history {
        if path.exists() {
            rl.load_history(path)?;
        }
    }
    let answer = match rl.prompt(text) {
        Some(answer) => answer,
        None => return Ok(ExitCode::FAILURE),
    };
    if let Some(path) = history {
        rl.save_history(path)?;
    }
    println!("{}", answer);
    Ok(ExitCode::SUCCESS)
}

fn cat(keep_newline: bool, number: bool) -> ExitCode {
    let mut count = 0u64;
    while let Some(line) = stdline::read_line(!keep_newline) {
        count += 1;
        if number {
            print!("{:>6}\t{}", count, line);
        } else {
            print!("{}", line);
        }
        if !keep_newline {
            println!();
        }
    }
    ExitCode::SUCCESS
}
