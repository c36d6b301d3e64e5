use averror::{describe, is_eof, to_av_error, AVERROR_EOF};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Inspect ffmpeg error codes
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an errno value into an AVERROR code
    Convert {
        #[arg(allow_negative_numbers = true)]
        errno: i32,
    },
    /// Check whether a code is the end of file sentinel
    IsEof {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
    /// Print ffmpeg's description of a code
    Describe {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
    /// Print the end of file sentinel
    Eof,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { errno } => {
            let code = to_av_error(errno);
            log::debug!("converted errno {} to {}", errno, code);
            println!("{}", code);
        }
        Command::IsEof { code } => {
            let eof = is_eof(code);
            println!("{}", eof);
            if !eof {
                return ExitCode::FAILURE;
            }
        }
        Command::Describe { code } => println!("{}", describe(code)),
        Command::Eof => println!("{}", AVERROR_EOF),
    }

    ExitCode::SUCCESS
}
