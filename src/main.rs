use std::fs;

use clap::Parser;
use parsum::{
    evaluate, lex, parse,
    util::logger::{self, LogLevel},
};

/// parsum evaluates integer expressions made of `+`, `-` and parentheses,
/// such as `(13+4)-(12+1)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells parsum to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints every token before the result.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the fully parenthesized expression tree before the result.
    #[arg(short, long)]
    ast: bool,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();
    logger::init_with_level(LogLevel::from_verbosity(args.verbose));

    let source = if args.file {
        tracing::info!(path = %args.contents, "reading expression from file");
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        tracing::info!("reading expression from the command line");
        args.contents.clone()
    };

    if let Err(e) = run(source.trim(), &args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(source: &str, args: &Args) -> Result<(), parsum::Error> {
    let tokens = lex(source)?;
    if args.tokens {
        for token in &tokens {
            println!("{token}");
        }
    }

    let expr = parse(&tokens)?;
    if args.ast {
        println!("{expr}");
    }

    println!("{}", evaluate(&expr)?);
    Ok(())
}
