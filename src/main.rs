use clap::Parser as ClapParser;
use rusty_scene::frontend::{Lexer, Parser};
use rusty_scene::{evaluate, SceneError};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io, process};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const EXIT_DATA_ERROR: i32 = 65;
const EXIT_IO_ERROR: i32 = 74;

/// Evaluates a scene description and prints the declared objects.
#[derive(ClapParser, Debug)]
#[clap(version, about)]
struct Args {
    /// Scene file to evaluate. Reads standard input when omitted.
    path: Option<PathBuf>,

    /// Only print objects of this class, e.g. SPHERE.
    #[clap(long)]
    class: Option<String>,

    /// Print the parsed tree instead of evaluating it.
    #[clap(long)]
    dump_ast: bool,

    /// Print the token stream instead of evaluating it.
    #[clap(long)]
    tokens: bool,

    /// Raise log verbosity (-v debug, -vv trace).
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let source = match read_source(args.path.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read scene: {}", e);
            process::exit(EXIT_IO_ERROR);
        }
    };

    if let Err(e) = run(&args, &source) {
        report_error(&e);
        process::exit(EXIT_DATA_ERROR);
    }
}

fn init_tracing(verbose: usize) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn run(args: &Args, source: &str) -> Result<(), SceneError> {
    if args.tokens {
        for token in Lexer::new(source).iter() {
            println!("{} {}", token.span.start_pos, token.token);
        }
        return Ok(());
    }

    let file = Parser::new(source).parse().map_err(SceneError::Parse)?;

    if args.dump_ast {
        print!("{}", file);
        return Ok(());
    }

    let values = evaluate(&file)?;
    debug!(classes = values.len(), "evaluated scene");

    match &args.class {
        Some(class) => {
            for entity in values.get(class).unwrap_or_default() {
                println!("{}", entity);
            }
        }
        None => print!("{}", values),
    }

    Ok(())
}

fn report_error(error: &SceneError) {
    match error {
        SceneError::Parse(errors) => {
            for e in errors {
                eprintln!("Parse error: {}", e);
            }
        }
        SceneError::Evaluate(e) => eprintln!("Runtime error: {}", e),
    }
}
