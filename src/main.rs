use std::{fs, process::ExitCode};

use clap::Parser;
use minipas::{
    interpreter::{evaluator::Interpreter, parser::parse},
    visualizer::AstVisualizer,
};
use tracing::Level;

/// minipas runs programs written in a small Pascal-like language and prints
/// the resulting global variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minipas to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Writes a Graphviz DOT description of the syntax tree to this path.
    #[arg(short, long, value_name = "PATH")]
    dot: Option<String>,

    /// Logs parsing and evaluation progress to stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_writer(std::io::stderr)
                             .with_target(false)
                             .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
                             .init();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let tree = match parse(&source) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    if let Some(path) = &args.dot
       && let Err(e) = fs::write(path, AstVisualizer::new().render(&tree))
    {
        eprintln!("Failed to write the graph to '{path}': {e}");
        return ExitCode::FAILURE;
    }

    let mut interpreter = Interpreter::new();
    if let Err(e) = interpreter.interpret(&tree) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let mut globals: Vec<_> = interpreter.into_globals().into_iter().collect();
    globals.sort_by(|(a, _), (b, _)| a.cmp(b));

    println!("GLOBAL SCOPE");
    println!("------------");
    for (name, value) in globals {
        println!("{name:<10} | {value}");
    }

    ExitCode::SUCCESS
}
