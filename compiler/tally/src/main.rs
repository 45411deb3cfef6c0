use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::debug;
use tally::config::{Config, DEFAULT_CONFIG_FILE, HISTORY_ENV};
use tally::error::TallyError;
use tally::format::format_number;
use tally::history::{History, HistoryEntry};
use tally::repl::ReplSession;
use tally_eval::evaluate;

#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "A four-function calculator with percent and history",
    long_about = "tally evaluates arithmetic expressions with + - * /, parentheses,\n\
        unary minus and a postfix percent sign.\n\n\
        EXAMPLES:\n\
        \n  tally eval '(2+3)*4'        Evaluate one expression\n\
        \n  tally eval --record 50+10%  Evaluate and add it to history\n\
        \n  tally repl                  Start an interactive session\n\
        \n  tally history --clear       Forget past calculations"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: tally.toml in the working directory)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// History file, overriding the config file and TALLY_HISTORY
    #[arg(long, value_name = "FILE", global = true)]
    history: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate an expression and print the result
    Eval(EvalArgs),

    /// Start an interactive session
    #[command(
        long_about = "Start an interactive session.\n\n\
            Each line is typed onto the current expression and evaluated, so a\n\
            line starting with an operator continues from the last result.\n\
            Type :help for session commands."
    )]
    Repl,

    /// Show or clear the calculation history
    History(HistoryArgs),
}

#[derive(Debug, Args, Clone)]
struct EvalArgs {
    /// Expression to evaluate; several arguments are joined with spaces
    #[arg(value_name = "EXPR", required = true, num_args = 1.., allow_hyphen_values = true)]
    expression: Vec<String>,

    /// Add the calculation to the history file
    #[arg(long)]
    record: bool,
}

#[derive(Debug, Args, Clone)]
struct HistoryArgs {
    /// Remove every entry
    #[arg(long)]
    clear: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn load_config(cli: &Cli) -> Result<Config, TallyError> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = Config::load(&path)?;
    if let Some(p) = std::env::var_os(HISTORY_ENV) {
        config.history_path = PathBuf::from(p);
    }
    if let Some(p) = &cli.history {
        config.history_path = p.clone();
    }
    debug!("using config {config:?}");
    Ok(config)
}

fn run_eval(args: &EvalArgs, config: &Config) -> Result<String, TallyError> {
    let expression = args.expression.join(" ");
    let value = evaluate(&expression)?;
    if !value.is_finite() {
        return Err(TallyError::NonFiniteResult);
    }
    let result = format_number(value);
    if args.record {
        let mut history = History::load(&config.history_path, config.history_limit);
        history.push(HistoryEntry::new(expression, result.clone()));
        history.save(&config.history_path)?;
    }
    Ok(result)
}

fn run_history(args: &HistoryArgs, config: &Config) -> Result<Vec<String>, TallyError> {
    let mut history = History::load(&config.history_path, config.history_limit);
    if args.clear {
        history.clear();
        history.save(&config.history_path)?;
        return Ok(vec!["history cleared".to_string()]);
    }
    Ok(history.numbered_lines())
}

fn run_repl(config: &Config) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::with_config(config);
    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C abandons the current line only
                continue;
            }
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: {e}");
                return 1;
            }
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    match &cli.command {
        Some(Command::Eval(args)) => match run_eval(args, &config) {
            Ok(result) => {
                println!("{result}");
                0
            }
            Err(e) => {
                eprintln!("error: {e}");
                1
            }
        },
        Some(Command::History(args)) => match run_history(args, &config) {
            Ok(lines) => {
                for l in lines {
                    println!("{l}");
                }
                0
            }
            Err(e) => {
                eprintln!("error: {e}");
                1
            }
        },
        Some(Command::Repl) | None => run_repl(&config),
    }
}

fn main() {
    std::process::exit(run_cli());
}
