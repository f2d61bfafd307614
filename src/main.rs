use clap::Parser;
use log::LevelFilter;
use xiangqi_rules::{Config, Language, Side};

mod console;

#[derive(Parser)]
#[command(name = "xiangqi", about = "Play Xiangqi on the console")]
struct Arguments {
    /// Piece labels: `en` letters or `ch` characters
    #[arg(short, long, default_value = "en")]
    language: Language,
    /// Let Black answer every move with a random legal move
    #[arg(long)]
    auto_black: bool,
    /// Seed for the automatic opponent
    #[arg(long)]
    seed: Option<u64>,
    /// Black moves first
    #[arg(long)]
    black_first: bool,
    #[arg(long)]
    no_color: bool,
    /// -v for debug logs, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let arguments = Arguments::parse();

    let level = match arguments.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = Config {
        first_to_move: if arguments.black_first { Side::Black } else { Side::Red },
        label_language: arguments.language,
        colored_output: !arguments.no_color,
    };
    let options = console::Options {
        auto_black: arguments.auto_black,
        seed: arguments.seed,
    };

    if let Err(err) = console::run(config, options) {
        eprintln!("console stopped: {err}");
        std::process::exit(1);
    }
}
