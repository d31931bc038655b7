mod app;
mod editor;
mod ui;

use clap::Parser;

/// Terminal Sudoku board editor.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Start with an empty, fully editable grid instead of a generated
    /// puzzle with 20 given cells.
    #[arg(long)]
    blank: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = app::run(args.blank) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
