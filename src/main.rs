//! chess_rules command shell

use chess_rules::uci::Uci;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("chess_rules {} - chess rules shell", env!("CARGO_PKG_VERSION"));
    println!("Type 'd' to display board, 'move e2e4' to play, 'quit' to exit");

    let mut uci = Uci::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match uci.run(stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("chess_rules: {}", e);
            ExitCode::FAILURE
        }
    }
}
