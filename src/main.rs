//! rBankroll main entrypoint.

use rbankroll::run;

fn main() {
    env_logger::init();

    println!();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if e.is_gateway() {
            eprintln!("Check your connection and the backend settings (`rbankroll config --print`).");
        }
        std::process::exit(1);
    }
}
