//! Grove binary entry point.

fn main() {
    if let Err(e) = grove::cli::run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
