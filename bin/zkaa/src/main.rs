fn main() {
    if let Err(err) = zkaa::cli::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
