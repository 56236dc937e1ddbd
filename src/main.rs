mod cli;

fn main() {
    if let Err(err) = cli::run() {
        cli::report(err.as_ref());
        std::process::exit(1);
    }
}
