#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = slidenav_harness::run_from_env() {
        eprintln!("slidenav-replay: {error}");
        std::process::exit(error.exit_code());
    }
}
