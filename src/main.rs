fn main() {
    if let Err(err) = trendlens::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
