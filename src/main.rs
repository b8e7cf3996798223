fn main() {
    if let Err(err) = mailing_labels::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
