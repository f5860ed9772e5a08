use std::io;

fn main() {
    rpsls_cli::logging::init_logging();
    let code = rpsls_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
