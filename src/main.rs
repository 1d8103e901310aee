use structra::{
    cli::{get_args, get_log_level_from_verbose, run},
    constants::exit_codes,
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .init();

    // Panics end the process like any other fatal error.
    std::panic::set_hook(Box::new(|info| {
        eprintln!("{}", structra::output::error_line(&format!("Unexpected failure: {info}")));
        std::process::exit(exit_codes::FAILURE);
    }));

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(err) => default_error_handler(err),
    }
}
