use replicore_indices_status::conf;
use replicore_indices_status::errors::WireError;
use replicore_indices_status::run;

fn main() {
    let error = match run() {
        Ok(()) => return,
        Err(error) => error,
    };

    // Provide better error messages for cases where we can provide suggestions to the user.
    if let Some(conf::Error::PathNotFound(path)) = error.downcast_ref() {
        eprintln!("Configuration file '{}' does not exist", path);
        eprintln!("Omit the --config option to run with the default configuration");
        std::process::exit(1);
    }
    if let Some(WireError::Truncated) = error.downcast_ref() {
        eprintln!("{:?}", error);
        eprintln!("The input file ends before a complete response, was it fully written?");
        std::process::exit(1);
    }

    // Print the error in detailed format for all other cases.
    eprintln!("{:?}", error);
    std::process::exit(1);
}
