use pipeview::cli::{is_user_error, run, user_error, EXIT_INTERNAL_ERROR};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        if is_user_error(&e) {
            user_error(&format!("{:#}", e));
        }

        eprintln!("Internal error: {}", e);
        // Show error chain if available
        let mut source = e.source();
        if source.is_some() {
            eprintln!("\nCaused by:");
            let mut indent = 1;
            while let Some(err) = source {
                eprintln!("{:indent$}  {}", "", err);
                source = err.source();
                indent += 1;
            }
        }
        std::process::exit(EXIT_INTERNAL_ERROR);
    }
}
