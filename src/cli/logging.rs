use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize logging: `debug` wins over `quiet`, Info otherwise
pub fn init_logging(debug: bool, quiet: bool) -> LevelFilter {
    let log_level = if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };

    if let Err(e) = SimpleLogger::new().with_level(log_level).init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    log_level
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
