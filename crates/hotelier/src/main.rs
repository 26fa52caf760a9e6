use hotelier::prelude::*;

fn main() -> Result<(), HotelierError> {
    hotelier::logging::init();

    let config = config_from_args(std::env::args_os().skip(1))?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = ConsoleBuilder::new()
        .config(config)
        .build(stdin.lock(), stdout.lock());

    if let Err(e) = console.run() {
        tracing::error!(error = %e, "console failed");
        return Err(e);
    }
    Ok(())
}
