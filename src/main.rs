use std::process::ExitCode;
use tickdown::app::App;
use tickdown::Result;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{}: {}", tickdown::APP_NAME, err);
            ExitCode::FAILURE
        }
    }
}

/// Build and drive the application, returning the recorded exit code.
/// The terminal is restored by the TUI drop guard before the code is mapped
/// to the process exit status.
async fn run() -> Result<u8> {
    let mut app = App::new()?;
    app.init()?;
    app.run().await?;
    Ok(app.exit_code())
}
