/// BoxProj Terminal Viewer - Rotating Cube
///
/// Interactive wireframe view of the projected cube.
/// Controls:
///   - WASD / Arrow Keys: Rotate the box
///   - E/R: Roll rotation
///   - +/-: Camera zoom
///   - Q/ESC: Quit

use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use boxproj_terminal::TerminalApp;

/// Env-filtered log setup; quiet unless RUST_LOG says otherwise, since the
/// alternate screen owns stdout while the app runs.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn main() -> io::Result<()> {
    init_logging();
    tracing::info!("starting boxproj terminal viewer");

    let mut app = TerminalApp::new()?;
    app.run()?;

    println!("Thank you for using the BoxProj viewer!");
    Ok(())
}
