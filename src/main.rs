mod console;
mod domain;
mod session;

use tracing::Level;

use crate::console::Terminal;
use crate::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays a clean prompt/response stream.
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut session = Session::new(Terminal::new());
    session.run()?;
    Ok(())
}
