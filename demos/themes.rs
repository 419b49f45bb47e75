use std::io::Write;

use spectra::{theme::presets, Console, ExtendedTheme, StyleRole, Terminal};
use tracing::{debug, info, trace, warn};
use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("themes=trace,spectra=debug"))
        .without_time()
        .init();

    let console = Console::detect();
    info!(theme = console.theme().name(), "detected");

    console.write_normal("Normal")?;
    console.write_success("Info")?;
    console.write_warning("Warn")?;
    console.write_error("Error")?;

    trace!(boolean = true, integer = 1, string = "bluu", "ah, there you are");
    debug!(boolean = true, integer = 1, string = "bluu", "ah, there you are");
    warn!(boolean = true, integer = 1, string = "bluu", "ah, there you are");

    let mut terminal = Terminal::stdout();
    for theme in [
        presets::ansi_256(),
        presets::azure_pipelines(),
        presets::appveyor(),
        presets::legacy_console(),
    ] {
        theme.write_success(&mut terminal, theme.name())?;
        for role in StyleRole::ALL {
            theme.write(&mut terminal, role, &format!("{:?}", role))?;
            terminal.write_all(b" ")?;
        }
        writeln!(terminal)?;
    }
    terminal.flush()
}
