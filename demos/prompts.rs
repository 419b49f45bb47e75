use spectra::Console;
use tracing_subscriber::EnvFilter;

fn main() -> spectra::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .without_time()
        .init();

    let console = Console::detect();

    let password = console.secret("key", "Password")?;
    let languages = console.multi_choice("label", "Languages", [("First", "a"), ("Second", "b")])?;
    let choice = console.choice("label", "Pick one", [("First", 1), ("Second", 2)])?;
    let name: String = console.prompt("label", "Build Project Name")?;
    let integer: i32 = console.prompt("label", "Integer")?;
    let confirm = console.confirm("label", "Confirm")?;

    println!(
        "{} characters, {:?}, {}, {}, {}, {}",
        password.len(),
        languages,
        choice,
        name,
        integer,
        confirm
    );
    Ok(())
}
