use std::io;
use std::path::PathBuf;

use swipelist_demo::{run, DemoSession};
use swipelist_ui::ListScreenOptions;

const DEFAULT_STATE_FILE: &str = "swipelist-state.json";

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let state_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE));

    println!("=== swipelist ===");
    println!("State file: {}", state_path.display());
    println!("Type `help` for commands.");
    println!();

    let mut session = DemoSession::open(Some(state_path), ListScreenOptions::default())?;
    print!("{}", session.render());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut session, stdin.lock(), &mut stdout)
}
