mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use confab_core::store::ConversationStore;
use confab_core::tracing_setup::init_tracing;
use confab_core::{seed, ChatCore};

use crate::runtime::run_app;
use crate::ui::App;

#[derive(Parser, Debug)]
#[command(name = "confab", about = "A terminal chat client", version)]
struct Args {
    /// Append logs to this file (stdout is the UI, so no file means no logs)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Tick interval driving timers and animations, in milliseconds
    #[arg(long, default_value_t = 50)]
    tick_rate_ms: u64,

    /// Override the demo profile's display name
    #[arg(long)]
    profile_name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_deref())?;

    // Restore the terminal before the default panic output runs
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        original_hook(panic_info);
    }));

    let mut profile = seed::demo_profile();
    if let Some(name) = args.profile_name {
        profile.name = name;
    }
    let directory = ConversationStore::with_conversations(profile, seed::demo_conversations());
    let mut app = App::new(ChatCore::new(directory));

    let mut terminal = ui::init_terminal()?;
    let result = run_app(
        &mut terminal,
        &mut app,
        Duration::from_millis(args.tick_rate_ms.max(1)),
    )
    .await;
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
