use anyhow::{Context, Result, anyhow};
use clap::Parser;
use combat::BattleState;
use crossterm::{
    cursor::{Hide, Show},
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use error::handle_error;
use ratatui::{Terminal, backend::CrosstermBackend};
use scopeguard::defer;
use std::io;
use tracing::{error, info};

use terminal_battle::{
    app::{self, App},
    config::{Args, BattleConfig},
    logging,
    render::messages::{Cast, outcome},
};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = BattleConfig::try_from(&args).map_err(|e| anyhow!(handle_error(&e)))?;
    logging::init(args.log_file.as_deref()).context("Failed to initialise logging")?;
    info!(
        seed = config.seed,
        player = %config.player_name,
        enemy = %config.enemy_name,
        "battle starting"
    );

    let result = run_battle(&config)?;

    // 终端已恢复，留下一行结果
    let cast = Cast {
        player: &config.player_name,
        enemy: &config.enemy_name,
    };
    if let Some(message) = result.and_then(|state| outcome(state, &cast)) {
        println!("{}", message);
    }

    Ok(())
}

fn run_battle(config: &BattleConfig) -> Result<Option<BattleState>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    defer! {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
    execute!(io::stdout(), EnterAlternateScreen, Hide)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    let mut app = App::new(config.build_battle(), config.bar_length);

    if let Err(e) = app::run(&mut terminal, &mut app, event::read) {
        error!(error = %e, "battle loop failed");
        let message = handle_error(&e);
        return Err(anyhow::Error::new(e).context(message));
    }

    info!(outcome = ?app.outcome(), "battle closed");
    Ok(app.outcome())
}
