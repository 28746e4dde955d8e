use std::io;

use tasker_config::TaskerConfig;
use tasker_core::SimpleTaskManager;

use crate::cli::{Commands, GlobalFlags};
use crate::commands::{demo, interactive};
use crate::output::Renderer;
use crate::prompt::Prompt;

/// Route a parsed command to its handler.
pub fn dispatch(
    command: Commands,
    config: &TaskerConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let renderer = Renderer::new(flags.format, config.general.date_format.clone());
    tracing::debug!(?command, format = ?flags.format, "dispatching");

    match command {
        Commands::Demo => {
            let mut stdout = io::stdout().lock();
            demo::run(&mut stdout, &renderer).map(drop)
        }
        Commands::Interactive => {
            let mut manager = SimpleTaskManager::new();
            let prompt = Prompt::new(
                io::stdin().lock(),
                io::stdout().lock(),
                config.general.max_input_attempts,
            );
            interactive::Session::new(prompt, &mut manager, &renderer, &config.general).run()
        }
    }
}
