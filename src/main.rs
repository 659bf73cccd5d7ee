use anyhow::Context;
use clap::Parser;
use numero_invertido::utils::logger;
use numero_invertido::{CliConfig, InversionEngine, InvertirError, TerminalConsole};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let mut engine = InversionEngine::new(TerminalConsole::stdio());
    match engine.run() {
        Ok(inverted) => {
            tracing::debug!("Done: {}", inverted);
            Ok(())
        }
        Err(InvertirError::InputClosed) => {
            tracing::error!("Input closed before a valid number was entered");
            eprintln!("\n❌ No se ingresó ningún número válido.");
            std::process::exit(1);
        }
        Err(e) => Err(e).context("failed to talk to the terminal"),
    }
}
