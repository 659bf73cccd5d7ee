use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "numero-invertido")]
#[command(version)]
#[command(about = "Reads a number between 0 and 99999 and prints it with its digits reversed")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
