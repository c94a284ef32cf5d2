mod command;
mod render;
mod runner;

use clap::Parser;
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, GameConfig, Validate, YamlConfigSerializer,
};
use tictactoe_engine::log;
use tictactoe_engine::logger;
use tictactoe_engine::tictactoe::{BoardSize, Difficulty, Session, SessionSettings};

use runner::ConsoleRunner;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// YAML config file; defaults to tictactoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    board_size: Option<BoardSize>,

    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Fixed seed for reproducible computer moves
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    debug: bool,
}

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

fn load_config(args: &Args) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let path = args.config.clone().unwrap_or_else(get_config_path);
    let manager: ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> =
        ConfigManager::from_yaml_file(&path);
    let mut config = manager.get_config()?;

    if let Some(board_size) = args.board_size {
        config.board_size = board_size;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.debug_logging |= args.debug;

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.debug_logging);

    let session = Session::with_settings(SessionSettings::from(&config));
    ConsoleRunner::new(session).run().await?;

    log!("Bye!");
    Ok(())
}
