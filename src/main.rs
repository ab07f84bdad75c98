use std::io;
use std::path::PathBuf;

use clap::Parser;
use physics_edu_toolbox::app::{self, AppError, Command};
use physics_edu_toolbox::{config, logging, ui_cli::Console};

#[derive(Parser)]
#[command(name = "physics_edu_toolbox_cli")]
#[command(about = "Física/Química: ley de Hooke y presión (F/A, nRT/V)", long_about = None)]
struct Cli {
    /// Ruta del archivo de configuración
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let log = logging::init();
    let cfg = config::load_or_create(&cli.config)?;
    log.apply_config_filter(&cfg.log_filter);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    app::run(cli.command.as_ref(), &mut console)
}
