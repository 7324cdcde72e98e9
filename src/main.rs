use clap::Parser;
use singleton_sort::app::commands::{run_command, Outcome};
use singleton_sort::utils::error::ErrorSeverity;
use singleton_sort::utils::{logger, validation::Validate};
use singleton_sort::{CardListStore, CliConfig, ConfigProvider, FileStore, SortError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(cli.verbose, &config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let backend = FileStore::new(config.data_dir().to_string());
    let mut store = CardListStore::with_key(backend, config.storage_key());

    let mut stdout = std::io::stdout().lock();
    match run_command(&mut store, &cli.command, &config, &mut stdout) {
        Ok(Outcome::Done) => Ok(()),
        Ok(Outcome::Rejected) => std::process::exit(2),
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: SortError) -> ! {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
