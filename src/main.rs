use clap::Parser;
use doc_seeder::domain::ports::ConfigProvider;
use doc_seeder::utils::{logger, validation::Validate};
use doc_seeder::{CliConfig, HttpDocumentStore, RandomPersonGenerator, SeederEngine, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting doc-seeder");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let exit_code = match cli.config.clone() {
        Some(path) => match TomlConfig::from_file(&path) {
            Ok(config) => {
                let monitor = config.monitoring_enabled();
                run_pipeline(config, monitor).await
            }
            Err(e) => {
                tracing::error!("❌ Failed to load config file {}: {}", path, e);
                eprintln!("❌ {}", e);
                1
            }
        },
        None => {
            let monitor = cli.monitor;
            run_pipeline(cli, monitor).await
        }
    };

    if exit_code == 0 {
        wait_for_exit("Completed successfully");
    } else {
        wait_for_exit("Completed with error");
    }
    std::process::exit(exit_code);
}

async fn run_pipeline<C>(config: C, monitor: bool) -> i32
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        return 1;
    }

    if monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let store = HttpDocumentStore::new(config.endpoint(), config.key());
    let generator = RandomPersonGenerator::new();
    let engine = SeederEngine::new_with_monitoring(store, generator, config, monitor);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "✅ Seeded {} documents in {} batches, verified {} rows ({:?})",
                report.documents,
                report.batches,
                report.verified_rows,
                report.elapsed
            );
            println!(
                "✅ Seeded {} documents in {} batches ({:?})",
                report.documents, report.batches, report.elapsed
            );
            0
        }
        Err(e) => {
            tracing::error!("❌ Seeding failed: {}", e);
            eprintln!("❌ {}", e);
            1
        }
    }
}

/// Exit prompt: print the outcome, then block until the user presses
/// Enter. Runs on the success and the failure path alike.
fn wait_for_exit(message: &str) {
    println!("{}", message);
    println!("Press Enter to exit");
    let mut input = String::new();
    let _ = std::io::stdin().read_line(&mut input);
}
