use archive_nexus::{check, cli, config, error, invoice, logging, simulate};
use archive_nexus_common::{filter_vendors, ShelfLocation};
use clap::Parser;
use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let app_config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { mock } => {
            println!("📂 archive-nexus - モックデータ検証\n");
            let data = check::load_mock(&mock)?;
            let report = check::check(&data);
            print!("{}", report);
            if report.is_clean() {
                println!("\n✅ 問題なし");
            } else {
                println!("\n⚠ 問題あり");
            }
        }

        Commands::Simulate { mock, scanner, rack, shelf, r#box, folder, count, json } => {
            let data = mock.as_deref().map(check::load_mock).transpose()?;
            let options = simulate::SimulateOptions {
                scanner,
                rack,
                shelf,
                r#box,
                folder,
                count,
                show_progress: !json,
            };
            let mut session = simulate::prepare_session(app_config.scan, data.as_ref(), &options)?;

            if !json {
                println!("🖨 archive-nexus - スキャン疑似実行\n");
                println!(
                    "スキャナ: {}",
                    session.selected_scanner().unwrap_or("(未選択)")
                );
                println!("棚コード: {}\n", session.shelf_code());
            }

            let created = simulate::run(&mut session, &options).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(session.files())?);
            } else {
                println!("\n✔ {}件スキャン", created.len());
                println!("スキャン済み一覧（新しい順）:");
                for record in session.files() {
                    println!(
                        "  {} {} {} {}",
                        record.timestamp.to_rfc3339(),
                        record.shelf_code,
                        record.file_name,
                        record.status_label()
                    );
                }
            }
        }

        Commands::Validate { invoice: path } => {
            let form = invoice::validate_file(&path)?;
            println!("✅ Invoice #{} は有効です", form.invoice_number);
        }

        Commands::Vendors { mock, query } => {
            let data = check::load_mock(&mock)?;
            let matches = filter_vendors(&data.vendors, &query);
            if matches.is_empty() {
                println!("候補なし");
            }
            for vendor in matches {
                println!("{}", vendor);
            }
        }

        Commands::ShelfCode { rack, shelf, r#box, folder } => {
            let location = ShelfLocation::new(rack, shelf, r#box, folder)?;
            println!("{}", location.shelf_code());
        }

        Commands::Config { show } => {
            let path = cli.config.clone().map(Ok).unwrap_or_else(config::config_path)?;
            println!("設定ファイル: {}", path.display());
            if show {
                println!("{}", serde_json::to_string_pretty(&app_config)?);
            }
        }
    }

    Ok(())
}
