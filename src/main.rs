use clap::Parser;
use omdb_compare::app::export::{render_series, write_to_file, ExportFormat};
use omdb_compare::app::interactive::run_interactive;
use omdb_compare::app::report::{render_comparison, render_results};
use omdb_compare::utils::error::ErrorSeverity;
use omdb_compare::utils::logger;
use omdb_compare::{
    CliConfig, Command, CompareError, ComparisonSession, OmdbClient, SearchOutcome,
};

fn exit_code(e: &CompareError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: &CompareError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI command: {:?}", cli.command);

    let (config, file_config) = cli.resolve().unwrap_or_else(|e| fail(&e));
    let client = OmdbClient::new(&config).unwrap_or_else(|e| fail(&e));
    let mut session = ComparisonSession::new(client);

    match cli.command {
        Command::Search {
            query,
            search_type,
            page,
        } => {
            session.set_query(query);
            session.set_search_type(search_type);
            match session.search(page).await {
                SearchOutcome::Loaded { .. } => {
                    print!("{}", render_results(session.results(), session.pagination()))
                }
                SearchOutcome::Skipped => eprintln!("❌ Empty search query"),
                SearchOutcome::Failed => {
                    eprintln!("❌ {}", session.message().unwrap_or_default());
                    std::process::exit(2);
                }
                SearchOutcome::NoResults | SearchOutcome::Stale => {
                    eprintln!("❌ {}", session.message().unwrap_or_default());
                }
            }
        }
        Command::Compare {
            first,
            second,
            format,
            output,
        } => {
            for imdb_id in [&first, &second] {
                if session.select(imdb_id).await.is_none() {
                    eprintln!(
                        "❌ {}: {}",
                        imdb_id,
                        session.message().unwrap_or_default()
                    );
                    std::process::exit(2);
                }
            }

            let format = format
                .or_else(|| file_config.as_ref().and_then(|f| f.output_format()))
                .unwrap_or_default();
            let output = output.or_else(|| {
                file_config
                    .as_ref()
                    .and_then(|f| f.output_path())
                    .map(Into::into)
            });

            match (format, output) {
                (ExportFormat::Table, None) => print!("{}", render_comparison(session.slots())?),
                (format, target) => {
                    let data = session
                        .chart_data()
                        .ok_or_else(|| anyhow::anyhow!("comparison is incomplete"))?;
                    let rendered = render_series(&data, format)?;
                    match target {
                        Some(path) => {
                            write_to_file(&path, &rendered)?;
                            println!("📁 Output saved to: {}", path.display());
                        }
                        None => print!("{}", rendered),
                    }
                }
            }
        }
        Command::Session => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            run_interactive(&mut session, stdin, &mut stdout).await?;
        }
    }

    Ok(())
}
