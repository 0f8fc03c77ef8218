use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use objdetect::{cli, client, config, error, logging, report, scanner};
use objdetect_common::{SessionState, Settlement, UPLOAD_FAILED_MESSAGE};
use cli::{Cli, Commands};
use client::UploadClient;
use config::Config;
use error::{ObjDetectError, Result};
use std::time::Duration;

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::from_env();

    match cli.command {
        Commands::Analyze { paths, api_base_url, timeout_secs, json, output } => {
            let images = scanner::collect_images(&paths)?;
            if images.is_empty() {
                let joined = paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(ObjDetectError::NoImagesFound(joined));
            }

            let files = images
                .iter()
                .map(|image| image.load())
                .collect::<Result<Vec<_>>>()?;

            let client_config = config.resolve(api_base_url.as_deref(), timeout_secs);
            let client = UploadClient::new(&client_config)?;
            tracing::info!("{}枚の画像を {} へ送信", files.len(), client.endpoint());

            let mut session = SessionState::new();
            let bar = spinner("Analyzing images...");
            let submission = client.submit_into(&mut session, &files).await;
            bar.finish_and_clear();

            match submission.settlement {
                Settlement::Applied { .. } => {
                    let raw_json = submission.raw.as_ref().map(report::render_raw_json).transpose()?;
                    match &raw_json {
                        Some(text) if json => println!("{}", text),
                        _ => print!("{}", report::render_results(session.results())),
                    }

                    if let (Some(path), Some(text)) = (output, &raw_json) {
                        std::fs::write(&path, text)?;
                        tracing::info!("応答を保存: {}", path.display());
                    }
                }
                Settlement::Failed(error) => {
                    eprintln!("{}", UPLOAD_FAILED_MESSAGE);
                    return Err(error.into());
                }
                Settlement::Stale { .. } => {}
            }
        }

        Commands::Config { api_base_url, timeout_secs } => {
            let effective = config.resolve(api_base_url.as_deref(), timeout_secs);
            println!("設定:");
            println!("  解析サーバ: {}", effective.api_base_url);
            println!("  エンドポイント: {}", effective.endpoint_url()?);
            println!("  タイムアウト: {}秒", effective.timeout_seconds);
        }
    }

    Ok(())
}
