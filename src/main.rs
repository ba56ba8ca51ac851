use anyhow::{bail, Context};
use clap::Parser;
use dialoguer::{Confirm, Input};
use platepal::{cli, config, encoder, error, gallery, gemini, logging, progress, render, session};
use cli::{Cli, Commands};
use config::Config;
use error::PlatePalError;
use gallery::ResultsView;
use gemini::GeminiClient;
use platepal_common::Phase;
use progress::ScanProgress;
use session::MenuSession;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load().context("failed to load config")?;

    match cli.command {
        Commands::Scan { file, json, no_images, compact, language } => {
            let mut config = config;
            if let Some(language) = language {
                config.target_language = language;
            }

            // APIキーがなければここで終了
            let client = Arc::new(GeminiClient::new(&config)?);
            let mut session = MenuSession::new(Arc::clone(&client));
            let mut next_file = file;

            loop {
                let path = match next_file.take() {
                    Some(path) => path,
                    None => prompt_menu_path()?,
                };

                if !encoder::is_accepted(&path) {
                    log::warn!("[encode] unexpected file type: {}", path.display());
                }

                if !json {
                    println!("📸 {}\n", encoder::display_name(&path));
                }

                let progress = ScanProgress::start(!json);
                let phase = session.submit(&path).await?;
                progress.finish(phase);

                let view = match phase {
                    Phase::Results if json => {
                        println!("{}", serde_json::to_string_pretty(session.items())?);
                        return Ok(());
                    }
                    Phase::Results => {
                        let mut view = if no_images {
                            ResultsView::text_only(session.items())
                        } else {
                            ResultsView::mount(session.items(), Arc::clone(&client))
                        };
                        println!("{}", render::render_results(view.cards(), false, !compact));
                        show_illustrations(&mut view).await;
                        Some(view)
                    }
                    _ => {
                        let message = session.error_message().unwrap_or_default().to_string();
                        if json {
                            bail!(message);
                        }
                        println!("{}", render::render_error(&message));
                        None
                    }
                };

                let again = Confirm::new()
                    .with_prompt("Scan another menu?")
                    .default(true)
                    .interact()
                    .map_err(|e| PlatePalError::Prompt(e.to_string()))?;

                if let Some(view) = view {
                    view.unmount();
                }
                session.reset();

                if !again {
                    break;
                }
                println!();
            }

            println!("\n✅ Enjoy your meal!");
        }

        Commands::Config { .. } => {
            let show = cli.command.shows_config();
            let mut config = config;

            if let Commands::Config { set_api_key: Some(key), .. } = cli.command {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if show {
                println!("{}", config.describe(&Config::config_path()?));
            }
        }
    }

    Ok(())
}

fn prompt_menu_path() -> error::Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt("Menu photo (image or PDF)")
        .interact_text()
        .map_err(|e| PlatePalError::Prompt(e.to_string()))?;
    Ok(PathBuf::from(input.trim()))
}

/// 届いた順に料理イメージを表示
async fn show_illustrations(view: &mut ResultsView) {
    if view.pending() == 0 {
        return;
    }

    println!("🖼  Generating dish images...");
    while let Some(index) = view.next_ready().await {
        let card = &view.cards()[index];
        println!(
            "  {:>2}. {}  {}",
            index + 1,
            card.view.title,
            render::illustration_line(&card.illustration)
        );
    }
    println!();
}
