use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use post_embed::application::dto::EmbedProps;
use post_embed::application::use_cases::{LoadEmbedUseCase, PlayVideoUseCase};
use post_embed::domain::entities::{Embed, MessageAttachment, PostProps};
use post_embed::domain::ports::{ImageSizePort, RedirectPort};
use post_embed::infrastructure::{
    AppConfig, BrowserVideoPlayer, CachedRedirectResolver, CliArgs, DesktopAlertService,
    HttpImageSizeClient, HttpRedirectClient, OfflineClient, StorageManager, SystemLinkOpener,
};
use post_embed::presentation::PostEmbed;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = match &args.config {
        Some(path) => StorageManager::with_dir(
            path.parent().map(Path::to_path_buf).unwrap_or_default(),
        ),
        None => StorageManager::new()?,
    };

    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).wrap_err_with(|| format!("failed to parse {}", path.display()))
}

fn build_props(args: &CliArgs, config: &AppConfig) -> Result<EmbedProps> {
    let mut props = EmbedProps::new(args.post_id.clone(), args.link.as_str())
        .with_link_previews(config.show_link_previews)
        .with_device(config.device.dimensions())
        .with_platform(config.platform, config.google_developer_key.clone());

    if let Some(expanded) = &args.expanded_link {
        props = props.with_expanded_link(expanded.clone());
    }
    if let Some(path) = &args.metadata {
        props = props.with_metadata(read_json(path)?);
    }
    if let Some(path) = &args.open_graph {
        props = props.with_open_graph(read_json(path)?);
    }
    if let Some(path) = &args.attachments {
        let attachments: Vec<MessageAttachment> = read_json(path)?;
        props = props.with_post_props(PostProps::with_attachments(attachments));
    }
    if args.reply {
        props = props.as_reply();
    }

    Ok(props)
}

fn create_loader(args: &CliArgs, config: &AppConfig) -> Result<LoadEmbedUseCase> {
    if args.offline {
        info!("Offline mode, using post metadata only");
        let offline = Arc::new(OfflineClient);
        return Ok(LoadEmbedUseCase::new(offline.clone(), offline));
    }

    let redirect_client: Arc<dyn RedirectPort> =
        Arc::new(HttpRedirectClient::with_timeout(config.http.timeout_secs)?);
    let redirects = Arc::new(CachedRedirectResolver::new(
        redirect_client,
        config.http.redirect_cache_size,
    ));
    let sizes: Arc<dyn ImageSizePort> =
        Arc::new(HttpImageSizeClient::with_timeout(config.http.timeout_secs)?);

    Ok(LoadEmbedUseCase::new(redirects, sizes))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = post_embed::VERSION, "Starting {}", post_embed::NAME);

    let props = build_props(&args, &config)?;
    let loader = create_loader(&args, &config)?;

    let mut embed = PostEmbed::new(props);
    embed.mount_and_load(&loader).await;

    let rendered = embed.render();
    debug!(kind = rendered.kind(), "Embed decided");
    println!("{}", serde_json::to_string_pretty(&rendered)?);

    if args.play && matches!(rendered, Embed::YouTube(_)) {
        let play = PlayVideoUseCase::new(
            Arc::new(BrowserVideoPlayer),
            Arc::new(SystemLinkOpener),
            Arc::new(DesktopAlertService::new(config.enable_desktop_notifications)),
        );
        let outcome = play.execute(embed.props()).await;
        info!(?outcome, "Playback finished");
    }

    embed.unmount();

    Ok(())
}
