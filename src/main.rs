// SPDX-License-Identifier: MPL-2.0
use async_trait::async_trait;
use locale_relay::application::port::LocaleStore;
use locale_relay::config::{self, Config};
use locale_relay::domain::locale::Locale;
use locale_relay::error::{Error, Result};
use locale_relay::i18n::{FluentCatalog, L10nContext, LocaleResolver, ResourceBootstrapper};
use locale_relay::infrastructure::TomlLocaleStore;
use locale_relay::pipeline::{serve_lines, Event, EventContext, Handler, LocaleMiddleware};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
locale_relay - resolve reply locales for a stream of events

USAGE:
  locale_relay [OPTIONS] < events.txt

OPTIONS:
  --config <PATH>          settings.toml to load instead of the default one
                           (must be valid TOML)
  --locales-dir <PATH>     resource root holding the .ftl files
  --default-locale <CODE>  locale used when nothing else applies
  --store <PATH>           TOML file with persisted user locales
  -h, --help               print this help

INPUT:
  one event per line: `<user_id>[:<lang>] <text>` or `- <text>`
";

struct Flags {
    help: bool,
    config: Option<PathBuf>,
    locales_dir: Option<PathBuf>,
    default_locale: Option<String>,
    store: Option<PathBuf>,
}

fn parse_flags() -> std::result::Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        help: args.contains(["-h", "--help"]),
        config: args.opt_value_from_str("--config")?,
        locales_dir: args.opt_value_from_str("--locales-dir")?,
        default_locale: args.opt_value_from_str("--default-locale")?,
        store: args.opt_value_from_str("--store")?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn load_config(flags: &Flags) -> Result<Config> {
    let mut config = match &flags.config {
        Some(path) => config::load_required(path)?,
        None => {
            let (config, warning) = config::load();
            if let Some(warning) = warning {
                tracing::warn!(%warning, "using default configuration");
            }
            config
        }
    };

    if let Some(root) = &flags.locales_dir {
        config.locales.root = root.clone();
    }
    if let Some(code) = &flags.default_locale {
        config.locales.default_locale = code.clone();
    }
    if let Some(store) = &flags.store {
        config.store.path = Some(store.clone());
    }
    Ok(config)
}

/// Writes one reply line per event to stdout.
struct ReplyHandler;

#[async_trait]
impl Handler for ReplyHandler {
    async fn handle(&self, event: Event, ctx: EventContext) -> Result<()> {
        let locale = ctx
            .get::<Locale>()
            .ok_or_else(|| Error::Handler("no locale attached".to_string()))?;
        let effective = ctx
            .get::<L10nContext>()
            .map_or_else(|| locale.clone(), |l10n| l10n.effective_locale().clone());
        let user = event
            .from_user
            .map_or_else(|| "-".to_string(), |user| user.id.to_string());

        println!("{user}\t{locale}\t{effective}\t{}", event.text);
        Ok(())
    }
}

async fn run(flags: Flags) -> Result<()> {
    let config = load_config(&flags)?;

    // The catalog must only ever see a normalized tree.
    let bootstrapper = ResourceBootstrapper::from_config(&config.locales);
    let report = bootstrapper.normalize(&config.locales.root)?;
    tracing::info!(
        moved = report.moved.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "resource tree ready"
    );

    let catalog = FluentCatalog::from_config(&config.locales)?;
    tracing::info!(locales = ?catalog.available_locales(), "catalog loaded");

    let store = config
        .store
        .path
        .clone()
        .map(|path| Arc::new(TomlLocaleStore::new(path)) as Arc<dyn LocaleStore>);
    let resolver = LocaleResolver::from_config(&config, store);
    let middleware = LocaleMiddleware::new(Arc::new(resolver), Arc::new(catalog));

    let handled = serve_lines(
        BufReader::new(tokio::io::stdin()),
        middleware,
        Arc::new(ReplyHandler),
    )
    .await?;
    tracing::info!(handled, "input closed");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };
    if flags.help {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    match run(flags).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "locale relay stopped");
            ExitCode::FAILURE
        }
    }
}
