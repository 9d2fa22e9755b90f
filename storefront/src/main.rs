//! Storefront entry point
//!
//! Replays a script of gallery events against one session, or loads the
//! order form from a session file written by an earlier gallery run.

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::Parser;
use shared::{PageId, logging, page_debug, page_info};

use cart::{CartConfig, FileSessionStore, MemorySessionStore, SessionStore};
use storefront::{GalleryPage, OrderFormPage, load_events, replay};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Food gallery cart session driver")]
struct Args {
    /// Page to run (gallery, order_form)
    #[arg(long, default_value = "gallery")]
    page: PageId,

    /// JSON array of gallery events to replay
    #[arg(long)]
    events: Option<PathBuf>,

    /// Session file shared between pages (in-memory session if omitted)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Locale used to group totals (en, de, en-IN, ...)
    #[arg(long)]
    locale: Option<String>,

    /// Delimiter joining chef notes in the handoff
    #[arg(long)]
    notes_delimiter: Option<String>,

    /// Page the checkout navigates to
    #[arg(long)]
    form_page: Option<String>,
}

impl Args {
    /// Environment configuration with command line overrides applied
    fn cart_config(&self) -> anyhow::Result<CartConfig> {
        let mut config = CartConfig::from_env().context("loading cart configuration")?;
        if let Some(locale) = &self.locale {
            config = config.with_locale(CartConfig::parse_locale(locale).context("parsing --locale")?);
        }
        if let Some(delimiter) = &self.notes_delimiter {
            config = config.with_notes_delimiter(delimiter.clone());
        }
        if let Some(page) = &self.form_page {
            config = config.with_form_page(page.clone());
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let page_id = match args.page {
        PageId::Gallery => PageId::init_gallery(),
        PageId::OrderForm => PageId::init_order_form(),
    };
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(page_id, &format!("{page_id} page"));

    let config = args.cart_config()?;

    let result = match (*page_id, &args.store) {
        (PageId::Gallery, Some(path)) => {
            events_path(&args).and_then(|events| run_gallery(FileSessionStore::new(path), config, events))
        }
        (PageId::Gallery, None) => {
            events_path(&args).and_then(|events| run_gallery(MemorySessionStore::new(), config, events))
        }
        (PageId::OrderForm, Some(path)) => run_order_form(&FileSessionStore::new(path), &config),
        (PageId::OrderForm, None) => Err(anyhow!("--store is required to load the order form")),
    };

    if let Err(e) = &result {
        logging::log_error(page_id, "Storefront session", e);
    }
    result
}

fn events_path(args: &Args) -> anyhow::Result<&Path> {
    args.events
        .as_deref()
        .context("--events is required on the gallery page")
}

fn run_gallery<S: SessionStore>(store: S, config: CartConfig, events_path: &Path) -> anyhow::Result<()> {
    let events = load_events(events_path)?;
    let mut page = GalleryPage::new(store, config.clone());

    let report = replay(&mut page, &events)?;
    page_info!(PageId::current(), "Replayed {} events", report.events_applied);
    let snapshot = serde_json::to_string(&page.cart().snapshot())?;
    page_debug!(PageId::current(), "🛒 Final cart: {}", snapshot);

    let display = page.display();
    println!("Ordered: {}", display.items);
    println!("From:    {}", display.vendors);
    println!("Total:   {}", display.total);

    match report.navigation {
        Some(navigation) => {
            logging::log_shutdown(PageId::current(), &format!("navigating to {}", navigation.target));
            println!();
            println!("--- {} ---", navigation.target);
            run_order_form(page.store(), &config)
        }
        None => {
            logging::log_success(PageId::current(), "Session ended without checkout");
            Ok(())
        }
    }
}

fn run_order_form<S: SessionStore + ?Sized>(store: &S, config: &CartConfig) -> anyhow::Result<()> {
    let form = OrderFormPage::load(store, config)?;
    println!("{}", form.render());
    Ok(())
}
