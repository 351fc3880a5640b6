//! Interactive storefront binary.
//!
//! Wires the library together: loads settings and the catalog, builds a
//! session, and runs a synchronous read-eval loop over stdin. Each input
//! line is one event; every cart mutation finishes (including its display
//! refresh) before the next line is read, so the single-queue event model
//! holds by construction. Event handlers are dispatched explicitly here
//! rather than embedded in rendered output.

use clap::Parser;
use dotenvy::dotenv;
use shopfront::{
    config::{self, Settings},
    display::{self, TerminalDisplay},
    errors::{Error, Result},
    session::Session,
};
use std::io::{self, BufRead, Write as _};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Catalog browser and shopping cart for a small, fixed product list.
#[derive(Parser, Debug)]
#[command(name = "shopfront", version, about)]
struct Args {
    /// Path to a catalog TOML file (overrides SHOPFRONT_CATALOG)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Currency symbol for display (overrides SHOPFRONT_CURRENCY)
    #[arg(long)]
    currency: Option<String>,
}

const HELP: &str = "\
Commands:
  list                 show the full catalog
  category <name>      filter by category (\"all\" shows everything)
  search <term>        search category and description text
  add <id> [qty]       add a product to the cart (default quantity 1)
  remove <id>          remove a product from the cart
  qty <id> <n>         set a line's quantity (0 removes it)
  cart                 show the cart
  checkout             show the checkout confirmation
  buy                  complete the purchase and clear the cart
  help                 show this help
  quit                 leave the shop
";

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    let args = Args::parse();

    // 3. Resolve settings: CLI flags win over environment
    let mut settings = Settings::from_env();
    if let Some(path) = args.catalog {
        settings.catalog_path = Some(path);
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }

    // 4. Load the catalog and start the session
    let catalog = config::load_catalog_or_sample(settings.catalog_path.as_deref())
        .inspect_err(|e| error!("Failed to load catalog: {e}"))?;
    let mut session = Session::new(catalog);
    session.set_cart_display(Box::new(TerminalDisplay::new(&settings.currency)));

    // Initial listing, like a freshly opened shop page
    println!("Welcome to the shop. Type 'help' for commands.\n");
    print!(
        "{}",
        display::format_product_list(&session.browse().iter().collect::<Vec<_>>(), &settings.currency)
    );

    run_loop(&mut session, &settings)?;
    info!("Session ended");
    Ok(())
}

fn run_loop(session: &mut Session, settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        print!("> ");
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            return Ok(());
        }
        if !dispatch(session, settings, line.trim()) {
            return Ok(());
        }
    }
}

/// Handles one input event. Returns `false` when the session should end.
fn dispatch(session: &mut Session, settings: &Settings, line: &str) -> bool {
    let currency = &settings.currency;
    let mut parts = line.split_whitespace();
    match parts.next() {
        None => {}
        Some("help") => print!("{HELP}"),
        Some("list") => {
            let products = session.browse().iter().collect::<Vec<_>>();
            print!("{}", display::format_product_list(&products, currency));
        }
        Some("category") => {
            let category = parts.next().unwrap_or("all");
            let products = session.select_category(category);
            print!("{}", display::format_product_list(&products, currency));
        }
        Some("search") => {
            let term = parts.collect::<Vec<_>>().join(" ");
            let products = session.search(&term);
            print!("{}", display::format_product_list(&products, currency));
        }
        Some("add") => match (parse_id(parts.next()), parse_qty(parts.next())) {
            (Some(id), Some(qty)) => session.add_to_cart_with_quantity(id, qty),
            (Some(id), None) => session.add_to_cart(id),
            _ => println!("Usage: add <id> [qty]"),
        },
        Some("remove") => match parse_id(parts.next()) {
            Some(id) => session.remove_from_cart(id),
            None => println!("Usage: remove <id>"),
        },
        Some("qty") => match (parse_id(parts.next()), parse_qty(parts.next())) {
            (Some(id), Some(qty)) => session.set_quantity(id, qty),
            _ => println!("Usage: qty <id> <n>"),
        },
        Some("cart") => print!(
            "{}",
            display::format_cart(session.cart_items(), session.cart_total(), currency)
        ),
        Some("checkout") => match session.checkout() {
            Ok(summary) => print!("{}", display::format_checkout(&summary, currency)),
            Err(Error::EmptyCart) => println!("Your cart is empty."),
            Err(e) => error!("Checkout failed: {e}"),
        },
        Some("buy") => match session.complete_purchase() {
            Ok(total) => println!("Thank you for your purchase! Total amount: {currency}{total:.2}"),
            Err(Error::EmptyCart) => println!("Your cart is empty."),
            Err(e) => error!("Purchase failed: {e}"),
        },
        Some("quit" | "exit") => return false,
        Some(other) => {
            warn!(command = other, "Unknown command");
            println!("Unknown command '{other}'. Type 'help' for commands.");
        }
    }
    true
}

fn parse_id(arg: Option<&str>) -> Option<i64> {
    arg.and_then(|s| s.parse().ok())
}

fn parse_qty(arg: Option<&str>) -> Option<u32> {
    arg.and_then(|s| s.parse().ok())
}
