use resource_console::api::RestAdminApi;
use resource_console::config::Config;
use resource_console::console::Console;
use resource_console::prompt::StdioPrompt;
use resource_console::session::{HeadlessHost, Widget};
use resource_console::view::{Page, Region};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const REGIONS: [Region; 4] = [
    Region::AllocationTable,
    Region::UrgentList,
    Region::UrgentBadge,
    Region::InventoryTable,
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resource_console=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Using admin API at {}", config.api_base_url);

    let api = RestAdminApi::from_config(&config).context("Failed to create HTTP client")?;
    let start_page = config.start_page;
    let mut console = Console::new(config, api, StdioPrompt, HeadlessHost::new());

    if start_page == Page::Dashboard {
        console.load().await;
    } else {
        console.navigate(start_page).await;
    }

    println!("<!-- active page: {} -->", console.view().active_page());
    for (id, active) in console.view().nav_links() {
        println!("<!-- nav #{}{} -->", id, if active { " (active)" } else { "" });
    }
    for region in REGIONS {
        let html = console.view().region_html(region);
        if !html.is_empty() {
            println!("<!-- {} -->\n{}", region.selector(), html);
        }
    }

    for (id, widget) in console.host().live() {
        match widget {
            Widget::Map(view) => println!(
                "<!-- map #{}: {} markers, viewport {:?} -->",
                id.0,
                view.markers.len(),
                view.viewport
            ),
            Widget::Chart(spec) => println!(
                "<!-- chart #{} on #{}: {:?} {:?} -->",
                id.0,
                spec.canvas.element_id(),
                spec.labels,
                spec.datasets.iter().map(|d| &d.data).collect::<Vec<_>>()
            ),
        }
    }

    Ok(())
}
