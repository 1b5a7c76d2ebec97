//! Infinite List
//!
//! Drives the pagination service the way a scrolling list would: the list
//! renders whatever the latest snapshot holds and signals "end reached"
//! whenever the user scrolls to the bottom.
//!
//! Key concepts:
//! - The first page loads on its own (auto start from `idle`)
//! - `end_reached` only asks for a page while the machine reports `more`
//! - The footer is derived from the state: spinner, end-of-list or error
//!
//! Run with: RUST_LOG=pageflow=debug cargo run --example infinite_list

use pageflow::runtime::{Footer, PaginationService};
use pageflow::{PageState, PagerConfig};
use tracing_subscriber::EnvFilter;

fn render(snapshot: &pageflow::Snapshot) {
    println!("state: {}", snapshot.state);
    println!("  items: {}", snapshot.data.join(" "));
    match snapshot.footer {
        Footer::Loading => println!("  [loading...]"),
        Footer::None => {}
        other => println!("  {}", other.message().unwrap_or_default()),
    }
}

#[tokio::main]
async fn main() -> pageflow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Infinite List Example ===\n");

    let config = PagerConfig {
        fetch_delay_ms: 200,
        ..PagerConfig::default()
    };
    let (handle, task) = PaginationService::spawn(config)?;

    loop {
        let snapshot = handle
            .wait_until(|s| matches!(s.state, PageState::More | PageState::Complete | PageState::Fail))
            .await?;
        render(&snapshot);

        if snapshot.state != PageState::More {
            break;
        }

        println!("  (scrolled to the bottom)");
        let started = snapshot.invocations;
        handle.end_reached()?;
        render(&handle.wait_until(|s| s.invocations > started).await?);
    }

    handle.shutdown()?;
    let last = task.await.map_err(|_| pageflow::Error::ServiceStopped)?;
    println!("\nLoaded {} items, final state '{}'", last.data.len(), last.state);

    println!("\n=== Example Complete ===");
    Ok(())
}
