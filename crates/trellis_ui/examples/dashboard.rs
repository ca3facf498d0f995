//! Builds a small dashboard tree under a reactive root and prints the
//! serialized form, then re-renders after a state write.
//!
//! Run with: `cargo run -p trellis_ui --example dashboard`

use std::sync::Arc;

use trellis_core::{MemoryStore, State, StateStore};
use trellis_ui::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
    let visits: State<i64> = State::new(store.clone(), "stats.visits");
    visits.set(1280);

    let root = reactive_root(store.clone(), ["stats.visits"], |scope| {
        let visits: i64 = scope.read("stats.visits")?;

        Ok(column()
            .gap(16.0)
            .p(24.0)
            .child(text("Traffic").size(24.0).bold())
            .child(
                ui::card()
                    .child(ui::card_header().title("Visits").description("Last 7 days"))
                    .child(ui::card_content().child(
                        chart::bar([Series::new("visits", [180.0, 220.0, 160.0, 240.0])])
                            .categories(["Mon", "Tue", "Wed", "Thu"])
                            .legend(Placement::Bottom),
                    ))
                    .child(
                        ui::card_footer()
                            .child(ui::badge(format!("{visits} total")).variant(BadgeVariant::Success)),
                    ),
            )
            .child(input::text("form.filter").placeholder("Filter"))
            .build())
    });

    let tree = root.render()?;
    println!("{}", serde_json::to_string_pretty(&tree)?);

    // A write marks the store dirty; the host would re-render.
    visits.update(|n| n + 1)?;
    let rerendered = root.render()?;
    println!(
        "re-rendered after write, trees differ: {}",
        tree != rerendered
    );

    Ok(())
}
