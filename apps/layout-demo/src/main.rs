mod options;
mod scaffold;

use multilayout_ui::{Constraints, CustomMultiChildLayout, LayoutChild};
use options::DemoOptions;
use scaffold::{Placeholder, ScaffoldDelegate, Slot};

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = DemoOptions::from_args(std::env::args().skip(1))?;
    log::info!(
        "laying out scaffold in a {}x{} viewport",
        options.width,
        options.height
    );

    let mut page = CustomMultiChildLayout::with_delegate(ScaffoldDelegate {
        fab_margin: options.fab_margin,
    })
    .with_child(LayoutChild::new(Slot::Header, Placeholder::new("header", 0.0, 56.0)))
    .with_child(LayoutChild::new(Slot::Body, Placeholder::new("body", 0.0, 0.0)))
    .with_child(LayoutChild::new(Slot::Footer, Placeholder::new("footer", 0.0, 48.0)));
    if options.fab {
        page.push_child(LayoutChild::new(Slot::Fab, Placeholder::new("fab", 56.0, 56.0)));
    }

    // Layout errors carry the failing child's error, which is not `Send`.
    let size = page
        .layout(Constraints::tight(options.width, options.height))
        .map_err(|err| anyhow::anyhow!("scaffold layout failed: {err}"))?;

    println!("=== Scaffold layout ({size}) ===");
    for (child, bounds) in page.paint_order() {
        let name = match child.id() {
            Some(slot) => format!("{slot:?}"),
            None => "-".to_string(),
        };
        println!("  {:<8} at {} size {}", name, bounds.origin(), bounds.size());
    }
    Ok(())
}
