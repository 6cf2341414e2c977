use aeromode_core::{WidgetManifest, config};

/// Prints the widget manifest as JSON for host-engine consumption.
pub fn execute(compact: bool) {
    let manifest = WidgetManifest::new(&config::load());
    let result = if compact {
        manifest.to_json()
    } else {
        manifest.to_json_pretty()
    };
    match result {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: could not serialize manifest: {e}");
            std::process::exit(1);
        }
    }
}
