use anyhow::{Context, Result};
use clap::Parser;
use quakemap::{
    constants::{EARTHQUAKES_NAME, TECTONIC_PLATES_NAME},
    prelude::*,
};
use std::path::PathBuf;

/// Builds the earthquake map from the live USGS and plate boundary feeds
#[derive(Parser, Debug)]
#[command(name = "quakemap-app", version, about)]
struct Args {
    /// JSON configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base layer to select, e.g. "Street Map"
    #[arg(short, long)]
    base_layer: Option<String>,

    /// Show the tectonic plate overlay
    #[arg(long)]
    show_plates: bool,

    /// Hide the earthquake overlay
    #[arg(long)]
    hide_earthquakes: bool,

    /// Write the styled earthquakes as GeoJSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the legend control as an HTML fragment
    #[arg(long)]
    legend_html: Option<PathBuf>,

    /// Write the full display list as JSON
    #[arg(long)]
    draw_commands: Option<PathBuf>,

    /// Write each layer's widget options as JSON
    #[arg(long)]
    layer_options: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => QuakeMapConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => QuakeMapConfig::default(),
    };

    let mut map = MapContext::new(config.clone()).context("building map")?;
    if let Some(name) = &args.base_layer {
        map.select_base_layer(name)
            .with_context(|| format!("selecting base layer {:?}", name))?;
    }

    let client = HttpFeedClient::new(&config.feeds).context("creating HTTP client")?;
    let loader = OverlayLoader::new(client, &config.feeds);

    log::info!("Fetching {} feeds", loader.sources().len());
    let report = loader.load_into(&mut map).await;

    if args.show_plates {
        map.set_overlay_visible(TECTONIC_PLATES_NAME, true)?;
    }
    if args.hide_earthquakes {
        map.set_overlay_visible(EARTHQUAKES_NAME, false)?;
    }

    print_summary(&map, &report);

    if let Some(path) = &args.output {
        let geojson = map.export_earthquakes()?;
        let body = serde_json::to_string_pretty(&geojson)?;
        std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
        println!("Styled earthquakes written to {}", path.display());
    }

    if let Some(path) = &args.legend_html {
        std::fs::write(path, map.legend().to_html())
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Legend written to {}", path.display());
    }

    if let Some(path) = &args.draw_commands {
        let mut render = RenderContext::new();
        map.render(&mut render)?;
        let body = serde_json::to_string_pretty(render.commands())?;
        std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
        println!("{} draw commands written to {}", render.len(), path.display());
    }

    if let Some(path) = &args.layer_options {
        let body = serde_json::to_string_pretty(&map.layers().options_by_id())?;
        std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
        println!("Layer options written to {}", path.display());
    }

    Ok(())
}

fn print_summary(map: &MapContext, report: &LoadReport) {
    let view = &map.config().view;
    println!(
        "View: center ({:.1}, {:.1}) zoom {}",
        view.center.lat, view.center.lng, view.zoom
    );
    println!(
        "Base layer: {}",
        map.selected_base_layer().unwrap_or("(none)")
    );

    let center_tile = TileCoord::from_lat_lng(&view.center, view.zoom.round() as u8);
    let base = map
        .layers()
        .layers()
        .into_iter()
        .filter(|layer| layer.layer_type().is_base() && layer.is_visible())
        .find_map(|layer| layer.as_any().downcast_ref::<TileLayer>());
    if let Some(tiles) = base {
        println!("  Center tile: {}", tiles.tile_url(center_tile));
    }

    for (kind, outcome) in &report.outcomes {
        match outcome {
            FeedOutcome::Loaded(count) => println!("{}: {} features", kind, count),
            FeedOutcome::Failed(e) => println!("{}: unavailable ({})", kind, e),
        }
    }

    for layer in map.layers().layers() {
        println!(
            "  {} [{}] {}, {} features",
            layer.name(),
            layer.layer_type(),
            if layer.is_visible() { "shown" } else { "hidden" },
            layer.feature_count()
        );
    }

    if let Some(quakes) = map.earthquakes() {
        if quakes.skipped() > 0 {
            println!("  {} earthquake records without a point skipped", quakes.skipped());
        }
        let strongest = quakes
            .markers()
            .iter()
            .max_by(|a, b| a.quake.magnitude.total_cmp(&b.quake.magnitude));
        if let Some(marker) = strongest {
            println!(
                "  Strongest: M{} at {} ({} km deep)",
                marker.quake.magnitude, marker.quake.place, marker.quake.depth_km
            );
        }
    }

    if let Some(bounds) = map.data_bounds() {
        let middle = bounds.center();
        println!(
            "Data extent: ({:.2}, {:.2}) to ({:.2}, {:.2}), centered on ({:.2}, {:.2})",
            bounds.south_west.lat,
            bounds.south_west.lng,
            bounds.north_east.lat,
            bounds.north_east.lng,
            middle.lat,
            middle.lng
        );
    }

    println!("Depth legend ({}):", map.legend().position);
    for entry in map.legend().entries() {
        println!("  {} {}", entry.color, entry.label);
    }

    let control = map.layer_control().state(map.layers());
    for (name, visible) in &control.overlays {
        println!("Overlay {}: {}", name, if *visible { "on" } else { "off" });
    }
}
