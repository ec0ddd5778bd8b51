//! cookie-emblem - render an emblem described by a settings file to SVG
//!
//! Usage: `cookie-emblem [SETTINGS.json] [OUT.svg]`
//!
//! Without a settings path the persisted settings (or defaults) are used.
//! Without an output path the SVG is written to stdout.

use cookie_emblem::patterns::SeededRandom;
use cookie_emblem::render::SvgSink;
use cookie_emblem::{EmblemSettings, SettingsError};

fn main() -> Result<(), SettingsError> {
    env_logger::init();
    log::info!("Starting cookie-emblem");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => EmblemSettings::load_from(&path)?,
        None => EmblemSettings::load(),
    };

    let svg = render(&settings)?;

    match args.next() {
        Some(out) => {
            std::fs::write(&out, svg)?;
            log::info!("Wrote {}", out);
        }
        None => print!("{}", svg),
    }
    Ok(())
}

/// Draw the cookie surface, then the emblem on top of it
fn render(settings: &EmblemSettings) -> Result<String, SettingsError> {
    let emblem = settings.to_emblem()?;
    let mut sink = SvgSink::new();

    if let Some(color) = settings.surface_color {
        emblem.draw_mask(&mut sink, color)?;
    }

    let mut rng = match settings.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    };
    emblem.draw(&mut sink, &mut rng)?;

    log::debug!("SVG has {} elements", sink.element_count());
    Ok(sink.finish(settings.canvas_width, settings.canvas_height))
}
