//! `orbitview` binary: opens a window running one demo preset.

use std::path::Path;

use orbitview::{DemoPreset, Options, OrbitError, Viewer};

/// Resolve the command-line argument into options and a window title.
///
/// Accepts a demo preset name or a path to a TOML options file; no argument
/// runs the default preset.
fn resolve_options(input: Option<&str>) -> Result<(Options, String), OrbitError> {
    let Some(input) = input else {
        let preset = DemoPreset::default();
        return Ok((preset.options(), format!("orbitview - {preset}")));
    };

    let path = Path::new(input);
    if path.extension().is_some_and(|ext| ext == "toml") {
        let options = Options::load(path)?;
        return Ok((options, format!("orbitview - {}", path.display())));
    }

    let preset: DemoPreset = input.parse()?;
    Ok((preset.options(), format!("orbitview - {preset}")))
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let arg = std::env::args().nth(1);
    let (options, title) = match resolve_options(arg.as_deref()) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::error!("{e}");
            let names: Vec<&str> =
                DemoPreset::ALL.into_iter().map(DemoPreset::name).collect();
            log::error!(
                "Usage: orbitview [PRESET | options.toml]  (presets: {})",
                names.join(", ")
            );
            std::process::exit(1);
        }
    };

    log::info!(
        "orbit {}, zoom {}; drag with the left button, scroll to zoom",
        if options.controls.orbit { "on" } else { "off" },
        if options.controls.zoom { "on" } else { "off" },
    );

    if let Err(e) = Viewer::builder()
        .with_options(options)
        .with_title(title)
        .build()
        .run()
    {
        log::error!("{e}");
        std::process::exit(1);
    }
}
