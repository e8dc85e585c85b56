use std::io::{self, Read};

use topomap::svg::MapTheme;
use topomap::{parse_map_data, render_to_svg, render_with_options, MapError, RenderOptions, Viewport};
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("topomap - Render a building map with its topology overlay as SVG");
    println!();
    println!("Usage: topomap [OPTIONS] [FILE]");
    println!();
    println!("Reads map JSON from FILE or stdin and writes SVG to stdout.");
    println!();
    println!("Options:");
    println!("  -h, --help         Show this help message");
    println!("  -s, --size WxH     Viewport size (default: 400x300)");
    println!("      --no-overlay   Draw only the card and base image");
    println!("      --dark         Use the dark card theme");
    println!("      --theme NAME   Card theme: light or dark (default: light)");
    println!("      --font NAME    Font family for text (default: Inter)");
    println!("      --scene        Print the layered scene as JSON instead of SVG");
    println!();
    println!("Set RUST_LOG=debug to report dangling edges and duplicate node ids.");
}

fn run(args: &[String]) -> Result<String, MapError> {
    let mut options = RenderOptions::default();
    let mut as_scene = false;
    let mut path: Option<&str> = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-s" | "--size" => {
                let value = iter
                    .next()
                    .ok_or_else(|| MapError::InvalidViewport("missing value for --size".to_string()))?;
                options.viewport = Viewport::parse(value)?;
            }
            "--no-overlay" => options.show_topology_overlay = false,
            "--dark" => options.theme = MapTheme::Dark,
            "--theme" => {
                let value = iter
                    .next()
                    .ok_or_else(|| MapError::InvalidOption("missing value for --theme".to_string()))?;
                options.theme = value.parse()?;
            }
            "--font" => {
                let value = iter
                    .next()
                    .ok_or_else(|| MapError::InvalidOption("missing value for --font".to_string()))?;
                options.font = value.clone();
            }
            "--scene" => as_scene = true,
            other if !other.starts_with('-') => path = Some(other),
            other => tracing::warn!(flag = other, "ignoring unknown option"),
        }
    }

    let input = match path {
        Some(p) => std::fs::read_to_string(p)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let map = parse_map_data(&input)?;
    tracing::info!(map = %map.id, name = %map.name, theme = %options.theme, "rendering map");

    if as_scene {
        let scene = render_with_options(&map, &options);
        Ok(serde_json::to_string_pretty(&scene)?)
    } else {
        Ok(render_to_svg(&map, &options))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return;
    }

    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("topomap")
            .chain(list.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_missing_option_values_are_errors() {
        assert!(matches!(run(&args(&["--font"])), Err(MapError::InvalidOption(_))));
        assert!(matches!(run(&args(&["--theme"])), Err(MapError::InvalidOption(_))));
        assert!(matches!(run(&args(&["--size"])), Err(MapError::InvalidViewport(_))));
    }

    #[test]
    fn test_bad_option_values_are_errors() {
        assert!(matches!(run(&args(&["--theme", "sepia"])), Err(MapError::InvalidOption(_))));
        assert!(matches!(run(&args(&["--size", "0x10"])), Err(MapError::InvalidViewport(_))));
    }

    #[test]
    fn test_renders_fixture_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/maps/floor_one.json");
        let svg = run(&args(&["--theme", "dark", "--font", "Roboto", path])).unwrap();
        assert!(svg.contains("'Roboto'"));
        assert!(svg.contains("#1f1f1f"));
    }
}
