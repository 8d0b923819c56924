mod app;
mod sources;

use std::env;
use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use app::MapApp;
use sources::{SourceSet, load_map_data};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[derive(Debug)]
struct Options {
    sources: SourceSet,
    out: PathBuf,
    focus: Option<String>,
    width: f64,
    height: f64,
}

async fn real_main() -> Result<(), String> {
    let opts = parse_args(env::args().skip(1).collect())?;

    let client = reqwest::Client::new();
    let Some(data) = load_map_data(&client, &opts.sources).await else {
        // Load failure policy: logged, render skipped, nothing written.
        return Ok(());
    };

    let mut map = MapApp::new(&data, opts.width, opts.height);
    if let Some(name) = &opts.focus {
        if map.focus_labeled(name) {
            info!("focused on {name}");
        } else {
            warn!("no region labeled {name:?}, rendering the overview");
        }
    }

    let svg = map.render();
    tokio::fs::write(&opts.out, svg)
        .await
        .map_err(|e| format!("write {:?}: {e}", opts.out))?;

    info!("wrote {}", opts.out.display());
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<Options, String> {
    let mut sources = SourceSet {
        states: env_or("VIEWER_STATES_URL", &SourceSet::default().states),
        counties: env_or("VIEWER_COUNTIES_URL", &SourceSet::default().counties),
        plants: env_or("VIEWER_PLANTS_URL", &SourceSet::default().plants),
    };
    let mut out = PathBuf::from("map.svg");
    let mut focus: Option<String> = None;
    let mut width = 975.0;
    let mut height = 610.0;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--states" => sources.states = take_value(&args, &mut i, "--states")?,
            "--counties" => sources.counties = take_value(&args, &mut i, "--counties")?,
            "--plants" => sources.plants = take_value(&args, &mut i, "--plants")?,
            "--sources" => {
                let path = take_value(&args, &mut i, "--sources")?;
                let text = std::fs::read_to_string(&path)
                    .map_err(|e| format!("read {path:?}: {e}"))?;
                sources = serde_json::from_str(&text)
                    .map_err(|e| format!("parse {path:?}: {e}"))?;
            }
            "--out" => out = PathBuf::from(take_value(&args, &mut i, "--out")?),
            "--focus" => focus = Some(take_value(&args, &mut i, "--focus")?),
            "--width" => {
                width = take_value(&args, &mut i, "--width")?
                    .parse::<f64>()
                    .map_err(|_| "--width must be a number".to_string())?;
            }
            "--height" => {
                height = take_value(&args, &mut i, "--height")?
                    .parse::<f64>()
                    .map_err(|_| "--height must be a number".to_string())?;
            }
            other => {
                return Err(format!("unknown arg: {other}\n\n{}", usage()));
            }
        }
        i += 1;
    }

    if width <= 0.0 || height <= 0.0 {
        return Err("--width and --height must be positive".to_string());
    }

    Ok(Options {
        sources,
        out,
        focus,
        width,
        height,
    })
}

fn take_value(args: &[String], i: &mut usize, flag: &str) -> Result<String, String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn usage() -> String {
    let exe = env::args().next().unwrap_or_else(|| "viewer".to_string());
    format!(
        "Usage:\n  {exe} [--states LOC] [--counties LOC] [--plants LOC] [--sources FILE]\n         [--out FILE] [--focus NAME] [--width N] [--height N]\n\nNotes:\n- LOC is an http(s) URL or a local file path; defaults come from the\n  VIEWER_STATES_URL / VIEWER_COUNTIES_URL / VIEWER_PLANTS_URL env vars.\n- --sources reads all three locations from a JSON file.\n- --focus renders the view zoomed onto the named state.\n"
    )
}
