use std::fs;
use std::path::PathBuf;

use recipe_scaler::page::StaticPage;
use recipe_scaler::telemetry::init_tracing;
use recipe_scaler::{ScalerConfig, ScalerEngine};

#[derive(Debug, Default)]
struct CliArgs {
    page_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    query: Option<String>,
    language: Option<String>,
    print_outcome: bool,
}

fn main() {
    let _ = init_tracing("warn");
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };
    let page_path = args
        .page_path
        .ok_or_else(|| "missing required --page <page.json>".to_owned())?;

    let raw_page = fs::read_to_string(&page_path)
        .map_err(|err| format!("failed to read `{}`: {err}", page_path.display()))?;
    let mut page = StaticPage::from_json_str(&raw_page).map_err(|err| err.to_string())?;
    if let Some(query) = args.query {
        page.query = query;
    }
    if let Some(language) = args.language {
        page.language = language;
    }

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ScalerConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ScalerConfig::default(),
    };

    let mut engine = ScalerEngine::new(page, config).map_err(|err| err.to_string())?;
    let outcome = engine.recompute().map_err(|err| err.to_string())?;

    let output = if args.print_outcome {
        outcome.to_json_contract_v1_pretty()
    } else {
        engine.page().to_json_pretty()
    }
    .map_err(|err| err.to_string())?;
    println!("{output}");
    Ok(())
}

fn parse_args() -> Result<Option<CliArgs>, String> {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--page" => parsed.page_path = Some(PathBuf::from(value_for("--page")?)),
            "--config" => parsed.config_path = Some(PathBuf::from(value_for("--config")?)),
            "--query" => parsed.query = Some(value_for("--query")?),
            "--lang" => parsed.language = Some(value_for("--lang")?),
            "--outcome" => parsed.print_outcome = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(Some(parsed))
}

fn print_usage() {
    println!(
        "usage: scale_page_snapshot --page <page.json> [--query <qs>] [--lang <tag>] \
         [--config <config.json>] [--outcome]"
    );
}
