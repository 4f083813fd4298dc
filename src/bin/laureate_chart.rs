use laureate_chart::api::{ChartConfig, LaureateChart};
use laureate_chart::core::ValidationPolicy;
use laureate_chart::data::load_records_from_path;
use laureate_chart::render::SvgRenderer;
use laureate_chart::telemetry::init_default_tracing;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

const USAGE: &str = "usage: laureate_chart --input <csv> --output <svg> [--config <json>] [--snapshot <json>] [--skip-invalid]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    snapshot: Option<PathBuf>,
    skip_invalid: bool,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(args) = parse_args()? else {
        println!("{USAGE}");
        return Ok(());
    };

    let mut config = match &args.config {
        Some(path) => ChartConfig::from_json_path(path)
            .map_err(|err| format!("failed to load config `{}`: {err}", path.display()))?,
        None => ChartConfig::default(),
    };
    if args.skip_invalid {
        config.validation_policy = ValidationPolicy::SkipAndReport;
    }

    let loaded = load_records_from_path(&args.input, config.validation_policy)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;

    let mut chart = LaureateChart::new(SvgRenderer::new(), config).map_err(|err| err.to_string())?;
    let mut output = chart
        .render_records(&loaded.records)
        .map_err(|err| err.to_string())?;
    let mut skipped = loaded.skipped;
    skipped.append(&mut output.skipped);
    output.skipped = skipped;
    for skipped in &output.skipped {
        warn!(row = skipped.row, field = %skipped.field, reason = %skipped.reason, "skipped record");
    }

    let renderer = chart.into_renderer();
    renderer
        .write_to_path(&args.output)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))?;
    info!(
        output = %args.output.display(),
        records = output.record_count(),
        skipped = output.skipped.len(),
        "chart written"
    );

    if let Some(path) = &args.snapshot {
        let json = output
            .snapshot()
            .to_json_contract_v1_pretty()
            .map_err(|err| err.to_string())?;
        fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
    }

    Ok(())
}

/// Returns `Ok(None)` when help was requested.
fn parse_args() -> Result<Option<CliArgs>, String> {
    let mut args = std::env::args().skip(1);

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut snapshot = None::<PathBuf>;
    let mut skip_invalid = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--snapshot" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --snapshot".to_owned())?;
                snapshot = Some(PathBuf::from(value));
            }
            "--skip-invalid" => skip_invalid = true,
            "--help" | "-h" => return Ok(None),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(Some(CliArgs {
        input: input.ok_or_else(|| format!("missing --input\n{USAGE}"))?,
        output: output.ok_or_else(|| format!("missing --output\n{USAGE}"))?,
        config,
        snapshot,
        skip_invalid,
    }))
}
