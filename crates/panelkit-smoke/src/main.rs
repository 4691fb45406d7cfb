//! PanelKit Smoke Harness
//!
//! Exercises the responsive grid engine with a scripted layout stress run:
//! a width sweep against a fixed-height host (simulating a sidebar drag) and
//! a pass against a vertically-scrolling host. Prints a single JSON result
//! line for CI consumption.

use panelkit_layout::{arrange, measure, ChildItem, GridConfig, Size};
use serde_json::json;
use tracing::{debug, error, info};

/// Parse command line arguments
struct Args {
    children: usize,
    child_width: f32,
    child_height: f32,
    gap: f32,
    min_width: f32,
    max_width: f32,
    step: f32,
}

impl Args {
    fn parse() -> Self {
        let mut args = std::env::args().skip(1);
        let mut children = 24usize;
        let mut child_width = 120.0f32;
        let mut child_height = 80.0f32;
        let mut gap = 8.0f32;
        let mut min_width = 160.0f32;
        let mut max_width = 1280.0f32;
        let mut step = 40.0f32;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--children" => {
                    if let Some(val) = args.next() {
                        children = val.parse().unwrap_or(24);
                    }
                }
                "--child-width" => {
                    if let Some(val) = args.next() {
                        child_width = val.parse().unwrap_or(120.0);
                    }
                }
                "--child-height" => {
                    if let Some(val) = args.next() {
                        child_height = val.parse().unwrap_or(80.0);
                    }
                }
                "--gap" => {
                    if let Some(val) = args.next() {
                        gap = val.parse().unwrap_or(8.0);
                    }
                }
                "--min-width" => {
                    if let Some(val) = args.next() {
                        min_width = val.parse().unwrap_or(160.0);
                    }
                }
                "--max-width" => {
                    if let Some(val) = args.next() {
                        max_width = val.parse().unwrap_or(1280.0);
                    }
                }
                "--step" => {
                    if let Some(val) = args.next() {
                        step = val.parse().unwrap_or(40.0);
                    }
                }
                _ => {}
            }
        }

        Self {
            children,
            child_width,
            child_height,
            gap,
            min_width,
            max_width,
            step,
        }
    }
}

/// One measure+arrange pass against a vertically-scrolling host of the given
/// width. Returns false if any placement escapes the measured bounds.
fn run_pass(width: f32, config: &GridConfig, children: &mut [ChildItem]) -> bool {
    let available = Size::new(width, f32::INFINITY);
    let result = measure(available, config, children);
    let final_size = arrange(result.desired, config, &result.metrics, children);

    debug!(
        width,
        columns = result.metrics.columns,
        rows = result.metrics.rows,
        desired_width = result.desired.width,
        desired_height = result.desired.height,
        "Completed layout pass"
    );

    let mut ok = true;
    for child in children.iter().filter(|c| c.visible) {
        if child.rect.right() > final_size.width + 0.5
            || child.rect.bottom() > final_size.height + 0.5
        {
            error!(rect = ?child.rect, width, "Placement escaped the arranged bounds");
            ok = false;
        }
    }
    ok
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!(
        children = args.children,
        child_width = args.child_width,
        child_height = args.child_height,
        gap = args.gap,
        min_width = args.min_width,
        max_width = args.max_width,
        "Starting PanelKit Smoke Harness"
    );

    let config = GridConfig::with_gaps(args.gap, args.gap);
    if let Err(e) = config.validate() {
        let result = json!({
            "status": "fail",
            "reason": e.to_string(),
        });
        println!("{}", result);
        std::process::exit(1);
    }

    let mut children: Vec<ChildItem> = (0..args.children)
        .map(|_| ChildItem::new(Size::new(args.child_width, args.child_height)))
        .collect();

    // Phase 1: width sweep, simulating a sidebar drag shrinking the host
    let mut passes = 0usize;
    let mut failures = 0usize;
    let mut width = args.max_width;
    while width >= args.min_width {
        if !run_pass(width, &config, &mut children) {
            failures += 1;
        }
        passes += 1;
        width -= args.step;
    }

    // Phase 2: final pass at the minimum width for the reported shape
    let result = measure(Size::new(args.min_width, f32::INFINITY), &config, &children);
    arrange(result.desired, &config, &result.metrics, &mut children);
    passes += 1;

    let status = if failures == 0 { "pass" } else { "fail" };
    let summary = json!({
        "status": status,
        "passes": passes,
        "failures": failures,
        "final_grid": {
            "columns": result.metrics.columns,
            "rows": result.metrics.rows,
            "desired_width": result.desired.width,
            "desired_height": result.desired.height,
        }
    });
    println!("{}", summary);

    if failures > 0 {
        std::process::exit(1);
    }
}
