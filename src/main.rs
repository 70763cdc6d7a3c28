use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::time::Instant;
use tweener::config::Config;
use tweener::{lerp, try_run_tween_with_clock, Easing, Step, SystemClock};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let first = args.next();

    match first.as_deref() {
        Some("list") => {
            for easing in Easing::ALL {
                println!("{easing}");
            }
            return Ok(());
        }
        Some("init") => {
            let path = Config::default().save()?;
            println!("Wrote default config to {}", path.display());
            return Ok(());
        }
        _ => {}
    }

    let mut config = Config::load().context("Failed to load config")?;
    if let Some(name) = first {
        config.easing = name.parse()?;
    }
    if let Some(duration) = args.next() {
        config.duration_ms = duration
            .parse()
            .with_context(|| format!("Invalid duration `{duration}`"))?;
    }
    config.validate()?;

    info!(
        "Running {} over {}ms (throttle {}ms)",
        config.easing, config.duration_ms, config.throttle_ms
    );

    let width = config.bar_width as usize;
    let started = Instant::now();
    let mut stdout = std::io::stdout().lock();
    let outcome = try_run_tween_with_clock(
        SystemClock::new(),
        config.easing.as_fn(),
        config.duration_ms,
        |value| -> Result<Step> {
            write!(stdout, "\r{}", render_bar(value, width))?;
            stdout.flush()?;
            Ok(Step::Continue)
        },
        config.tween_options(),
    )?;
    writeln!(stdout)?;

    info!(
        "Done: {} samples in {}ms",
        outcome.samples,
        started.elapsed().as_millis()
    );
    Ok(())
}

/// One line of the progress bar. Values past either end pin the bar and
/// swap the closing bracket for an arrow.
fn render_bar(value: f64, width: usize) -> String {
    let filled = lerp(0.0, width as f64, value).round().clamp(0.0, width as f64) as usize;
    let edge = if value > 1.0 {
        '>'
    } else if value < 0.0 {
        '<'
    } else {
        ']'
    };
    format!(
        "[{}{}{} {:6.3}",
        "#".repeat(filled),
        " ".repeat(width - filled),
        edge,
        value
    )
}
