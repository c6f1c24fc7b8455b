//! Scripted driver: one capture, drag, extract and analyze cycle from command-line arguments.

use std::path::{Path, PathBuf};

use ca_app::Action;
use ca_app::workflow::Stage;
use ca_host::{App, CaptureSource, ImageFileCapture};
use ca_settings::{ConfigManager, Settings};
use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "chroma_assay")]
#[command(
    version,
    about = "Select a region of a test-strip photo and estimate pH, glucose or lactate",
    long_about = None
)]
pub struct CliArgs {
    /// Photo to analyze
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// pH, Glucose or Lactate
    #[arg(value_name = "ANALYTE")]
    pub analyte: String,

    /// Drag start in display coordinates
    #[arg(value_name = "X0,Y0", value_parser = parse_point, allow_hyphen_values = true)]
    pub start: (i32, i32),

    /// Drag end in display coordinates
    #[arg(value_name = "X1,Y1", value_parser = parse_point, allow_hyphen_values = true)]
    pub end: (i32, i32),

    /// Settings file (defaults to the per-user settings location)
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Where to save the selection surface after the drag
    #[arg(long, value_name = "PNG")]
    pub overlay: Option<PathBuf>,
}

/// Parse a point in the format "x,y".
fn parse_point(text: &str) -> Result<(i32, i32), String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("point must be in format x,y, got: {text}"))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("Invalid x coordinate: {x}"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("Invalid y coordinate: {y}"))?;
    Ok((x, y))
}

/// How a scripted cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Result text shown to the user.
    Result(String),
    /// The cycle stopped at a notification.
    Notification(String),
}

/// Drive one full cycle against `capture`.
pub fn run_cycle(
    settings: Settings,
    capture: Box<dyn CaptureSource>,
    analyte: &str,
    start: (i32, i32),
    end: (i32, i32),
) -> Outcome {
    run_cycle_with(settings, capture, analyte, start, end, |_| {})
}

/// Like [`run_cycle`], calling `on_selected` once the drag is released.
pub fn run_cycle_with(
    settings: Settings,
    capture: Box<dyn CaptureSource>,
    analyte: &str,
    start: (i32, i32),
    end: (i32, i32),
    mut on_selected: impl FnMut(&App),
) -> Outcome {
    let mut app = App::new(settings, capture);

    app.handle(Action::CaptureRequested);
    if app.core().stage() != Stage::Selecting {
        return stopped(&app);
    }

    app.pointer_down(start.0, start.1);
    app.pointer_move(end.0, end.1);
    app.pointer_up(end.0, end.1);
    on_selected(&app);

    app.handle(Action::ExtractRequested);
    if app.core().stage() != Stage::Extracted {
        return stopped(&app);
    }

    app.handle(Action::SelectAnalyte {
        name: analyte.to_string(),
    });
    app.handle(Action::AnalyzeRequested);
    match &app.view().result_text {
        Some(text) => Outcome::Result(text.clone()),
        None => stopped(&app),
    }
}

/// Convenience wrapper for parsed arguments.
pub fn run(args: &CliArgs) -> Outcome {
    let config = ConfigManager::open(args.settings.as_deref());
    log::info!("Using settings at {}", config.path().display());
    run_cycle_with(
        config.into_settings(),
        Box::new(ImageFileCapture::new(&args.image)),
        &args.analyte,
        args.start,
        args.end,
        |app| {
            if let Some(path) = &args.overlay {
                save_surface(app, path);
            }
        },
    )
}

fn save_surface(app: &App, path: &Path) {
    let Some(surface) = app.render_surface() else {
        return;
    };
    match surface.save(path) {
        Ok(()) => log::info!("Saved selection surface to {}", path.display()),
        Err(e) => log::warn!("Could not save {}: {e}", path.display()),
    }
}

fn stopped(app: &App) -> Outcome {
    Outcome::Notification(
        app.view()
            .last_notification()
            .unwrap_or("Cancelled")
            .to_string(),
    )
}
