//! Command-line interface.
//!
//! Every subcommand writes its result to the supplied writer, as text or as
//! JSON with `--json`. Logging goes to stderr.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use gridfit_core::{Circle, Point};
use gridfit_fitting::{try_fit_circle, try_fit_ellipse};
use gridfit_grid::{compute_bounding_circles, CircleRasterizer, GridModel};
use gridfit_session::{FitResult, InputEvent, Mode, Session};
use gridfit_settings::{Config, GridOverrides, ShapeKind};
use serde_json::json;
use tracing::debug;

use crate::report::{describe_bounds, describe_circle, describe_ellipse, render_grid};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

#[derive(Parser, Debug)]
#[command(name = "gridfit")]
#[command(author, version, long_version = LONG_VERSION)]
#[command(about = "Rasterize circles onto a point grid and fit circles or ellipses through points")]
pub struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Grid points per side
    #[arg(long, global = true)]
    pub grid_size: Option<usize>,

    /// Canvas size as WIDTHxHEIGHT
    #[arg(long, global = true, value_parser = parse_canvas)]
    pub canvas: Option<(u32, u32)>,

    /// Canvas padding on every side
    #[arg(long, global = true)]
    pub padding: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Flag the grid points along a circle given in grid coordinates
    Raster {
        /// Circle center as X,Y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        center: Point,

        /// Circle radius in grid units
        #[arg(long)]
        radius: f64,

        /// Evaluate every grid point instead of the circle's bounding box
        #[arg(long)]
        full_scan: bool,
    },

    /// Fit a circle through points given as X,Y
    FitCircle {
        #[arg(required = true, value_parser = parse_point, allow_hyphen_values = true)]
        points: Vec<Point>,
    },

    /// Fit an ellipse through points given as X,Y
    FitEllipse {
        #[arg(required = true, value_parser = parse_point, allow_hyphen_values = true)]
        points: Vec<Point>,
    },

    /// Select grid points given as ROW,COL and fit a shape through them
    Select {
        /// Shape to fit (defaults to the configured shape)
        #[arg(long, value_enum)]
        shape: Option<ShapeKind>,

        #[arg(required = true, value_parser = parse_cell)]
        cells: Vec<(usize, usize)>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Destination (defaults to the platform config directory)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_pair<T: std::str::FromStr>(s: &str, what: &str) -> Result<(T, T), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected {what}, got '{s}'"))?;
    let a = a.trim().parse::<T>().map_err(|_| format!("invalid {what}: '{s}'"))?;
    let b = b.trim().parse::<T>().map_err(|_| format!("invalid {what}: '{s}'"))?;
    Ok((a, b))
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = parse_pair::<f64>(s, "X,Y")?;
    Ok(Point::new(x, y))
}

fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    parse_pair::<usize>(s, "ROW,COL")
}

fn parse_canvas(s: &str) -> Result<(u32, u32), String> {
    GridOverrides::parse_canvas(s).map_err(|e| e.to_string())
}

impl Cli {
    fn overrides(&self) -> GridOverrides {
        GridOverrides {
            size: self.grid_size,
            canvas: self.canvas,
            padding: self.padding,
        }
    }

    /// Loads the configuration and applies command-line overrides.
    ///
    /// An explicit `--config` file must load cleanly; the platform default
    /// falls back to built-in defaults.
    pub fn effective_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Config::load_or_default(None),
        };

        let overrides = self.overrides();
        if !overrides.is_empty() {
            debug!("Applying command-line overrides: {:?}", overrides);
            config.apply_overrides(&overrides);
        }
        config.validate()?;
        Ok(config)
    }
}

fn write_json(out: &mut dyn Write, value: &serde_json::Value) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Runs the parsed command, writing results to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    match &cli.command {
        Command::Config { action } => run_config(cli, action, out),
        Command::Raster {
            center,
            radius,
            full_scan,
        } => run_raster(cli, *center, *radius, *full_scan, out),
        Command::FitCircle { points } => {
            let circle = try_fit_circle(points).context("circle fit failed")?;
            if cli.json {
                write_json(out, &json!({ "circle": circle }))
            } else {
                writeln!(out, "circle: {}", describe_circle(&circle))?;
                Ok(())
            }
        }
        Command::FitEllipse { points } => {
            let ellipse = try_fit_ellipse(points).context("ellipse fit failed")?;
            if cli.json {
                write_json(out, &json!({ "ellipse": ellipse }))
            } else {
                writeln!(out, "ellipse: {}", describe_ellipse(&ellipse))?;
                Ok(())
            }
        }
        Command::Select { shape, cells } => run_select(cli, *shape, cells, out),
    }
}

fn run_config(cli: &Cli, action: &ConfigAction, out: &mut dyn Write) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = cli.effective_config()?;
            if cli.json {
                write_json(out, &serde_json::to_value(&config)?)
            } else {
                write!(out, "{}", toml::to_string_pretty(&config)?)?;
                Ok(())
            }
        }
        ConfigAction::Init { path, force } => {
            let path = match path {
                Some(path) => path.clone(),
                None => Config::default_path()?,
            };
            if path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save_to_file(&path)?;
            writeln!(out, "Wrote default configuration to {}", path.display())?;
            Ok(())
        }
    }
}

fn run_raster(
    cli: &Cli,
    center: Point,
    radius: f64,
    full_scan: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if !(radius > 0.0) {
        bail!("radius must be positive, got {}", radius);
    }

    let config = cli.effective_config()?;
    let mut grid = GridModel::try_new(
        config.grid.size,
        config.grid.canvas_width,
        config.grid.canvas_height,
        config.grid.padding,
    )?;

    let circle = Circle::new(center, radius);
    if full_scan {
        CircleRasterizer::rasterize(&mut grid, &circle);
    } else {
        CircleRasterizer::rasterize_bounded(&mut grid, &circle);
    }
    let bounds = compute_bounding_circles(&grid, center);

    if cli.json {
        let rows: Vec<String> = render_grid(&grid).lines().map(str::to_string).collect();
        return write_json(
            out,
            &json!({
                "circle": circle,
                "bounds": bounds,
                "flagged": grid.flagged_grid_points(),
                "grid": rows,
            }),
        );
    }

    write!(out, "{}", render_grid(&grid))?;
    writeln!(out, "circle: {}", describe_circle(&circle))?;
    writeln!(out, "flagged: {}", grid.flagged_count())?;
    writeln!(out, "{}", describe_bounds(bounds.as_ref()))?;
    Ok(())
}

fn run_select(
    cli: &Cli,
    shape: Option<ShapeKind>,
    cells: &[(usize, usize)],
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let config = cli.effective_config()?;
    let mut session = Session::new(&config)?;
    let mode = Mode::from(shape.unwrap_or(config.fitting.default_shape));
    session.handle(InputEvent::SwitchMode(mode));

    let size = session.grid().size();
    for &(row, col) in cells {
        if row >= size || col >= size {
            bail!("cell {},{} is outside the {}x{} grid", row, col, size, size);
        }
        session.toggle(row, col);
    }

    if let Some(notice) = session.handle(InputEvent::Generate) {
        if cli.json {
            write_json(out, &json!(notice))?;
        } else {
            writeln!(out, "{}", notice)?;
        }
        bail!("{}", notice.title());
    }

    let fit = session
        .fit_result()
        .copied()
        .context("fit produced no result")?;
    if cli.json {
        return write_json(out, &json!({ "fit": fit }));
    }

    write!(out, "{}", render_grid(session.grid()))?;
    match fit {
        FitResult::Circle { circle } => writeln!(out, "circle: {}", describe_circle(&circle))?,
        FitResult::Ellipse { ellipse } => {
            writeln!(out, "ellipse: {}", describe_ellipse(&ellipse))?
        }
    }
    Ok(())
}
