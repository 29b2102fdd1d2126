//! Command-line argument parsing for the textgrid binary
//!
//! Supports:
//! - Rendering CSV/TSV/PSV and JSON files as a grid
//! - Overriding column layout settings from the config file
//! - Locating a line:column inside the rendered grid

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use textgrid::host::Position;
use textgrid::logging::LogOptions;
use textgrid::table::Delimiter;
use textgrid::TableConfig;

/// Render tabular data as a fixed-width text grid
#[derive(Parser, Debug)]
#[command(name = "textgrid", version, about = "Render tables as fixed-width text grids")]
pub struct CliArgs {
    /// CSV, TSV, PSV or JSON file to render
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Field delimiter (detected from extension and content when omitted)
    #[arg(short, long, value_enum)]
    pub delimiter: Option<DelimiterArg>,

    /// Spaces between columns
    #[arg(short, long, value_name = "N")]
    pub margin: Option<usize>,

    /// Give every column this fixed width instead of sizing from content
    #[arg(short, long, value_name = "N")]
    pub width: Option<usize>,

    /// Widest a content-sized column may grow
    #[arg(long, value_name = "N")]
    pub max_width: Option<usize>,

    /// Right-align columns that contain only numbers
    #[arg(long)]
    pub right_align_numbers: bool,

    /// Report the cell at LINE:COL (1-indexed) of the rendered grid
    #[arg(long, value_name = "LINE:COL", value_parser = parse_location)]
    pub locate: Option<Position>,

    /// More console logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not write the rolling log file
    #[arg(long)]
    pub no_log_file: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DelimiterArg {
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Comma => Delimiter::Comma,
            DelimiterArg::Tab => Delimiter::Tab,
            DelimiterArg::Pipe => Delimiter::Pipe,
            DelimiterArg::Semicolon => Delimiter::Semicolon,
        }
    }
}

/// Parse "LINE:COL" (1-indexed) into a 0-indexed position
fn parse_location(s: &str) -> Result<Position, String> {
    let (line, column) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got '{}'", s))?;
    let line: usize = line
        .trim()
        .parse()
        .map_err(|_| format!("invalid line '{}'", line))?;
    let column: usize = column
        .trim()
        .parse()
        .map_err(|_| format!("invalid column '{}'", column))?;
    if line == 0 || column == 0 {
        return Err("line and column are 1-indexed".to_string());
    }
    Ok(Position::new(line - 1, column - 1))
}

impl CliArgs {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_to(&self, config: &mut TableConfig) {
        if let Some(margin) = self.margin {
            config.column_margin = margin;
        }
        if let Some(max_width) = self.max_width {
            config.max_width = max_width;
        }
        if self.right_align_numbers {
            config.right_align_numbers = true;
        }
    }

    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            verbosity: self.verbose,
            file: !self.no_log_file,
        }
    }

    pub fn is_json(&self) -> bool {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"))
    }
}
