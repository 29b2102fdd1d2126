use anyhow::{Context, Result};
use clap::Parser;
use std::rc::Rc;

use textgrid::host::{GridHost, Position, RopeHost};
use textgrid::table::{
    detect_delimiter, parse_csv, parse_json, ColumnModel, Delimiter, TableData, TableModel,
};
use textgrid::{TableConfig, TableView};

mod cli;

use cli::CliArgs;

fn load_table(args: &CliArgs) -> Result<TableData> {
    let content = std::fs::read_to_string(&args.path)
        .with_context(|| format!("Failed to read {}", args.path.display()))?;

    if args.is_json() {
        return parse_json(&content)
            .with_context(|| format!("Failed to parse {}", args.path.display()));
    }

    let delimiter = match args.delimiter {
        Some(d) => d.into(),
        None => match args.path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => detect_delimiter(&content),
            Some(ext) => Delimiter::from_extension(ext),
            None => detect_delimiter(&content),
        },
    };
    tracing::debug!(?delimiter, "parsing delimited file");

    parse_csv(&content, delimiter)
        .with_context(|| format!("Failed to parse {}", args.path.display()))
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    textgrid::logging::init(args.log_options());

    let mut config = TableConfig::load();
    args.apply_to(&mut config);

    let model = Rc::new(load_table(&args)?);
    let mut view = match args.width {
        Some(width) => {
            let columns =
                ColumnModel::uniform(model.column_count(), width, config.column_margin)
                    .context("Invalid --width")?;
            TableView::new(model, Some(columns))?
        }
        None => TableView::with_config(model, &config),
    };

    let mut host = RopeHost::new();
    view.draw(&mut host, Position::new(0, 0))?;
    println!("{}", host.text());

    if let Some(pos) = args.locate {
        host.set_focus(pos)
            .with_context(|| format!("{}:{} is outside the grid", pos.line + 1, pos.column + 1))?;
        match view.cell_at_focus(&host)? {
            Some(cell) => {
                let value = view.value_at_focus(&host)?.unwrap_or_default();
                eprintln!(
                    "row {}, column {}, {} from the right edge: {}",
                    cell.row + 1,
                    cell.col + 1,
                    cell.offset,
                    value
                );
            }
            None => eprintln!("{}:{} is not inside the table", pos.line + 1, pos.column + 1),
        }
    }

    Ok(())
}
