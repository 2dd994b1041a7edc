use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use tagsheet::families::builtins::BUILTIN_FAMILIES;
use tagsheet::{generate_sheet, Canvas, LayoutOptions, SheetConfig, SheetError};

#[derive(Debug, Parser)]
#[command(name = "tagsheet", version, about = "Generate printable sheets of fiducial tags")]
struct Cli {
    /// Output SVG file.
    #[arg(short = 'f', long, value_name = "PATH", required_unless_present = "list_families")]
    file: Option<PathBuf>,

    /// Tag family, size in mm and optional index range, e.g. `tag36h11:20:0-10`.
    #[arg(short = 't', long = "family-and-size", value_name = "SPEC")]
    family_and_size: Vec<String>,

    /// Number of columns for the column layout (0 disables it).
    #[arg(long, value_name = "N", default_value_t = 0)]
    column_number: usize,

    /// Number of tags to scatter in the arena layout (0 disables it).
    #[arg(long, value_name = "N", default_value_t = 0)]
    arena_number: usize,

    /// Gap between neighboring tags in column layout, mm.
    #[arg(long, value_name = "MM", default_value_t = 0.2)]
    individual_tag_border: f64,

    /// Gap between columns and between families, mm.
    #[arg(long, value_name = "MM", default_value_t = 2.0)]
    family_margin: f64,

    /// Page width, mm.
    #[arg(short = 'W', long, value_name = "MM", default_value_t = 210.0)]
    width: f64,

    /// Page height, mm.
    #[arg(short = 'H', long, value_name = "MM", default_value_t = 297.0)]
    height: f64,

    /// Margin kept free of tags on every side, mm.
    #[arg(long, value_name = "MM", default_value_t = 20.0)]
    arena_border: f64,

    /// Output resolution, dots per inch.
    #[arg(short = 'd', long, value_name = "DPI", default_value_t = tagsheet::DEFAULT_DPI)]
    dpi: u32,

    /// Seed for the arena layout; omit for a fresh random sheet.
    #[arg(long, value_name = "U64")]
    seed: Option<u64>,

    /// Candidate positions tried per tag before the arena gives up.
    #[arg(long, value_name = "N", default_value_t = 10_000)]
    max_attempts: usize,

    /// Also write a JSON report of every placed tag.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Print the built-in tag families and exit.
    #[arg(long)]
    list_families: bool,

    /// More log output (-v info, -vv debug).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    fn into_config(self, file: PathBuf) -> SheetConfig {
        SheetConfig {
            file,
            specs: self.family_and_size,
            canvas: Canvas::new(self.width, self.height, self.arena_border),
            dpi: self.dpi,
            layout: LayoutOptions {
                column_number: self.column_number,
                arena_number: self.arena_number,
                tag_border: self.individual_tag_border,
                family_margin: self.family_margin,
                max_attempts: self.max_attempts,
                seed: self.seed,
            },
            report_path: self.report,
        }
    }
}

fn list_families() {
    for family in BUILTIN_FAMILIES {
        println!(
            "{:<12} {:>4} codes  {}x{} bits",
            family.name,
            family.len(),
            family.bits_per_side,
            family.bits_per_side
        );
    }
}

fn run(cli: Cli) -> Result<(), SheetError> {
    if cli.list_families {
        list_families();
        return Ok(());
    }
    let Some(file) = cli.file.clone() else {
        // clap enforces --file unless --list-families is given
        return Ok(());
    };
    let report = generate_sheet(&cli.into_config(file))?;
    log::info!(
        "{} layout placed {} tags on {}",
        report.strategy.name(),
        report.tags.len(),
        report.file.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    #[cfg(not(feature = "tracing"))]
    if let Err(err) = tagsheet::init_with_level(cli.level()) {
        eprintln!("warning: logger already installed: {err}");
    }
    #[cfg(feature = "tracing")]
    tagsheet::init_tracing(false, cli.level());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
