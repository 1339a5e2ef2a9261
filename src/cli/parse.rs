use clap::{Args, Parser, Subcommand};

use crate::core::{
    config::{RenderConfig, RenderConfigBuilder},
    constants::DEFAULT_CATEGORIES,
};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "flagged-histogram",
    about = "Age histogram of flagged items as an ASCII bar chart"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,

    /// Log layout, scale and timing diagnostics to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Also log every dropped sample
    #[arg(long, global = true)]
    pub trace: bool,
}

impl Cli {
    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        if self.trace {
            log::LevelFilter::Trace
        } else if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot classified items read from a CSV file
    Csv(CsvArgs),
    /// Plot a synthetic mailbox of flagged items
    Demo(DemoArgs),
    /// Print example invocations
    Examples,
}

/// Binning, scaling and category selection shared by every plot.
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// Bin width in days
    #[arg(long)]
    pub bin_size: Option<f64>,
    /// Number of bins (width derived)
    #[arg(long = "bins")]
    pub bin_count: Option<usize>,

    /// Bar width in characters (terminal width if omitted)
    #[arg(long)]
    pub width: Option<usize>,
    /// Lower bound on characters per item
    #[arg(long, allow_negative_numbers = true)]
    pub min_scale: Option<f64>,
    /// Upper bound on characters per item
    #[arg(long)]
    pub max_scale: Option<f64>,

    /// Category glyphs in bar order, one character each
    #[arg(long, allow_hyphen_values = true, default_value_t = String::from_iter(DEFAULT_CATEGORIES))]
    pub categories: String,
    /// Categories added to each row's value (all if omitted)
    #[arg(long, allow_hyphen_values = true)]
    pub positive: Option<String>,
    /// Categories subtracted from each row's value
    #[arg(long, allow_hyphen_values = true, default_value = "")]
    pub negative: String,

    /// Chart title
    #[arg(short, long, default_value = "Flagged items by age")]
    pub title: String,
}

impl ChartArgs {
    #[must_use]
    pub fn categories(&self) -> Vec<char> {
        self.categories.chars().collect()
    }

    #[must_use]
    pub fn positive(&self) -> Vec<char> {
        self.positive
            .as_deref()
            .unwrap_or(self.categories.as_str())
            .chars()
            .collect()
    }

    #[must_use]
    pub fn negative(&self) -> Vec<char> {
        self.negative.chars().collect()
    }

    /// Builder pre-loaded with everything but the width.
    #[must_use]
    pub fn config(&self, width: usize) -> RenderConfigBuilder {
        let mut b = RenderConfig::builder(width)
            .min_scale_opt(self.min_scale)
            .max_scale_opt(self.max_scale);
        if let Some(size) = self.bin_size {
            b = b.bin_size(size);
        }
        if let Some(count) = self.bin_count {
            b = b.bin_count(count);
        }
        b
    }
}

/// `flagged-histogram csv …`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV path (use `-` for stdin); rows are `category,age` or `category,start,end`
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    #[command(flatten)]
    pub chart: ChartArgs,
}

/// `flagged-histogram demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 500)]
    pub items: usize,
    /// Mean item age in days
    #[arg(long, default_value_t = 30.0)]
    pub mean_age: f64,
    /// Flags older than this many days count as overdue
    #[arg(long, default_value_t = 14.0)]
    pub due: f64,
    /// Also record how long each flag has been set, as an interval
    #[arg(long, default_value_t = false)]
    pub spans: bool,
    /// Fixed RNG seed (time-based if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub chart: ChartArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_every_category() {
        let cli = Cli::parse_from(["flagged-histogram", "csv", "ages.csv", "--bins", "4"]);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
        let Command::Csv(a) = cli.cmd else {
            panic!("expected csv subcommand");
        };
        assert_eq!(a.chart.categories(), vec!['#', '+', '-', '.']);
        assert_eq!(a.chart.positive(), a.chart.categories());
        assert!(a.chart.negative().is_empty());
    }

    #[test]
    fn chart_args_build_config() {
        let cli = Cli::parse_from([
            "flagged-histogram",
            "--debug",
            "demo",
            "--bin-size",
            "7",
            "--max-scale",
            "2.5",
        ]);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
        let Command::Demo(a) = cli.cmd else {
            panic!("expected demo subcommand");
        };
        let cfg = a.chart.config(40).build().unwrap();
        assert_eq!(cfg.bin_size, Some(7.0));
        assert_eq!(cfg.max_scale, Some(2.5));
        assert_eq!(cfg.width, 40);
    }

    #[test]
    fn glyph_sets_may_start_with_a_hyphen() {
        let cli = Cli::parse_from([
            "flagged-histogram",
            "csv",
            "--bins",
            "3",
            "--positive",
            "#+",
            "--negative",
            "-.",
        ]);
        let Command::Csv(a) = cli.cmd else {
            panic!("expected csv subcommand");
        };
        assert_eq!(a.chart.negative(), vec!['-', '.']);
        assert_eq!(a.file, "-");
    }
}
