use std::{
    io::{Write, stdout},
    time::Instant,
};

use crate::{
    core::{
        bounds::{bar_width, terminal_width},
        constants::UNFLAGGED,
        error::AppError,
        histogram::{Histogram, RenderResult},
        rng::{ItemSource, Lcg},
        sample::read_events_from_path,
    },
    render::table::{Table, column_widths},
};

use super::parse::{ChartArgs, CsvArgs, DemoArgs};

/// Weekly bins when `demo` is run without a binning flag.
const DEMO_BIN_SIZE: f64 = 7.0;

pub fn csv(a: &CsvArgs) -> Result<(), AppError> {
    let t_ingest = Instant::now();
    let events = read_events_from_path(&a.file)?;
    log::debug!(
        "CSV ingest: {} µs   ({} events)",
        t_ingest.elapsed().as_micros(),
        events.len()
    );

    let mut hist = Histogram::new(a.chart.categories());
    for e in events {
        hist.add_event(e);
    }
    plot(&hist, &a.chart, &mut stdout().lock())
}

pub fn demo(a: &DemoArgs) -> Result<(), AppError> {
    let rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let mut chart = a.chart.clone();
    if chart.bin_size.is_none() && chart.bin_count.is_none() {
        chart.bin_size = Some(DEMO_BIN_SIZE);
    }

    let mut hist = Histogram::new(chart.categories());
    let mut flagged = 0usize;
    for e in ItemSource::new(rng, a.mean_age, a.due, a.spans).take(a.items) {
        if e.category() != UNFLAGGED {
            flagged += 1;
        }
        hist.add_event(e);
    }
    log::debug!("demo mailbox: {} events, {flagged} flagged", a.items);
    plot(&hist, &chart, &mut stdout().lock())
}

/// Render `hist` and print it as a table. Without `--width` the bars get
/// whatever the terminal leaves after the label and value columns.
pub fn plot<W: Write>(
    hist: &Histogram<char>,
    chart: &ChartArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let t_render = Instant::now();
    let positive = chart.positive();
    let negative = chart.negative();

    let result = match chart.width {
        Some(width) => hist.render(&chart.config(width).build()?, &positive, &negative)?,
        None => {
            // labels and values do not depend on the width; measure them first
            let probe = hist.render(&chart.config(0).build()?, &positive, &negative)?;
            let (lw, vw) = column_widths(&probe);
            let width = bar_width(terminal_width(), lw, vw);
            hist.render(&chart.config(width).build()?, &positive, &negative)?
        }
    };
    log::debug!("render: {} µs", t_render.elapsed().as_micros());

    Table::new(chart.title.clone())
        .footer(footer(&result))
        .write_to(out, &result)?;
    Ok(())
}

fn footer(result: &RenderResult) -> Option<String> {
    result.scale.is_finite().then(|| {
        format!(
            "{} bins, {:.2} chars per item",
            result.bin_count, result.scale
        )
    })
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "flagged-histogram";
    println!(
        "
Example invocations
-------------------
• Weekly bins       : {bin} csv ages.csv --bin-size 7
• Ten bins          : {bin} csv ages.csv --bins 10
• From stdin        : cat ages.csv | {bin} csv - --bins 8
• Flagged minus done: {bin} csv ages.csv --bin-size 7 --positive '#+' --negative '-'
• Fixed bar width   : {bin} csv ages.csv --bin-size 30 --width 40 --max-scale 2
• Synthetic mailbox : {bin} demo --items 2000 --mean-age 45 --spans --seed 7
• Diagnostics       : {bin} --debug demo

CSV rows are `category,age` (point) or `category,start,end` (interval),
one glyph per category, e.g. `+,12.5` or `#,3,40`.
"
    );
}
