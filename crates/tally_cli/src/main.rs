//! Animated counter demo
//!
//! Renders the mock dashboard's headline counters and per-room bars in the
//! terminal, driving them with the tween engine against the real clock.
//!
//! Run with: cargo run -p tally_cli -- --easing out-bounce --duration-ms 1500

use std::cell::Cell;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tally_animation::{Easing, SystemClock, TweenBatch, TweenDriver};
use tally_format::{format_percentage, group_digits};

mod rooms;

use rooms::RoomRecord;

const BAR_WIDTH: usize = 28;

#[derive(Parser, Debug)]
#[command(name = "tally", about = "Animated counter demo for the mock rooms dashboard")]
struct Args {
    /// Animation duration in milliseconds
    #[arg(long, default_value_t = 1200.0)]
    duration_ms: f64,

    /// Easing curve for every counter
    #[arg(long, value_enum, default_value = "out-cubic")]
    easing: EasingArg,

    /// Repaint rate of the terminal frame loop
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Locale tag used for digit grouping
    #[arg(long, default_value = "en-US")]
    locale: String,

    /// Extra start delay per room bar, in milliseconds
    #[arg(long, default_value_t = 80.0)]
    stagger_ms: f64,

    /// Start every counter from this value instead of 0
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// JSON file with room records replacing the built-in dataset
    #[arg(long)]
    data: Option<PathBuf>,

    /// Enable debug logging from the animation driver
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EasingArg {
    Linear,
    OutCubic,
    InOutCubic,
    OutBounce,
}

impl From<EasingArg> for Easing {
    fn from(arg: EasingArg) -> Self {
        match arg {
            EasingArg::Linear => Easing::Linear,
            EasingArg::OutCubic => Easing::EaseOutCubic,
            EasingArg::InOutCubic => Easing::EaseInOutCubic,
            EasingArg::OutBounce => Easing::EaseOutBounce,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let rooms = match &args.data {
        Some(path) => rooms::load_rooms(path)?,
        None => rooms::builtin_rooms(),
    };

    run_demo(&args, &rooms)
}

/// Shared cells the tween sinks write into and the renderer reads from.
struct CounterCells {
    api_calls: Rc<Cell<i64>>,
    quota: Rc<Cell<i64>>,
    peak: Rc<Cell<i64>>,
    bars: Vec<Rc<Cell<i64>>>,
}

fn cell_sink(cell: &Rc<Cell<i64>>) -> impl FnMut(i64, f64) + 'static {
    let cell = cell.clone();
    move |value, _progress| cell.set(value)
}

fn run_demo(args: &Args, rooms: &[RoomRecord]) -> Result<()> {
    let easing = Easing::from(args.easing);
    let mut driver = TweenDriver::new(SystemClock::new());

    let cells = CounterCells {
        api_calls: Rc::new(Cell::new(args.from as i64)),
        quota: Rc::new(Cell::new(args.from as i64)),
        peak: Rc::new(Cell::new(args.from as i64)),
        bars: rooms.iter().map(|_| Rc::new(Cell::new(0))).collect(),
    };

    driver.animate_value(
        args.from,
        rooms::total_api_calls(rooms) as f64,
        args.duration_ms,
        easing,
        cell_sink(&cells.api_calls),
    )?;
    driver.animate_value(
        args.from,
        rooms::average_quota(rooms) as f64,
        args.duration_ms,
        easing,
        cell_sink(&cells.quota),
    )?;
    driver.animate_value(
        args.from,
        rooms::peak_daily_usage(rooms) as f64,
        args.duration_ms,
        easing,
        cell_sink(&cells.peak),
    )?;

    // Per-room bars start staggered; delays count from the shared batch
    // origin, not from each other.
    if !rooms.is_empty() {
        let mut batch = TweenBatch::new(args.duration_ms, easing);
        for (i, (room, cell)) in rooms.iter().zip(&cells.bars).enumerate() {
            batch = batch.entry(
                args.from,
                room.api_calls as f64,
                i as f64 * args.stagger_ms,
                cell_sink(cell),
            );
        }
        batch.start(&mut driver)?;
    }

    let frame = Duration::from_secs_f64(1.0 / f64::from(args.fps.max(1)));
    let max_calls = rooms.iter().map(|r| r.api_calls).max().unwrap_or(1).max(1);
    let lines = 4 + rooms.len();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut first_frame = true;
    loop {
        driver.tick();
        render(&mut out, first_frame, lines, rooms, &cells, max_calls, &args.locale)?;
        first_frame = false;
        if !driver.has_active_tweens() {
            break;
        }
        thread::sleep(frame);
    }

    Ok(())
}

fn render(
    out: &mut impl Write,
    first_frame: bool,
    lines: usize,
    rooms: &[RoomRecord],
    cells: &CounterCells,
    max_calls: i64,
    locale: &str,
) -> Result<()> {
    if !first_frame {
        // Repaint in place: move the cursor back to the top of the block.
        write!(out, "\x1b[{lines}A")?;
    }

    writeln!(
        out,
        "API calls    {:>14}",
        group_digits(cells.api_calls.get(), locale)
    )?;
    writeln!(
        out,
        "Quota left   {:>14}",
        format_percentage(cells.quota.get())
    )?;
    writeln!(
        out,
        "Peak usage   {:>14}",
        group_digits(cells.peak.get(), locale)
    )?;
    writeln!(out)?;

    for (room, cell) in rooms.iter().zip(&cells.bars) {
        let value = cell.get();
        let filled = (value.max(0) as u128 * BAR_WIDTH as u128 / max_calls as u128) as usize;
        let bar = "█".repeat(filled.min(BAR_WIDTH));
        writeln!(
            out,
            "{:<10} {:<width$} {:>12}",
            room.name,
            bar,
            group_digits(value, locale),
            width = BAR_WIDTH
        )?;
    }

    out.flush()?;
    Ok(())
}
