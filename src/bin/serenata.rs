use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "serenata", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a page JSON without running anything.
    Validate(ValidateArgs),
    /// Drive a scripted scroll session headlessly and dump per-frame styles.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input page JSON; the built-in story when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Number of animation frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    viewport: f64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Everything a simulate run produces, serialized as one JSON document.
#[derive(serde::Serialize)]
struct SimulateReport {
    field: Vec<serenata::Particle>,
    frames: Vec<serenata::FrameStyles>,
    celebration_burst: Vec<serenata::BurstHeart>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_page_json(path: &Path) -> anyhow::Result<serenata::Page> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("open page '{}'", path.display()))?;
    let page = serenata::Page::from_json(&s)
        .with_context(|| format!("load page '{}'", path.display()))?;
    Ok(page)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let page = read_page_json(&args.in_path)?;
    println!(
        "ok: {} chapters, finale '{}'",
        page.chapters.len(),
        page.finale.id
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let page = match &args.in_path {
        Some(p) => read_page_json(p)?,
        None => serenata::Page::default_story(),
    };
    let viewport = serenata::Viewport::new(args.viewport)?;
    let mut session = serenata::PageSession::new(&page)?;

    // Fixed synthetic layout: one viewport of hero, then the sections in
    // document order.
    let section_height = 900.0;
    let gap = 200.0;
    let mut tops = Vec::new();
    let mut cursor = args.viewport;
    for chapter in &page.chapters {
        tops.push((chapter.id.clone(), cursor));
        cursor += section_height + gap;
    }
    tops.push((page.finale.id.clone(), cursor));
    let page_height = cursor + section_height + args.viewport;
    let max_scroll = (page_height - args.viewport).max(0.0);

    let mut frames = Vec::with_capacity(args.frames as usize);
    for frame in 0..args.frames {
        // Linear scroll script; the smoother supplies the deceleration.
        let t = if args.frames > 1 {
            frame as f64 / (args.frames - 1) as f64
        } else {
            1.0
        };
        let raw_scroll = max_scroll * t;

        let rects = tops
            .iter()
            .map(|(id, top)| {
                (
                    id.clone(),
                    serenata::ElementRect {
                        top: top - session.scroll_offset(),
                        height: section_height,
                    },
                )
            })
            .collect();

        frames.push(session.advance(&serenata::FrameInput {
            scroll: raw_scroll,
            viewport,
            rects,
        }));
    }

    // End of the story: the accept button.
    session.accept();
    let burst = session
        .celebration()
        .layout()
        .map(|hearts| hearts.to_vec())
        .unwrap_or_default();

    let report = SimulateReport {
        field: session.field().to_vec(),
        frames,
        celebration_burst: burst,
    };

    match &args.out {
        Some(path) => {
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &report)?;
            w.flush()?;
            println!("wrote {} frames to {}", report.frames.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = BufWriter::new(stdout.lock());
            serde_json::to_writer_pretty(&mut w, &report)?;
            w.flush()?;
        }
    }
    Ok(())
}
