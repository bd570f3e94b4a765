use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dotmatrix", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the matrix headless and write the last frame as a PNG.
    Frame(FrameArgs),
    /// Run the matrix headless and print run statistics as JSON.
    Stats(StatsArgs),
    /// Print the glyph codes and widths a text parses into.
    Glyphs(GlyphsArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Container width in pixels.
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Container height in pixels.
    #[arg(long, default_value_t = 900)]
    height: u32,

    /// Frames to run.
    #[arg(long, default_value_t = 300)]
    frames: u64,

    /// Matrix configuration JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Glyph table JSON. The bundled font is used when omitted.
    #[arg(long)]
    glyphs: Option<PathBuf>,

    /// Project catalog JSON. The bundled catalog is used when omitted.
    #[arg(long)]
    projects: Option<PathBuf>,

    /// Scripted input as `FRAME:EVENT`. Events: `menu-open`, `menu-close`, `project:<id>`,
    /// `resize:<w>x<h>`, `over:<x>,<y>`, `out:<x>,<y>`, `click:<x>,<y>`.
    #[arg(long = "nav")]
    nav: Vec<NavStep>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct StatsArgs {
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Parser, Debug)]
struct GlyphsArgs {
    /// Text to parse. `{name}` selects a named glyph.
    text: String,

    /// Glyph table JSON. The bundled font is used when omitted.
    #[arg(long)]
    glyphs: Option<PathBuf>,
}

#[derive(Clone, Debug)]
enum NavEvent {
    MenuOpen,
    MenuClose,
    Project(String),
    Resize(u32, u32),
    Pointer(dotmatrix::PointerEvent, i32, i32),
}

#[derive(Clone, Debug)]
struct NavStep {
    frame: u64,
    event: NavEvent,
}

impl FromStr for NavStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (frame, event) = s
            .split_once(':')
            .ok_or_else(|| format!("expected FRAME:EVENT, got '{s}'"))?;
        let frame = frame
            .parse::<u64>()
            .map_err(|e| format!("bad frame '{frame}': {e}"))?;

        let (name, arg) = match event.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (event, None),
        };
        let event = match (name, arg) {
            ("menu-open", None) => NavEvent::MenuOpen,
            ("menu-close", None) => NavEvent::MenuClose,
            ("project", Some(id)) if !id.is_empty() => NavEvent::Project(id.to_string()),
            ("resize", Some(size)) => {
                let (w, h) = parse_pair(size, 'x')?;
                NavEvent::Resize(w, h)
            }
            ("over" | "out" | "click", Some(at)) => {
                let (x, y) = parse_pair(at, ',')?;
                let kind = match name {
                    "over" => dotmatrix::PointerEvent::Over,
                    "out" => dotmatrix::PointerEvent::Out,
                    _ => dotmatrix::PointerEvent::Click,
                };
                NavEvent::Pointer(kind, x, y)
            }
            _ => return Err(format!("unknown event '{event}'")),
        };
        Ok(Self { frame, event })
    }
}

fn parse_pair<T: FromStr>(s: &str, sep: char) -> Result<(T, T), String> {
    let (a, b) = s
        .split_once(sep)
        .ok_or_else(|| format!("expected two values separated by '{sep}', got '{s}'"))?;
    let a = a.trim().parse().map_err(|_| format!("bad value '{a}'"))?;
    let b = b.trim().parse().map_err(|_| format!("bad value '{b}'"))?;
    Ok((a, b))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Stats(args) => cmd_stats(args),
        Command::Glyphs(args) => cmd_glyphs(args),
    }
}

fn load_glyphs(path: Option<&Path>) -> anyhow::Result<dotmatrix::GlyphTable> {
    Ok(match path {
        Some(p) => dotmatrix::GlyphTable::from_path(p)
            .with_context(|| format!("load glyphs '{}'", p.display()))?,
        None => dotmatrix::GlyphTable::builtin()?,
    })
}

fn build_player(run: &RunArgs) -> anyhow::Result<dotmatrix::Player> {
    let config = match &run.config {
        Some(p) => dotmatrix::MatrixConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => dotmatrix::MatrixConfig::default(),
    };
    let glyphs = load_glyphs(run.glyphs.as_deref())?;
    let projects = match &run.projects {
        Some(p) => dotmatrix::ProjectCatalog::from_path(p)
            .with_context(|| format!("load projects '{}'", p.display()))?,
        None => dotmatrix::ProjectCatalog::builtin()?,
    };

    let player = dotmatrix::Player::new(config, glyphs, Box::new(projects), run.width, run.height)
        .with_context(|| "build matrix")?;
    Ok(player)
}

/// Step `run.frames` times, applying each scripted event just before its frame.
fn drive(player: &mut dotmatrix::Player, run: &RunArgs) {
    let mut steps = run.nav.clone();
    steps.sort_by_key(|s| s.frame);
    let mut pending = steps.iter().peekable();

    for frame in 0..run.frames {
        while let Some(step) = pending.next_if(|s| s.frame == frame) {
            apply(player, &step.event);
        }
        player.step();
    }

    for step in pending {
        tracing::warn!(
            frame = step.frame,
            frames = run.frames,
            "scripted event after the last frame"
        );
    }
}

fn apply(player: &mut dotmatrix::Player, event: &NavEvent) {
    match event {
        NavEvent::MenuOpen => player.project_menu_open(),
        NavEvent::MenuClose => player.project_menu_close(),
        NavEvent::Project(id) => player.project_show(id),
        NavEvent::Resize(w, h) => {
            player.resize(*w, *h);
        }
        NavEvent::Pointer(kind, x, y) => {
            if let Some(dotmatrix::Navigation::OpenUrl(url)) = player.pointer_at(*x, *y, *kind) {
                eprintln!("open {url}");
            }
        }
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut player = build_player(&args.run)?;
    drive(&mut player, &args.run);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let surface = player.surface();
    image::save_buffer_with_format(
        &args.out,
        surface.data(),
        surface.width(),
        surface.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> anyhow::Result<()> {
    let mut player = build_player(&args.run)?;
    drive(&mut player, &args.run);

    let json = serde_json::to_string_pretty(&player.stats()).with_context(|| "encode stats")?;
    println!("{json}");
    Ok(())
}

#[derive(serde::Serialize)]
struct GlyphInfo {
    code: String,
    width: Option<i32>,
}

fn cmd_glyphs(args: GlyphsArgs) -> anyhow::Result<()> {
    let table = load_glyphs(args.glyphs.as_deref())?;
    let info: Vec<GlyphInfo> = dotmatrix::parse_text_to_glyph_codes(&args.text)
        .into_iter()
        .map(|code| {
            let width = table.lookup(&code).map(dotmatrix::GlyphBitmap::width);
            GlyphInfo { code, width }
        })
        .collect();

    let json = serde_json::to_string_pretty(&info).with_context(|| "encode glyph codes")?;
    println!("{json}");
    Ok(())
}
