use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use dial_engine::canvas::SceneCanvas;
use dial_engine::coords::SurfaceSize;
use dial_engine::export::save_svg;
use dial_engine::logging::{init_logging, LoggingConfig};
use dial_engine::scene::DrawList;
use dial_engine::text::FontSystem;
use dial_engine::time::{FrameClock, RedrawQueue};
use dial_face::clock::LocalClock;
use dial_face::{load_style, ClockFace};

const SURFACE: SurfaceSize = SurfaceSize::new(600, 600);
const DEFAULT_FRAMES: u64 = 6;

/// `dial-studio [STYLE.dial] [FRAMES] [OUT.svg]`
struct Args {
    style: Option<PathBuf>,
    frames: u64,
    out: PathBuf,
}

impl Args {
    fn parse() -> anyhow::Result<Self> {
        let mut args = std::env::args().skip(1);
        let style = args.next().filter(|s| s != "-").map(PathBuf::from);
        let frames = match args.next() {
            Some(n) => n.parse().with_context(|| format!("frame count `{n}` is not a number"))?,
            None => DEFAULT_FRAMES,
        };
        let out = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("dial.svg"));
        Ok(Self { style, frames, out })
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    let args = Args::parse()?;

    let src = match &args.style {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading style sheet {}", path.display()))?,
        None => include_str!("../styles/classic.dial").to_string(),
    };
    let style = load_style(&src).with_context(|| match &args.style {
        Some(path) => format!("loading style sheet {}", path.display()),
        None => "loading built-in style sheet".to_string(),
    })?;

    let mut fonts = FontSystem::new();
    if let Some(bytes) = load_font() {
        fonts.load_font(&bytes).context("parsing system font")?;
    }
    if !fonts.has_fonts() {
        log::warn!("no system font found; numerals are measured with a fixed advance");
    }

    let mut face = ClockFace::new(style.config, style.palette);
    let mut queue = RedrawQueue::new();
    let mut frame_clock = FrameClock::new();
    let mut list = DrawList::new();

    log::info!(
        "rendering {} frame(s) at {}x{} every {:?}",
        args.frames,
        SURFACE.width,
        SURFACE.height,
        face.config().redraw_interval
    );

    for _ in 0..args.frames {
        // The face schedules its own next frame; the first one renders at once.
        if let Some(deadline) = queue.next_deadline() {
            std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
            queue.pop_due(Instant::now());
        }
        let ft = frame_clock.tick();

        list.clear();
        let mut canvas = SceneCanvas::new(&mut list, &fonts);
        let hands = face.render_now(&mut canvas, SURFACE, &LocalClock, &mut queue);

        match hands {
            Some(h) => log::info!(
                "frame {} (+{:?}): hour {:.2}, minute {:.2}, second {:.2}, {} commands",
                ft.frame_index,
                ft.dt,
                h.hour,
                h.minute,
                h.second,
                list.len()
            ),
            None => log::warn!("frame {}: surface not laid out", ft.frame_index),
        }
        log::debug!("{} redraw(s) pending", queue.len());
    }

    if !list.is_empty() {
        save_svg(&list, SURFACE, &args.out)?;
        log::info!("last frame written to {}", args.out.display());
    }
    Ok(())
}

fn load_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}

#[cfg(test)]
mod tests {
    use dial_face::config::{FaceConfig, SecondHandMotion, TickStyle};
    use dial_face::palette::Palette;

    use super::*;

    #[test]
    fn classic_sheet_spells_out_the_preset() {
        let style = load_style(include_str!("../styles/classic.dial")).unwrap();
        assert_eq!(style.config, FaceConfig::classic());
        assert_eq!(style.palette, Palette::light());
    }

    #[test]
    fn minimal_sheet_loads() {
        let style = load_style(include_str!("../styles/minimal.dial")).unwrap();
        assert_eq!(style.config.ticks, TickStyle::Hours);
        assert_eq!(style.config.second_hand_motion, SecondHandMotion::Sweep);
        assert_eq!(style.config.pivot_dot, None);
    }
}
