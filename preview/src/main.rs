//! Terminal preview for strip-animator
//!
//! Renders the strip as a row of colored blocks and drives the blocking
//! animation routines against it. `q`, Esc or Ctrl-C interrupts the run;
//! with `--clear` the strip is blanked before exit.

use std::io::{self, Write};
use std::time::{Duration as StdDuration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use strip_animator::{
    AnimationId, Animator, CancelToken, ChannelOrder, Completion, Duration, FramePacer, PixelSink,
    Rgb, SinkError, StripConfig, clear,
};

/// Shared stop flag, set from keyboard events during frame waits
static CANCEL: CancelToken = CancelToken::new();

/// Color used by the default wipe cycle and the solid-fill animations
const WIPE_COLOR: Rgb = Rgb { r: 255, g: 0, b: 0 };

const BLANK: Rgb = Rgb { r: 0, g: 0, b: 0 };

#[derive(Parser)]
#[command(
    name = "strip-animator-preview",
    about = "Preview LED strip animations in the terminal"
)]
struct Args {
    /// Clear the display on exit
    #[arg(short, long)]
    clear: bool,

    /// Number of LED pixels
    #[arg(short, long, default_value_t = 50)]
    numpixels: usize,

    /// GPIO pin connected to the pixels (18 uses PWM, 10 uses SPI /dev/spidev0.0)
    #[arg(short, long, default_value_t = 18)]
    pin: u8,

    /// LED signal frequency in hertz (usually 800khz)
    #[arg(short, long, default_value_t = 800_000)]
    freq: u32,

    /// DMA channel to use for generating the signal (try 10)
    #[arg(long, default_value_t = 10)]
    dma: u8,

    /// Set to 0 for darkest and 255 for brightest
    #[arg(short, long, default_value_t = 20)]
    bright: u8,

    /// Invert the signal (when using NPN transistor level shift)
    #[arg(short, long)]
    invert: bool,

    /// Set to 1 for GPIOs 13, 19, 41, 45 or 53, otherwise use 0
    #[arg(long, default_value_t = 0)]
    channel: u8,

    /// Order of colors the strip uses
    #[arg(long = "type", value_parser = parse_order, default_value = "RBG")]
    order: ChannelOrder,

    /// Loop a single animation by name instead of the default wipe cycle
    #[arg(long, value_parser = parse_animation)]
    animation: Option<AnimationId>,

    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = 10.0)]
    delay_ms: f64,

    /// Iteration count for the repeating animations
    #[arg(long, default_value_t = 1)]
    iterations: usize,
}

fn parse_order(s: &str) -> Result<ChannelOrder, String> {
    ChannelOrder::parse_from_str(&s.to_uppercase())
        .ok_or_else(|| format!("unknown channel order '{s}' (try GRB, RGB, RBG, GBR, BRG, BGR or GRBW)"))
}

fn parse_animation(s: &str) -> Result<AnimationId, String> {
    AnimationId::parse_from_str(s).ok_or_else(|| {
        let known: Vec<&str> = AnimationId::ALL.iter().map(|id| id.as_str()).collect();
        format!("unknown animation '{s}' (one of: {})", known.join(", "))
    })
}

/// Sink that draws the frame as colored blocks on one terminal line.
struct TerminalSink {
    frame: Vec<Rgb>,
    brightness: u8,
}

impl TerminalSink {
    fn new(config: &StripConfig) -> Self {
        Self {
            frame: vec![BLANK; config.pixel_count],
            brightness: config.brightness,
        }
    }

    fn draw(&self) -> io::Result<()> {
        let mut out = io::stdout();
        queue!(out, cursor::MoveToColumn(0))?;
        for pixel in &self.frame {
            let scaled = scale(*pixel, self.brightness);
            let color = Color::Rgb {
                r: scaled.r,
                g: scaled.g,
                b: scaled.b,
            };
            queue!(out, SetForegroundColor(color), Print("█"))?;
        }
        queue!(out, ResetColor)?;
        out.flush()
    }
}

impl PixelSink for TerminalSink {
    fn pixel_count(&self) -> usize {
        self.frame.len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), SinkError> {
        let len = self.frame.len();
        match self.frame.get_mut(index) {
            Some(slot) => {
                *slot = color;
                Ok(())
            }
            None => Err(SinkError::IndexOutOfRange { index, len }),
        }
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.draw().map_err(|_| SinkError::HardwareWrite)
    }
}

/// Apply the strip's brightness the way a real driver would.
fn scale(color: Rgb, brightness: u8) -> Rgb {
    let level = u16::from(brightness) + 1;
    Rgb {
        r: ((u16::from(color.r) * level) >> 8) as u8,
        g: ((u16::from(color.g) * level) >> 8) as u8,
        b: ((u16::from(color.b) * level) >> 8) as u8,
    }
}

/// Pacer that waits on terminal events, turning `q`, Esc or Ctrl-C
/// into a cancellation instead of an asynchronous signal handler.
struct EventPacer;

impl FramePacer for EventPacer {
    fn sleep(&mut self, duration: Duration) {
        let deadline = Instant::now() + StdDuration::from_micros(duration.as_micros());
        loop {
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            match event::poll(deadline - now) {
                Ok(true) => {
                    if let Ok(Event::Key(key)) = event::read() {
                        let ctrl_c = key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL);
                        if ctrl_c || key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
                            CANCEL.cancel();
                            return;
                        }
                    }
                }
                Ok(false) => return,
                Err(_) => return,
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = StripConfig {
        pixel_count: args.numpixels,
        order: args.order,
        brightness: args.bright,
        invert: args.invert,
        pin: args.pin,
        freq_hz: args.freq,
        dma_channel: args.dma,
        pwm_channel: args.channel,
    };
    let mut sink = TerminalSink::new(&config);

    println!("Press q or Ctrl-C to quit.");
    if !args.clear {
        println!("Use \"--clear\" to blank the display on exit");
    }

    terminal::enable_raw_mode().context("failed to claim the terminal")?;
    let _ = execute!(io::stdout(), cursor::Hide);

    let result = run(&args, &mut sink);

    let _ = execute!(io::stdout(), cursor::Show, ResetColor, Print("\r\n"));
    let _ = terminal::disable_raw_mode();

    result
}

fn run(args: &Args, sink: &mut TerminalSink) -> anyhow::Result<()> {
    let delay = Duration::from_micros((args.delay_ms * 1000.0) as u64);
    let mut animator = Animator::new(EventPacer, &CANCEL);

    loop {
        let completion = match args.animation {
            Some(id) => animator.run(id, sink, WIPE_COLOR, delay, args.iterations)?,
            None => {
                // The classic idle cycle: red wipe in, blank wipe out.
                match animator.color_wipe(sink, WIPE_COLOR, delay)? {
                    Completion::Interrupted => Completion::Interrupted,
                    Completion::Finished => animator.reverse_color_wipe(sink, BLANK, delay)?,
                }
            }
        };
        if completion == Completion::Interrupted {
            break;
        }
    }

    if args.clear {
        if let Err(err) = clear(sink) {
            eprintln!("failed to blank the display on exit: {err}");
        }
    }

    Ok(())
}
