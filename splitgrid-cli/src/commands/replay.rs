//! Replay command: feed a script of tab and pointer events to the engine.
//!
//! Script lines, `#` starts a comment:
//!
//! ```text
//! split 1 2 3 grid     # group tabs 1-3, kind optional
//! select 2             # select tab 2
//! close 2 | pin 2      # close or pin tab 2
//! open 4 | hide 4      # open tab 4, mark it hidden
//! shortcut vsep        # grid | vsep | hsep | unsplit
//! drag v1 120 0        # drag vertical track 1 by (dx, dy) pixels
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use splitgrid_core::{
    DividerHit, HeadlessSurface, LayoutKind, LayoutShortcut, Orientation, PointerEvent,
    PointerPosition, RenderSurface, SplitViewEngine, SurfaceExtent, TabEvent, TabId,
    TabSnapshot,
};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{LayoutOutput, TabLabels, format_json, format_table};
use crate::util::build_engine;

/// One parsed script command
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Open(usize),
    Hide(usize),
    Split {
        tabs: Vec<usize>,
        kind: Option<LayoutKind>,
    },
    Select(usize),
    Close(usize),
    Pin(usize),
    Shortcut(LayoutShortcut),
    Drag {
        hit: DividerHit,
        dx: f64,
        dy: f64,
    },
}

/// Replay command handler
pub fn cmd_replay(
    config_path: Option<&Path>,
    script: &Path,
    extent: SurfaceExtent,
    format: OutputFormat,
) -> Result<(), CliError> {
    let text = fs::read_to_string(script)?;
    let steps = parse_script(&text)?;
    let mut replay = Replay::new(build_engine(config_path, HeadlessSurface::new(extent))?);
    for (_, step) in &steps {
        replay.apply(step);
    }
    tracing::debug!(steps = steps.len(), "Replayed script");

    let layout = replay
        .engine
        .active_layout()
        .map(|layout| LayoutOutput::new(&layout, &replay.labels()));
    match (format, layout) {
        (OutputFormat::Table, Some(layout)) => println!("{}", format_table(&layout)),
        (OutputFormat::Table, None) => println!("No active split group."),
        (OutputFormat::Json, layout) => println!("{}", format_json(&layout)?),
    }
    Ok(())
}

/// Parses a whole script, keeping 1-based line numbers.
///
/// # Errors
///
/// Returns `CliError::Script` for the first malformed line.
pub fn parse_script(text: &str) -> Result<Vec<(usize, Step)>, CliError> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let step = parse_line(line).map_err(|message| CliError::Script {
            line: index + 1,
            message,
        })?;
        steps.push((index + 1, step));
    }
    Ok(steps)
}

fn parse_line(line: &str) -> Result<Step, String> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    match command {
        "open" => single_tab(&args).map(Step::Open),
        "hide" => single_tab(&args).map(Step::Hide),
        "select" => single_tab(&args).map(Step::Select),
        "close" => single_tab(&args).map(Step::Close),
        "pin" => single_tab(&args).map(Step::Pin),
        "split" => parse_split(&args),
        "shortcut" => match args.as_slice() {
            ["unsplit"] => Ok(Step::Shortcut(LayoutShortcut::Unsplit)),
            [kind] => kind
                .parse::<LayoutKind>()
                .map(|kind| Step::Shortcut(LayoutShortcut::Kind(kind))),
            _ => Err("expected: shortcut grid|vsep|hsep|unsplit".to_string()),
        },
        "drag" => match args.as_slice() {
            [handle, dx, dy] => Ok(Step::Drag {
                hit: parse_handle(handle)?,
                dx: parse_number(dx)?,
                dy: parse_number(dy)?,
            }),
            _ => Err("expected: drag <v|h><n> <dx> <dy>".to_string()),
        },
        other => Err(format!("unknown command '{other}'")),
    }
}

fn single_tab(args: &[&str]) -> Result<usize, String> {
    match args {
        [tab] => parse_tab(tab),
        _ => Err("expected exactly one tab number".to_string()),
    }
}

fn parse_tab(word: &str) -> Result<usize, String> {
    word.parse::<usize>()
        .map_err(|_| format!("'{word}' is not a tab number"))
}

fn parse_number(word: &str) -> Result<f64, String> {
    word.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("'{word}' is not a number"))
}

fn parse_split(args: &[&str]) -> Result<Step, String> {
    let (kind, tab_words) = match args.split_last() {
        Some((last, rest)) if last.parse::<usize>().is_err() => {
            (Some(last.parse::<LayoutKind>()?), rest)
        }
        _ => (None, args),
    };
    let tabs = tab_words
        .iter()
        .map(|word| parse_tab(word))
        .collect::<Result<Vec<_>, _>>()?;
    if tabs.is_empty() {
        return Err("expected: split <tab>... [kind]".to_string());
    }
    Ok(Step::Split { tabs, kind })
}

fn parse_handle(word: &str) -> Result<DividerHit, String> {
    let orientation = match word.chars().next() {
        Some('v') => Orientation::Vertical,
        Some('h') => Orientation::Horizontal,
        _ => return Err(format!("'{word}' is not a divider handle like v1 or h1")),
    };
    let sequence = word[1..]
        .parse::<usize>()
        .ok()
        .filter(|sequence| *sequence >= 1)
        .ok_or_else(|| format!("'{word}' is not a divider handle like v1 or h1"))?;
    Ok(DividerHit {
        orientation,
        sequence,
    })
}

/// Engine plus the script's numbered tabs.
struct Replay {
    engine: SplitViewEngine<HeadlessSurface>,
    tabs: BTreeMap<usize, TabSnapshot>,
}

impl Replay {
    fn new(engine: SplitViewEngine<HeadlessSurface>) -> Self {
        Self {
            engine,
            tabs: BTreeMap::new(),
        }
    }

    fn tab(&mut self, number: usize) -> TabSnapshot {
        *self
            .tabs
            .entry(number)
            .or_insert_with(|| TabSnapshot::new(TabId::new()))
    }

    fn labels(&self) -> TabLabels {
        self.tabs
            .iter()
            .map(|(number, tab)| (tab.id, number.to_string()))
            .collect()
    }

    fn apply(&mut self, step: &Step) {
        match step {
            Step::Open(number) => {
                let tab = self.tab(*number);
                self.engine.handle_tab_event(TabEvent::Opened(&tab));
            }
            Step::Hide(number) => {
                self.tab(*number);
                if let Some(tab) = self.tabs.get_mut(number) {
                    tab.hidden = true;
                }
            }
            Step::Split { tabs, kind } => {
                let snapshots: Vec<TabSnapshot> = tabs.iter().map(|n| self.tab(*n)).collect();
                self.engine.create_split_view(&snapshots, *kind);
            }
            Step::Select(number) => {
                self.tab(*number);
                for (n, tab) in &mut self.tabs {
                    tab.selected = n == number;
                }
                let tab = self.tab(*number);
                self.engine.handle_tab_event(TabEvent::Selected(&tab));
            }
            Step::Close(number) => {
                if let Some(tab) = self.tabs.remove(number) {
                    self.engine.handle_tab_event(TabEvent::Closed(&tab));
                }
            }
            Step::Pin(number) => {
                self.tab(*number);
                if let Some(tab) = self.tabs.get_mut(number) {
                    tab.pinned = true;
                    let tab = *tab;
                    self.engine.handle_tab_event(TabEvent::Pinned(&tab));
                }
            }
            Step::Shortcut(shortcut) => {
                self.engine.toggle_layout_shortcut(*shortcut);
            }
            Step::Drag { hit, dx, dy } => self.drag(*hit, *dx, *dy),
        }
    }

    /// Presses at the surface centre, moves by the offset, waits one frame
    /// and releases.
    fn drag(&mut self, hit: DividerHit, dx: f64, dy: f64) {
        let extent = self.engine.surface().extent();
        let start = PointerPosition::new(extent.width / 2.0, extent.height / 2.0);
        let end = PointerPosition::new(start.x + dx, start.y + dy);

        self.engine.handle_pointer_event(PointerEvent::Down {
            position: start,
            target: Some(hit),
        });
        self.engine
            .handle_pointer_event(PointerEvent::Move { position: end });
        self.engine.on_animation_frame();
        self.engine
            .handle_pointer_event(PointerEvent::Up { position: end });
    }
}
