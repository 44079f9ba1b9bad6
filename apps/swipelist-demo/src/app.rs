//! Line-driven session over a [`ListScreen`].
//!
//! Each input line is one [`Command`]. Rows are addressed by adapter
//! position; a swipe starts at the center of that row, scrolling it into
//! view first if needed.

use std::fmt::Write as _;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use swipelist_ui::list_view::VisibleRow;
use swipelist_ui::prelude::*;

use crate::commands::{Command, HELP};

/// Number of move samples a scripted drag is split into.
const DRAG_STEPS: usize = 8;

/// Adapter that logs every notification it receives.
#[derive(Debug, Default)]
pub struct LoggingAdapter {
    notifications: usize,
}

impl LoggingAdapter {
    pub fn notifications(&self) -> usize {
        self.notifications
    }
}

impl ListAdapter<ItemRecord> for LoggingAdapter {
    fn notify_item_inserted(&mut self, items: &dyn ListItemProvider<Item = ItemRecord>, index: usize) {
        self.notifications += 1;
        if let Some(item) = items.item_at(index) {
            log::info!(
                "inserted {:?} at {index} ({} item(s))",
                item.short_label(),
                items.item_count()
            );
        }
    }

    fn notify_item_removed(&mut self, items: &dyn ListItemProvider<Item = ItemRecord>, index: usize) {
        self.notifications += 1;
        log::info!("removed row {index} ({} item(s) left)", items.item_count());
    }

    fn notify_data_set_changed(&mut self, items: &dyn ListItemProvider<Item = ItemRecord>) {
        self.notifications += 1;
        log::info!("showing {} item(s)", items.item_count());
    }
}

/// What the caller should do after a command ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct DemoSession {
    screen: ListScreen<LoggingAdapter>,
    state_path: Option<PathBuf>,
}

impl DemoSession {
    pub fn new(screen: ListScreen<LoggingAdapter>, state_path: Option<PathBuf>) -> Self {
        Self { screen, state_path }
    }

    /// Opens a session, restoring the list from `state_path` when it holds a
    /// readable bundle. A missing or unreadable file starts a fresh list.
    pub fn open(state_path: Option<PathBuf>, options: ListScreenOptions) -> Result<Self> {
        let saved = state_path.as_deref().and_then(load_bundle);
        let screen = ListScreen::create(saved.as_ref(), options, LoggingAdapter::default())
            .context("creating list screen")?;
        Ok(Self::new(screen, state_path))
    }

    pub fn screen(&self) -> &ListScreen<LoggingAdapter> {
        &self.screen
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        match command {
            Command::Add => {
                let position = self.screen.on_add_clicked();
                writeln!(out, "added row {position}")?;
            }
            Command::Swipe { row, dx, dy } => {
                self.screen.controller_mut().view_mut().scroll_to_position(row);
                let Some(bounds) = self.screen.view().row_bounds(row) else {
                    writeln!(out, "no row {row}")?;
                    return Ok(Flow::Continue);
                };
                let removed = self.drag(bounds.center(), dx, dy);
                report_removal(out, removed)?;
            }
            Command::Drag { x, y, dx, dy } => {
                let removed = self.drag(Point::new(x, y), dx, dy);
                report_removal(out, removed)?;
            }
            Command::Scroll { dy } => {
                let moved = self.screen.scroll_by(dy);
                writeln!(out, "scrolled {moved}")?;
            }
            Command::Tick { frames } => {
                for _ in 0..frames {
                    if !self.screen.advance_frame() {
                        break;
                    }
                }
            }
            Command::List => out.write_all(self.render().as_bytes())?,
            Command::Save => {
                self.save()?;
                writeln!(out, "saved {} item(s)", self.screen.items().len())?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => {
                self.save()?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn drag(&mut self, from: Point, dx: f32, dy: f32) -> Option<ItemRecord> {
        self.screen.on_pointer_event(&PointerEvent::down(from.x, from.y));
        for step in 1..=DRAG_STEPS {
            let t = step as f32 / DRAG_STEPS as f32;
            self.screen
                .on_pointer_event(&PointerEvent::move_to(from.x + dx * t, from.y + dy * t));
        }
        self.screen
            .on_pointer_event(&PointerEvent::up(from.x + dx, from.y + dy))
    }

    /// Writes the list to the state file, if the session has one.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.state_path else {
            return Ok(());
        };
        let mut bundle = StateBundle::new();
        self.screen.save_state(&mut bundle)?;
        let json = bundle.to_json()?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        log::debug!("state written to {}", path.display());
        Ok(())
    }

    /// Rows currently on screen, one per line.
    pub fn render(&self) -> String {
        let mut text = String::new();
        let rows = self.screen.view().visible_rows();
        if rows.is_empty() {
            text.push_str("(empty)\n");
        }
        for row in rows {
            let _ = writeln!(text, "{}", self.render_row(&row));
        }
        text
    }

    fn render_row(&self, row: &VisibleRow) -> String {
        if row.removing {
            return format!("{:>3} | {:>6.1} | (removing)", row.position, row.bounds.y);
        }
        match self.screen.store().get(row.position) {
            Some(item) => format!(
                "{:>3} | {:>6.1} | [{}] {} / {}",
                row.position,
                row.bounds.y,
                item.variant().get(),
                item.short_label(),
                item.long_label()
            ),
            None => format!("{:>3} | {:>6.1} | ?", row.position, row.bounds.y),
        }
    }
}

fn load_bundle(path: &Path) -> Option<StateBundle> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            log::warn!("cannot read {}: {err}", path.display());
            return None;
        }
    };
    match StateBundle::from_json(&json) {
        Ok(bundle) => Some(bundle),
        Err(err) => {
            log::warn!("ignoring state file {}: {err}", path.display());
            None
        }
    }
}

fn report_removal(out: &mut impl Write, removed: Option<ItemRecord>) -> Result<()> {
    match removed {
        Some(item) => writeln!(out, "removed {:?}", item.short_label())?,
        None => writeln!(out, "nothing removed")?,
    }
    Ok(())
}

/// Reads commands from `input` until end of input or `quit`. Bad lines are
/// reported and skipped.
pub fn run(session: &mut DemoSession, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line.context("reading command")?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if session.execute(command, out)? == Flow::Quit {
                    return Ok(());
                }
            }
            Err(err) => writeln!(out, "error: {err:#}")?,
        }
        out.flush()?;
    }
    session.save()
}
