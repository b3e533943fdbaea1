//! Crossterm terminal driver for hexpath.
//!
//! Provides a [`CrosstermDriver`] that implements [`hexpath_core::Driver`]
//! for an [`Explorer`] drawing into a [`TermView`]: pointer positions are
//! resolved to hexes through a [`HexLayout`] and the whole board is redrawn
//! after every batch of input.

mod layout;
mod view;

pub use layout::{COL_PITCH, GLYPH_WIDTH, HexLayout, ROW_PITCH};
pub use view::TermView;

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind},
    execute, queue,
    style::{self, Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use hexpath_core::{Cell, Context, Driver, Key, ModMask, MouseAction, Msg};
use hexpath_preview::{Explorer, SelectionSource};

/// Maps crossterm key modifiers to a [`ModMask`].
fn to_mod_mask(mods: KeyModifiers) -> ModMask {
    let mut m = ModMask::NONE;
    if mods.contains(KeyModifiers::SHIFT) {
        m = m | ModMask::SHIFT;
    }
    if mods.contains(KeyModifiers::CONTROL) {
        m = m | ModMask::CTRL;
    }
    if mods.contains(KeyModifiers::ALT) {
        m = m | ModMask::ALT;
    }
    m
}

/// Maps a crossterm [`KeyCode`] to a [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}

/// Maps a crossterm mouse event kind to a [`MouseAction`].
fn to_mouse_action(kind: MouseEventKind) -> Option<MouseAction> {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => Some(MouseAction::Main),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(MouseAction::Move),
        _ => None,
    }
}

/// How a single hex is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Look {
    Plain,
    Hovered,
    Route,
    Selected,
}

impl Look {
    fn glyph(self) -> &'static str {
        match self {
            Self::Plain => " . ",
            Self::Hovered => "( )",
            Self::Route => " * ",
            Self::Selected => "[@]",
        }
    }

    fn colors(self) -> (Color, Color) {
        match self {
            Self::Plain => (Color::DarkGrey, Color::Reset),
            Self::Hovered => (Color::White, Color::Reset),
            Self::Route => (Color::Black, Color::Cyan),
            Self::Selected => (Color::Black, Color::Yellow),
        }
    }
}

fn look_of(explorer: &Explorer<TermView>, cell: Cell) -> Look {
    let board = explorer.board();
    if board.selected() == Some(cell) {
        Look::Selected
    } else if explorer.preview().view().is_highlighted(cell) {
        Look::Route
    } else if board.hover_marked() == Some(cell) {
        Look::Hovered
    } else {
        Look::Plain
    }
}

/// A terminal back-end using crossterm.
pub struct CrosstermDriver {
    layout: HexLayout,
    // Set on resize; the next draw wipes the screen first.
    stale: bool,
}

impl CrosstermDriver {
    /// Create a driver drawing the board at `layout`.
    pub fn new(layout: HexLayout) -> Self {
        Self {
            layout,
            stale: false,
        }
    }

    /// Record a terminal resize and turn it into a [`Msg::Screen`].
    fn on_resize(&mut self, width: u16, height: u16) -> Msg {
        log::debug!("terminal resized to {width}x{height}");
        self.stale = true;
        Msg::Screen {
            width: width as i32,
            height: height as i32,
            time: Instant::now(),
        }
    }

    fn status_line(explorer: &Explorer<TermView>) -> String {
        let selected = match explorer.board().selected() {
            Some(c) => c.to_string(),
            None => "none".to_string(),
        };
        format!(
            "selected: {selected:<9} route: {:>3} steps   click: select   r: reset   q: quit",
            explorer.preview().route().steps()
        )
    }
}

impl Driver<Explorer<TermView>> for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        log::debug!("terminal ready, board extent {:?}", self.layout.extent());
        Ok(())
    }

    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: &Sender<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        // Non-blocking poll: check for an event with a short timeout.
        if !event::poll(Duration::from_millis(16))? {
            return Ok(());
        }

        while event::poll(Duration::ZERO)? {
            if ctx.is_done() {
                return Ok(());
            }

            let msg = match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: KeyEventKind::Press,
                    ..
                }) => to_key(code).map(|key| Msg::KeyDown {
                    key,
                    modifiers: to_mod_mask(modifiers),
                    time: Instant::now(),
                }),
                Event::Mouse(me) => to_mouse_action(me.kind).map(|action| Msg::Mouse {
                    action,
                    cell: self.layout.pick(me.column as i32, me.row as i32),
                    modifiers: to_mod_mask(me.modifiers),
                    time: Instant::now(),
                }),
                Event::Resize(w, h) => Some(self.on_resize(w, h)),
                _ => None,
            };

            if let Some(m) = msg {
                tx.send(m).ok();
            }
        }

        Ok(())
    }

    fn draw(&mut self, explorer: &Explorer<TermView>) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();

        if std::mem::take(&mut self.stale) {
            queue!(stdout, terminal::Clear(ClearType::All))?;
        }

        for cell in self.layout.topology().iter() {
            let (x, y) = self.layout.position(cell);
            let look = look_of(explorer, cell);
            let (fg, bg) = look.colors();
            queue!(
                stdout,
                cursor::MoveTo(x as u16, y as u16),
                SetForegroundColor(fg),
                SetBackgroundColor(bg),
                style::Print(look.glyph()),
                SetAttribute(Attribute::Reset)
            )?;
        }

        let (_, height) = self.layout.extent();
        let (x, y) = self.layout.position(Cell::ORIGIN);
        queue!(
            stdout,
            cursor::MoveTo(x as u16, (y + height + 1) as u16),
            terminal::Clear(ClearType::CurrentLine),
            style::Print(Self::status_line(explorer))
        )?;

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
