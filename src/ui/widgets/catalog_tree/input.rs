//! Keyboard input handling and the interactive loop.
//!
//! Loads run on a background thread and report back over a channel; the
//! loop polls for keys with a short timeout so finished loads are applied
//! without waiting for the next keystroke.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use doccat::application::{FileRow, LoadTicket};
use doccat::domain::ports::CatalogSource;
use doccat::infrastructure::launcher;
use doccat::{load_tree, CatalogResult, DocumentTree};

use super::menu::{BrowserEffect, CatalogBrowser, TreeAction};
use super::render::{render_help_bar, render_line, render_status_bar, render_tabs};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Lines used by the header, tabs, separators, status and help bars
const CHROME_ROWS: usize = 8;

type LoadResult = (LoadTicket, CatalogResult<DocumentTree>);

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent, searching: bool) -> Option<TreeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(TreeAction::Quit);
    }

    if searching {
        return match key.code {
            KeyCode::Esc => Some(TreeAction::SearchCancel),
            KeyCode::Enter => Some(TreeAction::SearchSubmit),
            KeyCode::Backspace => Some(TreeAction::SearchBackspace),
            KeyCode::Up => Some(TreeAction::Up),
            KeyCode::Down => Some(TreeAction::Down),
            KeyCode::Char(ch) => Some(TreeAction::SearchInput(ch)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(TreeAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') => Some(TreeAction::Collapse),
        KeyCode::Tab | KeyCode::Char(']') => Some(TreeAction::NextSection),
        KeyCode::BackTab | KeyCode::Char('[') => Some(TreeAction::PrevSection),
        KeyCode::Char('*') | KeyCode::Char('a') => Some(TreeAction::ShowAll),
        KeyCode::Char('/') => Some(TreeAction::StartSearch),
        KeyCode::Char('o') => Some(TreeAction::Open),
        KeyCode::Char('d') => Some(TreeAction::Download),
        KeyCode::Char('E') => Some(TreeAction::ExpandAll),
        KeyCode::Char('C') => Some(TreeAction::CollapseAll),
        KeyCode::Char('r') => Some(TreeAction::Reload),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Settings for one browse session
pub struct BrowseOptions {
    pub source: Arc<dyn CatalogSource>,
    pub download_dir: Option<PathBuf>,
    pub supports_color: bool,
    pub supports_unicode: bool,
}

/// Leaves raw mode and the alternate screen even when the loop errors out.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(stdout: &mut io::Stdout) -> io::Result<Self> {
        use crossterm::{cursor, execute, terminal};

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::{cursor, execute, terminal};

        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn spawn_load(browser: &mut CatalogBrowser, source: &Arc<dyn CatalogSource>, tx: &Sender<LoadResult>) {
    let ticket = browser.begin_load();
    let source = Arc::clone(source);
    let tx = tx.clone();
    thread::spawn(move || {
        let result = load_tree(source.as_ref());
        // The receiver is gone once the user quits; nothing left to do.
        let _ = tx.send((ticket, result));
    });
}

fn apply_finished_loads(browser: &mut CatalogBrowser, rx: &Receiver<LoadResult>) -> bool {
    let mut changed = false;
    while let Ok((ticket, result)) = rx.try_recv() {
        browser.finish_load(ticket, result);
        changed = true;
    }
    changed
}

fn open_file(browser: &mut CatalogBrowser, options: &BrowseOptions, file: &FileRow) {
    let location = options.source.resolve(&file.open);
    match launcher::open(&location) {
        Ok(()) => browser.set_status(format!("Opened {}", file.name), false),
        Err(e) => browser.set_status(e.to_string(), true),
    }
}

fn download_file(browser: &mut CatalogBrowser, options: &BrowseOptions, file: &FileRow) {
    let Some(dir) = &options.download_dir else {
        browser.set_status("No download directory configured", true);
        return;
    };
    let location = options.source.resolve(&file.download);
    match launcher::download(&location, dir) {
        Ok(path) => browser.set_status(format!("Saved {}", path.display()), false),
        Err(e) => browser.set_status(e.to_string(), true),
    }
}

fn draw(stdout: &mut io::Stdout, browser: &mut CatalogBrowser, options: &BrowseOptions) -> io::Result<()> {
    use crossterm::{cursor, queue, terminal};

    let (width, height) = terminal::size().unwrap_or((80, 24));
    let width = usize::from(width);
    let color = options.supports_color;
    let unicode = options.supports_unicode;

    queue!(stdout, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;

    let title = ColoredText::info("Doccat").bold().render(color);
    let loading = if browser.catalog().is_loading() {
        format!("  {}", Icon::Progress.colored(color, unicode))
    } else {
        String::new()
    };
    write!(
        stdout,
        "{} {}  {}{}\r\n",
        Icon::Catalog.colored(color, unicode),
        title,
        ColoredText::dim(options.source.id()).render(color),
        loading
    )?;
    write!(stdout, "{}\r\n", render_tabs(browser.catalog().navigator(), color))?;

    let separator = (if unicode { "─" } else { "-" }).repeat(width);
    write!(stdout, "{}\r\n", ColoredText::dim(separator.as_str()).render(color))?;

    let rows = usize::from(height).saturating_sub(CHROME_ROWS);
    let range = browser.visible_range(rows);
    let cursor_pos = browser.cursor_position();
    let cursor_icon = Icon::Cursor.colored(color, unicode);
    for index in range {
        let line = &browser.lines()[index];
        let prefix = if index == cursor_pos {
            format!("{} ", cursor_icon)
        } else {
            "  ".to_string()
        };
        let body = render_line(line, color, unicode, Some(width.saturating_sub(2)));
        write!(stdout, "{}{}\r\n", prefix, body)?;
    }

    write!(stdout, "{}\r\n", ColoredText::dim(separator.as_str()).render(color))?;
    let status = browser.status().map(|s| (s.text.as_str(), s.is_error));
    let status_line = render_status_bar(
        browser.catalog().navigator(),
        browser.search_buffer(),
        browser.is_searching(),
        status,
        color,
        unicode,
    );
    write!(stdout, "{}\r\n", status_line)?;
    for line in render_help_bar(browser.is_searching()).lines() {
        write!(stdout, "{}\r\n", ColoredText::dim(line).render(color))?;
    }

    stdout.flush()
}

/// What the loop must do after one poll
#[derive(Debug, Clone, PartialEq)]
struct LoopStep {
    redraw: bool,
    effect: BrowserEffect,
}

/// Apply one polled event. A load applied in the same pass still needs a
/// redraw when the event itself is ignored.
fn process_event(
    browser: &mut CatalogBrowser,
    event: Option<Event>,
    loads_applied: bool,
) -> LoopStep {
    let mut step = LoopStep {
        redraw: loads_applied,
        effect: BrowserEffect::None,
    };
    match event {
        Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            if let Some(action) = key_to_action(key, browser.is_searching()) {
                step.effect = browser.handle_action(action);
                step.redraw = true;
            }
        }
        Some(Event::Resize(_, _)) => step.redraw = true,
        _ => {}
    }
    step
}

/// Run the browser until the user quits. The first load starts immediately.
pub fn run_interactive(browser: &mut CatalogBrowser, options: &BrowseOptions) -> io::Result<()> {
    use crossterm::event;

    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;

    let (tx, rx) = mpsc::channel::<LoadResult>();
    spawn_load(browser, &options.source, &tx);
    draw(&mut stdout, browser, options)?;

    loop {
        let loads_applied = apply_finished_loads(browser, &rx);
        let event = if event::poll(POLL_INTERVAL)? {
            Some(event::read()?)
        } else {
            None
        };

        let step = process_event(browser, event, loads_applied);
        match step.effect {
            BrowserEffect::Quit => break,
            BrowserEffect::Reload => spawn_load(browser, &options.source, &tx),
            BrowserEffect::Open(file) => open_file(browser, options, &file),
            BrowserEffect::Download(file) => download_file(browser, options, &file),
            BrowserEffect::None => {}
        }

        if step.redraw {
            draw(&mut stdout, browser, options)?;
        }
    }

    tracing::debug!("browser closed");
    Ok(())
}
