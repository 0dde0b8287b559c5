//! Keyboard input handling and interactive loop.
//!
//! This module provides functions for mapping keyboard events to tree actions
//! and running the interactive terminal loop.

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{cursor, execute, queue, terminal};

use permtree::domain::value_objects::SelectionSet;

use super::menu::{TreeAction, TreeMenu};
use super::render::RenderStyle;

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(TreeAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Char(' ') => Some(TreeAction::Toggle),
        KeyCode::Right => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('a') => Some(TreeAction::SelectAll),
        KeyCode::Char('n') => Some(TreeAction::SelectNone),
        KeyCode::Char('e') => Some(TreeAction::ExpandAll),
        KeyCode::Char('c') => Some(TreeAction::CollapseAll),
        KeyCode::Char('l') => Some(TreeAction::ToggleLinkage),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Leaves raw mode and restores the cursor when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enter(stdout: &mut io::Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn render_ui(stdout: &mut io::Stdout, menu: &TreeMenu, style: &RenderStyle) -> io::Result<()> {
    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let rule = if style.unicode { "─" } else { "-" };
    let separator = rule.repeat(style.width.clamp(1, 63));
    let sections = [
        String::from("Role permissions"),
        String::new(),
        menu.render(style),
        separator,
        menu.render_status_bar(style),
        String::new(),
        menu.render_help_bar(),
    ];

    for section in &sections {
        for line in section.split('\n') {
            write!(stdout, "{}\r\n", line)?;
        }
    }

    stdout.flush()
}

/// Run the tree menu interactively.
/// Returns the selection if confirmed, None if quit.
pub fn run_interactive(menu: &mut TreeMenu, style: &RenderStyle) -> io::Result<Option<SelectionSet>> {
    use crossterm::event::{self, Event, KeyEventKind};

    let mut stdout = io::stdout();
    let _guard = RawModeGuard::enter(&mut stdout)?;

    render_ui(&mut stdout, menu, style)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(action) = key_to_action(key) else {
            continue;
        };
        if menu.handle_action(action) {
            return Ok(match action {
                TreeAction::Confirm => Some(menu.selection().clone()),
                _ => None,
            });
        }
        render_ui(&mut stdout, menu, style)?;
    }
}
