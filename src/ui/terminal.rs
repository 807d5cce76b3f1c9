use {
    crate::state::App,
    ratatui::{backend::CrosstermBackend, Terminal},
    std::time::Duration,
};

/// Run the TUI event loop
///
/// Handles keyboard input for the filter controls and re-renders on change.
/// Recomputation happens only on Enter; the core is pure, so every pass
/// re-derives from the full event set.
pub fn run_ui(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    let stdout = std::io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Enable raw mode for keyboard input
    crossterm::terminal::enable_raw_mode()?;

    // Alternate screen isolates the dashboard from stderr logs
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::cursor::Hide
    )?;

    terminal.clear()?;

    loop {
        {
            let area = terminal.size()?;
            terminal.draw(|f| crate::ui::layout::render_layout(f, area, app))?;
        }

        if crossterm::event::poll(Duration::from_millis(250))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                match key.code {
                    crossterm::event::KeyCode::Char('q') | crossterm::event::KeyCode::Esc => {
                        break;
                    }
                    crossterm::event::KeyCode::Tab => app.next_field(),
                    crossterm::event::KeyCode::Enter => app.update_view(),
                    crossterm::event::KeyCode::Backspace => app.pop_char(),
                    crossterm::event::KeyCode::Char(c) => app.push_char(c),
                    _ => {}
                }
            }
        }
    }

    // Cleanup - restore terminal state
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}
