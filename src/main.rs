use std::io;
use std::time::Duration;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

mod gallery;

use gallery::GalleryApp;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tick period driving animations and filter debouncing.
const TICK: Duration = Duration::from_millis(120);

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("datadeck {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;
    init_tracing();
    setup_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = GalleryApp::new();
    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    result
}

/// Log to a file next to the persisted layout profiles; logging to the
/// terminal would fight the alternate screen.
fn init_tracing() {
    let Ok(dir) = datadeck::storage::default_profile_dir() else {
        return;
    };
    let Some(parent) = dir.parent().map(std::path::Path::to_path_buf) else {
        return;
    };
    let Ok(file) = std::fs::File::create(parent.join("gallery.log")) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(file)
        .with_ansi(false)
        .try_init();
}

/// Restore the terminal before the default panic output prints.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut GalleryApp,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| gallery::render::render(frame, app))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Resize(..) => {} // redrawn on the next loop pass
                _ => {}
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
