use std::io::stdout;
use std::rc::Rc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;

use ordered_multiselect::app::App;
use ordered_multiselect::config::DemoConfig;
use ordered_multiselect::error::AppError;
use ordered_multiselect::events::EventHandler;
use ordered_multiselect::log::{self, DiagnosticSink, FileLog, NullLog};
use ordered_multiselect::tui;

/// Parsed command line
#[derive(Debug, Default)]
struct CliArgs {
    config_path: Option<std::path::PathBuf>,
    max_items: Option<i64>,
    numbers_left: Option<bool>,
    print_json: bool,
}

fn parse_args(args: &[String]) -> std::result::Result<CliArgs, AppError> {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| AppError::Argument("--config requires a path".to_string()))?;
                cli.config_path = Some(std::path::PathBuf::from(path));
                i += 1;
            }
            "--max" | "-m" => {
                let max = args
                    .get(i + 1)
                    .ok_or_else(|| AppError::Argument("--max requires a number".to_string()))?;
                let max = max
                    .parse::<i64>()
                    .map_err(|_| AppError::Argument(format!("'{}' is not a number", max)))?;
                cli.max_items = Some(max);
                i += 1;
            }
            "--numbers-left" => cli.numbers_left = Some(true),
            "--numbers-right" => cli.numbers_left = Some(false),
            "--print-json" => cli.print_json = true,
            other => {
                eprintln!("Warning: ignoring unknown argument '{}'", other);
            }
        }
        i += 1;
    }

    Ok(cli)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args)?;

    let config = match &cli.config_path {
        Some(path) => DemoConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DemoConfig::load(),
    }
    .with_overrides(cli.max_items, cli.numbers_left);

    // Log to a file; the terminal is busy drawing the widget
    let sink: Rc<dyn DiagnosticSink> = match FileLog::init() {
        Ok(file_log) => {
            log::install_panic_hook(file_log.path());
            file_log.log(&format!("Log file: {}", file_log.path().display()));
            Rc::new(file_log)
        }
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            Rc::new(NullLog)
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_diagnostics(&config, sink.clone());

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    let value = app.widget.value();
    sink.log(&format!("final value: {:?}", value));
    if cli.print_json {
        println!("{}", serde_json::to_string(&value)?);
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.apply(action);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(xs: &[&str]) -> Vec<String> {
        std::iter::once("omselect")
            .chain(xs.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args() {
        let cli = parse_args(&args(&["--max", "3", "--numbers-left", "--print-json"])).unwrap();
        assert_eq!(cli.max_items, Some(3));
        assert_eq!(cli.numbers_left, Some(true));
        assert!(cli.print_json);
        assert!(cli.config_path.is_none());
    }

    #[test]
    fn test_parse_args_rejects_bad_max() {
        assert!(matches!(
            parse_args(&args(&["--max", "many"])),
            Err(AppError::Argument(_))
        ));
        assert!(matches!(parse_args(&args(&["--max"])), Err(AppError::Argument(_))));
    }
}
