mod app;
mod batch;
mod cli;
mod config;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::Config;
use core::actions::find_action;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing_appender::non_blocking::WorkerGuard;
use ui::components::DialogKind;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.batch);

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    apply_cli_overrides(&mut config, &cli);
    tracing::debug!(?config, "Loaded configuration");

    if cli.batch {
        let Some(folder) = cli.path.as_deref() else {
            anyhow::bail!("--batch requires a folder path");
        };
        return match batch::run(folder, cli.name.as_deref(), &cli.exclude, &config).await {
            Ok(saved) => {
                println!("{}", saved.display());
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Batch archive failed");
                eprintln!("Error: {:#}", err);
                std::process::exit(1);
            }
        };
    }

    let mut app = App::new(config);
    match cli.path.as_deref() {
        Some(folder) => {
            app.load_folder(folder);
            if let Some(name) = cli.name.as_deref() {
                app.set_archive_name(name);
            }
        }
        None => app.open_folder_dialog(),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("TUI started");
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// CLI 옵션이 설정 파일 값보다 우선
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(level) = cli.level {
        config.archive.compression_level = level;
    }
    if let Some(output) = &cli.output {
        config.archive.output_dir = Some(output.clone());
    }
    if cli.skip_hidden {
        config.scan.skip_hidden = true;
    }
}

/// 로깅 초기화
///
/// TUI는 터미널을 점유하므로 `<data_dir>/bokslzip/logs`에 일 단위 파일로,
/// 배치 모드는 stderr로 기록한다.
fn init_logging(verbosity: u8, batch: bool) -> Option<WorkerGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match (verbosity, batch) {
        (0, true) => "warn",
        (0, false) => "info",
        (1, _) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bokslzip={}", level)));

    if batch {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .with(filter)
            .init();
        return None;
    }

    let log_dir = dirs::data_dir()?.join("bokslzip").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "bokslzip.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(filter)
        .init();
    Some(guard)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::renderer::render(f, app))?;

        // 압축 중에는 진행률 갱신을 위해 짧게 대기
        let poll_timeout = if app.is_busy() {
            Duration::from_millis(30)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if app.is_dialog_active() {
                        handle_dialog_keys(app, key.modifiers, key.code);
                    } else {
                        handle_normal_keys(app, key.modifiers, key.code);
                    }
                }
            }
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
        app.quit();
        return;
    }
    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 다이얼로그 모드 키 처리
fn handle_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match app.dialog {
        Some(DialogKind::Input { .. }) => handle_input_dialog_keys(app, modifiers, code),
        Some(DialogKind::Error { .. }) => {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.close_dialog();
            }
        }
        Some(DialogKind::Help { .. }) => match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
                app.close_dialog()
            }
            KeyCode::Char('j') | KeyCode::Down => app.dialog_help_scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => app.dialog_help_scroll_up(),
            _ => {}
        },
        None => {}
    }
}

/// 입력 다이얼로그 키 처리
fn handle_input_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Enter) => app.confirm_input_dialog(),
        (_, KeyCode::Esc) => app.close_dialog(),
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.dialog_input_delete_word(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => app.dialog_input_char(c),
        (_, KeyCode::Backspace) => app.dialog_input_backspace(),
        (_, KeyCode::Delete) => app.dialog_input_delete(),
        (_, KeyCode::Left) => app.dialog_input_left(),
        (_, KeyCode::Right) => app.dialog_input_right(),
        (_, KeyCode::Home) => app.dialog_input_home(),
        (_, KeyCode::End) => app.dialog_input_end(),
        _ => {}
    }
}
