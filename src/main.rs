mod clock;
mod config;
mod error;
mod models;
mod offer;
mod store;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info, warn};
use ratatui::prelude::*;
use tokio::runtime::{Handle, Runtime};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::clock::Clock;
use crate::config::{Config, config_path};
use crate::error::AppError;
use crate::models::CONVERSATIONS;
use crate::store::StoreClient;
use crate::ui::{Action, App, render};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 获取数据目录路径 (~/.local/share/neighborlink/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join("neighborlink");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 日志写入文件，终端处于 raw 模式时不能输出到 stderr
fn init_logger(data_dir: &Path) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("neighborlink.log"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<(), AppError> {
    let data_dir = get_data_dir()?;
    init_logger(&data_dir)?;

    let config = match config_path() {
        Some(path) => Config::from_env_and_file(&path)?,
        None => {
            warn!("no config directory, using defaults");
            let mut config = Config::default();
            config.apply_env_overrides(|name| std::env::var(name).ok());
            config
        }
    };

    // 创建应用状态；存储客户端创建失败不影响界面启动
    let (store, mut app) = if config.store.is_configured() {
        match StoreClient::new(&config.store) {
            Ok(store) => (Some(store), App::new(CONVERSATIONS, true)),
            Err(e) => {
                warn!("remote store disabled: {e}");
                (None, App::with_store_error(CONVERSATIONS, e.to_string()))
            }
        }
    } else {
        info!("remote store not configured");
        (None, App::new(CONVERSATIONS, false))
    };

    let runtime = Runtime::new().map_err(AppError::Runtime)?;
    let (tx, rx) = mpsc::unbounded_channel();

    let mut terminal = setup_terminal()?;

    let mut clock = Clock::start(
        runtime.handle(),
        Duration::from_millis(config.clock.tick_ms.max(1)),
        tx.clone(),
    );

    // 主循环
    let result = run_app(
        &mut terminal,
        &mut app,
        runtime.handle(),
        store.map(Arc::new),
        tx,
        rx,
    );

    clock.stop();

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("ui loop failed: {e}");
    }
    result.map_err(AppError::from)
}

/// 设置终端；任一步失败都先恢复终端再返回错误
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let result = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .and_then(|_| Terminal::new(CrosstermBackend::new(stdout)));
    if result.is_err() {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runtime: &Handle,
    store: Option<Arc<StoreClient>>,
    tx: UnboundedSender<Action>,
    mut rx: UnboundedReceiver<Action>,
) -> io::Result<()> {
    loop {
        if app.take_fetch_request() {
            if let Some(store) = &store {
                spawn_profile_fetch(runtime, store.clone(), tx.clone());
            }
        }

        terminal.draw(|f| render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code) {
                    break;
                }
            }
        }

        // 后台任务的结果
        while let Ok(action) = rx.try_recv() {
            if app.dispatch(action) {
                return Ok(());
            }
        }
    }
    Ok(())
}

fn spawn_profile_fetch(
    runtime: &Handle,
    store: Arc<StoreClient>,
    tx: UnboundedSender<Action>,
) {
    info!("fetching profiles from {}", store.endpoint());
    runtime.spawn(async move {
        let result = store
            .fetch_profiles()
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(Action::ProfilesLoaded(result));
    });
}
