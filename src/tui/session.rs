use std::io;
use std::sync::Arc;
use std::time::Duration;
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use lawdesk_cal::{
    app::AppState,
    calendar::CalendarMonthSnapshot,
    input::normal_mode::{self, KeyOutcome},
    storage::config::Config,
    sync::availability_api::{ApiError, AvailabilityApi, HttpAvailabilityClient, MonthKey},
    ui::theme::Theme,
};
use crate::tui::presentation::ui;

type SharedApi = Arc<dyn AvailabilityApi + Send + Sync>;
type FetchResult = (MonthKey, Result<CalendarMonthSnapshot, ApiError>);

pub async fn run_tui(config: Config, resource_id: Option<String>) -> Result<(), io::Error> {
    let options = config.grid_options()
        .map_err(|e| io::Error::other(e.to_string()))?;
    let api: SharedApi = Arc::new(
        HttpAvailabilityClient::new(config.api.base_url.clone()).with_token(config.token()),
    );

    let theme = Theme::get_by_name(&config.ui.theme);
    let mut app = AppState::new(Local::now().date_naive(), resource_id)
        .with_theme(theme)
        .with_options(options);

    app.selection.subscribe(|key| {
        tracing::info!("Appointment date selection changed: {}", key.unwrap_or("none"));
    });

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_fetch(&api, &tx, app.displayed_month().clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &api, &tx, &mut rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn spawn_fetch(api: &SharedApi, tx: &UnboundedSender<FetchResult>, key: MonthKey) {
    let api = Arc::clone(api);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = api.fetch_calendar_month(key.clone()).await;
        if tx.send((key, result)).is_err() {
            tracing::debug!("Calendar view closed before availability arrived");
        }
    });
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    api: &SharedApi,
    tx: &UnboundedSender<FetchResult>,
    rx: &mut UnboundedReceiver<FetchResult>,
) -> io::Result<()> {
    loop {
        if app.set_today(Local::now().date_naive()) {
            tracing::info!("Date changed to {}", app.today);
        }

        while let Ok((key, result)) = rx.try_recv() {
            app.apply_fetch(&key, result);
        }

        terminal.draw(|f| ui(f, app))?;

        let ready = tokio::task::spawn_blocking(|| event::poll(Duration::from_millis(100)))
            .await
            .map_err(io::Error::other)??;
        if !ready {
            continue;
        }

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match normal_mode::handle_key(key.code, app) {
                KeyOutcome::Quit => return Ok(()),
                KeyOutcome::Fetch(month) => spawn_fetch(api, tx, month),
                KeyOutcome::Continue => {}
            }
        }
    }
}
