use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use persona::modules::users::application::mapper::UserModelMapper;
use persona::modules::users::application::use_cases::GetUserDetailsUseCase;
use persona::modules::users::application::UserModel;
use persona::modules::users::domain::entities::UserId;
use persona::modules::users::domain::repositories::{UserCache, UserRepository};
use persona::modules::users::infrastructure::datasource::CloudUserDataSource;
use persona::modules::users::infrastructure::{
    CachingUserRepository, InMemoryUserCache, UserDataRepository,
};
use persona::modules::users::presentation::{UserDetailsPresenter, UserDetailsView};
use persona::shared::config::AppConfig;
use persona::shared::utils::init_logger;
use persona::shared::{MainLoop, TaskExecutor};

/// Terminal rendering of the view contract; stands in for a real UI
/// surface. Flags `done` on either terminal transition so the main
/// loop knows when to stop.
struct ConsoleView {
    done: Arc<AtomicBool>,
}

impl UserDetailsView for ConsoleView {
    fn render_user(&self, user: &UserModel) {
        println!();
        println!("{}", user.full_name);
        println!("  email:      {}", user.email);
        println!("  followers:  {}", user.followers);
        if !user.cover_url.is_empty() {
            println!("  cover:      {}", user.cover_url);
        }
        if !user.description.is_empty() {
            println!("  {}", user.description);
        }
        self.done.store(true, Ordering::SeqCst);
    }

    fn show_loading(&self) {
        println!("Loading profile...");
    }

    fn hide_loading(&self) {}

    fn show_retry(&self) {
        println!("The profile could not be loaded; run again to retry.");
    }

    fn hide_retry(&self) {}

    fn show_error(&self, message: &str) {
        eprintln!("Error: {}", message);
        self.done.store(true, Ordering::SeqCst);
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let user_id: UserId = match std::env::args().nth(1) {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid user id '{}': {}", raw, e))?,
        None => {
            eprintln!("usage: persona <user-id>");
            process::exit(2);
        }
    };

    let config = AppConfig::from_env();
    log::debug!("Configuration: {:?}", config);

    // One interactive thread (this one, draining the main loop) plus
    // the runtime's worker pool for background fetches.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let executor = TaskExecutor::new(runtime.handle().clone());
    let (mut main_loop, dispatcher) = MainLoop::new();

    // Manual wiring at the single assembly point: cache -> repository ->
    // use case -> presenter. Each layer depends only on the trait above it.
    let cache: Arc<dyn UserCache> = Arc::new(InMemoryUserCache::new(
        config.cache_ttl,
        config.cache_max_entries,
    ));
    let datasource = CloudUserDataSource::new(&config)?;
    let remote: Arc<dyn UserRepository> = Arc::new(UserDataRepository::new(datasource));
    let repository: Arc<dyn UserRepository> =
        Arc::new(CachingUserRepository::new(remote, cache));

    let get_user_details = Arc::new(GetUserDetailsUseCase::new(
        repository,
        executor,
        dispatcher.clone(),
    ));
    let presenter = UserDetailsPresenter::new(get_user_details, UserModelMapper::new());

    let done = Arc::new(AtomicBool::new(false));
    presenter.attach_view(Arc::new(ConsoleView { done: done.clone() }));
    presenter.initialize(user_id);

    let finished = done.clone();
    main_loop.run_while(move || !finished.load(Ordering::SeqCst));

    presenter.destroy();
    runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(())
}
