/// Test helper doubles and graph builders
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use persona::modules::users::application::dto::UserModel;
use persona::modules::users::application::mapper::UserModelMapper;
use persona::modules::users::application::use_cases::GetUserDetailsUseCase;
use persona::modules::users::domain::entities::{User, UserId};
use persona::modules::users::domain::repositories::UserRepository;
use persona::modules::users::presentation::{UserDetailsPresenter, UserDetailsView};
use persona::shared::application::UseCaseObserver;
use persona::shared::errors::{AppError, AppResult};
use persona::shared::{MainLoop, MainThreadDispatcher, TaskExecutor};

/// Repository double with scripted per-user outcomes and an optional
/// gate that holds every response until the test releases it.
pub struct ScriptedRepository {
    outcomes: Mutex<HashMap<UserId, Result<User, AppError>>>,
    gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<UserId>>,
}

impl ScriptedRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(HashMap::new()),
            gate: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Repository whose fetches block until [`ScriptedRepository::release`]
    /// is called, so tests can observe the in-flight window.
    pub fn gated() -> (Arc<Self>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let repo = Arc::new(Self {
            outcomes: Mutex::new(HashMap::new()),
            gate: Some(gate.clone()),
            calls: Mutex::new(Vec::new()),
        });
        (repo, gate)
    }

    pub fn script_success(&self, user: User) {
        self.outcomes.lock().unwrap().insert(user.id, Ok(user));
    }

    pub fn script_failure(&self, id: UserId, error: AppError) {
        self.outcomes.lock().unwrap().insert(id, Err(error));
    }

    pub fn calls(&self) -> Vec<UserId> {
        self.calls.lock().unwrap().clone()
    }

    /// Wake up to `n` gated fetches.
    pub async fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            for _ in 0..n {
                gate.notify_one();
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        }
    }

    /// Spin until the repository has seen `n` calls.
    pub async fn wait_for_call_count(&self, n: usize) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while self.calls().len() < n {
            assert!(
                tokio::time::Instant::now() < deadline,
                "timed out waiting for {} repository calls (saw {})",
                n,
                self.calls().len()
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}

#[async_trait]
impl UserRepository for ScriptedRepository {
    async fn get_user_details(&self, id: UserId) -> AppResult<User> {
        self.calls.lock().unwrap().push(id);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let outcome = self.outcomes.lock().unwrap().get(&id).cloned();
        match outcome {
            Some(outcome) => outcome,
            None => Err(AppError::NotFound(format!("User {} not scripted", id))),
        }
    }
}

/// Everything the view was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Loading,
    LoadingHidden,
    Rendered(UserModel),
    RetryShown,
    RetryHidden,
    Error(String),
}

pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
        })
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn rendered_users(&self) -> Vec<UserModel> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Rendered(model) => Some(model),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &ViewEvent) -> usize {
        self.events()
            .iter()
            .filter(|event| *event == wanted)
            .count()
    }
}

impl UserDetailsView for RecordingView {
    fn render_user(&self, user: &UserModel) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Rendered(user.clone()));
    }

    fn show_loading(&self) {
        self.events.lock().unwrap().push(ViewEvent::Loading);
    }

    fn hide_loading(&self) {
        self.events.lock().unwrap().push(ViewEvent::LoadingHidden);
    }

    fn show_retry(&self) {
        self.events.lock().unwrap().push(ViewEvent::RetryShown);
    }

    fn hide_retry(&self) {
        self.events.lock().unwrap().push(ViewEvent::RetryHidden);
    }

    fn show_error(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Error(message.to_string()));
    }
}

/// Observer double collecting terminal callbacks.
#[derive(Default)]
pub struct CollectingObserver {
    pub outcomes: Mutex<Vec<Result<User, AppError>>>,
}

impl CollectingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn successes(&self) -> Vec<User> {
        self.outcomes
            .lock()
            .unwrap()
            .iter()
            .filter_map(|outcome| outcome.as_ref().ok().cloned())
            .collect()
    }

    pub fn failures(&self) -> Vec<AppError> {
        self.outcomes
            .lock()
            .unwrap()
            .iter()
            .filter_map(|outcome| outcome.as_ref().err().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.outcomes.lock().unwrap().len()
    }
}

impl UseCaseObserver<User> for CollectingObserver {
    fn on_success(&self, value: User) {
        self.outcomes.lock().unwrap().push(Ok(value));
    }

    fn on_error(&self, error: AppError) {
        self.outcomes.lock().unwrap().push(Err(error));
    }
}

/// The presenter graph wired against a scripted repository.
pub struct TestHarness {
    pub presenter: Arc<UserDetailsPresenter>,
    pub view: Arc<RecordingView>,
    pub repository: Arc<ScriptedRepository>,
    pub main_loop: MainLoop,
    pub dispatcher: MainThreadDispatcher,
}

/// Build the full presenter graph on the current test runtime.
pub fn build_presenter_harness(repository: Arc<ScriptedRepository>) -> TestHarness {
    let (main_loop, dispatcher) = MainLoop::new();
    let executor = TaskExecutor::current();

    let use_case = Arc::new(GetUserDetailsUseCase::new(
        repository.clone(),
        executor,
        dispatcher.clone(),
    ));
    let presenter = UserDetailsPresenter::new(use_case, UserModelMapper::new());
    let view = RecordingView::new();
    presenter.attach_view(view.clone());

    TestHarness {
        presenter,
        view,
        repository,
        main_loop,
        dispatcher,
    }
}

/// Run one main-loop turn, failing the test if nothing arrives.
pub async fn drain_one(main_loop: &mut MainLoop) {
    let processed = tokio::time::timeout(Duration::from_secs(2), main_loop.turn())
        .await
        .expect("main loop starved: no action arrived within 2s");
    assert!(processed, "main loop closed unexpectedly");
}
