use std::sync::{Arc, Mutex, MutexGuard, RwLock, Weak};

use crate::modules::users::application::mapper::UserModelMapper;
use crate::modules::users::application::use_cases::{FetchHandle, GetUserDetailsUseCase};
use crate::modules::users::domain::entities::{User, UserId};
use crate::modules::users::presentation::view::UserDetailsView;
use crate::shared::application::UseCaseObserver;
use crate::shared::errors::AppError;
use crate::{log_debug, log_info, log_warn};

/// Mutually exclusive view states. Transitions are driven only by the
/// presenter; the view never changes state on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Content,
    Error,
}

struct PresenterState {
    view_state: ViewState,
    user_id: Option<UserId>,
    /// Cleared between `pause()` and `resume()`; callbacks arriving
    /// while inactive are dropped.
    active: bool,
    /// Monotonic request token. A delivery whose token no longer
    /// matches is stale and must not touch the view.
    fetch_seq: u64,
    in_flight: Option<FetchHandle>,
}

/// Mediator between the profile fetch use case and a view surface.
///
/// All methods must be called from the interactive thread; completion
/// callbacks arrive there via the main-thread dispatcher, so view
/// mutations are always serial.
pub struct UserDetailsPresenter {
    view: RwLock<Option<Arc<dyn UserDetailsView>>>,
    get_user_details: Arc<GetUserDetailsUseCase>,
    mapper: UserModelMapper,
    state: Mutex<PresenterState>,
    /// Handed to observers so a callback can find its way back without
    /// keeping a torn-down presenter alive.
    weak_self: Weak<UserDetailsPresenter>,
}

impl UserDetailsPresenter {
    pub fn new(get_user_details: Arc<GetUserDetailsUseCase>, mapper: UserModelMapper) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            view: RwLock::new(None),
            get_user_details,
            mapper,
            state: Mutex::new(PresenterState {
                view_state: ViewState::Idle,
                user_id: None,
                active: true,
                fetch_seq: 0,
                in_flight: None,
            }),
            weak_self: weak_self.clone(),
        })
    }

    pub fn attach_view(&self, view: Arc<dyn UserDetailsView>) {
        *self.view.write().unwrap_or_else(|e| e.into_inner()) = Some(view);
    }

    pub fn view_state(&self) -> ViewState {
        self.lock_state().view_state
    }

    pub fn current_user_id(&self) -> Option<UserId> {
        self.lock_state().user_id
    }

    /// Start (or restart) loading the profile for `user_id`.
    ///
    /// A fetch already in flight is superseded: its token is cancelled
    /// and its request sequence goes stale, so its result can never
    /// reach the view.
    pub fn initialize(&self, user_id: UserId) {
        let seq = {
            let mut state = self.lock_state();
            if let Some(handle) = state.in_flight.take() {
                log_debug!("Superseding in-flight fetch for user {:?}", state.user_id);
                handle.cancel();
            }
            state.fetch_seq += 1;
            state.user_id = Some(user_id);
            state.view_state = ViewState::Loading;
            state.fetch_seq
        };

        log_info!("Loading profile for user {}", user_id);
        self.with_view(|view| {
            view.hide_retry();
            view.show_loading();
        });

        let observer = Arc::new(DetailsObserver {
            presenter: self.weak_self.clone(),
            seq,
        });
        let handle = self.get_user_details.execute_detached(user_id, observer);

        let mut state = self.lock_state();
        // A view callback may have restarted the load; keep only the
        // newest fetch.
        if state.fetch_seq == seq {
            state.in_flight = Some(handle);
        } else {
            handle.cancel();
        }
    }

    /// Lifecycle: the surface is going away temporarily. Cancels
    /// in-flight delivery so a late callback cannot mutate a detached
    /// view.
    pub fn pause(&self) {
        let mut state = self.lock_state();
        state.active = false;
        if let Some(handle) = state.in_flight.take() {
            log_debug!("Pausing with a fetch in flight; unsubscribing");
            handle.cancel();
        }
    }

    /// Lifecycle: the surface is interactive again. Does not refetch;
    /// reloading stays user-initiated.
    pub fn resume(&self) {
        self.lock_state().active = true;
    }

    /// User-initiated retry from the error state. Re-issues the fetch
    /// for the last-known identifier.
    pub fn retry(&self) {
        let user_id = {
            let state = self.lock_state();
            match (state.view_state, state.user_id) {
                (ViewState::Error, Some(id)) => Some(id),
                _ => None,
            }
        };
        match user_id {
            Some(id) => self.initialize(id),
            None => log_warn!("Retry requested outside the error state; ignoring"),
        }
    }

    /// Tear the presenter off its view. Later callbacks find no view
    /// and fall through.
    pub fn destroy(&self) {
        {
            let mut state = self.lock_state();
            state.active = false;
            if let Some(handle) = state.in_flight.take() {
                handle.cancel();
            }
        }
        *self.view.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    fn on_user_loaded(&self, seq: u64, user: User) {
        {
            let mut state = self.lock_state();
            if !state.active || state.fetch_seq != seq {
                log_debug!("Dropping stale result for user {}", user.id);
                return;
            }
            state.view_state = ViewState::Content;
            state.in_flight = None;
        }

        log_info!("Rendering profile for user {}", user.id);
        let model = self.mapper.to_model(&user);
        self.with_view(|view| {
            view.hide_loading();
            view.render_user(&model);
        });
    }

    fn on_fetch_failed(&self, seq: u64, error: AppError) {
        {
            let mut state = self.lock_state();
            if !state.active || state.fetch_seq != seq {
                log_debug!("Dropping stale failure: {}", error);
                return;
            }
            state.view_state = ViewState::Error;
            state.in_flight = None;
        }

        let message = error.to_string();
        log_warn!("Profile fetch failed: {}", message);
        self.with_view(|view| {
            view.hide_loading();
            view.show_retry();
            view.show_error(&message);
        });
    }

    fn with_view<F>(&self, f: F)
    where
        F: FnOnce(&dyn UserDetailsView),
    {
        let view = self.view.read().unwrap_or_else(|e| e.into_inner());
        if let Some(view) = view.as_ref() {
            f(view.as_ref());
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, PresenterState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Routes use-case callbacks back into the presenter, tagged with the
/// request token of the fetch that produced them.
struct DetailsObserver {
    presenter: Weak<UserDetailsPresenter>,
    seq: u64,
}

impl UseCaseObserver<User> for DetailsObserver {
    fn on_success(&self, user: User) {
        if let Some(presenter) = self.presenter.upgrade() {
            presenter.on_user_loaded(self.seq, user);
        }
    }

    fn on_error(&self, error: AppError) {
        if let Some(presenter) = self.presenter.upgrade() {
            presenter.on_fetch_failed(self.seq, error);
        }
    }
}
