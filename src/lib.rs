mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases, validation};
pub use infrastructure::{email, limiter, security, utils};
pub use interfaces::{handlers, routes};

use constants::{RATE_LIMIT, RATE_WINDOW};
use email::{Mailer, ResendMailer};
use limiter::RateLimiter;
use settings::AppConfig;
use use_cases::contact::ContactHandler;

/// Shared application state: the submission pipeline plus the one piece of
/// cross-request mutable state, the rate limiter.
pub struct AppState<M: Mailer = ResendMailer> {
    pub contact_handler: ContactHandler<M>,
    pub rate_limiter: RateLimiter,
    pub config: AppConfig,
}

impl AppState<ResendMailer> {
    pub fn new(config: AppConfig) -> Self {
        let mailer = ResendMailer::new(&config);
        AppState::with_mailer(config, mailer)
    }
}

impl<M: Mailer> AppState<M> {
    /// Wires the pipeline around an arbitrary mailer; tests inject mocks
    /// through this constructor.
    pub fn with_mailer(config: AppConfig, mailer: M) -> Self {
        AppState {
            contact_handler: ContactHandler::new(mailer),
            rate_limiter: RateLimiter::new(RATE_LIMIT, RATE_WINDOW),
            config,
        }
    }
}
