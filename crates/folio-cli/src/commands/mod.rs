//! Command handlers.

pub mod admin;
pub mod auth;
pub mod public;

use anyhow::Result;
use folio_core::{ApiClient, ApiError, Config, GuardDecision, Navigation, SessionController, View};
use tracing::warn;

/// Process-wide state shared by every command
pub struct App {
    pub config: Config,
    pub session: SessionController,
}

impl App {
    pub fn new(config: Config, api_url: Option<&str>) -> Result<Self> {
        let base_url = config.resolve_base_url(api_url);
        let tokens = config.token_store()?;
        let api = ApiClient::new(base_url, tokens)?;
        Ok(Self {
            config,
            session: SessionController::new(api),
        })
    }

    pub fn api(&self) -> &ApiClient {
        self.session.api()
    }

    /// Pass `view` through the route guard, running the login flow first
    /// when it redirects. Returns the view to show afterwards.
    pub async fn enter(&mut self, view: View) -> Result<View> {
        match self.session.guard().check(view) {
            GuardDecision::Render(view) => Ok(view),
            GuardDecision::Redirect { to, from } => {
                let from = from.unwrap_or(View::Home);
                println!("{} requires login, redirecting to {}", from, to);
                auth::login(self, None).await?;
                println!("Returning to {}", from);
                Ok(from)
            }
        }
    }

    /// Turn a failed API call into a command error, logging out first when
    /// the server rejected the token
    pub fn fail(&self, err: ApiError) -> anyhow::Error {
        if let Some(Navigation::Redirect(view)) = self.session.handle_api_error(&err) {
            warn!(redirect = %view, "Session ended by server");
            eprintln!("Session is no longer valid. Log in again with `folio login` ({}).", view);
        }
        anyhow::Error::new(err)
    }
}
