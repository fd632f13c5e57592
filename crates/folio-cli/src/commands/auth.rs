use std::io::{self, Write};

use anyhow::{anyhow, Result};
use folio_core::auth::FileTokenStore;
use folio_core::config::TokenBackend;
use folio_core::{AdminView, GuardDecision, View};
use tracing::warn;

use super::{admin, public, App};

/// Environment variables for non-interactive logins
const EMAIL_ENV: &str = "FOLIO_EMAIL";
const PASSWORD_ENV: &str = "FOLIO_PASSWORD";

/// Interactive login. The email defaults to the last one used.
pub async fn login(app: &mut App, email: Option<String>) -> Result<()> {
    let email = email
        .or_else(|| std::env::var(EMAIL_ENV).ok())
        .filter(|e| !e.trim().is_empty());
    let email = match email {
        Some(email) => email,
        None => prompt_email(app.config.last_email.as_deref())?,
    };
    let password = match std::env::var(PASSWORD_ENV) {
        Ok(password) if !password.is_empty() => password,
        _ => rpassword::prompt_password("Password: ")?,
    };

    println!("Authenticating...");
    app.session
        .login(&email, &password)
        .await
        .map_err(|e| anyhow!("{}", e))?;

    app.config.last_email = Some(email.trim().to_string());
    if let Err(e) = app.config.save() {
        warn!(error = %e, "Failed to save config");
    }

    println!("Login successful!");
    Ok(())
}

fn prompt_email(last: Option<&str>) -> Result<String> {
    match last {
        Some(last) => print!("Email [{}]: ", last),
        None => print!("Email: "),
    }
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    match (input.is_empty(), last) {
        (true, Some(last)) => Ok(last.to_string()),
        _ => Ok(input.to_string()),
    }
}

pub fn logout(app: &App) -> Result<()> {
    let redirect = app.session.logout()?;
    let folio_core::Navigation::Redirect(view) = redirect;
    println!("Logged out. Next stop: {}", view);
    Ok(())
}

pub async fn status(app: &App) -> Result<()> {
    println!("Backend: {}", app.api().base_url());
    if !app.session.is_authenticated() {
        println!("Not logged in");
        return Ok(());
    }

    if app.config.token_backend == TokenBackend::File {
        if let Some(record) = FileTokenStore::new(app.config.data_dir()?).load() {
            println!("Token saved {}", record.saved_at.format("%Y-%m-%d %H:%M UTC"));
        }
    }

    // The token has no client-side expiry; ask the server who it belongs to
    match app.api().me().await {
        Ok(user) => {
            let who = user.email.or(user.name).unwrap_or_else(|| "unknown user".to_string());
            println!("Logged in as {}", who);
            Ok(())
        }
        Err(e) => Err(app.fail(e)),
    }
}

/// Navigate to a route the way the site would: public routes render
/// directly, admin routes go through the guard first.
pub async fn open(app: &mut App, path: &str) -> Result<()> {
    let decision = app
        .session
        .guard()
        .check_path(path)
        .ok_or_else(|| anyhow!("No such page: {}", path))?;

    let view = match decision {
        GuardDecision::Render(view) => view,
        GuardDecision::Redirect { to, from } => {
            let view = from.ok_or_else(|| anyhow!("Redirected to {} with nowhere to return", to))?;
            app.enter(view).await?
        }
    };
    show(app, view).await
}

async fn show(app: &mut App, view: View) -> Result<()> {
    match view {
        View::Home | View::About => public::run(app, public::PublicResource::Profile).await,
        View::Services => public::run(app, public::PublicResource::Services).await,
        View::Skills => public::run(app, public::PublicResource::Skills).await,
        View::Blogs => public::run(app, public::PublicResource::Blogs { id: None }).await,
        View::BlogDetail(id) => public::run(app, public::PublicResource::Blogs { id: Some(id) }).await,
        View::Portfolio => {
            public::run(app, public::PublicResource::Projects).await?;
            public::run(app, public::PublicResource::Showcase).await
        }
        View::Contact => {
            println!("Send a message with `folio contact --name <NAME> --email <EMAIL> --message <TEXT>`");
            Ok(())
        }
        View::Login => login(app, None).await,
        View::Admin(AdminView::Dashboard) => admin::dashboard(app).await,
        View::Admin(area) => admin::overview(app, area).await,
    }
}
