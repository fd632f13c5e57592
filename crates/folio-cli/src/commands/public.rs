use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Subcommand;
use folio_core::models::{NewMessage, RecordId};
use folio_core::{AdminView, View};

use super::App;
use crate::output;

/// Typed at the chat prompt to leave
const QUIT: &str = ":q";

#[derive(Subcommand, Debug, Clone)]
pub enum PublicResource {
    Projects,
    /// List posts, or show one post by id
    Blogs {
        id: Option<String>,
    },
    Skills,
    Services,
    Socials,
    Showcase,
    /// Site owner profile
    Profile,
}

pub async fn run(app: &App, resource: PublicResource) -> Result<()> {
    let api = app.api();
    match resource {
        PublicResource::Projects => output::projects(&api.list_projects().await?),
        PublicResource::Blogs { id: None } => output::blogs(&api.list_blogs().await?),
        PublicResource::Blogs { id: Some(id) } => {
            output::blog_detail(&api.get_blog(&RecordId::from(id)).await?)
        }
        PublicResource::Skills => output::skills(&api.list_skills().await?),
        PublicResource::Services => output::services(&api.list_public_services().await?),
        PublicResource::Socials => output::social_links(&api.list_public_social_links().await?),
        PublicResource::Showcase => output::showcase(&api.list_showcase().await?),
        PublicResource::Profile => {
            let profiles = api.list_public_profiles().await?;
            match profiles.first() {
                Some(profile) => output::profile(profile),
                None => println!("No profile published yet."),
            }
        }
    }
    Ok(())
}

pub async fn contact(
    app: &App,
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<()> {
    let message = NewMessage {
        name,
        email,
        subject,
        message,
    };
    let response = app.api().send_message(&message).await?;
    output::done(&response, "Message sent");
    Ok(())
}

/// One-shot or line-by-line chat with the site assistant
pub async fn chat(app: &mut App, message: Option<String>, admin: bool) -> Result<()> {
    if admin {
        app.enter(View::Admin(AdminView::Dashboard)).await?;
    }

    if let Some(message) = message {
        let reply = send_chat(app, &message, admin).await?;
        println!("{}", reply);
        return Ok(());
    }

    println!("Chatting with the assistant. Type {} to quit.", QUIT);
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line == QUIT {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match send_chat(app, line, admin).await {
            Ok(reply) => println!("{}", reply),
            Err(e) if admin => return Err(e),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    println!("Goodbye!");
    Ok(())
}

async fn send_chat(app: &App, message: &str, admin: bool) -> Result<String> {
    if admin {
        app.api().admin_chat(message).await.map_err(|e| app.fail(e))
    } else {
        Ok(app.api().public_chat(message).await?)
    }
}
