//! Admin panel commands.
//!
//! Every area first passes through the route guard (logging in when no
//! token is stored). Failed API calls go through the session's rejection
//! hook so a token the server no longer accepts is cleared.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use folio_core::api::FileUpload;
use folio_core::models::{
    split_list, BlogForm, MediaType, ProfileUpdate, Project, ProjectForm, ProjectStatus, RecordId,
    Service, ServiceInput, ShowcaseForm, ShowcaseItem, Skill, SkillInput, SocialLink,
    SocialLinkInput,
};
use folio_core::utils::contains_ignore_case;
use folio_core::{AdminView, ApiClient, ApiError, View};

use super::App;
use crate::output;

#[derive(Subcommand, Debug)]
pub enum AdminArea {
    /// Counts and latest entries for every section
    Dashboard,
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },
    Blogs {
        #[command(subcommand)]
        action: BlogAction,
    },
    Skills {
        #[command(subcommand)]
        action: SkillAction,
    },
    Services {
        #[command(subcommand)]
        action: ServiceAction,
    },
    #[command(name = "social-links")]
    SocialLinks {
        #[command(subcommand)]
        action: SocialLinkAction,
    },
    Showcase {
        #[command(subcommand)]
        action: ShowcaseAction,
    },
    Messages {
        #[command(subcommand)]
        action: MessageAction,
    },
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Uploaded file library
    Files {
        #[command(subcommand)]
        action: FileAction,
    },
    /// Ask the admin assistant a question
    Chat { message: String },
}

impl AdminArea {
    /// Admin screen this area belongs to
    fn view(&self) -> AdminView {
        match self {
            AdminArea::Dashboard | AdminArea::Files { .. } | AdminArea::Chat { .. } => {
                AdminView::Dashboard
            }
            AdminArea::Projects { .. } => AdminView::Projects,
            AdminArea::Blogs { .. } => AdminView::Blogs,
            AdminArea::Skills { .. } => AdminView::Skills,
            AdminArea::Services { .. } => AdminView::Services,
            AdminArea::SocialLinks { .. } => AdminView::SocialLinks,
            AdminArea::Showcase { .. } => AdminView::Showcase,
            AdminArea::Messages { .. } => AdminView::Messages,
            AdminArea::Profile { .. } => AdminView::Profile,
        }
    }

    /// What an admin screen shows when opened without an action
    fn landing(view: AdminView) -> Self {
        match view {
            AdminView::Dashboard => AdminArea::Dashboard,
            AdminView::Projects => AdminArea::Projects {
                action: ProjectAction::List { search: None },
            },
            AdminView::Blogs => AdminArea::Blogs {
                action: BlogAction::List { search: None },
            },
            AdminView::Skills => AdminArea::Skills {
                action: SkillAction::List,
            },
            AdminView::Services => AdminArea::Services {
                action: ServiceAction::List,
            },
            AdminView::SocialLinks => AdminArea::SocialLinks {
                action: SocialLinkAction::List,
            },
            AdminView::Showcase => AdminArea::Showcase {
                action: ShowcaseAction::List,
            },
            AdminView::Messages => AdminArea::Messages {
                action: MessageAction::List { search: None },
            },
            AdminView::Profile => AdminArea::Profile {
                action: ProfileAction::Show,
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    List {
        /// Only show projects whose title or description matches
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        id: String,
    },
    Create(ProjectArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: ProjectArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct ProjectArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Comma-separated technologies
    #[arg(long)]
    tech: Option<String>,
    #[arg(long)]
    github: Option<String>,
    #[arg(long)]
    live: Option<String>,
    /// draft or published
    #[arg(long)]
    status: Option<String>,
    /// Thumbnail image to upload
    #[arg(long)]
    image: Option<PathBuf>,
}

impl ProjectArgs {
    /// Overlay the given fields on `current`
    fn into_form(self, current: Project) -> Result<ProjectForm, ApiError> {
        let status = self.status.or(current.status);
        Ok(ProjectForm {
            title: self.title.or(current.title).unwrap_or_default(),
            description: self.description.or(current.description),
            tech_stack: self
                .tech
                .map(|t| split_list(&t))
                .unwrap_or(current.tech_stack),
            github_link: self.github.or(current.github_link),
            live_link: self.live.or(current.live_link),
            status: status.as_deref().map(ProjectStatus::parse),
            image: upload(self.image)?,
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum BlogAction {
    List {
        /// Only show posts whose title, content or tags match
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        id: String,
    },
    Create(BlogArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: BlogArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct BlogArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    content: Option<String>,
    #[arg(long)]
    author: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    tags: Option<String>,
    /// Cover image to upload
    #[arg(long)]
    image: Option<PathBuf>,
}

impl BlogArgs {
    fn into_form(self, current: folio_core::models::Blog) -> Result<BlogForm, ApiError> {
        Ok(BlogForm {
            title: self.title.or(current.title).unwrap_or_default(),
            content: self.content.or(current.content).unwrap_or_default(),
            author: self.author.or(current.author),
            tags: self.tags.or(current.tags),
            image: upload(self.image)?,
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum SkillAction {
    List,
    Show {
        id: String,
    },
    Create(SkillArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: SkillArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct SkillArgs {
    #[arg(long)]
    name: Option<String>,
    /// e.g. Beginner, Intermediate, Expert
    #[arg(long)]
    level: Option<String>,
    #[arg(long)]
    icon_url: Option<String>,
}

impl SkillArgs {
    fn into_input(self, current: Skill) -> SkillInput {
        SkillInput {
            name: self.name.or(current.name).unwrap_or_default(),
            level: self.level.or(current.level).unwrap_or_default(),
            icon_url: self.icon_url.or(current.icon_url).unwrap_or_default(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ServiceAction {
    /// All services, including hidden ones
    List,
    Create(ServiceArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: ServiceArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct ServiceArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    icon_url: Option<String>,
    /// Position on the services page
    #[arg(long)]
    order: Option<i64>,
    /// Show on the public site (true or false)
    #[arg(long)]
    active: Option<bool>,
}

impl ServiceArgs {
    fn into_input(self, current: Service) -> ServiceInput {
        let active = self.active.or(current.is_active);
        ServiceInput {
            title: self.title.or(current.title).unwrap_or_default(),
            description: self.description.or(current.description).unwrap_or_default(),
            icon_url: self.icon_url.or(current.icon_url).unwrap_or_default(),
            order_index: self.order.or(current.order_index).unwrap_or_default(),
            is_active: active.unwrap_or(true),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SocialLinkAction {
    List,
    Create(SocialLinkArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: SocialLinkArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct SocialLinkArgs {
    /// e.g. GitHub, LinkedIn
    #[arg(long)]
    platform: Option<String>,
    #[arg(long)]
    url: Option<String>,
    #[arg(long)]
    icon: Option<String>,
}

impl SocialLinkArgs {
    fn into_input(self, current: SocialLink) -> SocialLinkInput {
        SocialLinkInput {
            platform: self.platform.or(current.platform).unwrap_or_default(),
            url: self.url.or(current.url).unwrap_or_default(),
            icon: self.icon.or(current.icon).unwrap_or_default(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ShowcaseAction {
    List,
    Show {
        id: String,
    },
    Create(ShowcaseArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: ShowcaseArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct ShowcaseArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    category: Option<String>,
    /// Image or video file to upload
    #[arg(long)]
    media: Option<PathBuf>,
    /// image or video; guessed from the file when omitted
    #[arg(long)]
    media_type: Option<String>,
}

impl ShowcaseArgs {
    fn into_form(self, current: ShowcaseItem) -> Result<ShowcaseForm, ApiError> {
        let media = upload(self.media)?;
        let media_type = match self.media_type.as_deref() {
            Some(t) if t.eq_ignore_ascii_case("video") => Some(MediaType::Video),
            Some(_) => Some(MediaType::Image),
            // No new file: keep what the stored media is
            None if media.is_none() && current.media_type.is_some() => Some(current.media_type()),
            None => None,
        };
        Ok(ShowcaseForm {
            title: self.title.or(current.title).unwrap_or_default(),
            category: self.category.or(current.category).unwrap_or_default(),
            media_type,
            media,
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum MessageAction {
    List {
        /// Only show messages whose sender, subject or body matches
        #[arg(long)]
        search: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    Show,
    Update(ProfileArgs),
}

#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    short_bio: Option<String>,
    #[arg(long)]
    about_bio: Option<String>,
    #[arg(long)]
    bio: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    resume_link: Option<String>,
    #[arg(long)]
    experience_years: Option<i64>,
    #[arg(long)]
    total_projects: Option<i64>,
    #[arg(long)]
    education: Option<String>,
    /// Prompt for a new account password
    #[arg(long)]
    change_password: bool,
    /// Profile picture to upload
    #[arg(long)]
    avatar: Option<PathBuf>,
    /// Resume document to upload
    #[arg(long)]
    resume: Option<PathBuf>,
}

impl ProfileArgs {
    fn apply(self, update: &mut ProfileUpdate) -> Result<(), ApiError> {
        fn set<T>(field: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *field = value;
            }
        }
        set(&mut update.name, self.name);
        set(&mut update.email, self.email);
        set(&mut update.title, self.title);
        set(&mut update.short_bio, self.short_bio);
        set(&mut update.about_bio, self.about_bio);
        set(&mut update.bio, self.bio);
        set(&mut update.phone, self.phone);
        set(&mut update.location, self.location);
        set(&mut update.resume_link, self.resume_link);
        set(&mut update.experience_years, self.experience_years);
        set(&mut update.total_projects, self.total_projects);
        set(&mut update.education, self.education);
        update.avatar = upload(self.avatar)?;
        update.resume = upload(self.resume)?;
        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum FileAction {
    List,
    Upload { path: PathBuf },
    Delete { id: String },
}

fn upload(path: Option<PathBuf>) -> Result<Option<FileUpload>, ApiError> {
    path.map(FileUpload::from_path).transpose()
}

fn matches_search(search: Option<&str>, fields: &[&Option<String>]) -> bool {
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        None => true,
        Some(needle) => fields
            .iter()
            .filter_map(|f| f.as_deref())
            .any(|f| contains_ignore_case(f, needle)),
    }
}

fn not_found(what: &str, id: &RecordId) -> ApiError {
    ApiError::NotFound {
        message: format!("{} {} not found", what, id),
        payload: None,
    }
}

async fn find_service(api: &ApiClient, id: &RecordId) -> Result<Service, ApiError> {
    api.list_services()
        .await?
        .into_iter()
        .find(|s| &s.id == id)
        .ok_or_else(|| not_found("Service", id))
}

async fn find_social_link(api: &ApiClient, id: &RecordId) -> Result<SocialLink, ApiError> {
    api.list_social_links()
        .await?
        .into_iter()
        .find(|s| &s.id == id)
        .ok_or_else(|| not_found("Social link", id))
}

/// Run an admin command behind the route guard
pub async fn run(app: &mut App, area: AdminArea) -> Result<()> {
    app.enter(View::Admin(area.view())).await?;
    let result = execute(app, area).await;
    finish(app, result)
}

/// Show an admin screen the guard has already let through
pub async fn overview(app: &mut App, view: AdminView) -> Result<()> {
    println!("== {} ==", view.title());
    let result = execute(app, AdminArea::landing(view)).await;
    finish(app, result)
}

pub async fn dashboard(app: &mut App) -> Result<()> {
    overview(app, AdminView::Dashboard).await
}

fn finish(app: &App, result: Result<()>) -> Result<()> {
    result.map_err(|e| match e.downcast::<ApiError>() {
        Ok(api_err) => app.fail(api_err),
        Err(other) => other,
    })
}

async fn execute(app: &App, area: AdminArea) -> Result<()> {
    let api = app.api();
    match area {
        AdminArea::Dashboard => output::dashboard(&api.dashboard().await?),
        AdminArea::Projects { action } => projects(api, action).await?,
        AdminArea::Blogs { action } => blogs(api, action).await?,
        AdminArea::Skills { action } => skills(api, action).await?,
        AdminArea::Services { action } => services(api, action).await?,
        AdminArea::SocialLinks { action } => social_links(api, action).await?,
        AdminArea::Showcase { action } => showcase(api, action).await?,
        AdminArea::Messages { action } => messages(api, action).await?,
        AdminArea::Profile { action } => profile(api, action).await?,
        AdminArea::Files { action } => files(api, action).await?,
        AdminArea::Chat { message } => println!("{}", api.admin_chat(&message).await?),
    }
    Ok(())
}

async fn projects(api: &ApiClient, action: ProjectAction) -> Result<()> {
    match action {
        ProjectAction::List { search } => {
            let items: Vec<Project> = api
                .list_projects()
                .await?
                .into_iter()
                .filter(|p| matches_search(search.as_deref(), &[&p.title, &p.description]))
                .collect();
            output::projects(&items);
        }
        ProjectAction::Show { id } => output::record(&api.get_project(&RecordId::from(id)).await?),
        ProjectAction::Create(fields) => {
            let form = fields.into_form(Project::default())?;
            output::done(&api.create_project(form).await?, "Project created");
        }
        ProjectAction::Update { id, fields } => {
            let id = RecordId::from(id);
            let form = fields.into_form(api.get_project(&id).await?)?;
            output::done(&api.update_project(&id, form).await?, "Project updated");
        }
        ProjectAction::Delete { id } => {
            output::done(&api.delete_project(&RecordId::from(id)).await?, "Project deleted");
        }
    }
    Ok(())
}

async fn blogs(api: &ApiClient, action: BlogAction) -> Result<()> {
    match action {
        BlogAction::List { search } => {
            let items: Vec<_> = api
                .list_blogs()
                .await?
                .into_iter()
                .filter(|b| matches_search(search.as_deref(), &[&b.title, &b.content, &b.tags]))
                .collect();
            output::blogs(&items);
        }
        BlogAction::Show { id } => output::blog_detail(&api.get_blog(&RecordId::from(id)).await?),
        BlogAction::Create(fields) => {
            let form = fields.into_form(Default::default())?;
            output::done(&api.create_blog(form).await?, "Blog post created");
        }
        BlogAction::Update { id, fields } => {
            let id = RecordId::from(id);
            let form = fields.into_form(api.get_blog(&id).await?)?;
            output::done(&api.update_blog(&id, form).await?, "Blog post updated");
        }
        BlogAction::Delete { id } => {
            output::done(&api.delete_blog(&RecordId::from(id)).await?, "Blog post deleted");
        }
    }
    Ok(())
}

async fn skills(api: &ApiClient, action: SkillAction) -> Result<()> {
    match action {
        SkillAction::List => output::skills(&api.list_skills().await?),
        SkillAction::Show { id } => output::record(&api.get_skill(&RecordId::from(id)).await?),
        SkillAction::Create(fields) => {
            let input = fields.into_input(Skill::default());
            output::done(&api.create_skill(&input).await?, "Skill created");
        }
        SkillAction::Update { id, fields } => {
            let id = RecordId::from(id);
            let input = fields.into_input(api.get_skill(&id).await?);
            output::done(&api.update_skill(&id, &input).await?, "Skill updated");
        }
        SkillAction::Delete { id } => {
            output::done(&api.delete_skill(&RecordId::from(id)).await?, "Skill deleted");
        }
    }
    Ok(())
}

async fn services(api: &ApiClient, action: ServiceAction) -> Result<()> {
    match action {
        ServiceAction::List => output::services(&api.list_services().await?),
        ServiceAction::Create(fields) => {
            let input = fields.into_input(Service::default());
            output::done(&api.create_service(&input).await?, "Service created");
        }
        ServiceAction::Update { id, fields } => {
            let id = RecordId::from(id);
            let input = fields.into_input(find_service(api, &id).await?);
            output::done(&api.update_service(&id, &input).await?, "Service updated");
        }
        ServiceAction::Delete { id } => {
            output::done(&api.delete_service(&RecordId::from(id)).await?, "Service deleted");
        }
    }
    Ok(())
}

async fn social_links(api: &ApiClient, action: SocialLinkAction) -> Result<()> {
    match action {
        SocialLinkAction::List => output::social_links(&api.list_social_links().await?),
        SocialLinkAction::Create(fields) => {
            let input = fields.into_input(SocialLink::default());
            output::done(&api.create_social_link(&input).await?, "Social link created");
        }
        SocialLinkAction::Update { id, fields } => {
            let id = RecordId::from(id);
            let input = fields.into_input(find_social_link(api, &id).await?);
            output::done(&api.update_social_link(&id, &input).await?, "Social link updated");
        }
        SocialLinkAction::Delete { id } => {
            output::done(
                &api.delete_social_link(&RecordId::from(id)).await?,
                "Social link deleted",
            );
        }
    }
    Ok(())
}

async fn showcase(api: &ApiClient, action: ShowcaseAction) -> Result<()> {
    match action {
        ShowcaseAction::List => output::showcase(&api.list_showcase().await?),
        ShowcaseAction::Show { id } => {
            output::record(&api.get_showcase_item(&RecordId::from(id)).await?)
        }
        ShowcaseAction::Create(fields) => {
            let form = fields.into_form(ShowcaseItem::default())?;
            output::done(&api.create_showcase_item(form).await?, "Showcase item created");
        }
        ShowcaseAction::Update { id, fields } => {
            let id = RecordId::from(id);
            let form = fields.into_form(api.get_showcase_item(&id).await?)?;
            output::done(&api.update_showcase_item(&id, form).await?, "Showcase item updated");
        }
        ShowcaseAction::Delete { id } => {
            output::done(
                &api.delete_showcase_item(&RecordId::from(id)).await?,
                "Showcase item deleted",
            );
        }
    }
    Ok(())
}

async fn messages(api: &ApiClient, action: MessageAction) -> Result<()> {
    match action {
        MessageAction::List { search } => {
            let items: Vec<_> = api
                .list_messages()
                .await?
                .into_iter()
                .filter(|m| {
                    matches_search(
                        search.as_deref(),
                        &[&m.name, &m.email, &m.subject, &m.message],
                    )
                })
                .collect();
            output::messages(&items);
        }
        MessageAction::Delete { id } => {
            output::done(&api.delete_message(&RecordId::from(id)).await?, "Message deleted");
        }
    }
    Ok(())
}

async fn profile(api: &ApiClient, action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::Show => output::profile(&api.get_profile().await?),
        ProfileAction::Update(fields) => {
            let change_password = fields.change_password;
            let mut update = ProfileUpdate::from_profile(&api.get_profile().await?);
            fields.apply(&mut update)?;
            if change_password {
                update.password = Some(rpassword::prompt_password("New password: ")?);
            }
            output::done(&api.update_profile(update).await?, "Profile updated");
        }
    }
    Ok(())
}

async fn files(api: &ApiClient, action: FileAction) -> Result<()> {
    match action {
        FileAction::List => output::files(&api.list_files().await?),
        FileAction::Upload { path } => {
            let file = FileUpload::from_path(path)?;
            output::done(&api.upload_file(file).await?, "File uploaded");
        }
        FileAction::Delete { id } => {
            output::done(&api.delete_file(&RecordId::from(id)).await?, "File deleted");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_update_keeps_unchanged_fields() {
        let current = Project {
            title: Some("Folio".to_string()),
            description: Some("Portfolio site".to_string()),
            tech_stack: vec!["React".to_string()],
            status: Some("published".to_string()),
            ..Default::default()
        };
        let args = ProjectArgs {
            tech: Some("Rust, Axum".to_string()),
            ..Default::default()
        };

        let form = args.into_form(current).unwrap();
        assert_eq!(form.title, "Folio");
        assert_eq!(form.description.as_deref(), Some("Portfolio site"));
        assert_eq!(form.tech_stack, vec!["Rust", "Axum"]);
        assert_eq!(form.status, Some(ProjectStatus::Published));
        assert!(form.image.is_none());
    }

    #[test]
    fn test_missing_upload_is_request_error() {
        let args = ProjectArgs {
            title: Some("x".to_string()),
            image: Some(PathBuf::from("/definitely/not/here.png")),
            ..Default::default()
        };
        assert!(matches!(
            args.into_form(Project::default()),
            Err(ApiError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_service_defaults_to_active() {
        let input = ServiceArgs {
            title: Some("Consulting".to_string()),
            ..Default::default()
        }
        .into_input(Service::default());
        assert!(input.is_active);
        assert_eq!(input.order_index, 0);

        let hidden = Service {
            is_active: Some(false),
            ..Default::default()
        };
        assert!(!ServiceArgs::default().into_input(hidden).is_active);
    }

    #[test]
    fn test_showcase_update_keeps_media_type() {
        let current = ShowcaseItem {
            title: Some("Reel".to_string()),
            media_type: Some("video".to_string()),
            ..Default::default()
        };
        let form = ShowcaseArgs::default().into_form(current).unwrap();
        assert_eq!(form.media_type, Some(MediaType::Video));
        assert_eq!(form.title, "Reel");
    }

    #[test]
    fn test_profile_args_only_override_given_fields() {
        let mut update = ProfileUpdate {
            name: Some("Sam".to_string()),
            location: Some("Lisbon".to_string()),
            ..Default::default()
        };
        ProfileArgs {
            location: Some("Porto".to_string()),
            ..Default::default()
        }
        .apply(&mut update)
        .unwrap();
        assert_eq!(update.name.as_deref(), Some("Sam"));
        assert_eq!(update.location.as_deref(), Some("Porto"));
    }

    #[test]
    fn test_search_matches_any_field() {
        let title = Some("Rust CLI".to_string());
        let none = None;
        assert!(matches_search(None, &[&title]));
        assert!(matches_search(Some("rust"), &[&none, &title]));
        assert!(!matches_search(Some("python"), &[&title]));
        assert!(matches_search(Some("  "), &[&none]));
    }

    #[test]
    fn test_every_admin_view_has_landing_area() {
        for view in AdminView::ALL {
            assert_eq!(AdminArea::landing(view).view(), view);
        }
    }
}
