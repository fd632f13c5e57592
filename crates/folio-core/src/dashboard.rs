//! Admin dashboard summary.
//!
//! Fetches every managed collection at once and reduces each to a count and
//! a handful of display rows.

use tracing::debug;

use crate::api::{ApiClient, ApiError};
use crate::models::{Blog, Message, Project, Service, ShowcaseItem, Skill};
use crate::utils::format_optional;

/// Rows shown per section
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSection {
    pub title: &'static str,
    pub route: &'static str,
    pub count: usize,
    pub recent: Vec<SummaryRow>,
}

impl DashboardSection {
    fn new<T>(
        title: &'static str,
        route: &'static str,
        items: &[T],
        row: impl Fn(&T) -> SummaryRow,
    ) -> Self {
        Self {
            title,
            route,
            count: items.len(),
            recent: items.iter().take(RECENT_LIMIT).map(row).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub sections: Vec<DashboardSection>,
}

impl DashboardSummary {
    pub fn section(&self, title: &str) -> Option<&DashboardSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn from_parts(
        projects: &[Project],
        showcase: &[ShowcaseItem],
        services: &[Service],
        skills: &[Skill],
        blogs: &[Blog],
        messages: &[Message],
    ) -> Self {
        let row = |primary: &Option<String>, secondary: &Option<String>| SummaryRow {
            primary: format_optional(primary, "Untitled"),
            secondary: format_optional(secondary, ""),
        };
        Self {
            sections: vec![
                DashboardSection::new("Projects", "/admin/projects", projects, |p| {
                    row(&p.title, &p.description)
                }),
                DashboardSection::new("Showcases", "/admin/showcase", showcase, |s| {
                    row(&s.title, &s.category)
                }),
                DashboardSection::new("Services", "/admin/services", services, |s| {
                    row(&s.title, &s.description)
                }),
                DashboardSection::new("Skills", "/admin/skills", skills, |s| row(&s.name, &s.level)),
                DashboardSection::new("Blogs", "/admin/blogs", blogs, |b| row(&b.title, &b.author)),
                DashboardSection::new("Messages", "/admin/messages", messages, |m| {
                    row(&m.name, &m.subject)
                }),
            ],
        }
    }
}

impl ApiClient {
    /// Load all dashboard collections concurrently. Any failure fails the
    /// whole summary so an expired token is reported once.
    pub async fn dashboard(&self) -> Result<DashboardSummary, ApiError> {
        let (projects, showcase, services, skills, blogs, messages) = futures::try_join!(
            self.list_projects(),
            self.list_showcase(),
            self.list_public_services(),
            self.list_skills(),
            self.list_blogs(),
            self.list_messages(),
        )?;
        debug!(
            projects = projects.len(),
            showcase = showcase.len(),
            services = services.len(),
            skills = skills.len(),
            blogs = blogs.len(),
            messages = messages.len(),
            "Dashboard loaded"
        );
        Ok(DashboardSummary::from_parts(
            &projects, &showcase, &services, &skills, &blogs, &messages,
        ))
    }
}
