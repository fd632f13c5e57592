//! Plain-text rendering of records for the terminal.

use folio_core::dashboard::DashboardSummary;
use folio_core::models::{
    Blog, Message, Profile, Project, Service, ShowcaseItem, Skill, SocialLink, StoredFile,
};
use folio_core::utils::{format_date, format_optional, truncate_string};
use folio_core::ApiError;
use serde::Serialize;
use serde_json::Value;

const TITLE_WIDTH: usize = 40;
const DETAIL_WIDTH: usize = 60;

fn date(value: &Option<String>) -> String {
    value.as_deref().map(format_date).unwrap_or_default()
}

fn empty(items: usize, what: &str) -> bool {
    if items == 0 {
        println!("No {} found.", what);
    }
    items == 0
}

pub fn projects(items: &[Project]) {
    if empty(items.len(), "projects") {
        return;
    }
    for p in items {
        println!(
            "{:>6}  {:<40}  {:<9}  {}",
            p.id.as_str(),
            truncate_string(p.title_display(), TITLE_WIDTH),
            p.status().as_str(),
            p.tech_stack.join(", ")
        );
    }
}

pub fn blogs(items: &[Blog]) {
    if empty(items.len(), "blog posts") {
        return;
    }
    for b in items {
        println!(
            "{:>6}  {:<40}  {:<16}  {}",
            b.id.as_str(),
            truncate_string(&format_optional(&b.title, "Untitled"), TITLE_WIDTH),
            truncate_string(&format_optional(&b.author, "-"), 16),
            date(&b.created_at)
        );
    }
}

pub fn blog_detail(blog: &Blog) {
    println!("{}", format_optional(&blog.title, "Untitled"));
    let byline = [format_optional(&blog.author, ""), date(&blog.created_at)]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" - ");
    if !byline.is_empty() {
        println!("{}", byline);
    }
    let tags = blog.tag_list();
    if !tags.is_empty() {
        println!("Tags: {}", tags.join(", "));
    }
    println!();
    println!("{}", format_optional(&blog.content, ""));
}

pub fn skills(items: &[Skill]) {
    if empty(items.len(), "skills") {
        return;
    }
    for s in items {
        println!(
            "{:>6}  {:<30}  {}",
            s.id.as_str(),
            format_optional(&s.name, "Unnamed"),
            format_optional(&s.level, "")
        );
    }
}

pub fn services(items: &[Service]) {
    if empty(items.len(), "services") {
        return;
    }
    for s in items {
        println!(
            "{:>6}  {:<30}  {:<8}  {}",
            s.id.as_str(),
            format_optional(&s.title, "Untitled"),
            if s.is_active() { "active" } else { "hidden" },
            truncate_string(&format_optional(&s.description, ""), DETAIL_WIDTH)
        );
    }
}

pub fn social_links(items: &[SocialLink]) {
    if empty(items.len(), "social links") {
        return;
    }
    for s in items {
        println!(
            "{:>6}  {:<16}  {}",
            s.id.as_str(),
            format_optional(&s.platform, "-"),
            format_optional(&s.url, "")
        );
    }
}

pub fn showcase(items: &[ShowcaseItem]) {
    if empty(items.len(), "showcase items") {
        return;
    }
    for s in items {
        println!(
            "{:>6}  {:<40}  {:<6}  {}",
            s.id.as_str(),
            truncate_string(&format_optional(&s.title, "Untitled"), TITLE_WIDTH),
            s.media_type().as_str(),
            format_optional(&s.category, "")
        );
    }
}

pub fn messages(items: &[Message]) {
    if empty(items.len(), "messages") {
        return;
    }
    for m in items {
        println!(
            "{:>6}  {:<24}  {:<30}  {}",
            m.id.as_str(),
            truncate_string(&format_optional(&m.name, "Anonymous"), 24),
            truncate_string(&format_optional(&m.email, ""), 30),
            date(&m.created_at)
        );
        println!("        {}", truncate_string(m.subject_display(), DETAIL_WIDTH));
        println!("        {}", truncate_string(&format_optional(&m.message, ""), DETAIL_WIDTH));
    }
}

pub fn files(items: &[StoredFile]) {
    if empty(items.len(), "files") {
        return;
    }
    for f in items {
        println!(
            "{:>6}  {:<30}  {:<20}  {}",
            f.id.as_str(),
            truncate_string(&format_optional(&f.name, "-"), 30),
            format_optional(&f.mime_type, ""),
            format_optional(&f.url, "")
        );
    }
}

pub fn profile(profile: &Profile) {
    println!("{}", format_optional(&profile.name, "Unnamed"));
    if let Some(title) = profile.title.as_deref().filter(|t| !t.trim().is_empty()) {
        println!("{}", title);
    }
    let fields = [
        ("Email", format_optional(&profile.email, "")),
        ("Phone", format_optional(&profile.phone, "")),
        ("Location", format_optional(&profile.location, "")),
        ("Education", format_optional(&profile.education, "")),
        ("Resume", format_optional(&profile.resume_link, "")),
        (
            "Experience",
            profile
                .experience_years
                .map(|y| format!("{} years", y))
                .unwrap_or_default(),
        ),
        (
            "Projects",
            profile.total_projects.map(|n| n.to_string()).unwrap_or_default(),
        ),
    ];
    for (label, value) in fields.iter().filter(|(_, v)| !v.is_empty()) {
        println!("{:<11} {}", format!("{}:", label), value);
    }
    if let Some(bio) = profile.bio_display() {
        println!();
        println!("{}", bio);
    }
}

pub fn dashboard(summary: &DashboardSummary) {
    for section in &summary.sections {
        println!("{} ({})  {}", section.title, section.count, section.route);
        for row in &section.recent {
            if row.secondary.is_empty() {
                println!("  - {}", truncate_string(&row.primary, TITLE_WIDTH));
            } else {
                println!(
                    "  - {}  {}",
                    truncate_string(&row.primary, TITLE_WIDTH),
                    truncate_string(&row.secondary, DETAIL_WIDTH)
                );
            }
        }
    }
}

/// Full record as pretty JSON
pub fn record<T: Serialize>(record: &T) {
    match serde_json::to_string_pretty(record) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Failed to render record: {}", e),
    }
}

/// Confirmation for a mutation, preferring the server's own message
pub fn done(response: &Value, fallback: &str) {
    println!(
        "{}",
        ApiError::server_message(response).unwrap_or_else(|| fallback.to_string())
    );
}
