//! Client-side gating of admin views.
//!
//! The guard only checks whether a token is stored. It keeps the admin UI
//! out of sight when nobody is logged in; it does not protect any data. The
//! backend validates the bearer token on every admin request regardless.

use std::fmt;
use std::sync::Arc;

use super::TokenStore;

/// Admin panel screens, all behind the guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminView {
    Dashboard,
    Projects,
    Skills,
    Services,
    Messages,
    Blogs,
    Profile,
    SocialLinks,
    Showcase,
}

impl AdminView {
    pub const ALL: [AdminView; 9] = [
        AdminView::Dashboard,
        AdminView::Projects,
        AdminView::Skills,
        AdminView::Services,
        AdminView::Messages,
        AdminView::Blogs,
        AdminView::Profile,
        AdminView::SocialLinks,
        AdminView::Showcase,
    ];

    /// Path segment under `/admin/`
    pub fn slug(&self) -> &'static str {
        match self {
            AdminView::Dashboard => "dashboard",
            AdminView::Projects => "projects",
            AdminView::Skills => "skills",
            AdminView::Services => "services",
            AdminView::Messages => "messages",
            AdminView::Blogs => "blogs",
            AdminView::Profile => "profile",
            AdminView::SocialLinks => "social-links",
            AdminView::Showcase => "showcase",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AdminView::Dashboard => "Dashboard",
            AdminView::Projects => "Projects",
            AdminView::Skills => "Skills",
            AdminView::Services => "Services",
            AdminView::Messages => "Messages",
            AdminView::Blogs => "Blogs",
            AdminView::Profile => "Profile",
            AdminView::SocialLinks => "Social Links",
            AdminView::Showcase => "Showcase",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.slug() == slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    About,
    Services,
    Skills,
    Blogs,
    BlogDetail(String),
    Portfolio,
    Contact,
    Login,
    Admin(AdminView),
}

impl View {
    pub fn path(&self) -> String {
        match self {
            View::Home => "/".to_string(),
            View::About => "/about".to_string(),
            View::Services => "/services".to_string(),
            View::Skills => "/skills".to_string(),
            View::Blogs => "/blogs".to_string(),
            View::BlogDetail(id) => format!("/blogs/{}", id),
            View::Portfolio => "/portfolio".to_string(),
            View::Contact => "/contact".to_string(),
            View::Login => "/login".to_string(),
            View::Admin(admin) => format!("/admin/{}", admin.slug()),
        }
    }

    /// Resolve a route path. Trailing slashes and a query string are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Some(View::Home),
            ["about"] => Some(View::About),
            ["services"] => Some(View::Services),
            ["skills"] => Some(View::Skills),
            ["blogs"] => Some(View::Blogs),
            ["blogs", id] => Some(View::BlogDetail(id.to_string())),
            ["portfolio"] => Some(View::Portfolio),
            ["contact"] => Some(View::Contact),
            ["login"] => Some(View::Login),
            ["admin"] => Some(View::Admin(AdminView::Dashboard)),
            ["admin", slug] => AdminView::from_slug(slug).map(View::Admin),
            _ => None,
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, View::Admin(_))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of one navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render(View),
    /// Send the user to `to`; `from` is the view they asked for, kept so the
    /// caller can return there after logging in
    Redirect { to: View, from: Option<View> },
}

impl GuardDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, GuardDecision::Redirect { .. })
    }
}

/// Decide a navigation from the requested view and whether a token exists
pub fn evaluate(view: View, authenticated: bool) -> GuardDecision {
    if !view.is_protected() || authenticated {
        GuardDecision::Render(view)
    } else {
        GuardDecision::Redirect {
            to: View::Login,
            from: Some(view),
        }
    }
}

pub struct RouteGuard {
    tokens: Arc<dyn TokenStore>,
}

impl RouteGuard {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { tokens }
    }

    /// Evaluate against the store's current state; no server round-trip
    pub fn check(&self, view: View) -> GuardDecision {
        evaluate(view, self.tokens.has_token())
    }

    pub fn check_path(&self, path: &str) -> Option<GuardDecision> {
        View::from_path(path).map(|view| self.check(view))
    }
}
