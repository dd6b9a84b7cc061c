//! Static capture targets and screenshot naming.

use anyhow::Result;
use regex::Regex;

/// A named route to capture. `{ID}` in the route is replaced by the user id.
#[derive(Debug, Clone, Copy)]
pub struct CaptureTarget {
    pub name: &'static str,
    pub route: &'static str,
}

/// Routes captured after login, in order. The login entry is captured
/// separately before authenticating and skipped here.
pub const PAGES_TO_CAPTURE: &[CaptureTarget] = &[
    CaptureTarget { name: "login", route: "/login" },
    CaptureTarget { name: "new", route: "/recipe/new" },
    CaptureTarget { name: "shopping", route: "/user/{ID}/shopping" },
    CaptureTarget { name: "calendar", route: "/user/{ID}/calendar" },
    CaptureTarget { name: "settings", route: "/user/{ID}/options/settings" },
    CaptureTarget { name: "password", route: "/user/{ID}/options/password" },
    CaptureTarget { name: "bookmark", route: "/user/{ID}/options/bookmark" },
    CaptureTarget { name: "import", route: "/user/{ID}/options/import" },
    CaptureTarget { name: "export", route: "/user/{ID}/options/export" },
    CaptureTarget { name: "upload", route: "/user/{ID}/options/upload" },
    CaptureTarget { name: "admin-users", route: "/user/{ID}/options/admin/users" },
    CaptureTarget { name: "admin-site", route: "/user/{ID}/options/admin/site" },
];

/// Expand a route template into a full URL.
pub fn expand_route(origin: &str, route: &str, user_id: &str) -> String {
    format!("{}{}", origin, route.replace("{ID}", user_id))
}

/// Screenshot file name: `<prefix>-<page>-<theme>.png`.
pub fn image_name(prefix: &str, page: &str, theme: &str) -> String {
    format!("{}-{}-{}.png", prefix, page, theme)
}

/// Post-login URL pattern: the recipe list lives at `/user/<id>/recipes`.
pub fn recipe_list_pattern(origin: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(
        r"{}/user/.+/recipes",
        regex::escape(origin)
    ))?)
}
