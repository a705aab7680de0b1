//! Route access table for the community board app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page is described by one row: its path template, whether
//! guests may visit, and which layout regions (banner, navigation) it
//! shows. The route guard, the layout, and every link in the app resolve
//! paths through this table so access rules live in exactly one place.
//!
//! DESIGN
//! ======
//! Matching is segment-wise rather than regex-based. A template segment
//! written `[Name]` consumes exactly one non-empty path segment; every
//! other segment must compare equal. `match_path` runs two passes, static
//! templates before dynamic ones, so `/boards/new` can never be captured
//! by `/boards/[BoardId]`.
//!
//! Paths that match no row are treated as unknown, not as errors: access
//! defaults to public and both layout regions stay visible.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Access level required to visit a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    MemberOnly,
}

/// Stable identifier for each routed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKey {
    AuthLogin,
    AuthSignup,
    BoardsList,
    BoardDetail,
    BoardNew,
    BoardEdit,
}

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub key: RouteKey,
    /// Human-readable name for logs.
    pub name: &'static str,
    pub path_template: &'static str,
    pub access: Access,
    pub show_banner: bool,
    pub show_navigation: bool,
}

/// The route table. Rows are ordered by `RouteKey` discriminant.
pub static ROUTES: [RouteEntry; 6] = [
    RouteEntry {
        key: RouteKey::AuthLogin,
        name: "sign in",
        path_template: "/auth/login",
        access: Access::Public,
        show_banner: false,
        show_navigation: false,
    },
    RouteEntry {
        key: RouteKey::AuthSignup,
        name: "sign up",
        path_template: "/auth/signup",
        access: Access::Public,
        show_banner: false,
        show_navigation: false,
    },
    RouteEntry {
        key: RouteKey::BoardsList,
        name: "post list",
        path_template: "/boards",
        access: Access::Public,
        show_banner: true,
        show_navigation: true,
    },
    RouteEntry {
        key: RouteKey::BoardDetail,
        name: "post detail",
        path_template: "/boards/[BoardId]",
        access: Access::MemberOnly,
        show_banner: true,
        show_navigation: true,
    },
    RouteEntry {
        key: RouteKey::BoardNew,
        name: "new post",
        path_template: "/boards/new",
        access: Access::MemberOnly,
        show_banner: false,
        show_navigation: false,
    },
    RouteEntry {
        key: RouteKey::BoardEdit,
        name: "edit post",
        path_template: "/boards/[BoardId]/edit",
        access: Access::MemberOnly,
        show_banner: false,
        show_navigation: false,
    },
];

/// Look up the table row for `key`.
pub fn entry(key: RouteKey) -> &'static RouteEntry {
    &ROUTES[key as usize]
}

fn is_dynamic(template: &str) -> bool {
    template.contains('[')
}

fn is_param_segment(segment: &str) -> bool {
    segment.len() > 2 && segment.starts_with('[') && segment.ends_with(']')
}

fn template_matches(template: &str, path: &str) -> bool {
    let mut template_segments = template.split('/');
    let mut path_segments = path.split('/');
    loop {
        match (template_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(ts), Some(ps)) => {
                if is_param_segment(ts) {
                    if ps.is_empty() {
                        return false;
                    }
                } else if ts != ps {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Resolve an observed pathname to its table row.
///
/// Static templates win over dynamic ones, so `/boards/new` resolves to
/// the dedicated row even though `/boards/[BoardId]` also matches it.
/// Returns `None` for paths outside the table.
pub fn match_path(path: &str) -> Option<&'static RouteEntry> {
    ROUTES
        .iter()
        .find(|e| !is_dynamic(e.path_template) && e.path_template == path)
        .or_else(|| {
            ROUTES
                .iter()
                .find(|e| is_dynamic(e.path_template) && template_matches(e.path_template, path))
        })
}

/// Percent-encode the characters that would terminate or split a URL
/// component. Everything else passes through unchanged.
fn encode_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '/' => out.push_str("%2F"),
            '?' => out.push_str("%3F"),
            '#' => out.push_str("%23"),
            '&' => out.push_str("%26"),
            '+' => out.push_str("%2B"),
            ' ' => out.push_str("%20"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the path for `key`, substituting dynamic segments from `params`.
///
/// Param names are compared case-insensitively, so `[BoardId]` accepts a
/// `boardId` or `BoardId` key alike. Values are percent-encoded. A
/// bracketed segment with no matching param is left verbatim.
pub fn path_for(key: RouteKey, params: &[(&str, &str)]) -> String {
    let template = entry(key).path_template;
    if !is_dynamic(template) || params.is_empty() {
        return template.to_owned();
    }
    let rendered: Vec<String> = template
        .split('/')
        .map(|segment| {
            if is_param_segment(segment) {
                let inner = &segment[1..segment.len() - 1];
                match params.iter().find(|(k, _)| k.eq_ignore_ascii_case(inner)) {
                    Some((_, value)) => encode_segment(value),
                    None => segment.to_owned(),
                }
            } else {
                segment.to_owned()
            }
        })
        .collect();
    rendered.join("/")
}

/// Whether a visitor may enter `entry`'s route.
pub fn is_accessible(entry: &RouteEntry, authenticated: bool) -> bool {
    match entry.access {
        Access::Public => true,
        Access::MemberOnly => authenticated,
    }
}

/// Banner visibility for a raw pathname. Unknown paths show the banner.
pub fn banner_visible(path: &str) -> bool {
    match_path(path).map_or(true, |e| e.show_banner)
}

/// Navigation visibility for a raw pathname. Unknown paths show it.
pub fn navigation_visible(path: &str) -> bool {
    match_path(path).map_or(true, |e| e.show_navigation)
}
