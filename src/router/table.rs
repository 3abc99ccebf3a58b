//! Static route table and path resolution.
//!
//! Descriptors are ordered most specific first; resolution is
//! first-match-wins, so the `/*` catch-all must stay last.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Access requirement attached to a route.
///
/// Exactly one requirement applies per route, so the metadata is an enum
/// rather than a pair of independent flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Access {
    /// No auth-related restriction.
    #[default]
    Public,
    /// Only reachable with the auth flag set.
    RequiresAuth,
    /// Only shown to unauthenticated visitors (login, register).
    GuestOnly,
}

/// Stable route identifiers, one per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Landing,
    Login,
    Register,
    Homepage,
    AdminPage,
    ChangePasswordForm,
    DisplayRecoveryKey,
    FullPostPage,
    SearchPage,
    ChatDialogue,
    ProfilePage,
    CommunityPage,
    Page404,
}

/// Static mapping from a path pattern to a named page and its access rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: RouteName,
    pub access: Access,
}

/// The application route table. Order matters: first match wins and the
/// wildcard 404 entry must remain at the bottom.
pub const ROUTES: &[RouteDef] = &[
    RouteDef { path: "/", name: RouteName::Landing, access: Access::Public },
    RouteDef { path: "/login", name: RouteName::Login, access: Access::GuestOnly },
    RouteDef { path: "/register", name: RouteName::Register, access: Access::GuestOnly },
    RouteDef { path: "/homepage", name: RouteName::Homepage, access: Access::RequiresAuth },
    RouteDef { path: "/adminPage", name: RouteName::AdminPage, access: Access::RequiresAuth },
    RouteDef { path: "/changePasswordForm", name: RouteName::ChangePasswordForm, access: Access::Public },
    RouteDef { path: "/displayRecoveryKey", name: RouteName::DisplayRecoveryKey, access: Access::Public },
    RouteDef { path: "/post/:postid", name: RouteName::FullPostPage, access: Access::RequiresAuth },
    RouteDef { path: "/search/:searchTerm", name: RouteName::SearchPage, access: Access::RequiresAuth },
    RouteDef { path: "/chatDialogue", name: RouteName::ChatDialogue, access: Access::RequiresAuth },
    RouteDef { path: "/user/:userID", name: RouteName::ProfilePage, access: Access::RequiresAuth },
    RouteDef { path: "/community/:communityID", name: RouteName::CommunityPage, access: Access::RequiresAuth },
    RouteDef { path: "/*", name: RouteName::Page404, access: Access::Public },
];

/// A resolved route: the matched descriptor plus any captured `:param`
/// segment values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matched {
    pub route: &'static RouteDef,
    pub params: Vec<(&'static str, String)>,
}

impl Matched {
    /// Look up a captured path parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Resolve `path` against the route table.
///
/// Always succeeds: unmatched paths fall through to the `/*` descriptor.
pub fn resolve(path: &str) -> Matched {
    for route in ROUTES {
        if let Some(params) = match_pattern(route.path, path) {
            return Matched { route, params };
        }
    }
    // Unreachable while the wildcard entry is present, but keep a sane
    // fallback rather than panicking in the navigation path.
    Matched { route: &ROUTES[ROUTES.len() - 1], params: Vec::new() }
}

/// Match one pattern against a concrete path.
///
/// `:name` segments capture a single non-empty segment; a trailing `*`
/// segment matches any remainder (including none).
fn match_pattern(pattern: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let mut params = Vec::new();

    let mut pattern_segs = pattern.trim_matches('/').split('/');
    let mut path_segs = path.trim_matches('/').split('/').peekable();

    loop {
        match pattern_segs.next() {
            None => {
                return path_segs.peek().is_none().then_some(params);
            }
            Some("*") => return Some(params),
            Some(expected) => {
                let Some(actual) = path_segs.next() else {
                    return None;
                };
                if let Some(name) = expected.strip_prefix(':') {
                    if actual.is_empty() {
                        return None;
                    }
                    params.push((name, actual.to_owned()));
                } else if expected != actual {
                    return None;
                }
            }
        }
    }
}
