use std::env;

/// Origins allowed by default: the local dev frontend and the deployed ones
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "https://assignment-frontend-virid.vercel.app",
    "https://*.vercel.app",
];

/// Read an environment variable, treating blank values as unset
pub fn env_non_empty(name: &str) -> Option<String> {
    non_empty(env::var(name).ok())
}

/// Drop empty or whitespace-only values
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn default_cors_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
}

/// Match an Origin header against a configured pattern.
/// `scheme://*.domain` matches any subdomain of `domain` on that scheme.
pub fn origin_matches(pattern: &str, origin: &str) -> bool {
    if pattern == "*" {
        return true;
    }

    match pattern.split_once("://*.") {
        Some((scheme, domain)) => origin
            .strip_prefix(scheme)
            .and_then(|rest| rest.strip_prefix("://"))
            .map(|host| host.ends_with(&format!(".{}", domain)))
            .unwrap_or(false),
        None => pattern.eq_ignore_ascii_case(origin),
    }
}
