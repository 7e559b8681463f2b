use poem::middleware::Cors;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Splits a comma separated origin list, dropping blank entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Origins to allow. An unset or blank setting falls back to the defaults:
/// poem treats an empty list as "any origin", which must never be combined
/// with credentials.
pub fn allowed_origins(configured: Option<String>) -> Vec<String> {
    let origins = configured
        .map(|raw| parse_origins(&raw))
        .unwrap_or_default();

    if origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS unset or blank, using {DEFAULT_ORIGINS}");
        parse_origins(DEFAULT_ORIGINS)
    } else {
        origins
    }
}

/// CORS middleware for storefront clients.
///
/// Origins come from `CORS_ALLOWED_ORIGINS`. The API is read-only, so only
/// `GET` and `OPTIONS` are allowed.
pub fn init_cors(lookup: impl Fn(&str) -> Option<String>) -> Cors {
    Cors::new()
        .allow_origins(allowed_origins(lookup("CORS_ALLOWED_ORIGINS")))
        .allow_methods(vec!["GET", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"])
        .allow_credentials(true)
}
