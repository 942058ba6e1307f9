pub const GREETING: &str = "Supply Chain Security Demo App\n";

/// Serves `/` and every path without its own route
pub async fn index() -> &'static str {
    GREETING
}
