//! Outbound navigation to the system browser

use tracing::{info, warn};

/// Opens URLs outside the dashboard; fire-and-forget
pub trait Navigator {
    fn open(&mut self, url: &str);
}

/// Hands URLs to the platform's default browser
#[derive(Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open(&mut self, url: &str) {
        info!(url = %url, "Opening in browser");
        if let Err(e) = webbrowser::open(url) {
            warn!(url = %url, error = %e, "Failed to open browser");
        }
    }
}
