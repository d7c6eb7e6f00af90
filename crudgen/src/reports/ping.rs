//! Ping command report.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct PingReport {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
}

impl Report for PingReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!(
            "✓ Connected to '{}' at {}:{} as {}",
            self.database, self.host, self.port, self.user
        ));
    }
}
