use std::env;
use std::path::PathBuf;

/// Port the Vite dev server listens on.
pub const SERVICE_PORT: u16 = 5173;

/// Public address used to make the OS pick the outbound interface. Nothing is
/// ever sent to it.
pub const PROBE_TARGET: &str = "8.8.8.8:80";

/// Everything the launch needs, passed explicitly instead of read from
/// ambient process state.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Port the URL is composed with.
    pub port: u16,
    /// Target for the outbound-route probe.
    pub probe_target: String,
    /// Directory the dev server runs in.
    pub workdir: PathBuf,
    /// Best-effort dependency install, program followed by its arguments.
    /// Empty means skip. Its outcome never gates the launch.
    pub setup_command: Vec<String>,
    /// Command line handed to the platform shell to start the dev server.
    pub server_command: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        LaunchConfig {
            port: SERVICE_PORT,
            probe_target: PROBE_TARGET.to_string(),
            workdir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            setup_command: ["python3", "-m", "pip", "install", "-q", "requests"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            server_command: "npm run dev".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_is_vite() {
        assert_eq!(LaunchConfig::default().port, 5173);
    }

    #[test]
    fn default_delegates_to_npm() {
        assert_eq!(LaunchConfig::default().server_command, "npm run dev");
    }
}
