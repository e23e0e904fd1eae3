//! Serve command - start the game server

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use hexisle_server::{run_server, ServerConfig};

/// Valid range for initial map dimensions
pub(crate) const MIN_DIM: usize = 30;
pub(crate) const MAX_DIM: usize = 50000;

#[derive(Args)]
pub struct ServeArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// Initial map columns (30-50000)
    #[arg(long, default_value = "50")]
    pub cols: usize,

    /// Initial map rows (30-50000)
    #[arg(long, default_value = "50")]
    pub rows: usize,

    /// Directory containing static files for the client
    #[arg(long, default_value = "web/static")]
    pub static_dir: PathBuf,
}

/// Run serve command
pub fn run(args: ServeArgs) -> Result<()> {
    let config = configure_server(&args)?;

    tracing::info!(
        "Starting HEXISLE server on port {} with a {}x{} map",
        config.port,
        config.map_cols,
        config.map_rows
    );

    start_server(config)
}

/// Configure server from command arguments
fn configure_server(args: &ServeArgs) -> Result<ServerConfig> {
    validate_static_dir(&args.static_dir)?;
    let defaults = ServerConfig::default();

    Ok(ServerConfig {
        port: args.port,
        static_dir: args.static_dir.to_string_lossy().to_string(),
        map_cols: validate_dimension("cols", args.cols, defaults.map_cols),
        map_rows: validate_dimension("rows", args.rows, defaults.map_rows),
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async { run_server(config).await })
}

/// Out-of-range dimensions fall back to the default with a warning
pub(crate) fn validate_dimension(name: &str, value: usize, default: usize) -> usize {
    if (MIN_DIM..=MAX_DIM).contains(&value) {
        value
    } else {
        tracing::warn!("Invalid {} value {}, using default {}", name, value, default);
        default
    }
}

/// Validate that static directory exists
fn validate_static_dir(path: &PathBuf) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "Static directory does not exist: {}. Server will start but may not serve files.",
            path.display()
        );
    } else if !path.is_dir() {
        anyhow::bail!(
            "Static path exists but is not a directory: {}",
            path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_server_defaults() {
        let args = ServeArgs {
            port: 8080,
            cols: 50,
            rows: 50,
            static_dir: PathBuf::from("test_static"),
        };

        let config = configure_server(&args).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, "test_static");
        assert_eq!(config.map_cols, 50);
    }

    #[test]
    fn test_out_of_range_dimensions_use_default() {
        assert_eq!(validate_dimension("cols", 10, 50), 50);
        assert_eq!(validate_dimension("rows", 60000, 50), 50);
        assert_eq!(validate_dimension("cols", 30, 50), 30);
    }

    #[test]
    fn test_validate_static_dir_nonexistent() {
        // Should not error, just warn
        let result = validate_static_dir(&PathBuf::from("/nonexistent/path"));
        assert!(result.is_ok());
    }
}
