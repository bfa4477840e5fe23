use std::path::Path;
use std::time::Duration;

use anyhow::{Result, anyhow};
use gamedex_server::config::{Parser, ServerConfig};
use rand::Rng as _;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use url::Url;

fn random_port() -> Result<u16> {
    let mut rng = rand::rng();

    let mut retries = 3;
    while retries > 0 {
        let port: u16 = rng.random_range(3030..4030);
        let addr: std::net::SocketAddr = format!("127.0.0.1:{}", port).parse()?;
        match std::net::TcpStream::connect_timeout(&addr, std::time::Duration::from_millis(100)) {
            Err(e) if e.kind() == std::io::ErrorKind::ConnectionRefused => return Ok(port),
            Err(_) => retries -= 1,
            Ok(_) => retries -= 1,
        }
    }

    Err(anyhow!("Could not find a free port"))
}

pub struct ConfigGuard {
    #[allow(dead_code)]
    data_dir: TempDir,
}

pub fn test_config(test_name: &str, base_dir: &Path) -> Result<(ServerConfig, ConfigGuard)> {
    let tmp_data_dir = TempDir::with_prefix_in(format!("{}_", test_name), base_dir)?;
    let data_dir = tmp_data_dir.path().to_string_lossy().to_string();
    let port = random_port()?;
    let port = port.to_string();
    let args = &["gamedex-e2e-tests", "--data-dir", &data_dir, "--port", &port];
    let config = ServerConfig::try_parse_from(args)?;
    Ok((
        config,
        ConfigGuard {
            data_dir: tmp_data_dir,
        },
    ))
}

/// Creates a test config and initializes the database so tests can pre-seed
/// records through the dal before the server is launched.
pub async fn prepare_env(test_name: &str) -> Result<(ServerConfig, ConfigGuard)> {
    let base_dir = std::env::temp_dir();
    let (config, guard) = test_config(test_name, &base_dir)?;

    let pool = gamedex_dal::new_pool(&config.database_url()).await?;
    gamedex_dal::migrate(&pool).await?;
    pool.close().await;

    Ok((config, guard))
}

pub struct ServerGuard {
    handle: JoinHandle<()>,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn server_url(config: &ServerConfig) -> Url {
    Url::parse(&format!(
        "http://{}:{}/",
        config.listen_address, config.port
    ))
    .expect("valid server url")
}

pub async fn launch_env(args: ServerConfig) -> Result<(reqwest::Client, ServerGuard)> {
    let base_url = server_url(&args);
    let state = gamedex_server::build_state(&args).await?;

    let handle = tokio::spawn(async move {
        if let Err(e) =
            gamedex_server::run_graceful_with_state(args, state, std::future::pending::<()>()).await
        {
            tracing::error!("Server failed: {e}");
        }
    });

    let client = reqwest::Client::new();
    wait_healthy(&client, &base_url).await?;
    Ok((client, ServerGuard { handle }))
}

async fn wait_healthy(client: &reqwest::Client, base_url: &Url) -> Result<()> {
    let health_url = base_url.join("health")?;
    for _ in 0..50 {
        match client.get(health_url.clone()).send().await {
            Ok(response) if response.status().is_success() => return Ok(()),
            _ => tokio::time::sleep(Duration::from_millis(100)).await,
        }
    }
    Err(anyhow!("Server did not become healthy"))
}

pub fn extend_url(url: &Url, segment: impl std::fmt::Display) -> Url {
    Url::parse(&format!(
        "{}/{}",
        url.as_str().trim_end_matches('/'),
        segment
    ))
    .expect("valid url")
}
