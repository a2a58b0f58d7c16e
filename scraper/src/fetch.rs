use crate::error::*;
use crate::imports::*;

#[derive(Debug)]
pub struct Fetcher {
    reqwest_client: reqwest::Client,
}

impl Fetcher {
    pub fn new(user_agent: &str) -> Result<Fetcher, ScrapeError> {
        let reqwest_client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Fetcher { reqwest_client })
    }

    /// Single attempt; any transport failure or non-success status is an error.
    pub async fn fetch_text(&self, url: &str) -> Result<String, ScrapeError> {
        info!("Fetching: {:?}", url);
        let response = self.reqwest_client.get(url).send().await?.error_for_status()?;
        debug!("Received {} response from: {:?}", response.status(), url);
        Ok(response.text().await?)
    }
}

pub fn read_html_file(path: &Path) -> Result<String, ScrapeError> {
    info!("Reading: {:?}", path);
    fs::read_to_string(path).map_err(|source| ScrapeError::Input { path: path.to_path_buf(), source })
}

/// Serves a single HTTP response on a local port and hands back the raw request that was received.
#[cfg(test)]
pub(crate) async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> std::io::Result<(String, tokio::task::JoinHandle<std::io::Result<String>>)> {
    use ::tokio::io::{AsyncReadExt, AsyncWriteExt};
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let url = format!("http://{}/services/traffic-conditions", listener.local_addr()?);
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await?;
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.ends_with(b"\r\n\r\n") {
            let len = stream.read(&mut buf).await?;
            if len == 0 {
                break;
            }
            request.extend_from_slice(&buf[..len]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await?;
        stream.shutdown().await?;
        Ok(String::from_utf8_lossy(&request).into_owned())
    });
    Ok((url, handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_text_sends_user_agent() -> Result<()> {
        let (url, server) = serve_once("200 OK", "<p>hi</p>").await?;
        let fetcher = Fetcher::new(BROWSER_USER_AGENT)?;
        assert_eq!(fetcher.fetch_text(&url).await?, "<p>hi</p>");
        let request = server.await??.to_lowercase();
        assert!(request.starts_with("get /services/traffic-conditions "));
        assert!(request.contains(&format!("user-agent: {}\r\n", BROWSER_USER_AGENT.to_lowercase())));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_text_error_status() -> Result<()> {
        let (url, server) = serve_once("503 Service Unavailable", "<p>down</p>").await?;
        let fetcher = Fetcher::new(BROWSER_USER_AGENT)?;
        match fetcher.fetch_text(&url).await {
            Err(ScrapeError::Fetch(err)) => assert_eq!(err.status(), Some(reqwest::StatusCode::SERVICE_UNAVAILABLE)),
            other => panic!("Expect fetch error, got: {:?}", other),
        }
        server.await??;
        Ok(())
    }

    #[test]
    fn test_read_html_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("traffic-conditions.html");
        fs::write(&path, "<table></table>")?;
        assert_eq!(read_html_file(&path)?, "<table></table>");
        Ok(())
    }

    #[test]
    fn test_read_missing_html_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("missing.html");
        match read_html_file(&path) {
            Err(ScrapeError::Input { path: error_path, .. }) => assert_eq!(error_path, path),
            other => panic!("Expect input error, got: {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host() -> Result<()> {
        let fetcher = Fetcher::new(BROWSER_USER_AGENT)?;
        let result = fetcher.fetch_text("http://127.0.0.1:9/services/traffic-conditions").await;
        assert!(matches!(result, Err(ScrapeError::Fetch(_))));
        Ok(())
    }
}
