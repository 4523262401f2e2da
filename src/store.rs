//! 远程数据存储客户端 (Supabase 风格的 REST 接口)
//!
//! 只做一次有上限的读取：获取最多 N 条个人资料

use log::{debug, warn};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::config::StoreConfig;
use crate::error::StoreError;

/// 远程个人资料记录
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileRecord {
    pub id: Value,
    #[serde(default)]
    pub name: Option<String>,
}

impl ProfileRecord {
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => match &self.id {
                Value::String(id) => format!("Profile ID: {id}"),
                other => format!("Profile ID: {other}"),
            },
        }
    }
}

pub struct StoreClient {
    http: HttpClient,
    endpoint: Url,
    anon_key: String,
}

impl StoreClient {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        Ok(Self {
            http: HttpClient::new(),
            endpoint: profiles_endpoint(&config.url, &config.table, config.limit)?,
            anon_key: config.anon_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// 读取个人资料列表
    pub async fn fetch_profiles(&self) -> Result<Vec<ProfileRecord>, StoreError> {
        debug!("GET {}", self.endpoint);
        let resp = self
            .http
            .get(self.endpoint.clone())
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            warn!("profile fetch failed with HTTP {status}");
            return Err(StoreError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        parse_profiles(&body)
    }
}

/// `{base}/rest/v1/{table}?select=*&limit={n}`
pub fn profiles_endpoint(base: &str, table: &str, limit: usize) -> Result<Url, StoreError> {
    let trimmed = base.trim().trim_end_matches('/');
    let mut url = Url::parse(&format!("{trimmed}/rest/v1/{table}"))?;
    url.query_pairs_mut()
        .append_pair("select", "*")
        .append_pair("limit", &limit.to_string());
    Ok(url)
}

pub fn parse_profiles(body: &str) -> Result<Vec<ProfileRecord>, StoreError> {
    Ok(serde_json::from_str(body)?)
}

/// 从错误响应体中提取可读信息
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .or_else(|| json.get("error"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "no response body".to_string()
            } else {
                trimmed.to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// 本地 HTTP 服务：应答一次固定响应，返回收到的请求文本
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).to_lowercase()
        });
        (base, handle)
    }

    fn client_for(base: String) -> StoreClient {
        let mut client = StoreClient::new(&StoreConfig {
            url: base,
            anon_key: "anon-key".to_string(),
            ..StoreConfig::default()
        })
        .unwrap();
        // 本地服务不走系统代理
        client.http = HttpClient::builder().no_proxy().build().unwrap();
        client
    }

    #[tokio::test]
    async fn test_fetch_profiles_maps_error_status() {
        let (base, server) =
            serve_once("HTTP/1.1 401 Unauthorized", r#"{"message": "Invalid API key"}"#).await;
        let err = client_for(base).fetch_profiles().await.unwrap_err();
        assert!(matches!(err, StoreError::Status { status: 401, .. }));
        assert_eq!(err.to_string(), "HTTP 401: Invalid API key");

        let request = server.await.unwrap();
        assert!(request.starts_with("get /rest/v1/profile?select=*&limit=5 "));
        assert!(request.contains("apikey: anon-key"));
        assert!(request.contains("authorization: bearer anon-key"));
    }

    #[tokio::test]
    async fn test_fetch_profiles_decodes_success() {
        let (base, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"id": 1, "name": "Jane"}, {"id": 2}]"#,
        )
        .await;
        let profiles = client_for(base).fetch_profiles().await.unwrap();
        let names: Vec<String> = profiles.iter().map(ProfileRecord::display_name).collect();
        assert_eq!(names, vec!["Jane", "Profile ID: 2"]);
        server.await.unwrap();
    }

    #[test]
    fn test_endpoint() {
        let url = profiles_endpoint("https://abc.supabase.co/", "profile", 5).unwrap();
        assert_eq!(
            url.as_str(),
            "https://abc.supabase.co/rest/v1/profile?select=*&limit=5"
        );
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        assert!(matches!(
            profiles_endpoint("not a url", "profile", 5),
            Err(StoreError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_parse_profiles() {
        let profiles =
            parse_profiles(r#"[{"id": 1, "name": "Jane"}, {"id": "b7", "bio": "hi"}]"#).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].display_name(), "Jane");
        assert_eq!(profiles[1].display_name(), "Profile ID: b7");
    }

    #[test]
    fn test_numeric_id_without_name() {
        let profiles = parse_profiles(r#"[{"id": 42, "name": "  "}]"#).unwrap();
        assert_eq!(profiles[0].display_name(), "Profile ID: 42");
    }

    #[test]
    fn test_parse_rejects_non_list() {
        assert!(matches!(
            parse_profiles(r#"{"id": 1}"#),
            Err(StoreError::Decode(_))
        ));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"message": "relation \"profile\" does not exist"}"#),
            "relation \"profile\" does not exist"
        );
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(""), "no response body");
    }
}
