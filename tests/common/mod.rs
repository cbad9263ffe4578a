#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body, response::Response};
use http_body_util::BodyExt;
use portfolio::{
    AppState,
    config::{
        Config, ContactConfig, EmailConfig, ObservabilityConfig, ServerConfig, SiteConfig,
    },
    email::Inbox,
};
use portfolio_contact::{
    ContactMessage, ContactTransport, StatusCode, SubmissionHandler, TransportError,
};

/// Transport answering every delivery the same way
pub struct FakeTransport {
    status: Option<StatusCode>,
    sent: Mutex<Vec<ContactMessage>>,
}

impl FakeTransport {
    pub fn replying(status: u16) -> Arc<Self> {
        Arc::new(Self {
            status: Some(StatusCode::from_u16(status).unwrap()),
            sent: Mutex::new(vec![]),
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            status: None,
            sent: Mutex::new(vec![]),
        })
    }

    pub fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactTransport for FakeTransport {
    async fn deliver(&self, message: &ContactMessage) -> Result<StatusCode, TransportError> {
        self.sent.lock().unwrap().push(message.clone());

        self.status
            .ok_or_else(|| TransportError::Other("connection refused".to_owned()))
    }
}

#[derive(Default)]
pub struct MemoryInbox {
    failing: bool,
    messages: Mutex<Vec<ContactMessage>>,
}

impl MemoryInbox {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            failing: true,
            ..Default::default()
        })
    }

    pub fn messages(&self) -> Vec<ContactMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Inbox for MemoryInbox {
    async fn receive(&self, message: &ContactMessage) -> anyhow::Result<()> {
        if self.failing {
            anyhow::bail!("smtp unavailable");
        }

        self.messages.lock().unwrap().push(message.clone());

        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig::default(),
        contact: ContactConfig::default(),
        email: EmailConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub transport: Arc<FakeTransport>,
    pub inbox: Arc<MemoryInbox>,
}

pub fn state(transport: Arc<FakeTransport>, inbox: Arc<MemoryInbox>) -> AppState {
    AppState {
        config: test_config(),
        submitter: SubmissionHandler::new(transport as Arc<dyn ContactTransport>),
        inbox,
    }
}

/// Routes without the middleware stack
pub fn create_test_app(transport: Arc<FakeTransport>, inbox: Arc<MemoryInbox>) -> TestApp {
    let router = portfolio::routes::router(state(transport.clone(), inbox.clone()));

    TestApp {
        router,
        transport,
        inbox,
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
