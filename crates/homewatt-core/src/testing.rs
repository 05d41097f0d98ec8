//! Fakes shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::http::{RequestDescriptor, Transport, TransportError, TransportResponse};
use crate::notify::Notifier;
use crate::router::{DocumentTitle, Navigator};

type Reply = Result<TransportResponse, TransportError>;

/// Transport that records requests and answers from a script.
///
/// Queued replies are used first; once they run out every call gets the
/// fallback reply.
pub struct FakeTransport {
    queued: Mutex<VecDeque<Reply>>,
    fallback: Reply,
    sent: Mutex<Vec<RequestDescriptor>>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self::with_fallback(Ok(TransportResponse::new(status, body)))
    }

    pub fn failing(error: TransportError) -> Self {
        Self::with_fallback(Err(error))
    }

    fn with_fallback(fallback: Reply) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn then(self, status: u16, body: &str) -> Self {
        self.queued
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse::new(status, body)));
        self
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        let queued = self.queued.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| self.fallback.clone())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingTitle {
    titles: Mutex<Vec<String>>,
}

impl RecordingTitle {
    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }
}

impl DocumentTitle for RecordingTitle {
    fn set_title(&self, title: &str) {
        self.titles.lock().unwrap().push(title.to_string());
    }
}
