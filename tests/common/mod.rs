#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use tempfile::TempDir;

use workdesk::llm::{ChatProvider, ChatRequest};
use workdesk::tts::SpeechProvider;

/// Chat provider that returns a canned response and records every call.
pub struct MockChat {
    pub response: String,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
}

impl MockChat {
    pub fn replying(response: &str) -> (Box<Self>, Arc<Mutex<Vec<RecordedCall>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mock = Box::new(Self {
            response: response.to_string(),
            calls: calls.clone(),
        });
        (mock, calls)
    }
}

#[async_trait]
impl ChatProvider for MockChat {
    async fn complete(&self, request: ChatRequest<'_>) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: request.system.to_string(),
            user: request.user.to_string(),
        });
        Ok(self.response.clone())
    }
}

/// Chat provider that always fails, simulating an unreachable upstream.
pub struct FailingChat;

#[async_trait]
impl ChatProvider for FailingChat {
    async fn complete(&self, _request: ChatRequest<'_>) -> Result<String> {
        anyhow::bail!("connection refused")
    }
}

/// Speech provider returning fixed bytes and recording requested languages.
pub struct MockSpeech {
    pub audio: Vec<u8>,
    pub languages: Arc<Mutex<Vec<String>>>,
}

impl MockSpeech {
    pub fn replying(audio: &[u8]) -> (Box<Self>, Arc<Mutex<Vec<String>>>) {
        let languages = Arc::new(Mutex::new(Vec::new()));
        let mock = Box::new(Self {
            audio: audio.to_vec(),
            languages: languages.clone(),
        });
        (mock, languages)
    }
}

#[async_trait]
impl SpeechProvider for MockSpeech {
    async fn synthesize(&self, _text: &str, language: &str) -> Result<Vec<u8>> {
        self.languages.lock().unwrap().push(language.to_string());
        Ok(self.audio.clone())
    }
}

/// Speech provider that always fails.
pub struct FailingSpeech;

#[async_trait]
impl SpeechProvider for FailingSpeech {
    async fn synthesize(&self, _text: &str, _language: &str) -> Result<Vec<u8>> {
        anyhow::bail!("synthesis endpoint unavailable")
    }
}

pub fn run_workdesk(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary XDG data dir"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_workdesk"))
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("XDG_DATA_HOME", self.data.path())
            .env_remove("WORKDESK_GROQ_API_KEY")
            .output()
            .expect("failed to execute workdesk binary")
    }

    pub fn config_path(&self) -> PathBuf {
        let output = self.run(&["config", "path"]);
        assert!(
            output.status.success(),
            "config path should succeed\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        let path = String::from_utf8_lossy(&output.stdout);
        PathBuf::from(path.trim())
    }
}
