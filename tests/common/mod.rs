use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use mentora::config::Config;
use mentora::error::Result;
use mentora::responder::Responder;

/// Responder that plays back a fixed list of replies in order.
///
/// Keeps integration tests deterministic and instant.
#[allow(dead_code)]
pub struct ScriptedResponder {
    replies: Vec<String>,
    index: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl ScriptedResponder {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|reply| reply.to_string()).collect(),
            index: Arc::new(Mutex::new(0)),
        }
    }
}

#[async_trait]
impl Responder for ScriptedResponder {
    async fn reply(&self, _user_content: &str) -> Result<String> {
        let mut index = self.index.lock().expect("responder index lock poisoned");
        let position = *index % self.replies.len().max(1);
        let reply = self.replies.get(position).cloned().unwrap_or_default();
        *index += 1;
        Ok(reply)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

#[allow(dead_code)]
pub fn fast_config() -> Config {
    let mut config = Config::default();
    config.responder.reply_delay_ms = 0;
    config
}
