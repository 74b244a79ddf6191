//! Minimal Ollama HTTP client for the benchmark command.
//!
//! Failures are printed to stderr and surface as `None` or `false`, so a
//! missing or broken server degrades the benchmark instead of aborting it.

use std::time::{Duration, Instant};

use serde::Deserialize;

/// Models tried in order when none is named on the command line.
pub const PREFERRED_MODELS: [&str; 5] = [
    "llama3.1",
    "llama3.1:8b",
    "llama3",
    "mistral",
    "codellama",
];

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatMessage,
    eval_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// One completed chat exchange.
#[derive(Debug)]
pub struct ChatReply {
    pub text: String,
    pub elapsed: Duration,
    pub eval_tokens: Option<u64>,
}

pub struct OllamaClient {
    agent: ureq::Agent,
    base_url: String,
}

impl OllamaClient {
    /// Local models can take minutes on a cold first generation, hence the
    /// generous request timeout.
    pub fn new(base_url: &str) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(300))
                .build(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Names of the models the server has installed, or `None` when the
    /// server cannot be reached or answers with something unexpected.
    pub fn list_models(&self) -> Option<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self
            .agent
            .request("GET", &url)
            .set("Accept", "application/json")
            .call();
        let body = match response {
            Ok(resp) => match resp.into_string() {
                Ok(body) => body,
                Err(err) => {
                    eprintln!("error: failed to read model list: {err}");
                    return None;
                }
            },
            Err(ureq::Error::Status(code, _)) => {
                eprintln!("error: model list request failed with HTTP {code}");
                return None;
            }
            Err(ureq::Error::Transport(err)) => {
                eprintln!("error: could not reach Ollama: {err}");
                return None;
            }
        };
        match serde_json::from_str::<TagsResponse>(&body) {
            Ok(tags) => Some(tags.models.into_iter().map(|m| m.name).collect()),
            Err(err) => {
                eprintln!("error: unexpected model list payload: {err}");
                None
            }
        }
    }

    /// Sends one chat request and waits for the complete answer.
    pub fn chat(&self, model: &str, system: Option<&str>, prompt: &str) -> Option<ChatReply> {
        let url = format!("{}/api/chat", self.base_url);
        let mut messages = Vec::new();
        if let Some(system) = system {
            messages.push(serde_json::json!({ "role": "system", "content": system }));
        }
        messages.push(serde_json::json!({ "role": "user", "content": prompt }));
        let payload = serde_json::json!({
            "model": model,
            "messages": messages,
            "stream": false,
        });

        let started = Instant::now();
        let response = self
            .agent
            .request("POST", &url)
            .set("Content-Type", "application/json")
            .send_string(&payload.to_string());
        let elapsed = started.elapsed();

        let body = match response {
            Ok(resp) => match resp.into_string() {
                Ok(body) => body,
                Err(err) => {
                    eprintln!("error: failed to read chat response: {err}");
                    return None;
                }
            },
            Err(ureq::Error::Status(code, _)) => {
                eprintln!("error: chat request failed with HTTP {code}");
                return None;
            }
            Err(ureq::Error::Transport(err)) => {
                eprintln!("error: chat request failed: {err}");
                return None;
            }
        };
        match serde_json::from_str::<ChatResponse>(&body) {
            Ok(chat) => Some(ChatReply {
                text: chat.message.content,
                elapsed,
                eval_tokens: chat.eval_count,
            }),
            Err(err) => {
                eprintln!("error: unexpected chat payload: {err}");
                None
            }
        }
    }

    /// One throwaway prompt so later timings exclude model load time.
    pub fn warmup(&self, model: &str) -> bool {
        println!("Warming up {model} (the first load can take a while)...");
        match self.chat(model, None, "Hi, are you ready?") {
            Some(reply) => {
                println!("Model ready after {} ms", reply.elapsed.as_millis());
                true
            }
            None => false,
        }
    }
}

/// First preferred model present in `available`. A name matches either
/// exactly or by containing the part before any `:tag` suffix.
pub fn find_preferred_model(available: &[String]) -> Option<&str> {
    for preferred in PREFERRED_MODELS {
        let base = preferred.split(':').next().unwrap_or(preferred);
        if let Some(found) = available
            .iter()
            .find(|name| name.as_str() == preferred || name.contains(base))
        {
            return Some(found.as_str());
        }
    }
    None
}
