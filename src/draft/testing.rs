//! In-memory stand-ins for the external services, for pipeline tests.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::language::{DetectError, Language, LanguageDetector, find_language};
use crate::provider::{CompletionProvider, ProviderError};
use crate::translate::{TranslateError, Translator};

pub struct FakeDetector {
    code: Option<&'static str>,
    calls: AtomicUsize,
}

impl FakeDetector {
    pub const fn returning(code: &'static str) -> Self {
        Self {
            code: Some(code),
            calls: AtomicUsize::new(0),
        }
    }

    pub const fn failing() -> Self {
        Self {
            code: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LanguageDetector for FakeDetector {
    fn detect(&self, _text: &str) -> Result<&'static Language, DetectError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.code
            .and_then(find_language)
            .ok_or(DetectError::NoSignal)
    }
}

/// Records every request; answers with a fixed text, or a per-target text
/// when one was registered with [`FakeTranslator::with`].
pub struct FakeTranslator {
    default: Option<String>,
    by_target: Vec<(&'static str, String)>,
    requests: Mutex<Vec<(String, String)>>,
}

impl FakeTranslator {
    pub fn ok(output: &str) -> Self {
        Self {
            default: Some(output.to_string()),
            by_target: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            default: None,
            by_target: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, target: &'static str, output: &str) -> Self {
        self.by_target.push((target, output.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn calls(&self) -> usize {
        self.requests().len()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str, target: &Language) -> Result<String, TranslateError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((text.to_string(), target.code.to_string()));
        }

        self.by_target
            .iter()
            .find(|(code, _)| *code == target.code)
            .map(|(_, output)| output.clone())
            .or_else(|| self.default.clone())
            .ok_or_else(|| TranslateError::InvalidResponse("service unavailable".to_string()))
    }
}

pub struct FakeProvider {
    response: Result<String, String>,
    has_credential: bool,
    prompts: Mutex<Vec<(String, String)>>,
}

impl FakeProvider {
    pub fn ok(email: &str) -> Self {
        Self {
            response: Ok(email.to_string()),
            has_credential: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            has_credential: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn without_credential() -> Self {
        Self {
            has_credential: false,
            ..Self::ok("unused")
        }
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CompletionProvider for FakeProvider {
    fn check_credential(&self) -> Result<(), ProviderError> {
        if self.has_credential {
            Ok(())
        } else {
            Err(ProviderError::MissingCredential {
                provider: "fake".to_string(),
                api_key_env: Some("FAKE_API_KEY".to_string()),
            })
        }
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push((system.to_string(), user.to_string()));
        }
        self.response
            .clone()
            .map_err(ProviderError::InvalidResponse)
    }
}
