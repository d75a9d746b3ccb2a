//! Task Dispatcher
//!
//! Routes an incoming task to the matching hosted AI capability and reshapes
//! the provider's output into the task's structured response.

mod shape;
mod task;

pub use shape::{
    clean_fences, parse_email, parse_minutes, parse_quiz, parse_slides, parse_suggestions,
};
pub use task::{QuizQuestion, Slide, TaskKind, TaskOutput, TaskParams, TaskRequest};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::Settings;
use crate::llm::{self, prompts, ChatProvider, ChatRequest};
use crate::tts::{self, SpeechProvider};
use crate::{Result, WorkdeskError};

pub struct Dispatcher {
    chat: Box<dyn ChatProvider>,
    speech: Box<dyn SpeechProvider>,
    temperature: f32,
    default_language: String,
}

impl Dispatcher {
    pub fn new(
        chat: Box<dyn ChatProvider>,
        speech: Box<dyn SpeechProvider>,
        temperature: f32,
        default_language: impl Into<String>,
    ) -> Self {
        Self {
            chat,
            speech,
            temperature,
            default_language: default_language.into(),
        }
    }

    /// Build a dispatcher backed by the configured hosted providers.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let chat = llm::build_provider(settings)
            .map_err(|e| WorkdeskError::Config(e.to_string()))?;
        let speech = tts::build_speech_provider(settings)
            .map_err(|e| WorkdeskError::Config(e.to_string()))?;

        Ok(Self::new(
            chat,
            speech,
            settings.llm.temperature,
            settings.tts.language.clone(),
        ))
    }

    /// Dispatch a task to its upstream provider and shape the response.
    pub async fn dispatch(&self, request: &TaskRequest) -> Result<TaskOutput> {
        if request.input.trim().is_empty() {
            return Err(WorkdeskError::InvalidRequest(format!(
                "Task '{}' requires non-empty input",
                request.kind
            )));
        }

        let request_id = Uuid::new_v4();
        debug!(%request_id, kind = %request.kind, "dispatching task");

        let output = match request.kind {
            TaskKind::Speech => self.speech_task(request).await?,
            TaskKind::Minutes => self.minutes_task(request).await?,
            TaskKind::Email => self.email_task(request).await?,
            TaskKind::Presentation => self.presentation_task(request).await?,
            TaskKind::CodeReview => self.code_review_task(request).await?,
            TaskKind::Translate => self.translate_task(request).await?,
            TaskKind::Quiz => self.quiz_task(request).await?,
        };

        debug!(%request_id, kind = %request.kind, "task completed");
        Ok(output)
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let text = self
            .chat
            .complete(ChatRequest {
                system,
                user,
                temperature: self.temperature,
            })
            .await
            .map_err(|e| {
                warn!("chat provider call failed: {e:#}");
                WorkdeskError::Upstream(e.to_string())
            })?;

        Ok(clean_fences(&text))
    }

    async fn speech_task(&self, request: &TaskRequest) -> Result<TaskOutput> {
        let language = request
            .params
            .language
            .as_deref()
            .unwrap_or(&self.default_language)
            .to_string();

        let audio = self
            .speech
            .synthesize(&request.input, &language)
            .await
            .map_err(|e| {
                warn!("speech provider call failed: {e:#}");
                WorkdeskError::Upstream(e.to_string())
            })?;

        Ok(TaskOutput::Speech {
            audio_base64: BASE64.encode(audio),
            format: "mp3".to_string(),
            language,
        })
    }

    async fn minutes_task(&self, request: &TaskRequest) -> Result<TaskOutput> {
        let prompt = prompts::build_minutes_prompt(&request.input);
        let text = self.complete(prompts::MINUTES_SYSTEM, &prompt).await?;

        let sections = parse_minutes(&text);
        Ok(TaskOutput::Minutes {
            agenda: sections.agenda,
            discussion: sections.discussion,
            action_items: sections.action_items,
        })
    }

    async fn email_task(&self, request: &TaskRequest) -> Result<TaskOutput> {
        let prompt = prompts::build_email_prompt(
            &request.input,
            request.params.recipient.as_deref(),
            request.params.tone.as_deref(),
        );
        let text = self.complete(prompts::EMAIL_SYSTEM, &prompt).await?;

        let (subject, body) = parse_email(&text);
        Ok(TaskOutput::Email { subject, body })
    }

    async fn presentation_task(&self, request: &TaskRequest) -> Result<TaskOutput> {
        // Without an explicit topic the first input line stands in for it.
        let topic = match request.params.topic.as_deref() {
            Some(topic) => topic.to_string(),
            None => request
                .input
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string(),
        };

        let prompt = prompts::build_presentation_prompt(&topic, &request.input);
        let text = self.complete(prompts::PRESENTATION_SYSTEM, &prompt).await?;

        let slides = parse_slides(&text);
        if slides.is_empty() {
            return Err(WorkdeskError::Upstream(
                "Presentation provider returned no parseable slides".to_string(),
            ));
        }

        Ok(TaskOutput::Presentation { slides })
    }

    async fn code_review_task(&self, request: &TaskRequest) -> Result<TaskOutput> {
        let prompt = prompts::build_code_review_prompt(&request.input);
        let text = self.complete(prompts::CODE_REVIEW_SYSTEM, &prompt).await?;

        Ok(TaskOutput::CodeReview {
            suggestions: parse_suggestions(&text),
        })
    }

    async fn translate_task(&self, request: &TaskRequest) -> Result<TaskOutput> {
        let target_language = request.params.language.as_deref().ok_or_else(|| {
            WorkdeskError::InvalidRequest(
                "Task 'translate' requires a target language".to_string(),
            )
        })?;

        let system = prompts::build_translate_system(target_language);
        let text = self.complete(&system, &request.input).await?;

        Ok(TaskOutput::Translation {
            translated_text: text,
            target_language: target_language.to_string(),
        })
    }

    async fn quiz_task(&self, request: &TaskRequest) -> Result<TaskOutput> {
        let count = request.params.count.unwrap_or(5);
        let prompt = prompts::build_quiz_prompt(&request.input, count);
        let text = self.complete(prompts::QUIZ_SYSTEM, &prompt).await?;

        let questions = parse_quiz(&text);
        if questions.is_empty() {
            return Err(WorkdeskError::Upstream(
                "Quiz provider returned no parseable questions".to_string(),
            ));
        }

        Ok(TaskOutput::Quiz { questions })
    }
}
