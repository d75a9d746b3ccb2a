//! Task request and response shapes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier selecting which productivity feature to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    Speech,
    Minutes,
    Email,
    Presentation,
    CodeReview,
    Translate,
    Quiz,
}

impl TaskKind {
    pub const ALL: [TaskKind; 7] = [
        TaskKind::Speech,
        TaskKind::Minutes,
        TaskKind::Email,
        TaskKind::Presentation,
        TaskKind::CodeReview,
        TaskKind::Translate,
        TaskKind::Quiz,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Speech => "speech",
            TaskKind::Minutes => "minutes",
            TaskKind::Email => "email",
            TaskKind::Presentation => "presentation",
            TaskKind::CodeReview => "code-review",
            TaskKind::Translate => "translate",
            TaskKind::Quiz => "quiz",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "speech" => Ok(TaskKind::Speech),
            "minutes" => Ok(TaskKind::Minutes),
            "email" => Ok(TaskKind::Email),
            "presentation" => Ok(TaskKind::Presentation),
            "code-review" => Ok(TaskKind::CodeReview),
            "translate" => Ok(TaskKind::Translate),
            "quiz" => Ok(TaskKind::Quiz),
            other => Err(format!(
                "Unknown task kind '{}'. Supported: speech, minutes, email, presentation, code-review, translate, quiz",
                other
            )),
        }
    }
}

/// Optional per-task parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TaskParams {
    /// Writing tone (email)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,

    /// Synthesis language (speech) or target language (translate),
    /// e.g. "en" or "en-US"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Voice name (speech); accepted but currently provider-ignored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,

    /// Recipient name (email)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// Topic override (presentation); defaults to the first input line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Number of questions (quiz); defaults to 5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// A single dispatchable task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRequest {
    #[serde(rename = "task_kind", alias = "kind")]
    pub kind: TaskKind,
    pub input: String,

    #[serde(default)]
    pub params: TaskParams,
}

impl TaskRequest {
    pub fn new(kind: TaskKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            params: TaskParams::default(),
        }
    }
}

/// A slide in a presentation outline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slide {
    pub title: String,
    pub points: Vec<String>,
}

/// A multiple-choice question in a generated quiz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Structured task output; the shape is determined by the task kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TaskOutput {
    Speech {
        audio_base64: String,
        format: String,
        language: String,
    },
    Minutes {
        agenda: Vec<String>,
        discussion: Vec<String>,
        action_items: Vec<String>,
    },
    Email {
        subject: String,
        body: String,
    },
    Presentation {
        slides: Vec<Slide>,
    },
    CodeReview {
        suggestions: Vec<String>,
    },
    Translation {
        translated_text: String,
        target_language: String,
    },
    Quiz {
        questions: Vec<QuizQuestion>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_kind_round_trips_through_str() {
        for kind in TaskKind::ALL {
            assert_eq!(kind.as_str().parse::<TaskKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_task_kind_is_rejected() {
        let err = "quiz".parse::<TaskKind>().unwrap_err();
        assert!(err.contains("Unknown task kind"));
    }

    #[test]
    fn task_kind_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&TaskKind::CodeReview).unwrap();
        assert_eq!(json, "\"code-review\"");
    }

    #[test]
    fn request_params_default_when_absent() {
        let req: TaskRequest =
            serde_json::from_str(r#"{"kind":"minutes","input":"notes"}"#).unwrap();
        assert_eq!(req.kind, TaskKind::Minutes);
        assert_eq!(req.params, TaskParams::default());
    }
}
