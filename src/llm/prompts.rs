//! Deterministic per-task prompts.
//!
//! Each prompt pins the model to a line format the matching parser in
//! `dispatch::shape` understands.

/// System prompt for meeting minutes generation.
pub const MINUTES_SYSTEM: &str = "You are an assistant that turns raw meeting \
notes into concise, factual meeting minutes.";

/// System prompt for email drafting.
pub const EMAIL_SYSTEM: &str = "You are an assistant that writes clear, \
professional emails.";

/// System prompt for presentation outlining.
pub const PRESENTATION_SYSTEM: &str = "You are a presentation generator. \
Convert the user's input into a slide deck structure. Strictly follow this \
format for every slide:\nSLIDE: [Title of the Slide]\nPOINT: [Bullet point \
content]\nPOINT: [Bullet point content]\nDo not output any conversational \
text, only the slide structure.";

/// System prompt for code review.
pub const CODE_REVIEW_SYSTEM: &str = "You are a senior engineer reviewing \
code. Return one concrete suggestion per line, each line starting with '- '. \
Do not output anything else.";

/// System prompt for quiz generation.
pub const QUIZ_SYSTEM: &str = "You are a quiz generator. Produce multiple \
choice questions. Strictly follow this format for every question:\n\
QUESTION: [Question text]\nOPTION: A) [Option text]\nOPTION: B) [Option \
text]\nOPTION: C) [Option text]\nOPTION: D) [Option text]\nANSWER: [Correct \
option letter]\nDo not output any conversational text, only questions.";

/// Build the system prompt for translation into a target language.
pub fn build_translate_system(target_language: &str) -> String {
    format!(
        "Translate the user's text to {target_language}. \
Output only the translation, nothing else."
    )
}

/// Build the user prompt for meeting minutes.
pub fn build_minutes_prompt(notes: &str) -> String {
    format!(
        "Convert these notes into meeting minutes.\n\
\n\
Return Markdown with exactly these sections:\n\
1. ## Agenda\n\
2. ## Discussion\n\
3. ## Action Items\n\
\n\
Rules:\n\
- Use only information present in the notes.\n\
- One bullet per line, each starting with '- '.\n\
- If a section has no content, write 'None'.\n\
\n\
Notes:\n\
{notes}"
    )
}

/// Build the user prompt for an email draft.
pub fn build_email_prompt(topic: &str, recipient: Option<&str>, tone: Option<&str>) -> String {
    let mut prompt = String::from(
        "Write an email about the topic below. The first line must be \
'Subject: <subject>'; everything after it is the email body.\n",
    );

    if let Some(recipient) = recipient {
        prompt.push_str(&format!("Recipient: {recipient}\n"));
    }
    if let Some(tone) = tone {
        prompt.push_str(&format!("Tone: {tone}\n"));
    }

    prompt.push_str(&format!("\nTopic:\n{topic}"));
    prompt
}

/// Build the user prompt for a presentation outline.
pub fn build_presentation_prompt(topic: &str, source_text: &str) -> String {
    if source_text.trim().is_empty() {
        format!("TOPIC: {topic}")
    } else {
        format!("TOPIC: {topic}\nDETAILS: {source_text}")
    }
}

/// Build the user prompt for a code review.
pub fn build_code_review_prompt(code: &str) -> String {
    format!("Review this code:\n\n{code}")
}

/// Build the user prompt for a quiz.
pub fn build_quiz_prompt(topic: &str, count: u32) -> String {
    format!("Create a {count}-question multiple choice quiz about '{topic}'.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_prompt_names_all_sections() {
        let prompt = build_minutes_prompt("team sync notes");
        assert!(prompt.contains("## Agenda"));
        assert!(prompt.contains("## Discussion"));
        assert!(prompt.contains("## Action Items"));
        assert!(prompt.contains("team sync notes"));
    }

    #[test]
    fn email_prompt_includes_optional_fields_when_present() {
        let prompt = build_email_prompt("quarterly review", Some("Dana"), Some("formal"));
        assert!(prompt.contains("Recipient: Dana"));
        assert!(prompt.contains("Tone: formal"));

        let bare = build_email_prompt("quarterly review", None, None);
        assert!(!bare.contains("Recipient:"));
        assert!(!bare.contains("Tone:"));
    }

    #[test]
    fn translate_system_names_target_language() {
        let system = build_translate_system("French");
        assert!(system.contains("French"));
    }

    #[test]
    fn quiz_prompt_carries_count_and_topic() {
        let prompt = build_quiz_prompt("the solar system", 3);
        assert!(prompt.contains("3-question"));
        assert!(prompt.contains("the solar system"));
    }

    #[test]
    fn presentation_prompt_omits_empty_details() {
        assert_eq!(build_presentation_prompt("Rust", " "), "TOPIC: Rust");
        assert!(build_presentation_prompt("Rust", "ownership").contains("DETAILS: ownership"));
    }
}
