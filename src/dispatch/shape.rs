//! Parsers that reshape raw model text into structured task outputs.
//!
//! The prompts in `llm::prompts` pin the model to these line formats, but
//! models drift, so every parser tolerates the common deviations.

use crate::dispatch::task::{QuizQuestion, Slide};

/// Strip Markdown code fences the model sometimes wraps output in.
pub fn clean_fences(text: &str) -> String {
    text.replace("```html", "")
        .replace("```json", "")
        .replace("```markdown", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse `SLIDE:` / `POINT:` structured text into slides.
///
/// Accepts `-` and `*` bullets as points; bullets before the first slide
/// header are dropped.
pub fn parse_slides(text: &str) -> Vec<Slide> {
    let mut slides: Vec<Slide> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        let upper = line.to_uppercase();

        if upper.starts_with("SLIDE:") || upper.starts_with("SLIDE ") {
            let title = match line.split_once(':') {
                Some((_, rest)) => rest.trim().to_string(),
                None => line.to_string(),
            };
            slides.push(Slide {
                title,
                points: Vec::new(),
            });
        } else if upper.starts_with("POINT:") || line.starts_with('-') || line.starts_with('*') {
            let point = if upper.starts_with("POINT:") {
                line.split_once(':').map(|(_, rest)| rest).unwrap_or("")
            } else {
                line.trim_start_matches(['-', '*', ' '])
            };

            let point = point.trim();
            if point.is_empty() {
                continue;
            }

            if let Some(slide) = slides.last_mut() {
                slide.points.push(point.to_string());
            }
        }
    }

    slides
}

/// Sections of a minutes document, parsed from `##` Markdown headers.
#[derive(Debug, Default, PartialEq)]
pub struct MinutesSections {
    pub agenda: Vec<String>,
    pub discussion: Vec<String>,
    pub action_items: Vec<String>,
}

/// Parse minutes Markdown into agenda / discussion / action-item lists.
///
/// `None` placeholders (prompted for empty sections) are dropped. Lines
/// outside any recognized section are ignored.
pub fn parse_minutes(text: &str) -> MinutesSections {
    enum Section {
        None,
        Agenda,
        Discussion,
        ActionItems,
    }

    let mut sections = MinutesSections::default();
    let mut current = Section::None;

    for line in text.lines() {
        let line = line.trim();

        if let Some(header) = line.strip_prefix("##") {
            let header = header.trim_start_matches('#').trim().to_lowercase();
            current = if header.contains("agenda") {
                Section::Agenda
            } else if header.contains("discussion") {
                Section::Discussion
            } else if header.contains("action") {
                Section::ActionItems
            } else {
                Section::None
            };
            continue;
        }

        let item = line.trim_start_matches(['-', '*', ' ']).trim();
        if item.is_empty() || item.eq_ignore_ascii_case("none") {
            continue;
        }

        match current {
            Section::Agenda => sections.agenda.push(item.to_string()),
            Section::Discussion => sections.discussion.push(item.to_string()),
            Section::ActionItems => sections.action_items.push(item.to_string()),
            Section::None => {}
        }
    }

    sections
}

/// Split an email draft into subject and body.
///
/// The subject is the leading `Subject:` line when present, otherwise the
/// first non-empty line is promoted to subject.
pub fn parse_email(text: &str) -> (String, String) {
    let text = text.trim();

    let mut lines = text.lines();
    let first = loop {
        match lines.next() {
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => break line.trim(),
            None => return (String::new(), String::new()),
        }
    };

    let subject = first
        .strip_prefix("Subject:")
        .or_else(|| first.strip_prefix("subject:"))
        .unwrap_or(first)
        .trim()
        .to_string();

    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    (subject, body)
}

/// Collect review suggestions, one per bullet or numbered line.
///
/// Falls back to every non-empty line when the model ignored the bullet
/// format entirely.
pub fn parse_suggestions(text: &str) -> Vec<String> {
    let bullets: Vec<String> = text
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let stripped = line
                .strip_prefix('-')
                .or_else(|| line.strip_prefix('*'))
                .or_else(|| strip_number_prefix(line))?;
            let stripped = stripped.trim();
            (!stripped.is_empty()).then(|| stripped.to_string())
        })
        .collect();

    if !bullets.is_empty() {
        return bullets;
    }

    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `QUESTION:` / `OPTION:` / `ANSWER:` structured text into quiz
/// questions.
///
/// `-` and `*` bullets are accepted as options; options and answers before
/// the first question are dropped.
pub fn parse_quiz(text: &str) -> Vec<QuizQuestion> {
    let mut questions: Vec<QuizQuestion> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        let upper = line.to_uppercase();

        if upper.starts_with("QUESTION:") {
            let question = line.split_once(':').map(|(_, rest)| rest).unwrap_or("");
            questions.push(QuizQuestion {
                question: question.trim().to_string(),
                options: Vec::new(),
                answer: None,
            });
        } else if upper.starts_with("ANSWER:") {
            let answer = line.split_once(':').map(|(_, rest)| rest).unwrap_or("");
            let answer = answer.trim();
            if answer.is_empty() {
                continue;
            }
            if let Some(question) = questions.last_mut() {
                question.answer = Some(answer.to_string());
            }
        } else if upper.starts_with("OPTION:") || line.starts_with('-') || line.starts_with('*') {
            let option = if upper.starts_with("OPTION:") {
                line.split_once(':').map(|(_, rest)| rest).unwrap_or("")
            } else {
                line.trim_start_matches(['-', '*', ' '])
            };

            let option = option.trim();
            if option.is_empty() {
                continue;
            }

            if let Some(question) = questions.last_mut() {
                question.options.push(option.to_string());
            }
        }
    }

    questions
}

fn strip_number_prefix(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_fences_strips_code_blocks() {
        assert_eq!(clean_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(clean_fences("plain text"), "plain text");
    }

    #[test]
    fn parse_slides_handles_prompted_format() {
        let text = "SLIDE: Intro\nPOINT: Who we are\nPOINT: Why now\nSLIDE: Roadmap\nPOINT: Q3";
        let slides = parse_slides(text);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].title, "Intro");
        assert_eq!(slides[0].points, vec!["Who we are", "Why now"]);
        assert_eq!(slides[1].title, "Roadmap");
        assert_eq!(slides[1].points, vec!["Q3"]);
    }

    #[test]
    fn parse_slides_accepts_dash_and_star_bullets() {
        let text = "slide: Title\n- first\n* second";
        let slides = parse_slides(text);
        assert_eq!(slides[0].points, vec!["first", "second"]);
    }

    #[test]
    fn parse_slides_drops_points_before_first_slide() {
        let slides = parse_slides("POINT: orphan\nSLIDE: Real\nPOINT: kept");
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].points, vec!["kept"]);
    }

    #[test]
    fn parse_minutes_splits_sections() {
        let text = "## Agenda\n- budget\n## Discussion\n- overspend in Q2\n## Action Items\n- Dana to file report";
        let sections = parse_minutes(text);
        assert_eq!(sections.agenda, vec!["budget"]);
        assert_eq!(sections.discussion, vec!["overspend in Q2"]);
        assert_eq!(sections.action_items, vec!["Dana to file report"]);
    }

    #[test]
    fn parse_minutes_drops_none_placeholders() {
        let sections = parse_minutes("## Agenda\nNone\n## Action Items\n- ship it");
        assert!(sections.agenda.is_empty());
        assert_eq!(sections.action_items, vec!["ship it"]);
    }

    #[test]
    fn parse_email_splits_subject_line() {
        let (subject, body) = parse_email("Subject: Standup moved\n\nHi team,\nnew time is 10am.");
        assert_eq!(subject, "Standup moved");
        assert_eq!(body, "Hi team,\nnew time is 10am.");
    }

    #[test]
    fn parse_email_promotes_first_line_without_prefix() {
        let (subject, body) = parse_email("Standup moved\nHi team");
        assert_eq!(subject, "Standup moved");
        assert_eq!(body, "Hi team");
    }

    #[test]
    fn parse_quiz_handles_prompted_format() {
        let text = "QUESTION: What is 2+2?\nOPTION: A) 3\nOPTION: B) 4\nANSWER: B\n\
QUESTION: Largest planet?\nOPTION: A) Mars\nOPTION: B) Jupiter\nANSWER: B";
        let questions = parse_quiz(text);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "What is 2+2?");
        assert_eq!(questions[0].options, vec!["A) 3", "B) 4"]);
        assert_eq!(questions[0].answer.as_deref(), Some("B"));
        assert_eq!(questions[1].question, "Largest planet?");
    }

    #[test]
    fn parse_quiz_accepts_bullet_options_and_missing_answer() {
        let questions = parse_quiz("question: Pick one\n- first\n* second");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options, vec!["first", "second"]);
        assert_eq!(questions[0].answer, None);
    }

    #[test]
    fn parse_quiz_drops_options_before_first_question() {
        let questions = parse_quiz("OPTION: orphan\nANSWER: X\nQUESTION: Real?\nOPTION: kept");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options, vec!["kept"]);
        assert_eq!(questions[0].answer, None);
    }

    #[test]
    fn parse_suggestions_reads_bullets_and_numbers() {
        let text = "- rename foo\n2. add error handling\n* drop the clone";
        assert_eq!(
            parse_suggestions(text),
            vec!["rename foo", "add error handling", "drop the clone"]
        );
    }

    #[test]
    fn parse_suggestions_falls_back_to_plain_lines() {
        let text = "Consider a builder here.\nThe loop allocates per iteration.";
        assert_eq!(parse_suggestions(text).len(), 2);
    }
}
