//! CLI command implementations

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::io::Read;
use std::path::PathBuf;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::dispatch::{Dispatcher, TaskKind, TaskOutput, TaskParams, TaskRequest};

/// Run the HTTP server, applying CLI overrides on top of config.
pub async fn serve(settings: &Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    crate::server::run(&settings).await
}

pub struct RunArgs {
    pub task: String,
    pub input: Option<String>,
    pub file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub language: Option<String>,
    pub tone: Option<String>,
    pub recipient: Option<String>,
    pub topic: Option<String>,
    pub count: Option<u32>,
}

/// Dispatch a single task from the terminal.
pub async fn run_task(settings: &Settings, args: RunArgs) -> Result<()> {
    let kind: TaskKind = args
        .task
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let input = read_input(args.input, args.file)?;

    let request = TaskRequest {
        kind,
        input,
        params: TaskParams {
            language: args.language,
            tone: args.tone,
            recipient: args.recipient,
            topic: args.topic,
            count: args.count,
            voice: None,
        },
    };

    let dispatcher = Dispatcher::from_settings(settings)?;
    let output = dispatcher.dispatch(&request).await?;

    match output {
        TaskOutput::Speech { audio_base64, .. } => {
            let path = args
                .output
                .unwrap_or_else(|| PathBuf::from("speech.mp3"));
            let audio = BASE64
                .decode(audio_base64)
                .context("Provider returned invalid audio encoding")?;
            std::fs::write(&path, audio)?;
            println!("Audio written to: {}", path.display());
        }
        other => {
            let rendered = render_text_output(&other);
            if let Some(path) = args.output {
                std::fs::write(&path, &rendered)?;
                println!("Output written to: {}", path.display());
            } else {
                println!("{}", rendered);
            }
        }
    }

    Ok(())
}

fn read_input(input: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(input) = input {
        return Ok(input);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read task input from stdin")?;
    Ok(buffer)
}

fn render_text_output(output: &TaskOutput) -> String {
    match output {
        TaskOutput::Minutes {
            agenda,
            discussion,
            action_items,
        } => {
            let mut text = String::new();
            push_section(&mut text, "Agenda", agenda);
            push_section(&mut text, "Discussion", discussion);
            push_section(&mut text, "Action Items", action_items);
            text.trim_end().to_string()
        }
        TaskOutput::Email { subject, body } => {
            format!("Subject: {}\n\n{}", subject, body)
        }
        TaskOutput::Presentation { slides } => {
            let mut text = String::new();
            for slide in slides {
                text.push_str(&format!("== {} ==\n", slide.title));
                for point in &slide.points {
                    text.push_str(&format!("  - {}\n", point));
                }
            }
            text.trim_end().to_string()
        }
        TaskOutput::CodeReview { suggestions } => suggestions
            .iter()
            .map(|s| format!("- {}", s))
            .collect::<Vec<_>>()
            .join("\n"),
        TaskOutput::Translation {
            translated_text, ..
        } => translated_text.clone(),
        TaskOutput::Quiz { questions } => {
            let mut text = String::new();
            for (i, question) in questions.iter().enumerate() {
                text.push_str(&format!("{}. {}\n", i + 1, question.question));
                for option in &question.options {
                    text.push_str(&format!("   {}\n", option));
                }
                if let Some(answer) = &question.answer {
                    text.push_str(&format!("   Answer: {}\n", answer));
                }
            }
            text.trim_end().to_string()
        }
        TaskOutput::Speech { .. } => unreachable!("speech output is written to a file"),
    }
}

fn push_section(text: &mut String, title: &str, items: &[String]) {
    text.push_str(&format!("{}:\n", title));
    if items.is_empty() {
        text.push_str("  (none)\n");
    }
    for item in items {
        text.push_str(&format!("  - {}\n", item));
    }
    text.push('\n');
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Slide;

    #[test]
    fn render_minutes_lists_all_sections() {
        let output = TaskOutput::Minutes {
            agenda: vec!["budget".to_string()],
            discussion: vec![],
            action_items: vec!["file report".to_string()],
        };
        let text = render_text_output(&output);
        assert!(text.contains("Agenda:\n  - budget"));
        assert!(text.contains("Discussion:\n  (none)"));
        assert!(text.contains("Action Items:\n  - file report"));
    }

    #[test]
    fn render_presentation_shows_slide_titles() {
        let output = TaskOutput::Presentation {
            slides: vec![Slide {
                title: "Intro".to_string(),
                points: vec!["hello".to_string()],
            }],
        };
        let text = render_text_output(&output);
        assert!(text.contains("== Intro =="));
        assert!(text.contains("  - hello"));
    }
}
