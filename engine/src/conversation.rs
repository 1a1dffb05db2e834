//! The chat transcript shown in the preview panel.
//!
//! The order is fixed: greeting, image, description, the visitor's question,
//! the completion year, then the optional company and collaborator lines.
//! Optional lines are omitted entirely when the field is absent.

use folio_types::ProjectRecord;

/// The visitor's side of the conversation; not derived from project data.
pub const COMPLETION_QUESTION: &str = "That's amazing! When did you complete this?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// Left-aligned, from the portfolio owner.
    Received,
    /// Right-aligned, from the visitor.
    Sent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    Image { uri: String, alt: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub body: MessageBody,
}

impl ChatMessage {
    fn received(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Received,
            body: MessageBody::Text(text.into()),
        }
    }

    fn sent(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Sent,
            body: MessageBody::Text(text.into()),
        }
    }

    /// Text content, or `None` for image messages.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            MessageBody::Text(text) => Some(text),
            MessageBody::Image { .. } => None,
        }
    }
}

#[must_use]
pub fn conversation(project: &ProjectRecord) -> Vec<ChatMessage> {
    let mut messages = vec![
        ChatMessage::received(format!(
            "Hey! Check out my latest project: {}",
            project.title()
        )),
        ChatMessage {
            sender: Sender::Received,
            body: MessageBody::Image {
                uri: project.image().to_string(),
                alt: project.title().to_string(),
            },
        },
        ChatMessage::received(project.description()),
        ChatMessage::sent(COMPLETION_QUESTION),
        ChatMessage::received(format!(
            "I finished it in {}. It was a great experience working on this.",
            project.year()
        )),
    ];

    if let Some(company) = project.company() {
        messages.push(ChatMessage::received(format!(
            "I worked on this at {company}"
        )));
    }

    if let Some(collaborator) = project.collaborator() {
        messages.push(ChatMessage::received(format!(
            "I collaborated with {collaborator} on this project"
        )));
    }

    messages
}
