//! Typed view of the `Hangouts.json` file from Google Takeout.
//!
//! Only the parts the tools read are modelled; everything else in the export
//! is ignored. The path `conversations[].conversation.conversation.participant_data`
//! must exist, everything below an event is optional.

use serde::{Deserialize, Deserializer};
use std::collections::{BTreeSet, HashSet};
use std::io::Read;

pub const UNKNOWN_NAME: &str = "Unknown";

#[derive(Debug, Deserialize)]
pub struct Takeout {
    pub conversations: Vec<ConversationEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ConversationEntry {
    pub conversation: ConversationState,
    pub events: Option<Vec<Event>>,
}

#[derive(Debug, Deserialize)]
pub struct ConversationState {
    pub conversation: Conversation,
}

#[derive(Debug, Deserialize)]
pub struct Conversation {
    pub participant_data: Vec<Participant>,
}

#[derive(Debug, Deserialize)]
pub struct Participant {
    pub id: Option<ParticipantId>,
    pub fallback_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ParticipantId {
    #[serde(default, deserialize_with = "digit_string")]
    pub gaia_id: Option<String>,
}

/// Gaia ids show up both as strings and as bare JSON numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum GaiaId {
    Text(String),
    Number(u64),
}

fn digit_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<GaiaId>::deserialize(deserializer)?.map(|id| match id {
        GaiaId::Text(text) => text,
        GaiaId::Number(number) => number.to_string(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct Event {
    pub chat_message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    pub message_content: Option<MessageContent>,
}

#[derive(Debug, Deserialize)]
pub struct MessageContent {
    pub segment: Option<Vec<Segment>>,
}

#[derive(Debug, Deserialize)]
pub struct Segment {
    pub text: Option<String>,
}

impl Takeout {
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Takeout> {
        let takeout: Takeout = serde_json::from_reader(reader)?;
        log::debug!("loaded {} conversations", takeout.conversations.len());
        Ok(takeout)
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.conversations.iter().flat_map(|c| c.participants().iter())
    }

    /// Distinct (name, gaia id) pairs, sorted. Participants without a gaia id
    /// are left out.
    pub fn identities(&self) -> BTreeSet<(String, String)> {
        self.participants()
            .filter_map(|p| p.gaia_id().map(|id| (p.name().to_string(), id.to_string())))
            .collect()
    }

    /// Conversations where someone in `gaia_ids` took part, or all of them
    /// when `gaia_ids` is empty.
    pub fn conversations_with<'a>(
        &'a self,
        gaia_ids: &'a HashSet<String>,
    ) -> impl Iterator<Item = &'a ConversationEntry> {
        self.conversations
            .iter()
            .filter(move |c| gaia_ids.is_empty() || c.involves(gaia_ids))
    }
}

impl ConversationEntry {
    pub fn participants(&self) -> &[Participant] {
        &self.conversation.conversation.participant_data
    }

    pub fn involves(&self, gaia_ids: &HashSet<String>) -> bool {
        self.participants()
            .iter()
            .filter_map(Participant::gaia_id)
            .any(|id| gaia_ids.contains(id))
    }

    /// Text of every segment of every chat message, in document order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.events
            .iter()
            .flatten()
            .filter_map(|e| e.chat_message.as_ref())
            .filter_map(|m| m.message_content.as_ref())
            .flat_map(|c| c.segment.iter().flatten())
            .filter_map(|s| s.text.as_deref())
    }
}

impl Participant {
    pub fn gaia_id(&self) -> Option<&str> {
        self.id.as_ref().and_then(|id| id.gaia_id.as_deref())
    }

    pub fn name(&self) -> &str {
        self.fallback_name.as_deref().unwrap_or(UNKNOWN_NAME)
    }
}
