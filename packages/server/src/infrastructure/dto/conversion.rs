//! Conversion logic between DTOs and domain models.

use lobby_shared::time::timestamp_to_jst_rfc3339;

use crate::domain::{
    Message, MessageKind, MessageText, Participant, ParticipantName, Recipient, ValueObjectError,
};
use crate::infrastructure::dto::http as dto;

// ========================================
// DTO → Domain
// ========================================

impl TryFrom<dto::JoinRequestDto> for ParticipantName {
    type Error = ValueObjectError;

    fn try_from(dto: dto::JoinRequestDto) -> Result<Self, Self::Error> {
        ParticipantName::new(dto.name)
    }
}

impl dto::SendMessageRequestDto {
    /// Validate the body into domain values
    pub fn into_domain(self) -> Result<(Recipient, MessageText, MessageKind), ValueObjectError> {
        let to = Recipient::new(self.to)?;
        let text = MessageText::new(self.text)?;
        let kind = MessageKind::parse_sendable(&self.r#type)?;
        Ok((to, text, kind))
    }
}

impl dto::ReadMessagesQuery {
    /// `limit` as an integer, or `None` when missing, empty or malformed
    pub fn parsed_limit(&self) -> Option<i64> {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<Participant> for dto::ParticipantDto {
    fn from(model: Participant) -> Self {
        Self {
            name: model.name.into_string(),
            last_seen: timestamp_to_jst_rfc3339(model.last_seen.value()),
            joined_at: timestamp_to_jst_rfc3339(model.joined_at.value()),
        }
    }
}

impl From<Message> for dto::MessageDto {
    fn from(model: Message) -> Self {
        Self {
            seq: model.seq,
            from: model.from.into_string(),
            to: model.to.as_str().to_string(),
            text: model.text.as_str().to_string(),
            r#type: model.kind.as_str().to_string(),
            time: timestamp_to_jst_rfc3339(model.time.value()),
        }
    }
}
