//! Message kinds the writer dispatches on.

use std::fmt;

use crate::protocol::Envelope;

/// Closed set of control messages with a dispatch handler.
///
/// Anything else is [`MessageKind::Unrecognised`], which is acknowledged and
/// then logged without further processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    /// `ping`: liveness check.
    Ping,
    /// `resilient-server-handshake`: a peer joining the session.
    Handshake,
    /// `resilient-server-signoff`: a peer leaving the session.
    Signoff,
    /// Any other `message-type`, including an absent one (empty string).
    Unrecognised(String),
}

impl MessageKind {
    /// Classifies a `message-type` value. Matching is exact.
    #[must_use]
    pub fn parse(message_type: &str) -> Self {
        match message_type {
            "ping" => Self::Ping,
            "resilient-server-handshake" => Self::Handshake,
            "resilient-server-signoff" => Self::Signoff,
            other => Self::Unrecognised(other.to_owned()),
        }
    }

    /// Classifies an envelope by its `message-type`.
    #[must_use]
    pub fn of(envelope: &Envelope) -> Self {
        Self::parse(envelope.message_type())
    }

    /// The wire `message-type` for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ping => "ping",
            Self::Handshake => "resilient-server-handshake",
            Self::Signoff => "resilient-server-signoff",
            Self::Unrecognised(message_type) => message_type,
        }
    }

    /// Returns `true` for kinds with a dispatch handler.
    #[must_use]
    pub fn is_recognised(&self) -> bool {
        !matches!(self, Self::Unrecognised(_))
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::ping("ping", MessageKind::Ping)]
    #[case::handshake("resilient-server-handshake", MessageKind::Handshake)]
    #[case::signoff("resilient-server-signoff", MessageKind::Signoff)]
    fn parses_recognised_kinds(#[case] input: &str, #[case] expected: MessageKind) {
        let kind = MessageKind::parse(input);
        assert!(kind.is_recognised());
        assert_eq!(kind.as_str(), input);
        assert_eq!(kind, expected);
    }

    #[rstest]
    #[case::custom("custom-op")]
    #[case::case_differs("PING")]
    #[case::padded(" ping")]
    #[case::absent("")]
    fn everything_else_is_unrecognised(#[case] input: &str) {
        let kind = MessageKind::parse(input);
        assert_eq!(kind, MessageKind::Unrecognised(input.to_owned()));
        assert_eq!(kind.to_string(), input);
    }

    #[test]
    fn classifies_envelopes_without_a_type_as_unrecognised() {
        assert_eq!(
            MessageKind::of(&Envelope::default()),
            MessageKind::Unrecognised(String::new())
        );
    }
}
