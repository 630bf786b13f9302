#![forbid(unsafe_code)]

//! Message-list fixture: a four-message conversation whose own messages can
//! be swiped left to push a detail screen.
//!
//! Only messages sent by "me" accept a row swipe, and only one row may be
//! swiping at a time. Taps push a detail screen for any message.

use std::fmt;

use serde::Serialize;

/// One chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: u32,
    pub text: &'static str,
    pub is_me: bool,
}

const CONVERSATION: [Message; 4] = [
    Message {
        id: 1,
        text: "Hey! How's it going?",
        is_me: false,
    },
    Message {
        id: 2,
        text: "Hey! I'm doing great, thanks for asking!",
        is_me: true,
    },
    Message {
        id: 3,
        text: "That's awesome! What are you up to today?",
        is_me: false,
    },
    Message {
        id: 4,
        text: "Working on a new app project",
        is_me: true,
    },
];

/// The built-in conversation, oldest first.
#[must_use]
pub fn conversation() -> &'static [Message] {
    &CONVERSATION
}

/// Content of a screen in the fixture app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    MessageList,
    MessageDetail(Message),
}

impl fmt::Display for AppScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MessageList => f.write_str("messages"),
            Self::MessageDetail(message) => write!(f, "message/{}", message.id),
        }
    }
}

/// Why a row swipe was not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSwipeRefusal {
    /// The message was sent by someone else.
    NotOwnMessage,
    /// Another row is already swiping.
    RowBusy { active: u32 },
}

impl fmt::Display for RowSwipeRefusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotOwnMessage => f.write_str("only own messages can be swiped"),
            Self::RowBusy { active } => write!(f, "row {active} is already swiping"),
        }
    }
}

/// Row-swipe bookkeeping for the message list.
#[derive(Debug, Clone, Default)]
pub struct MessageListFixture {
    active_swipe: Option<u32>,
}

impl MessageListFixture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn message(&self, id: u32) -> Option<Message> {
        CONVERSATION.iter().copied().find(|m| m.id == id)
    }

    /// Row currently being swiped.
    #[must_use]
    pub fn active_swipe(&self) -> Option<u32> {
        self.active_swipe
    }

    /// Claim the swipe slot for `message`.
    pub fn begin_row_swipe(&mut self, message: &Message) -> Result<(), RowSwipeRefusal> {
        if !message.is_me {
            return Err(RowSwipeRefusal::NotOwnMessage);
        }
        match self.active_swipe {
            Some(active) if active != message.id => Err(RowSwipeRefusal::RowBusy { active }),
            _ => {
                self.active_swipe = Some(message.id);
                Ok(())
            }
        }
    }

    /// Release the swipe slot once the gesture is over.
    pub fn end_row_swipe(&mut self) {
        self.active_swipe = None;
    }
}
