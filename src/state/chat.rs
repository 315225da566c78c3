#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Chat transcript state machine.
///
/// Holds at most one live user turn and one live bot turn; a new question
/// evicts everything that came before it. The bot reply is accumulated from
/// delta chunks into `bot_text` and mirrored into the live bot turn, while
/// `phase` drives the typing indicator.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub turns: Vec<ChatTurn>,
    pub bot_text: String,
    pub phase: ChatPhase,
    next_turn_id: u64,
}

/// One transcript entry. `exiting` turns are still in the tree playing their
/// exit animation and are removed by [`ChatState::finish_evict`].
#[derive(Clone, Debug)]
pub struct ChatTurn {
    pub id: u64,
    pub role: Role,
    pub text: String,
    pub placeholder: bool,
    pub exiting: bool,
}

/// Who a transcript entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// Typing-indicator phases of the bot reply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatPhase {
    #[default]
    Idle,
    /// Placeholder shown, no delta received yet.
    AwaitingBot,
    /// Delta chunks are arriving.
    BotTyping,
    /// The idle timer fired; later deltas re-enter `BotTyping`.
    Settled,
}

impl ChatState {
    /// Whether the typing indicator is active.
    pub fn typing(&self) -> bool {
        matches!(self.phase, ChatPhase::AwaitingBot | ChatPhase::BotTyping)
    }

    /// The live (non-exiting) turn for `role`, if any.
    pub fn live_turn(&self, role: Role) -> Option<&ChatTurn> {
        self.turns.iter().find(|t| t.role == role && !t.exiting)
    }

    /// A new user question arrived: evict the previous exchange (animated),
    /// show the question, and open an empty bot placeholder.
    pub fn begin_question(&mut self, question: &str) {
        for turn in &mut self.turns {
            turn.exiting = true;
        }
        self.bot_text.clear();
        self.push_turn(Role::User, question, false);
        self.push_bot_turn("", true);
    }

    /// Attach a bot turn, evicting any live one first.
    ///
    /// A placeholder starts the typing indicator; a turn carrying initial
    /// text stops it. A non-placeholder empty turn leaves the phase alone.
    pub fn push_bot_turn(&mut self, text: &str, placeholder: bool) {
        if let Some(bot) = self.turns.iter_mut().find(|t| t.role == Role::Bot && !t.exiting) {
            bot.exiting = true;
        }
        self.push_turn(Role::Bot, text, placeholder);
        if placeholder {
            self.phase = ChatPhase::AwaitingBot;
        } else if !text.is_empty() {
            self.phase = ChatPhase::Settled;
        }
    }

    /// Append a delta chunk to the bot reply.
    ///
    /// Returns `true` if the chunk was accepted, in which case the caller
    /// must re-arm the typing-idle timer. Without a live bot turn the chunk
    /// is dropped.
    pub fn append_delta(&mut self, chunk: &str) -> bool {
        let Some(bot) = self.turns.iter_mut().find(|t| t.role == Role::Bot && !t.exiting) else {
            return false;
        };
        self.bot_text.push_str(chunk);
        bot.text.clone_from(&self.bot_text);
        self.phase = ChatPhase::BotTyping;
        true
    }

    /// The typing-idle timer fired: stop the indicator. Deltas may still
    /// arrive afterwards and will restart it.
    pub fn typing_idle(&mut self) {
        if self.typing() {
            self.phase = ChatPhase::Settled;
        }
    }

    /// Remove an exiting turn once its exit animation (or the safety
    /// timeout) completes. Idempotent: a no-op if the turn is already gone
    /// or still live.
    pub fn finish_evict(&mut self, id: u64) {
        self.turns.retain(|t| !(t.id == id && t.exiting));
    }

    /// Drop the whole transcript. `immediate` removes turns outright (used
    /// on transport errors); otherwise they play their exit animation.
    pub fn clear(&mut self, immediate: bool) {
        if immediate {
            self.turns.clear();
        } else {
            for turn in &mut self.turns {
                turn.exiting = true;
            }
        }
        self.bot_text.clear();
        self.phase = ChatPhase::Idle;
    }

    fn push_turn(&mut self, role: Role, text: &str, placeholder: bool) {
        self.next_turn_id += 1;
        self.turns.push(ChatTurn {
            id: self.next_turn_id,
            role,
            text: text.to_owned(),
            placeholder,
            exiting: false,
        });
    }
}
