//! The wizard state machine
//!
//! A [`WizardSession`] is one operator's progress: a cursor into the step
//! table plus the answers stored so far. [`WizardSession::advance`] is the
//! single transition function — pure, synchronous, no transport types —
//! so the whole flow is testable without a network.

use std::collections::BTreeMap;

use crate::core::types::{Field, FieldValue};
use crate::core::validation::{ValidationError, validate_field};
use crate::wizard::steps::{AFFIRMATIVE_TOKEN, CONFIRM_PROMPT, STEPS, ack_for};

/// Where the session currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Awaiting the answer for `STEPS[i]`
    Step(usize),
    /// All fields collected, awaiting confirm/decline
    Confirm,
}

/// Result of feeding one inbound text to the session.
#[derive(Debug)]
pub enum Advance {
    /// Validation failed; the session did not move. The error's display
    /// text is the re-prompt to send.
    Reprompt(ValidationError),
    /// Value stored, next question to ask (with an optional milestone ack).
    Ask { ack: Option<String>, prompt: &'static str },
    /// Last field stored; show the summary and the confirm keyboard.
    AwaitConfirm { summary: String },
    /// Affirmative confirmation: the accumulated answers, ready to be
    /// stamped into a record. The session is spent.
    Committed(BTreeMap<Field, FieldValue>),
    /// Negative answer at the confirm step. The session is spent.
    Declined,
}

#[derive(Debug, Clone)]
pub struct WizardSession {
    position: Position,
    answers: BTreeMap<Field, FieldValue>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            position: Position::Step(0),
            answers: BTreeMap::new(),
        }
    }

    /// True once the session has consumed an affirmative or negative
    /// confirmation and must be discarded by the owner.
    pub fn is_spent(&self) -> bool {
        matches!(self.position, Position::Step(i) if i >= STEPS.len())
    }

    /// The question for the state the session currently sits in, used to
    /// re-prompt after an ignored mid-wizard command.
    pub fn current_prompt(&self) -> &'static str {
        match self.position {
            Position::Step(i) => STEPS.get(i).map(|s| s.prompt).unwrap_or(CONFIRM_PROMPT),
            Position::Confirm => CONFIRM_PROMPT,
        }
    }

    /// Feeds one inbound text message to the state machine.
    pub fn advance(&mut self, text: &str) -> Advance {
        match self.position {
            Position::Step(i) if i < STEPS.len() => {
                let step = &STEPS[i];
                match validate_field(step.field, text) {
                    Err(e) => Advance::Reprompt(e),
                    Ok(value) => {
                        let ack = ack_for(step.field, &value);
                        self.answers.insert(step.field, value);
                        if i + 1 < STEPS.len() {
                            self.position = Position::Step(i + 1);
                            Advance::Ask {
                                ack,
                                prompt: STEPS[i + 1].prompt,
                            }
                        } else {
                            self.position = Position::Confirm;
                            Advance::AwaitConfirm { summary: self.summary() }
                        }
                    }
                }
            }
            Position::Step(_) => {
                // Spent session left in the table by mistake; treat any
                // input as a decline so the owner clears it.
                Advance::Declined
            }
            Position::Confirm => {
                self.position = Position::Step(STEPS.len());
                if text.contains(AFFIRMATIVE_TOKEN) {
                    Advance::Committed(std::mem::take(&mut self.answers))
                } else {
                    Advance::Declined
                }
            }
        }
    }

    fn text(&self, field: Field) -> String {
        self.answers.get(&field).map(|v| v.to_string()).unwrap_or_default()
    }

    /// The pre-confirmation summary of everything collected.
    fn summary(&self) -> String {
        let mut roster = String::new();
        for (n, nick, age, steam) in [
            (2, Field::P2Nick, Field::P2Age, Field::P2Steam),
            (3, Field::P3Nick, Field::P3Age, Field::P3Steam),
            (4, Field::P4Nick, Field::P4Age, Field::P4Steam),
            (5, Field::P5Nick, Field::P5Age, Field::P5Steam),
        ] {
            roster.push_str(&format!(
                "{n}. {} ({}р) - {}\n",
                self.text(nick),
                self.text(age),
                self.text(steam)
            ));
        }

        format!(
            "📋 ПІДСУМОК\n\n\
             🏆 {} [{}]\n\n\
             👑 Капітан: {} ({}р)\n   Discord: {}\n   Steam: {}\n\n\
             👥 Склад:\n{roster}\n\
             💬 {}\n\n\
             {CONFIRM_PROMPT}",
            self.text(Field::TeamName),
            self.text(Field::TeamTag),
            self.text(Field::CapNick),
            self.text(Field::CapAge),
            self.text(Field::CapDiscord),
            self.text(Field::CapSteam),
            self.text(Field::Comments),
        )
    }
}
