//! Headless presentations: one that accepts everything silently and one
//! that answers from a script and records every call.

use std::collections::VecDeque;
use std::time::Duration;

use super::{EffectCue, Presentation};
use crate::entity::{Enemy, Player};
use crate::hand::Hand;

/// Says yes to every prompt and displays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresentation;

impl Presentation for NullPresentation {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// One recorded presentation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresentationEvent {
    Player { current_hp: i32, max_hp: i32 },
    PlayerCleared,
    Enemy { name: String, current_hp: i32 },
    EnemyCleared,
    Hand { len: usize },
    Equipment,
    DiscardPrompt { hand_len: usize },
    HideDiscardPrompt,
    AttackAvailable(bool),
    Notify(String),
    Confirm { prompt: String, answer: bool },
    Effect(EffectCue),
    Pace(Duration),
}

/// Deterministic test double.
///
/// Confirm prompts are answered from a queue; once it runs dry the default
/// answer is used.
///
/// ```
/// use dungeon_deck::presentation::{Presentation, ScriptedPresentation};
///
/// let mut ui = ScriptedPresentation::new().answering([false]);
/// assert!(!ui.confirm("Discard Club?"));
/// assert!(ui.confirm("Discard Club?"));
/// assert_eq!(ui.prompts(), vec!["Discard Club?", "Discard Club?"]);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedPresentation {
    answers: VecDeque<bool>,
    default_answer: bool,
    events: Vec<PresentationEvent>,
}

impl Default for ScriptedPresentation {
    fn default() -> Self {
        Self {
            answers: VecDeque::new(),
            default_answer: true,
            events: Vec::new(),
        }
    }
}

impl ScriptedPresentation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for upcoming prompts (builder pattern).
    #[must_use]
    pub fn answering(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.answers.extend(answers);
        self
    }

    /// Answer used when the queue is empty.
    #[must_use]
    pub fn with_default_answer(mut self, answer: bool) -> Self {
        self.default_answer = answer;
        self
    }

    pub fn push_answer(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    #[must_use]
    pub fn events(&self) -> &[PresentationEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Every `notify` message, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresentationEvent::Notify(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every `confirm` prompt, in order.
    #[must_use]
    pub fn prompts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresentationEvent::Confirm { prompt, .. } => Some(prompt.as_str()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn effects(&self) -> Vec<EffectCue> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresentationEvent::Effect(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    /// Last value handed to `set_attack_available`.
    #[must_use]
    pub fn attack_available(&self) -> Option<bool> {
        self.events.iter().rev().find_map(|e| match e {
            PresentationEvent::AttackAvailable(available) => Some(*available),
            _ => None,
        })
    }

    /// Sum of all `pace` durations.
    #[must_use]
    pub fn total_paced(&self) -> Duration {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresentationEvent::Pace(d) => Some(*d),
                _ => None,
            })
            .sum()
    }
}

impl Presentation for ScriptedPresentation {
    fn render_player(&mut self, player: Option<&Player>) {
        self.events.push(match player {
            Some(p) => PresentationEvent::Player {
                current_hp: p.current_hp,
                max_hp: p.max_hp(),
            },
            None => PresentationEvent::PlayerCleared,
        });
    }

    fn render_enemy(&mut self, enemy: Option<&Enemy>) {
        self.events.push(match enemy {
            Some(e) => PresentationEvent::Enemy {
                name: e.name().to_string(),
                current_hp: e.current_hp,
            },
            None => PresentationEvent::EnemyCleared,
        });
    }

    fn render_hand(&mut self, hand: &Hand) {
        self.events.push(PresentationEvent::Hand { len: hand.len() });
    }

    fn render_equipment(&mut self, _player: Option<&Player>) {
        self.events.push(PresentationEvent::Equipment);
    }

    fn show_discard_prompt(&mut self, hand: &Hand) {
        self.events.push(PresentationEvent::DiscardPrompt { hand_len: hand.len() });
    }

    fn hide_discard_prompt(&mut self) {
        self.events.push(PresentationEvent::HideDiscardPrompt);
    }

    fn set_attack_available(&mut self, available: bool) {
        self.events.push(PresentationEvent::AttackAvailable(available));
    }

    fn notify(&mut self, message: &str) {
        self.events.push(PresentationEvent::Notify(message.to_string()));
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        let answer = self.answers.pop_front().unwrap_or(self.default_answer);
        self.events.push(PresentationEvent::Confirm {
            prompt: prompt.to_string(),
            answer,
        });
        answer
    }

    fn play_effect(&mut self, cue: EffectCue) {
        self.events.push(PresentationEvent::Effect(cue));
    }

    fn pace(&mut self, duration: Duration) {
        self.events.push(PresentationEvent::Pace(duration));
    }
}
