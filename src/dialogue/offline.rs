//! # Offline Dialogue
//!
//! Canned lines per personality, used when no API key is configured.

use crate::dialogue::{DialogueLine, DialogueRequest, DialogueService};
use crate::game::{DayTime, Personality};
use crate::IslandResult;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Rotates through a small fixed script for each personality.
#[derive(Debug, Default)]
pub struct OfflineDialogue {
    turn: AtomicUsize,
}

impl OfflineDialogue {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lines_for(personality: Personality) -> &'static [(&'static str, &'static str)] {
    match personality {
        Personality::Lazy => &[
            ("Is it snack time yet? I could really go for a nap after.", "sleepy"),
            ("I found a cookie in my pocket! Best day ever.", "happy"),
        ],
        Personality::Jock => &[
            ("Feel the burn! Wanna race to the beach?", "happy"),
            ("Protein and sunshine, that's my whole routine!", "surprised"),
        ],
        Personality::Snooty => &[
            ("Oh, it's you. Your outfit is... a choice.", "neutral"),
            ("Do try to keep up with the latest fashions, darling.", "neutral"),
        ],
        Personality::Cranky => &[
            ("Hmph. Kids these days. Well, at least you said hello.", "grumpy"),
            ("Don't step on my flowers. ...They're nice, aren't they?", "grumpy"),
        ],
        Personality::Peppy => &[
            ("Hiya!! I'm practicing for my big pop star debut!!", "happy"),
            ("Oh my gosh, hi! Isn't today just sparkly?!", "surprised"),
        ],
        Personality::Normal => &[
            ("Oh, hello there! Nice weather today.", "happy"),
            ("I just baked some bread. Want to come by later?", "happy"),
        ],
    }
}

impl DialogueService for OfflineDialogue {
    fn generate(&self, request: &DialogueRequest) -> IslandResult<DialogueLine> {
        let lines = lines_for(request.personality);
        let turn = self.turn.fetch_add(1, Ordering::Relaxed);
        let (text, emotion) = lines[turn % lines.len()];
        Ok(DialogueLine::new(text, emotion))
    }

    fn greeting(&self, day_time: DayTime) -> IslandResult<String> {
        let text = match day_time {
            DayTime::Morning => "Good morning! The island is waking up with you.",
            DayTime::Noon => "Sunny skies and sea breeze. Welcome back!",
            DayTime::Evening => "The sunset looks lovely tonight. Welcome home!",
            DayTime::Night => "The stars are out. Welcome back, night owl!",
        };
        Ok(text.to_string())
    }
}
