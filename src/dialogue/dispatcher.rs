//! # Dialogue Dispatcher
//!
//! Runs generation requests on a background tokio runtime and hands the
//! results back to the frame loop through an unbounded channel, so a slow
//! service never stalls the simulation.

use crate::dialogue::{fetch_dialogue, fetch_greeting, DialogueLine, DialogueRequest, DialogueService};
use crate::game::DayTime;
use crate::{IslandError, IslandResult};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// A finished background request.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogueReply {
    /// Line for the conversation identified by `ticket`
    Line { ticket: Uuid, line: DialogueLine },
    /// Island welcome text
    Greeting(String),
}

/// Owns the background runtime and the reply channel.
pub struct DialogueDispatcher {
    runtime: Runtime,
    service: Arc<dyn DialogueService>,
    tx: UnboundedSender<DialogueReply>,
    rx: UnboundedReceiver<DialogueReply>,
    in_flight: usize,
}

impl DialogueDispatcher {
    pub fn new(service: Arc<dyn DialogueService>) -> IslandResult<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("dialogue")
            .enable_all()
            .build()
            .map_err(|e| IslandError::Dialogue(format!("failed to start runtime: {}", e)))?;
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self {
            runtime,
            service,
            tx,
            rx,
            in_flight: 0,
        })
    }

    /// Starts generating a line for the conversation `ticket`.
    pub fn dispatch(&mut self, ticket: Uuid, request: DialogueRequest) {
        log::debug!("Dispatching dialogue {} for {}", ticket, request.name);
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        self.in_flight += 1;
        self.runtime.spawn(async move {
            let line = fetch_dialogue(service, request).await;
            // receiver only goes away on shutdown
            let _ = tx.send(DialogueReply::Line { ticket, line });
        });
    }

    /// Starts generating the island greeting.
    pub fn request_greeting(&mut self, day_time: DayTime) {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        self.in_flight += 1;
        self.runtime.spawn(async move {
            let text = fetch_greeting(service, day_time).await;
            let _ = tx.send(DialogueReply::Greeting(text));
        });
    }

    /// Requests still running.
    pub fn pending(&self) -> usize {
        self.in_flight
    }

    /// Drains every reply that is ready without blocking.
    pub fn poll(&mut self) -> Vec<DialogueReply> {
        let mut replies = Vec::new();
        while let Ok(reply) = self.rx.try_recv() {
            replies.push(reply);
        }
        self.in_flight = self.in_flight.saturating_sub(replies.len());
        replies
    }

    /// Blocks until the next reply arrives. Returns `None` if nothing is
    /// in flight.
    pub fn wait(&mut self) -> Option<DialogueReply> {
        if self.in_flight == 0 {
            return None;
        }
        let reply = self.runtime.block_on(self.rx.recv());
        if reply.is_some() {
            self.in_flight -= 1;
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::OfflineDialogue;
    use crate::game::{Personality, Position, Villager};

    fn request() -> DialogueRequest {
        let villager = Villager::new("v5", "Puddles", "Frog", Personality::Peppy, Position::new(22.0, 5.0));
        DialogueRequest::for_villager(&villager, None)
    }

    #[test]
    fn test_reply_carries_ticket() {
        let mut dispatcher = DialogueDispatcher::new(Arc::new(OfflineDialogue::new())).unwrap();
        let ticket = Uuid::new_v4();
        dispatcher.dispatch(ticket, request());
        assert_eq!(dispatcher.pending(), 1);

        match dispatcher.wait() {
            Some(DialogueReply::Line { ticket: got, line }) => {
                assert_eq!(got, ticket);
                assert!(!line.text.is_empty());
            }
            other => panic!("unexpected reply: {:?}", other),
        }
        assert_eq!(dispatcher.pending(), 0);
        assert!(dispatcher.wait().is_none());
    }

    #[test]
    fn test_greeting_reply() {
        let mut dispatcher = DialogueDispatcher::new(Arc::new(OfflineDialogue::new())).unwrap();
        dispatcher.request_greeting(DayTime::Noon);
        assert!(matches!(dispatcher.wait(), Some(DialogueReply::Greeting(_))));
    }

    #[test]
    fn test_poll_is_empty_when_idle() {
        let mut dispatcher = DialogueDispatcher::new(Arc::new(OfflineDialogue::new())).unwrap();
        assert!(dispatcher.poll().is_empty());
    }
}
