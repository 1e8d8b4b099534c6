//! # Rating Listener
//!
//! The only data leaving the widget. A host either implements
//! [`RatingListener`] directly or installs a [`ChannelListener`] and polls
//! the receiving end from its event loop.

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Notification emitted by the star bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingEvent {
    /// The user touched the bar and the listener accepted the gesture.
    Start,
    /// The highlighted star changed. Between 1 and 10.
    Pending(u8),
    /// The user released on a rating.
    Final {
        /// Selected rating, between 1 and 10.
        rating: u8,
        /// True if the gesture lasted longer than the swipe threshold.
        swipe: bool,
    },
    /// The rating was abandoned.
    Cancel,
}

/// Callbacks for rating progress.
///
/// A gesture produces one [`RatingListener::on_start_rating`], one or more
/// [`RatingListener::on_pending_rating`], then either a final or a cancel.
pub trait RatingListener {
    /// The user started rating. Return false to abort the gesture.
    fn on_start_rating(&mut self) -> bool;

    /// The highlighted rating changed. Temporary until released.
    fn on_pending_rating(&mut self, rating: u8);

    /// The user selected a final rating.
    fn on_final_rating(&mut self, rating: u8, swipe: bool);

    /// The user canceled the rating.
    fn on_cancel_rating(&mut self);
}

/// Forwards every notification into a channel.
#[derive(Debug, Clone)]
pub struct ChannelListener {
    /// Sending half.
    sender: Sender<RatingEvent>,
    /// Answer given to [`RatingListener::on_start_rating`].
    accept: bool,
}

impl ChannelListener {
    /// Creates a listener that accepts every gesture, plus the receiving end.
    #[must_use]
    pub fn channel() -> (Self, Receiver<RatingEvent>) {
        let (sender, receiver) = unbounded();
        (Self { sender, accept: true }, receiver)
    }

    /// Wraps an existing sender.
    #[must_use]
    pub fn with_sender(sender: Sender<RatingEvent>) -> Self {
        Self { sender, accept: true }
    }

    /// Sets whether new gestures are accepted.
    #[must_use]
    pub fn accepting(mut self, accept: bool) -> Self {
        self.accept = accept;
        self
    }

    fn send(&self, event: RatingEvent) {
        // A dropped receiver means nobody is listening any more.
        let _ = self.sender.send(event);
    }
}

impl RatingListener for ChannelListener {
    fn on_start_rating(&mut self) -> bool {
        if self.accept {
            self.send(RatingEvent::Start);
        }
        self.accept
    }

    fn on_pending_rating(&mut self, rating: u8) {
        self.send(RatingEvent::Pending(rating));
    }

    fn on_final_rating(&mut self, rating: u8, swipe: bool) {
        self.send(RatingEvent::Final { rating, swipe });
    }

    fn on_cancel_rating(&mut self) {
        self.send(RatingEvent::Cancel);
    }
}
