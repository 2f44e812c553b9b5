use crate::ElapsedTime;

/// Notifications produced by [`PuzzleController`](crate::PuzzleController)
/// for the rendering layer.
///
/// Events are queued in the order they happen and drained with
/// [`PuzzleController::take_events`](crate::PuzzleController::take_events).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum PuzzleEvent {
    /// A new session started.
    Started {
        /// Number of words in the word list.
        word_count: usize,
    },
    /// A word was found.
    WordFound {
        /// Word list index.
        index: usize,
        /// The word's text.
        word: String,
    },
    /// The clock crossed a whole-second boundary.
    Tick(ElapsedTime),
    /// Every word has been found. Emitted once per session.
    Solved {
        /// Final time.
        elapsed: ElapsedTime,
    },
}
