use std::{mem, time::Instant};

use rand::Rng;
use wordhunt_core::{Grid, Position};
use wordhunt_generator::{GeneratedPuzzle, PuzzleConfig, PuzzleGenerator, PuzzleSeed, WordBank};

use crate::{
    ElapsedTime, ExtendOutcome, ExtendRejection, GameError, PuzzleClock, PuzzleEvent,
    SelectionEngine, SelectionOutcome, Session,
};

/// Number of distinct highlight colors cycled through by found words.
pub const COLOR_KEY_COUNT: usize = 10;

/// Returns the stable highlight color key for the word at `word_index`.
#[must_use]
pub const fn color_key(word_index: usize) -> usize {
    word_index % COLOR_KEY_COUNT
}

/// Lifecycle state of a [`PuzzleController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PuzzleState {
    /// No puzzle loaded.
    Idle,
    /// A puzzle is being played.
    Active,
    /// Every word has been found.
    Solved,
}

/// How a grid cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellVisual {
    /// Not selected and not part of a found word.
    Plain,
    /// Part of the gesture in progress.
    Selecting,
    /// Part of a found word.
    Found {
        /// Highlight color key of the word, see [`color_key`].
        color_key: usize,
    },
}

/// A word list entry as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry<'a> {
    /// Word list index.
    pub index: usize,
    /// The word's text.
    pub text: &'a str,
    /// Whether the word has been found.
    pub found: bool,
    /// Highlight color key of the word.
    pub color_key: usize,
}

/// Drives a word-search session from start to solve.
///
/// The controller owns the word bank and configuration used to generate
/// puzzles, the current [`Session`], the [`SelectionEngine`] and the
/// [`PuzzleClock`]. Its state moves `Idle → Active → Solved`; [`reset`]
/// returns to `Idle` from anywhere and [`start`] begins a fresh session from
/// anywhere.
///
/// Gesture input is only evaluated while `Active` and is silently ignored
/// otherwise. Notable changes are queued as [`PuzzleEvent`]s.
///
/// [`reset`]: Self::reset
/// [`start`]: Self::start
///
/// # Examples
///
/// ```
/// use std::time::Instant;
///
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
/// use wordhunt_core::{Orientation, PlacedWord, Position};
/// use wordhunt_game::{PuzzleController, PuzzleEvent};
/// use wordhunt_generator::GeneratedPuzzle;
///
/// let words = vec!["cat".to_owned()];
/// let cat = PlacedWord::new("cat", 0, Orientation::Horizontal, Position::new(0, 0));
/// let mut rng = Pcg64::seed_from_u64(0);
/// let puzzle = GeneratedPuzzle::from_placements(5, words, &[cat.clone()], &mut rng)?;
///
/// let now = Instant::now();
/// let mut controller = PuzzleController::default();
/// controller.start_with_puzzle(puzzle, now);
///
/// let path: Vec<_> = cat.positions().collect();
/// controller.submit_selection(&path, now);
///
/// assert!(controller.state().is_solved());
/// assert!(controller.take_events().iter().any(PuzzleEvent::is_solved));
/// # Ok::<(), wordhunt_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleController {
    word_bank: WordBank,
    config: PuzzleConfig,
    session: Option<Session>,
    selection: SelectionEngine,
    clock: PuzzleClock,
    events: Vec<PuzzleEvent>,
}

impl Default for PuzzleController {
    fn default() -> Self {
        Self::new(WordBank::default(), PuzzleConfig::default())
    }
}

impl PuzzleController {
    /// Creates an idle controller generating puzzles from `word_bank` under `config`.
    #[must_use]
    pub fn new(word_bank: WordBank, config: PuzzleConfig) -> Self {
        Self {
            word_bank,
            config,
            session: None,
            selection: SelectionEngine::new(),
            clock: PuzzleClock::new(),
            events: Vec::new(),
        }
    }

    /// Returns the configuration used for the next [`start`](Self::start).
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Replaces the configuration. The running session is not affected.
    pub fn set_config(&mut self, config: PuzzleConfig) {
        self.config = config;
    }

    /// Returns the word bank puzzles are drawn from.
    #[must_use]
    pub fn word_bank(&self) -> &WordBank {
        &self.word_bank
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> PuzzleState {
        match &self.session {
            None => PuzzleState::Idle,
            Some(session) if session.is_solved() => PuzzleState::Solved,
            Some(_) => PuzzleState::Active,
        }
    }

    /// Returns the current session, if a puzzle is loaded.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the letter grid of the current session.
    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.session.as_ref().map(Session::grid)
    }

    /// Generates a new puzzle with `rng` and starts playing it.
    ///
    /// Any session in progress is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Generate`] if the configuration is invalid or a
    /// strict placement policy runs out of attempts. The previous session is
    /// kept in that case.
    pub fn start<R>(&mut self, rng: &mut R, now: Instant) -> Result<(), GameError>
    where
        R: Rng + ?Sized,
    {
        let puzzle = PuzzleGenerator::new(&self.word_bank, &self.config).generate_with_rng(rng)?;
        self.start_with_puzzle(puzzle, now);
        Ok(())
    }

    /// Generates the puzzle determined by `seed` and starts playing it.
    ///
    /// # Errors
    ///
    /// Same as [`start`](Self::start).
    pub fn start_with_seed(&mut self, seed: PuzzleSeed, now: Instant) -> Result<(), GameError> {
        let puzzle = PuzzleGenerator::new(&self.word_bank, &self.config).generate_with_seed(seed)?;
        self.start_with_puzzle(puzzle, now);
        Ok(())
    }

    /// Starts playing an already generated puzzle.
    pub fn start_with_puzzle(&mut self, puzzle: GeneratedPuzzle, now: Instant) {
        let word_count = puzzle.words.len();
        log::info!(
            "starting {size}x{size} puzzle with {word_count} words ({} unplaced)",
            puzzle.unplaced_words().count(),
            size = puzzle.grid.size(),
        );

        self.session = Some(Session::new(puzzle));
        self.selection.cancel();
        self.clock.start(now);
        self.events.push(PuzzleEvent::Started { word_count });

        if word_count == 0 {
            self.finish(now);
        }
    }

    /// Stops the clock and drops the session.
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            log::info!("puzzle reset");
        }
        self.selection.cancel();
        self.clock.reset();
    }

    /// Starts a gesture at `pos`.
    ///
    /// Returns `false` if the gesture was ignored because no puzzle is
    /// active or `pos` lies outside the grid.
    pub fn begin_selection(&mut self, pos: Position) -> bool {
        if !self.accepts_input(pos) {
            return false;
        }
        self.selection.begin(pos);
        true
    }

    /// Offers `pos` as the next cell of the gesture in progress.
    pub fn extend_selection(&mut self, pos: Position) -> ExtendOutcome {
        if !self.accepts_input(pos) {
            return ExtendOutcome::Rejected(ExtendRejection::NotSelecting);
        }
        let outcome = self.selection.extend(pos);
        if let ExtendOutcome::Rejected(reason) = outcome {
            log::trace!("ignored selection step to {pos}: {reason}");
        }
        outcome
    }

    /// Ends the gesture in progress and evaluates it.
    ///
    /// A match marks the word found and highlights its cells; finding the
    /// last word stops the clock and queues [`PuzzleEvent::Solved`].
    ///
    /// Returns `None` if no gesture was in progress or no puzzle is active.
    pub fn end_selection(&mut self, now: Instant) -> Option<SelectionOutcome> {
        let session = self.session.as_mut().filter(|session| !session.is_solved());
        let Some(session) = session else {
            self.selection.cancel();
            return None;
        };

        let outcome = self
            .selection
            .finish(session.grid(), session.words(), session.found_flags())?;

        if let SelectionOutcome::Matched { word_index, path } = &outcome
            && session.mark_found(*word_index, path)
        {
            let word = session.words()[*word_index].clone();
            log::debug!(
                "found {word:?} ({}/{})",
                session.found_count(),
                session.words().len()
            );
            self.events.push(PuzzleEvent::WordFound {
                index: *word_index,
                word,
            });
            if session.is_solved() {
                self.finish(now);
            }
        }
        Some(outcome)
    }

    /// Runs a whole gesture over `path` at once.
    ///
    /// Cells are fed through [`begin_selection`](Self::begin_selection) and
    /// [`extend_selection`](Self::extend_selection), so invalid steps are
    /// dropped exactly as they would be during a drag.
    pub fn submit_selection(&mut self, path: &[Position], now: Instant) -> Option<SelectionOutcome> {
        let (&first, rest) = path.split_first()?;
        if !self.begin_selection(first) {
            return None;
        }
        for &pos in rest {
            self.extend_selection(pos);
        }
        self.end_selection(now)
    }

    /// Advances the clock, queueing [`PuzzleEvent::Tick`] on each new second.
    pub fn tick(&mut self, now: Instant) -> Option<ElapsedTime> {
        let elapsed = self.clock.tick(now)?;
        self.events.push(PuzzleEvent::Tick(elapsed));
        Some(elapsed)
    }

    /// Returns the clock.
    #[must_use]
    pub fn clock(&self) -> &PuzzleClock {
        &self.clock
    }

    /// Returns the elapsed time at `now`.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> ElapsedTime {
        self.clock.elapsed(now)
    }

    /// Drains the queued events.
    pub fn take_events(&mut self) -> Vec<PuzzleEvent> {
        mem::take(&mut self.events)
    }

    /// Returns the cells of the gesture in progress.
    #[must_use]
    pub fn selection_path(&self) -> &[Position] {
        self.selection.path()
    }

    /// Returns how the cell at `pos` should be drawn.
    ///
    /// The gesture in progress is drawn over found-word highlights.
    #[must_use]
    pub fn cell_visual(&self, pos: Position) -> CellVisual {
        if self.selection.is_selected(pos) {
            return CellVisual::Selecting;
        }
        match self.session.as_ref().and_then(|session| session.highlight(pos)) {
            Some(index) => CellVisual::Found {
                color_key: color_key(index),
            },
            None => CellVisual::Plain,
        }
    }

    /// Returns the word list with found flags, in list order.
    pub fn words(&self) -> impl Iterator<Item = WordEntry<'_>> {
        self.session.iter().flat_map(|session| {
            session
                .words()
                .iter()
                .enumerate()
                .map(move |(index, text)| WordEntry {
                    index,
                    text: text.as_str(),
                    found: session.is_found(index),
                    color_key: color_key(index),
                })
        })
    }

    /// Returns the found words in list order.
    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.session.iter().flat_map(Session::found_words)
    }

    fn accepts_input(&self, pos: Position) -> bool {
        self.state().is_active() && self.grid().is_some_and(|grid| grid.contains(pos))
    }

    fn finish(&mut self, now: Instant) {
        self.clock.stop(now);
        self.selection.cancel();
        let elapsed = self.clock.elapsed(now);
        log::info!("puzzle solved in {elapsed}");
        self.events.push(PuzzleEvent::Solved { elapsed });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;
    use wordhunt_core::{Orientation, PlacedWord};
    use wordhunt_generator::PlacementPolicy;

    use super::*;

    fn cat() -> PlacedWord {
        PlacedWord::new("cat", 0, Orientation::Horizontal, Position::new(0, 0))
    }

    fn dog() -> PlacedWord {
        PlacedWord::new("dog", 1, Orientation::Vertical, Position::new(2, 2))
    }

    fn cat_dog_puzzle() -> GeneratedPuzzle {
        let words = vec!["cat".to_owned(), "dog".to_owned()];
        GeneratedPuzzle::from_placements(10, words, &[cat(), dog()], &mut Pcg64::seed_from_u64(3))
            .unwrap()
    }

    fn path(word: &PlacedWord) -> Vec<Position> {
        word.positions().collect()
    }

    fn started(now: Instant) -> PuzzleController {
        let mut controller = PuzzleController::default();
        controller.start_with_puzzle(cat_dog_puzzle(), now);
        controller.take_events();
        controller
    }

    #[test]
    fn test_new_controller_is_idle() {
        let mut controller = PuzzleController::default();
        assert!(controller.state().is_idle());
        assert!(controller.grid().is_none());
        assert_eq!(controller.words().count(), 0);
        assert!(!controller.begin_selection(Position::new(0, 0)));
        assert_eq!(controller.end_selection(Instant::now()), None);
    }

    #[test]
    fn test_start_generates_configured_puzzle() {
        let now = Instant::now();
        let mut controller = PuzzleController::default();
        controller
            .start(&mut Pcg64::seed_from_u64(11), now)
            .unwrap();

        assert!(controller.state().is_active());
        let session = controller.session().unwrap();
        let word_count = session.words().len();
        assert_eq!(session.grid().size(), 10);
        assert!((5..=10).contains(&word_count));
        assert_eq!(controller.found_words().count(), 0);
        assert_eq!(controller.elapsed(now).to_string(), "00:00");
        assert_eq!(
            controller.take_events(),
            [PuzzleEvent::Started { word_count }]
        );
    }

    #[test]
    fn test_start_with_seed_is_reproducible() {
        let now = Instant::now();
        let seed = PuzzleSeed::from_phrase("reproducible");
        let mut a = PuzzleController::default();
        let mut b = PuzzleController::default();
        a.start_with_seed(seed, now).unwrap();
        b.start_with_seed(seed, now).unwrap();
        assert_eq!(a.session(), b.session());
    }

    #[test]
    fn test_start_failure_keeps_previous_session() {
        let now = Instant::now();
        let mut controller = started(now);
        let config = PuzzleConfig::default()
            .grid_size(2)
            .word_count(5..=5)
            .placement_policy(PlacementPolicy::Strict {
                max_grid_attempts: 1,
            });
        controller.set_config(config);

        let result = controller.start(&mut Pcg64::seed_from_u64(0), now);
        assert!(matches!(result, Err(GameError::Generate(_))));
        assert!(controller.state().is_active());
        assert_eq!(controller.grid().unwrap().size(), 10);
    }

    #[test]
    fn test_matching_selection_marks_word_found() {
        let now = Instant::now();
        let mut controller = started(now);

        let outcome = controller.submit_selection(&path(&cat()), now).unwrap();
        assert_eq!(
            outcome,
            SelectionOutcome::Matched {
                word_index: 0,
                path: path(&cat()),
            }
        );
        assert_eq!(controller.found_words().collect::<Vec<_>>(), ["cat"]);
        assert!(controller.state().is_active());
        for pos in cat().positions() {
            assert_eq!(
                controller.cell_visual(pos),
                CellVisual::Found { color_key: 0 }
            );
        }
        assert_eq!(controller.cell_visual(Position::new(5, 5)), CellVisual::Plain);
        assert_eq!(
            controller.take_events(),
            [PuzzleEvent::WordFound {
                index: 0,
                word: "cat".to_owned()
            }]
        );
    }

    #[test]
    fn test_finding_every_word_solves_once() {
        let t0 = Instant::now();
        let mut controller = started(t0);

        controller.submit_selection(&path(&cat()), t0 + Duration::from_secs(2));
        controller.submit_selection(&path(&dog()), t0 + Duration::from_secs(5));

        assert!(controller.state().is_solved());
        assert!(!controller.clock().is_running());
        let later = t0 + Duration::from_secs(60);
        assert_eq!(controller.elapsed(later).as_secs(), 5);
        assert_eq!(controller.tick(later), None);

        // Terminal: further gestures are ignored.
        assert_eq!(controller.submit_selection(&path(&dog()), later), None);
        assert!(!controller.begin_selection(Position::new(0, 0)));

        let events = controller.take_events();
        assert_eq!(events.iter().filter(|e| e.is_solved()).count(), 1);
        assert_eq!(
            events.last(),
            Some(&PuzzleEvent::Solved {
                elapsed: ElapsedTime::from_secs(5)
            })
        );
    }

    #[test]
    fn test_duplicate_submission_is_ignored() {
        let now = Instant::now();
        let mut controller = started(now);

        controller.submit_selection(&path(&cat()), now);
        let outcome = controller.submit_selection(&path(&cat()), now).unwrap();

        assert!(outcome.is_no_match());
        assert_eq!(controller.found_words().count(), 1);
        let events = controller.take_events();
        assert_eq!(events.iter().filter(|e| e.is_word_found()).count(), 1);
    }

    #[test]
    fn test_off_axis_cell_is_dropped_from_path() {
        let now = Instant::now();
        let mut controller = started(now);

        let cells = [Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)];
        let outcome = controller.submit_selection(&cells, now).unwrap();

        assert_eq!(
            outcome,
            SelectionOutcome::NoMatch {
                path: vec![Position::new(0, 0), Position::new(0, 1)]
            }
        );
        assert_eq!(controller.found_words().count(), 0);
        assert!(controller.selection_path().is_empty());
    }

    #[test]
    fn test_selection_visual_during_drag() {
        let now = Instant::now();
        let mut controller = started(now);
        controller.submit_selection(&path(&cat()), now);

        assert!(controller.begin_selection(Position::new(0, 2)));
        assert!(controller.extend_selection(Position::new(1, 2)).is_accepted());
        assert_eq!(
            controller.cell_visual(Position::new(0, 2)),
            CellVisual::Selecting
        );
        assert_eq!(
            controller.cell_visual(Position::new(1, 2)),
            CellVisual::Selecting
        );
        assert_eq!(
            controller.cell_visual(Position::new(0, 1)),
            CellVisual::Found { color_key: 0 }
        );

        controller.end_selection(now);
        assert_eq!(
            controller.cell_visual(Position::new(0, 2)),
            CellVisual::Found { color_key: 0 }
        );
        assert_eq!(controller.cell_visual(Position::new(1, 2)), CellVisual::Plain);
    }

    #[test]
    fn test_out_of_bounds_input_is_ignored() {
        let now = Instant::now();
        let mut controller = started(now);
        assert!(!controller.begin_selection(Position::new(10, 0)));
        assert!(controller.begin_selection(Position::new(0, 9)));
        assert_eq!(
            controller.extend_selection(Position::new(0, 10)),
            ExtendOutcome::Rejected(ExtendRejection::NotSelecting)
        );
        assert_eq!(controller.selection_path(), [Position::new(0, 9)]);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let t0 = Instant::now();
        let mut controller = started(t0);
        controller.submit_selection(&path(&cat()), t0);
        controller.begin_selection(Position::new(2, 2));

        controller.reset();
        assert!(controller.state().is_idle());
        assert!(controller.grid().is_none());
        assert_eq!(controller.found_words().count(), 0);
        assert!(controller.selection_path().is_empty());
        assert_eq!(controller.tick(t0 + Duration::from_secs(3)), None);
        assert_eq!(
            controller.elapsed(t0 + Duration::from_secs(3)),
            ElapsedTime::ZERO
        );

        // Reset is idempotent.
        controller.reset();
        assert!(controller.state().is_idle());
    }

    #[test]
    fn test_tick_queues_events_while_running() {
        let t0 = Instant::now();
        let mut controller = started(t0);

        assert_eq!(controller.tick(t0 + Duration::from_millis(500)), None);
        assert_eq!(
            controller.tick(t0 + Duration::from_millis(1_200)),
            Some(ElapsedTime::from_secs(1))
        );
        assert_eq!(controller.tick(t0 + Duration::from_millis(1_900)), None);
        assert_eq!(
            controller.take_events(),
            [PuzzleEvent::Tick(ElapsedTime::from_secs(1))]
        );
    }

    #[test]
    fn test_restart_clears_found_words() {
        let t0 = Instant::now();
        let mut controller = started(t0);
        controller.submit_selection(&path(&cat()), t0);
        controller.submit_selection(&path(&dog()), t0);
        assert!(controller.state().is_solved());

        controller.start_with_puzzle(cat_dog_puzzle(), t0 + Duration::from_secs(10));
        assert!(controller.state().is_active());
        assert_eq!(controller.found_words().count(), 0);
        assert!(controller.clock().is_running());
    }

    #[test]
    fn test_solve_reset_then_start_new_puzzle() {
        let t0 = Instant::now();
        let mut controller = started(t0);
        controller.submit_selection(&path(&cat()), t0);
        controller.submit_selection(&path(&dog()), t0 + Duration::from_secs(4));
        assert!(controller.state().is_solved());
        let mut events = controller.take_events();

        controller.reset();
        assert!(controller.state().is_idle());

        let t1 = t0 + Duration::from_secs(30);
        controller
            .start(&mut Pcg64::seed_from_u64(23), t1)
            .unwrap();
        assert!(controller.state().is_active());
        assert!(controller.clock().is_running());
        assert_eq!(controller.found_words().count(), 0);
        assert!(controller.selection_path().is_empty());
        assert_eq!(controller.elapsed(t1).to_string(), "00:00");
        assert_ne!(controller.grid(), Some(&cat_dog_puzzle().grid));

        events.extend(controller.take_events());
        assert_eq!(events.iter().filter(|e| e.is_solved()).count(), 1);
        assert!(matches!(
            events.last(),
            Some(PuzzleEvent::Started { word_count }) if (5..=10).contains(word_count)
        ));
    }

    #[test]
    fn test_empty_word_list_is_solved_immediately() {
        let now = Instant::now();
        let puzzle =
            GeneratedPuzzle::from_placements(3, vec![], &[], &mut Pcg64::seed_from_u64(0))
                .unwrap();
        let mut controller = PuzzleController::default();
        controller.start_with_puzzle(puzzle, now);

        assert!(controller.state().is_solved());
        let events = controller.take_events();
        assert_eq!(events.iter().filter(|e| e.is_solved()).count(), 1);
    }

    #[test]
    fn test_word_entries() {
        let now = Instant::now();
        let mut controller = started(now);
        controller.submit_selection(&path(&dog()), now);

        let entries: Vec<_> = controller.words().collect();
        assert_eq!(
            entries,
            [
                WordEntry {
                    index: 0,
                    text: "cat",
                    found: false,
                    color_key: 0,
                },
                WordEntry {
                    index: 1,
                    text: "dog",
                    found: true,
                    color_key: 1,
                },
            ]
        );
    }

    #[test]
    fn test_color_key_wraps() {
        assert_eq!(color_key(0), 0);
        assert_eq!(color_key(9), 9);
        assert_eq!(color_key(10), 0);
        assert_eq!(color_key(23), 3);
    }

    proptest! {
        #[test]
        fn prop_found_words_grow_monotonically(
            gestures in proptest::collection::vec(
                proptest::collection::vec((0_usize..10, 0_usize..10), 1..6),
                0..30,
            ),
        ) {
            let now = Instant::now();
            let mut controller = started(now);
            let mut previous: Vec<String> = vec![];

            for gesture in gestures {
                let cells: Vec<_> = gesture
                    .into_iter()
                    .map(|(row, col)| Position::new(row, col))
                    .collect();
                controller.submit_selection(&cells, now);

                let found: Vec<String> = controller.found_words().map(str::to_owned).collect();
                prop_assert!(previous.iter().all(|word| found.contains(word)));
                prop_assert!(found.iter().all(|word| word == "cat" || word == "dog"));
                previous = found;
            }
            let solved_events = controller
                .take_events()
                .iter()
                .filter(|e| e.is_solved())
                .count();
            prop_assert!(solved_events <= 1);
        }
    }
}
