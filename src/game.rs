use std::collections::HashSet;
use std::fmt;
use std::ops::ControlFlow;

use log::info;

use crate::observer::{LogObserver, SearchObserver};
use crate::solution;
use crate::totem::{Direction, Position, Role, Totem};

/// One recorded pull: which totem moved and which way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub totem: String,
    pub direction: Direction,
}

impl Breadcrumb {
    pub fn new(totem: impl Into<String>, direction: Direction) -> Self {
        Self {
            totem: totem.into(),
            direction,
        }
    }
}

/// Positions of every totem in declaration order. Names never change during a
/// search, so this identifies a board state as well as `(name, row, col)` would.
type BoardState = Vec<Position>;

#[derive(Debug)]
pub struct Game<O = LogObserver> {
    /// Goats in declaration order, then Pete.
    totems: Vec<Totem>,
    pete: usize,
    target: Position,
    /// States on the current root-to-node path only.
    states: HashSet<BoardState>,
    breadcrumbs: Vec<Breadcrumb>,
    solutions: Vec<Vec<Breadcrumb>>,
    observer: O,
}

impl Game {
    pub fn new(goats: Vec<Totem>, pete: Totem, target: Position) -> Self {
        assert!(
            goats.iter().all(|goat| goat.role() == Role::Goat),
            "only goats may be passed as goats"
        );
        assert_eq!(pete.role(), Role::Pete, "{} is not Pete", pete);

        let mut totems = goats;
        totems.push(pete);

        Self {
            pete: totems.len() - 1,
            totems,
            target,
            states: HashSet::new(),
            breadcrumbs: Vec::new(),
            solutions: Vec::new(),
            observer: LogObserver,
        }
    }
}

impl<O: SearchObserver> Game<O> {
    pub fn with_observer<P: SearchObserver>(self, observer: P) -> Game<P> {
        Game {
            totems: self.totems,
            pete: self.pete,
            target: self.target,
            states: self.states,
            breadcrumbs: self.breadcrumbs,
            solutions: self.solutions,
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn totems(&self) -> &[Totem] {
        &self.totems
    }

    pub fn pete(&self) -> &Totem {
        &self.totems[self.pete]
    }

    pub fn target(&self) -> Position {
        self.target
    }

    /// Moves on the path currently being explored.
    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    /// Number of board states on the path currently being explored.
    pub fn open_states(&self) -> usize {
        self.states.len()
    }

    /// Raw solutions in discovery order.
    pub fn solutions(&self) -> &[Vec<Breadcrumb>] {
        &self.solutions
    }

    /// Searches every pull sequence that brings Pete onto the target.
    ///
    /// With `find_first` the whole search stops as soon as one solution is
    /// recorded. In both modes every totem is back on its starting cell when
    /// this returns.
    pub fn run_search(&mut self, find_first: bool) {
        info!(
            "Searching {} for {} with {} totems",
            if find_first { "first solution" } else { "all solutions" },
            self.target,
            self.totems.len()
        );

        if self.explore(find_first).is_break() {
            self.observer.stopped(&self.solutions);
        }

        info!("Search finished with {} solutions", self.solutions.len());
    }

    /// Formatted solutions, shortest first.
    pub fn list_solutions(&self) -> Vec<String> {
        solution::format_all(&self.solutions)
    }

    fn board_state(&self) -> BoardState {
        self.totems.iter().map(Totem::position).collect()
    }

    fn explore(&mut self, find_first: bool) -> ControlFlow<()> {
        let state = self.board_state();
        if self.states.contains(&state) {
            self.observer.pruned(&self.totems);
            return ControlFlow::Continue(());
        }

        self.states.insert(state.clone());
        self.observer.visited(&self.totems);

        let flow = self.expand(find_first);

        self.states.remove(&state);
        flow
    }

    fn expand(&mut self, find_first: bool) -> ControlFlow<()> {
        if self.totems[self.pete].position() == self.target {
            self.observer.solution_found(&self.breadcrumbs);
            self.solutions.push(self.breadcrumbs.clone());
            return ControlFlow::Continue(());
        }

        for puller in 0..self.totems.len() {
            for pulled in 0..self.totems.len() {
                if puller == pulled
                    || !self.totems[puller].can_pull(&self.totems[pulled], &self.totems)
                {
                    continue;
                }

                if find_first && !self.solutions.is_empty() {
                    return ControlFlow::Break(());
                }

                if self.pull(puller, pulled, find_first).is_break() {
                    return ControlFlow::Break(());
                }
            }
        }

        ControlFlow::Continue(())
    }

    /// Applies one pull, explores below it and undoes it again.
    fn pull(&mut self, puller: usize, pulled: usize, find_first: bool) -> ControlFlow<()> {
        let past = self.totems[pulled].position();
        let future = self.totems[puller].pull_destination(&self.totems[pulled]);

        self.observer
            .pulling(&self.totems[puller], &self.totems[pulled], future);

        let name = self.totems[pulled].name().to_string();
        self.breadcrumbs
            .push(Breadcrumb::new(name, Direction::between(past, future)));
        self.totems[pulled].set_position(future);

        let flow = self.explore(find_first);

        self.breadcrumbs.pop();
        self.totems[pulled].set_position(past);
        flow
    }
}

impl<O> fmt::Display for Game<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for totem in &self.totems {
            writeln!(f, "{}", totem)?;
        }
        write!(f, "target {}", self.target)
    }
}
