//! Navigation state machine for one paginated display.

use std::sync::Arc;

use super::render::{DisplayPayload, DisplayRenderer};
use super::state::PaginationState;
use super::window::compute_window;

/// Navigation intent for a paginated display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Wire name used in button custom ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "next",
            Self::Backward => "prev",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "next" => Some(Self::Forward),
            "prev" => Some(Self::Backward),
            _ => None,
        }
    }
}

/// One navigation button's identity and availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigableAction {
    pub direction: Direction,
    pub enabled: bool,
}

/// Full replacement state pushed to the display surface after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOutput {
    pub payload: DisplayPayload,
    pub actions: [NavigableAction; 2],
}

/// Binds the two navigation actions to one page cursor over an injected list.
///
/// The controller is the bounds-enforcement point: a press in a direction
/// that is already disabled is a no-op that still re-renders, so a stale or
/// duplicated button event cannot push the cursor out of range.
pub struct NavigationController {
    entries: Arc<Vec<String>>,
    state: PaginationState,
    renderer: DisplayRenderer,
    actions: [NavigableAction; 2],
}

impl NavigationController {
    pub fn new(entries: Arc<Vec<String>>, page_size: usize, renderer: DisplayRenderer) -> Self {
        let state = PaginationState::new(entries.len(), page_size);
        let mut controller = Self {
            entries,
            state,
            renderer,
            actions: [
                NavigableAction {
                    direction: Direction::Backward,
                    enabled: false,
                },
                NavigableAction {
                    direction: Direction::Forward,
                    enabled: false,
                },
            ],
        };

        controller.refresh_actions();
        controller
    }

    /// Apply one navigation action and return the replacement display state.
    pub fn handle(&mut self, direction: Direction) -> ControllerOutput {
        match direction {
            Direction::Forward if !self.state.is_at_last_page() => self.state.advance(),
            Direction::Backward if !self.state.is_at_first_page() => self.state.retreat(),
            // Disabled direction: keep the cursor, still re-emit.
            _ => {}
        }

        self.refresh_actions();
        self.current_output()
    }

    /// Render the current page without applying a transition.
    pub fn current_output(&self) -> ControllerOutput {
        let window = compute_window(
            &self.entries,
            self.state.page_index(),
            self.state.page_size(),
        );

        ControllerOutput {
            payload: self.renderer.render(&window),
            actions: self.actions,
        }
    }

    pub fn actions(&self) -> [NavigableAction; 2] {
        self.actions
    }

    pub fn page_index(&self) -> usize {
        self.state.page_index()
    }

    fn refresh_actions(&mut self) {
        self.actions = [
            NavigableAction {
                direction: Direction::Backward,
                enabled: !self.state.is_at_first_page(),
            },
            NavigableAction {
                direction: Direction::Forward,
                enabled: !self.state.is_at_last_page(),
            },
        ];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(total: usize, page_size: usize) -> NavigationController {
        let names: Vec<String> = (1..=total).map(|n| format!("Spell {n}")).collect();
        NavigationController::new(Arc::new(names), page_size, DisplayRenderer::new("Spells"))
    }

    fn enabled(output: &ControllerOutput, direction: Direction) -> bool {
        output
            .actions
            .iter()
            .find(|action| action.direction == direction)
            .map(|action| action.enabled)
            .unwrap()
    }

    #[test]
    fn initial_state_disables_backward_only() {
        let controller = controller(45, 20);
        let output = controller.current_output();

        assert!(!enabled(&output, Direction::Backward));
        assert!(enabled(&output, Direction::Forward));
        assert_eq!(output.payload.title, "Spells, Page: 0");
    }

    #[test]
    fn single_page_disables_both_directions() {
        let controller = controller(20, 20);
        let output = controller.current_output();

        assert!(!enabled(&output, Direction::Backward));
        assert!(!enabled(&output, Direction::Forward));
    }

    #[test]
    fn empty_list_renders_and_disables_both_directions() {
        let mut controller = controller(0, 20);
        let output = controller.current_output();

        assert!(output.payload.entries.is_empty());
        assert!(!enabled(&output, Direction::Backward));
        assert!(!enabled(&output, Direction::Forward));

        let after_press = controller.handle(Direction::Forward);
        assert_eq!(after_press, output);
    }

    #[test]
    fn forward_reaches_the_last_partial_page() {
        let mut controller = controller(45, 20);

        controller.handle(Direction::Forward);
        let output = controller.handle(Direction::Forward);

        assert_eq!(controller.page_index(), 2);
        assert_eq!(output.payload.entries.len(), 5);
        assert_eq!(output.payload.entries[0].label, "Spell 41");
        assert_eq!(output.payload.entries[4].label, "Spell 45");
        assert!(enabled(&output, Direction::Backward));
        assert!(!enabled(&output, Direction::Forward));
    }

    #[test]
    fn forward_past_the_end_is_an_idempotent_no_op() {
        let mut controller = controller(45, 20);

        controller.handle(Direction::Forward);
        let at_last = controller.handle(Direction::Forward);
        let pressed_again = controller.handle(Direction::Forward);

        assert_eq!(controller.page_index(), 2);
        assert_eq!(pressed_again, at_last);
    }

    #[test]
    fn backward_at_the_first_page_is_a_no_op() {
        let mut controller = controller(45, 20);

        let before = controller.current_output();
        let after = controller.handle(Direction::Backward);

        assert_eq!(controller.page_index(), 0);
        assert_eq!(after, before);
        assert!(!enabled(&after, Direction::Backward));
    }

    #[test]
    fn forward_then_backward_restores_the_original_output() {
        let mut controller = controller(45, 20);
        controller.handle(Direction::Forward);

        let origin = controller.current_output();
        controller.handle(Direction::Forward);
        let restored = controller.handle(Direction::Backward);

        assert_eq!(restored, origin);
        assert_eq!(controller.page_index(), 1);
    }
}
