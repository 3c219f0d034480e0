pub mod state;
use state::ThreadFinderState;

pub trait ThreadFinderStateAccess {
    fn thread_finder_state(&self) -> &ThreadFinderState;
    fn thread_finder_state_mut(&mut self) -> &mut ThreadFinderState;
}
