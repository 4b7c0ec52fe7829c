mod rental;

pub use self::rental::*;

/// Folds an event into the state it describes.
pub trait Applier<Event> {
    fn apply(&mut self, event: Event);
}
