#[derive(Clone, Debug)]
pub enum Msg {
    Next,
    Previous,
    /// Reveal timer fired for the given carousel revision.
    RevealOverlay(u64),
}
