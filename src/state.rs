#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ProgressState {
    Running, // A frame is pending and the fill is advancing
    Paused,  // Pending frame canceled, fill frozen where it was
    Elapsed, // Interval reached, waiting for the owner to start the next cycle
}
