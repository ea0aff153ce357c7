pub mod backtracker;
pub mod dead_ends;

pub trait Generator {
    fn step_generation(&mut self);
    fn generate_maze(&mut self) {
        while !self.is_done() {
            self.step_generation();
        }
    }
    fn is_done(&self) -> bool;
}
