use rand::Rng;

use super::super::MazeMaker;

pub trait Backtrack {
    fn backtrack(&mut self);
}

impl<R: Rng> Backtrack for MazeMaker<'_, R> {
    fn backtrack(&mut self) {
        let mut stack = Vec::new();

        let initial_room = self.pick_room();
        self.visit_room(initial_room);
        stack.push(initial_room);

        while let Some(curr) = stack.pop() {
            if let Some(next) = self.pick_unvisited_neighbor(curr) {
                stack.push(curr);
                self.remove_wall_between(curr, next);
                self.visit_room(next);
                stack.push(next);
            }
        }
    }
}
