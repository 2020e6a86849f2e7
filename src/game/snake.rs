use super::types::{Direction, Position};

/// The player's snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Deferred growth: the next advance keeps the tail
    grow_pending: bool,
}

impl Snake {
    /// Create a new snake with the given head position and direction.
    /// The body is laid out backward along the initial heading.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        assert!(length > 0, "snake length must be positive");

        let (dx, dy) = direction.delta();
        let mut body = vec![head];
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dx, -dy));
        }

        Self {
            body,
            direction,
            grow_pending: false,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Body segments head-first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// True iff the snake covers the given cell
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Advance one cell. The requested direction is adopted unless it would
    /// reverse the current heading; reversals are silently ignored. The tail
    /// retracts unless a growth is pending, in which case the pending flag is
    /// consumed and the snake gains one segment.
    ///
    /// This is the only mutator of body and direction. It does not check
    /// board bounds or food; that is the engine's job.
    pub fn advance(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.direction = requested;
        }

        let new_head = self.head().moved_in(self.direction);
        self.body.insert(0, new_head);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop();
        }
    }

    /// Schedule growth for the next advance
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    /// True iff the head overlaps any other body segment
    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body[1..].contains(&head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(3, 5));
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.advance(Direction::Right);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(*snake.body.last().unwrap(), Position::new(4, 5));
    }

    #[test]
    fn test_deferred_growth() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.grow();
        assert_eq!(snake.len(), 3, "growth must not apply before an advance");

        snake.advance(Direction::Right);
        assert_eq!(snake.len(), 4);

        // Pending flag was consumed, next advance is back to normal
        snake.advance(Direction::Right);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_turn_adopted() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        snake.advance(Direction::Down);
        assert_eq!(snake.direction, Direction::Down);
        assert_eq!(snake.head(), Position::new(5, 6));
    }

    #[test]
    fn test_reversal_rejected() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        snake.advance(Direction::Left);
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.head(), Position::new(6, 5));
    }

    #[test]
    fn test_self_collision_detection() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 5);
        assert!(!snake.collides_with_self());

        // Tight clockwise loop: the fourth turn lands on the body
        snake.advance(Direction::Down);
        snake.advance(Direction::Left);
        snake.advance(Direction::Up);
        assert!(snake.collides_with_self());
    }

    #[test]
    fn test_occupies() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(4, 5)));
        assert!(!snake.occupies(Position::new(6, 5)));
    }
}
