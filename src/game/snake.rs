use super::action::Direction;
use super::state::Position;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Position>,
    /// Direction applied by the last advance
    direction: Direction,
    /// Direction the next advance will use
    next_direction: Direction,
    /// Set by `grow`, consumed by the next advance
    growing: bool,
}

impl Snake {
    /// Create a new snake with given starting position and direction.
    /// The body trails behind the head; `length` is clamped to at least 1.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dx, -dy));
        }

        Self::from_segments(body, direction)
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        Self {
            body: segments,
            direction,
            next_direction: direction,
            growing: false,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Current direction of movement
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    /// Request a direction for the next advance. Ignored when it would reverse
    /// the direction the snake is currently moving in.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.next_direction = direction;
        }
    }

    /// Where the head lands on the next advance
    pub fn next_head(&self) -> Position {
        self.head().moved_in_direction(self.next_direction)
    }

    /// Move one cell. Keeps the tail when a growth is pending.
    pub fn advance(&mut self) {
        self.direction = self.next_direction;
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);

        if self.growing {
            self.growing = false;
        } else {
            self.body.pop();
        }
    }

    /// Lengthen the snake by one on the next advance
    pub fn grow(&mut self) {
        self.growing = true;
    }

    /// True if the head overlaps any other segment
    pub fn check_self_collision(&self) -> bool {
        self.body[1..].contains(&self.head())
    }

    /// Check if position is occupied by any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false for a constructed snake
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
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
        assert_eq!(snake.segments()[1], Position::new(4, 5));
        assert_eq!(snake.segments()[2], Position::new(3, 5));
        assert_eq!(snake.direction(), Direction::Right);
        assert!(!snake.is_growing());
    }

    #[test]
    fn test_zero_length_is_clamped() {
        let snake = Snake::new(Position::new(2, 2), Direction::Up, 0);
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_from_empty_segments_panics() {
        Snake::from_segments(Vec::new(), Direction::Up);
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.advance();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(
            snake.segments(),
            &[Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );
    }

    #[test]
    fn test_grow_applies_on_next_advance_only() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 2);

        snake.grow();
        assert!(snake.is_growing());
        assert_eq!(snake.len(), 2);

        snake.advance();
        assert_eq!(snake.len(), 3);
        assert!(!snake.is_growing());

        snake.advance();
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.set_direction(Direction::Left);
        snake.advance();

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head(), Position::new(6, 5));
    }

    #[test]
    fn test_reversal_checked_against_applied_direction() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        // Up is queued but not applied yet, so Left is still a reversal
        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Left);
        assert_eq!(snake.next_head(), Position::new(5, 4));

        snake.advance();
        assert_eq!(snake.direction(), Direction::Up);

        // Now Left is a legal turn
        snake.set_direction(Direction::Left);
        snake.advance();
        assert_eq!(snake.direction(), Direction::Left);
        assert_eq!(snake.head(), Position::new(4, 4));
    }

    #[test]
    fn test_self_collision() {
        // Head folded back onto the body
        let snake = Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(4, 6),
                Position::new(4, 5),
                Position::new(5, 5),
            ],
            Direction::Up,
        );
        assert!(snake.check_self_collision());

        let straight = Snake::new(Position::new(5, 5), Direction::Right, 4);
        assert!(!straight.check_self_collision());
    }

    #[test]
    fn test_occupies() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(10, 10)));
    }
}
