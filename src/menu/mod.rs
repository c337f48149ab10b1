//! Menu screens shown around the game

/// Which screen the human mode is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Options,
    /// A game is on screen, running or over
    Playing,
}

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuItem {
    Play,
    Options,
    Quit,
}

impl MainMenuItem {
    pub const ALL: [MainMenuItem; 3] = [Self::Play, Self::Options, Self::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Play => "Play Game",
            Self::Options => "Options",
            Self::Quit => "Quit",
        }
    }
}

/// Entries of the options screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsItem {
    Difficulty,
    SnakeColor,
    FoodColor,
    Back,
}

impl OptionsItem {
    pub const ALL: [OptionsItem; 4] = [
        Self::Difficulty,
        Self::SnakeColor,
        Self::FoodColor,
        Self::Back,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Difficulty => "Difficulty",
            Self::SnakeColor => "Snake Color",
            Self::FoodColor => "Food Color",
            Self::Back => "Back",
        }
    }
}

/// A vertical list with a wrapping cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu<T: 'static> {
    items: &'static [T],
    selected: usize,
}

impl<T: Copy + 'static> Menu<T> {
    /// `items` must not be empty
    pub fn new(items: &'static [T]) -> Self {
        Self { items, selected: 0 }
    }

    pub fn items(&self) -> &'static [T] {
        self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> T {
        self.items[self.selected]
    }

    pub fn up(&mut self) {
        self.selected = (self.selected + self.items.len() - 1) % self.items.len();
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}
