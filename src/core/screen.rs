use crate::core::render;
use crate::domain::model::{Direction, DEG_C, DEG_F};
use crate::domain::ports::StringResources;
use serde::Serialize;

/// State behind the converter screen: what is in the text field and where
/// the switch sits. Everything shown is derived from it again on each
/// [`Screen::view`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    input: String,
    direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    pub header: String,
    pub label: String,
    pub switch_caption: String,
    pub output: String,
}

impl Screen {
    pub fn new(direction: Direction) -> Self {
        Self {
            input: String::new(),
            direction,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn set_direction(&mut self, direction: impl Into<Direction>) {
        self.direction = direction.into();
    }

    pub fn toggle(&mut self) {
        self.direction = self.direction.reversed();
    }

    pub fn view(&self, resources: &impl StringResources) -> ScreenView {
        let from = self.direction.from_scale();
        ScreenView {
            header: resources.head(from, self.direction.to_scale()),
            label: resources.label(from),
            switch_caption: format!("Convert {} to {}?", DEG_F, DEG_C),
            output: render(&self.input, self.direction),
        }
    }
}
