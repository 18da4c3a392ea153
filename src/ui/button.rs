use macroquad::prelude::*;

use super::UiAction;

/// Panel button with hover highlight, bound to one action
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    pub action: UiAction,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>, action: UiAction) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            action,
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        (self.x..=self.x + self.width).contains(&mouse_pos.0)
            && (self.y..=self.y + self.height).contains(&mouse_pos.1)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            Color::from_rgba(255, 170, 60, 255)
        } else {
            Color::from_rgba(180, 90, 20, 255)
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_includes_edges() {
        let btn = Button::new(10.0, 20.0, 100.0, 40.0, "Play", UiAction::TogglePlay);
        assert!(btn.is_hovered((10.0, 20.0)));
        assert!(btn.is_hovered((110.0, 60.0)));
        assert!(btn.is_hovered((50.0, 30.0)));
        assert!(!btn.is_hovered((9.9, 30.0)));
        assert!(!btn.is_hovered((50.0, 60.1)));
    }
}
