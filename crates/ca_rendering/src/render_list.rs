use crate::types::{Color, DrawStyle, Rectangle};

/// Platform-specific backend for executing render items.
pub trait RenderBackend {
    type Error;

    fn draw_rectangle(&mut self, rect: Rectangle, style: &DrawStyle) -> Result<(), Self::Error>;

    fn draw_selection_border(
        &mut self,
        rect: Rectangle,
        color: Color,
        width: f32,
    ) -> Result<(), Self::Error>;
}

/// Render primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderItem {
    /// Rectangle.
    Rectangle {
        rect: Rectangle,
        style: DrawStyle,
        z_order: i32,
    },

    /// Selection outline (stroke only, never filled).
    SelectionBorder {
        rect: Rectangle,
        color: Color,
        width: f32,
        z_order: i32,
    },
}

impl RenderItem {
    /// Get z-order for sorting.
    pub fn z_order(&self) -> i32 {
        match self {
            RenderItem::Rectangle { z_order, .. } => *z_order,
            RenderItem::SelectionBorder { z_order, .. } => *z_order,
        }
    }
}

/// Z-order layer constants.
pub mod z_order {
    /// Background (sample bitmap).
    pub const BACKGROUND: i32 = 0;
    /// Selection border.
    pub const SELECTION_BORDER: i32 = 300;
}

/// Render list.
#[derive(Debug, Default)]
pub struct RenderList {
    items: Vec<RenderItem>,
}

impl RenderList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn submit(&mut self, item: RenderItem) {
        self.items.push(item);
    }

    pub fn sort_by_z_order(&mut self) {
        self.items.sort_by_key(|item| item.z_order());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderItem> {
        self.items.iter()
    }

    /// Execute all items against a backend.
    pub fn execute<B: RenderBackend>(&mut self, backend: &mut B) -> Result<(), B::Error> {
        self.sort_by_z_order();

        for item in &self.items {
            Self::render_item(backend, item)?;
        }

        Ok(())
    }

    fn render_item<B: RenderBackend>(backend: &mut B, item: &RenderItem) -> Result<(), B::Error> {
        match item {
            RenderItem::Rectangle { rect, style, .. } => backend.draw_rectangle(*rect, style)?,
            RenderItem::SelectionBorder {
                rect, color, width, ..
            } => backend.draw_selection_border(*rect, *color, *width)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderBackend, RenderItem, RenderList, z_order};
    use crate::types::{Color, DrawStyle, Rectangle};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl RenderBackend for Recorder {
        type Error = ();

        fn draw_rectangle(&mut self, _rect: Rectangle, _style: &DrawStyle) -> Result<(), ()> {
            self.calls.push("rectangle");
            Ok(())
        }

        fn draw_selection_border(
            &mut self,
            _rect: Rectangle,
            _color: Color,
            _width: f32,
        ) -> Result<(), ()> {
            self.calls.push("border");
            Ok(())
        }
    }

    #[test]
    fn execute_sorts_by_z_order() {
        let mut list = RenderList::with_capacity(2);
        list.submit(RenderItem::SelectionBorder {
            rect: Rectangle::new(0.0, 0.0, 10.0, 10.0),
            color: Color::RED,
            width: 5.0,
            z_order: z_order::SELECTION_BORDER,
        });
        list.submit(RenderItem::Rectangle {
            rect: Rectangle::new(0.0, 0.0, 100.0, 100.0),
            style: DrawStyle::default(),
            z_order: z_order::BACKGROUND,
        });

        let mut backend = Recorder::default();
        list.execute(&mut backend).unwrap();
        assert_eq!(backend.calls, vec!["rectangle", "border"]);
    }
}
