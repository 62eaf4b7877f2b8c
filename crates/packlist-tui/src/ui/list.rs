//! Packing-list widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, StatefulWidget, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use packlist_core::Item;

use crate::theme::Theme;

/// Selection and scroll state for the list view.
#[derive(Debug, Default, Clone)]
pub struct ListState {
    /// Currently selected index in the displayed ordering.
    pub selected: usize,
    /// Scroll offset.
    pub offset: usize,
}

impl ListState {
    /// Create new list state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move selection up.
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down.
    pub fn move_down(&mut self, len: usize) {
        self.selected = (self.selected + 1).min(len.saturating_sub(1));
    }

    /// Jump to top.
    pub fn jump_to_top(&mut self) {
        self.selected = 0;
    }

    /// Jump to bottom.
    pub fn jump_to_bottom(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Clamp the selection after the list shrinks or reorders.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        if len == 0 {
            self.selected = 0;
        }
    }

    /// Ensure selected item is visible, adjusting offset if needed.
    pub fn ensure_visible(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + viewport_height {
            self.offset = self.selected - viewport_height + 1;
        }
    }
}

/// Scrollable widget rendering the derived item ordering.
pub struct ListView<'a> {
    items: &'a [Item],
    theme: &'a Theme,
    block: Option<Block<'a>>,
}

impl<'a> ListView<'a> {
    /// Create a new list view.
    pub fn new(items: &'a [Item], theme: &'a Theme) -> Self {
        Self {
            items,
            theme,
            block: None,
        }
    }

    /// Set the block (border) for the widget.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl StatefulWidget for ListView<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner_area = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };

        if inner_area.height == 0 {
            return;
        }

        if self.items.is_empty() {
            let line = Line::styled(
                " Nothing here yet. Press 'a' to add an item.",
                Style::default().fg(self.theme.muted),
            );
            Widget::render(line, inner_area, buf);
            return;
        }

        state.clamp(self.items.len());
        state.ensure_visible(inner_area.height as usize);

        let quantity_width = 4;

        for (i, item) in self
            .items
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(inner_area.height as usize)
        {
            let y = inner_area.y + (i - state.offset) as u16;
            let is_selected = i == state.selected;

            let checkbox = if item.packed { "[x] " } else { "[ ] " };

            let description_style = if item.packed {
                self.theme.packed
            } else {
                self.theme.unpacked
            };

            // Truncate description to the available display width
            let available = inner_area
                .width
                .saturating_sub(checkbox.len() as u16)
                .saturating_sub(quantity_width + 1) as usize;

            let description = truncate_to_width(&item.description, available);

            let padding = " ".repeat(available.saturating_sub(description.width()));
            let quantity = format!("{:>width$}", format!("x{}", item.quantity), width = quantity_width as usize);

            let line = Line::from(vec![
                Span::styled(checkbox, self.theme.checkbox),
                Span::styled(description, description_style),
                Span::raw(padding),
                Span::raw(" "),
                Span::styled(quantity, self.theme.quantity),
            ]);

            let line = if is_selected {
                line.style(self.theme.selected)
            } else {
                line
            };

            let line_area = Rect::new(inner_area.x, y, inner_area.width, 1);
            Widget::render(line, line_area, buf);
        }
    }
}

/// Truncate text to the given display width, ending with an ellipsis.
///
/// Width is measured in terminal cells, so a double-width character
/// only lands when both of its cells still fit before the ellipsis.
fn truncate_to_width(text: &str, available: usize) -> String {
    if text.width() <= available {
        return text.to_string();
    }

    let mut out = String::new();
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if out.width() + char_width + 1 > available {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}
