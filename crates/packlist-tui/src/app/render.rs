//! Application rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, StatefulWidget, Widget};

use packlist_core::{Item, PackingStats, SortOrder};

use crate::theme::Theme;
use crate::ui::{format_relative_time, AppLayout, HelpOverlay, ListState, ListView};

use super::form::{AddForm, FormFocus, MAX_QUANTITY, MIN_QUANTITY};
use super::AppMode;

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub mode: AppMode,
    pub theme: &'a Theme,
    pub order: SortOrder,
    /// Items in the derived display ordering.
    pub items: &'a [Item],
    pub stats: PackingStats,
    pub show_details: bool,
    pub form: Option<&'a AddForm>,
    pub message: Option<&'a (bool, String)>,
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer, list_state: &mut ListState) {
    // Fill entire area with theme background color
    let base_style = Style::default()
        .bg(ctx.theme.background)
        .fg(ctx.theme.foreground);
    buf.set_style(area, base_style);

    let layout = AppLayout::new(area, ctx.show_details);

    render_header(ctx, layout.header, buf);
    render_list(ctx, layout.main, buf, list_state);

    if let Some(details_area) = layout.details {
        render_details(ctx, details_area, buf, list_state);
    }

    render_stats(ctx, layout.stats, buf);
    render_footer(ctx, layout.footer, buf);

    // Render overlays
    match ctx.mode {
        AppMode::Help => {
            HelpOverlay::new(ctx.theme).render(area, buf);
        }
        AppMode::Adding => {
            if let Some(form) = ctx.form {
                render_add_form(ctx, form, area, buf);
            }
        }
        _ => {}
    }
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let title = Span::styled(" packlist ", ctx.theme.title.add_modifier(Modifier::BOLD));

    let counts = Span::styled(
        format!(
            " {} items, {} packed ",
            ctx.stats.total, ctx.stats.packed
        ),
        ctx.theme.header,
    );

    let sort = Span::styled(
        format!(" sort: {} ", ctx.order.short_label()),
        Style::default().fg(ctx.theme.info),
    );

    let status = if let Some((success, msg)) = ctx.message {
        let color = if *success {
            ctx.theme.success
        } else {
            ctx.theme.warning
        };
        Span::styled(format!(" {msg} "), Style::default().fg(color))
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![title, Span::raw(" "), counts, sort, status]);

    Paragraph::new(line).style(ctx.theme.header).render(area, buf);
}

fn render_list(ctx: &RenderContext, area: Rect, buf: &mut Buffer, list_state: &mut ListState) {
    let title = match ctx.order {
        SortOrder::Insertion => " My Travel List ".to_string(),
        order => format!(" My Travel List ({order}) "),
    };

    let list_view = ListView::new(ctx.items, ctx.theme).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ctx.theme.border)
            .title(title)
            .title_style(ctx.theme.title),
    );

    StatefulWidget::render(list_view, area, buf, list_state);
}

fn render_details(ctx: &RenderContext, area: Rect, buf: &mut Buffer, list_state: &ListState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ctx.theme.border)
        .title(" Details ")
        .title_style(ctx.theme.title);

    let inner = block.inner(area);
    block.render(area, buf);

    let Some(item) = ctx.items.get(list_state.selected) else {
        return;
    };

    let packed_span = if item.packed {
        Span::styled("yes", Style::default().fg(ctx.theme.success))
    } else {
        Span::styled("not yet", Style::default().fg(ctx.theme.warning))
    };

    let lines = vec![
        Line::from(Span::styled(
            item.description.to_string(),
            ctx.theme.title.add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Quantity: ", ctx.theme.help_desc),
            Span::raw(item.quantity.to_string()),
        ]),
        Line::from(vec![Span::styled("Packed: ", ctx.theme.help_desc), packed_span]),
        Line::from(vec![
            Span::styled("Added: ", ctx.theme.help_desc),
            Span::raw(format_relative_time(item.added_at)),
        ]),
    ];

    Paragraph::new(lines).render(inner, buf);
}

fn render_stats(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let line = Line::styled(format!(" {}", ctx.stats.summary()), ctx.theme.stats);
    Paragraph::new(line).render(area, buf);
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let keys: Vec<(&str, &str)> = vec![
        ("j/k", "Nav"),
        ("Spc", "Pack"),
        ("a", "Add"),
        ("d", "Del"),
        ("s", "Sort"),
        ("i", "Info"),
        ("?", "Help"),
        ("q", "Quit"),
    ];

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(format!(" {key} "), ctx.theme.help_key),
                Span::styled(format!("{desc} "), ctx.theme.help_desc),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .style(ctx.theme.footer)
        .render(area, buf);
}

fn render_add_form(ctx: &RenderContext, form: &AddForm, area: Rect, buf: &mut Buffer) {
    let popup_width = 46.min(area.width.saturating_sub(4));
    let popup_height = 8.min(area.height.saturating_sub(2));

    let popup_x = (area.width.saturating_sub(popup_width)) / 2 + area.x;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2 + area.y;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(" Add Item ")
        .title_style(ctx.theme.title)
        .borders(Borders::ALL)
        .border_style(ctx.theme.border);

    let inner = block.inner(popup_area);
    block.render(popup_area, buf);

    let description_label = if form.focus() == FormFocus::Description {
        Span::styled("Description: ", ctx.theme.form_focus)
    } else {
        Span::styled("Description: ", ctx.theme.form_label)
    };

    // Split the buffer at the cursor so the cursor cell renders reversed
    let (before, rest) = form.buffer().split_at(form.cursor());
    let (cursor_char, after) = match rest.chars().next() {
        Some(c) => (c.to_string(), &rest[c.len_utf8()..]),
        None => (" ".to_string(), ""),
    };

    let quantity_label = if form.focus() == FormFocus::Quantity {
        Span::styled("Quantity:    ", ctx.theme.form_focus)
    } else {
        Span::styled("Quantity:    ", ctx.theme.form_label)
    };

    let quantity_value = format!(
        "{} {} {}",
        if form.quantity() > MIN_QUANTITY { "<" } else { " " },
        form.quantity(),
        if form.quantity() < MAX_QUANTITY { ">" } else { " " },
    );

    let lines = vec![
        Line::styled("What do you need to pack?", ctx.theme.help_desc),
        Line::raw(""),
        Line::from(vec![
            description_label,
            Span::styled(before.to_string(), ctx.theme.form_input),
            Span::styled(cursor_char, ctx.theme.form_cursor),
            Span::styled(after.to_string(), ctx.theme.form_input),
        ]),
        Line::from(vec![
            quantity_label,
            Span::styled(quantity_value, ctx.theme.form_input),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" Enter ", ctx.theme.help_key),
            Span::styled("add ", ctx.theme.help_desc),
            Span::styled(" Tab ", ctx.theme.help_key),
            Span::styled("field ", ctx.theme.help_desc),
            Span::styled(" Esc ", ctx.theme.help_key),
            Span::styled("cancel ", ctx.theme.help_desc),
        ]),
    ];

    Paragraph::new(lines).render(inner, buf);
}
