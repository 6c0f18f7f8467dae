//! Notification banners, stacked in the top-right corner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use edgebench_app::notifications::{BannerLevel, Notifications};

use crate::theme::{styles, Palette};

const BANNER_WIDTH: u16 = 48;
const BANNER_HEIGHT: u16 = 4;
/// Older banners beyond this are hidden until the newer ones expire
const MAX_VISIBLE: usize = 3;

pub struct NotificationStack<'a> {
    notifications: &'a Notifications,
    palette: &'a Palette,
}

impl<'a> NotificationStack<'a> {
    pub fn new(notifications: &'a Notifications, palette: &'a Palette) -> Self {
        Self {
            notifications,
            palette,
        }
    }
}

impl Widget for NotificationStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let width = BANNER_WIDTH.min(area.width);
        let x = area.x + area.width - width;

        let banners = self.notifications.iter().collect::<Vec<_>>();
        for (slot, banner) in banners.iter().rev().take(MAX_VISIBLE).enumerate() {
            let y = area.y + slot as u16 * BANNER_HEIGHT;
            if y + BANNER_HEIGHT > area.y + area.height {
                break;
            }
            let rect = Rect::new(x, y, width, BANNER_HEIGHT);
            let title = match banner.level {
                BannerLevel::Error => " error ",
                BannerLevel::Info => " info ",
            };
            let text = Line::from(Span::styled(
                banner.message.clone(),
                styles::banner(p, banner.level),
            ));
            let footer = Line::from(Span::styled(
                banner.posted_at.format("%H:%M:%S").to_string(),
                styles::text_muted(p),
            ));

            Clear.render(rect, buf);
            Paragraph::new(vec![text, footer])
                .wrap(Wrap { trim: true })
                .block(
                    styles::modal_block(p, title)
                        .border_style(styles::banner(p, banner.level)),
                )
                .render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;

    #[test]
    fn test_renders_banner_in_top_right() {
        let mut notifications = Notifications::default();
        notifications.notify(BannerLevel::Error, "Please enter some code to analyze");

        let mut term = TestTerminal::with_size(100, 20);
        term.render_widget(NotificationStack::new(&notifications, &LIGHT), Rect::new(0, 0, 100, 20));

        assert!(term.line_contains(0, "error"));
        assert!(term.buffer_contains("Please enter some code"));
        assert_eq!(term.buffer()[(52, 0)].symbol(), "╭");
    }

    #[test]
    fn test_newest_banner_is_on_top() {
        let mut notifications = Notifications::default();
        notifications.notify(BannerLevel::Info, "first");
        notifications.notify(BannerLevel::Info, "second");

        let mut term = TestTerminal::with_size(100, 20);
        term.render_widget(NotificationStack::new(&notifications, &LIGHT), Rect::new(0, 0, 100, 20));

        assert!(term.line_contains(1, "second"));
        assert!(term.line_contains(5, "first"));
    }

    #[test]
    fn test_empty_stack_draws_nothing() {
        let notifications = Notifications::default();
        let mut term = TestTerminal::with_size(60, 10);
        term.render_widget(NotificationStack::new(&notifications, &LIGHT), Rect::new(0, 0, 60, 10));

        assert!(!term.buffer_contains("info"));
        assert!(!term.buffer_contains("error"));
    }
}
