//! Status line and busy indicator
//!
//! The indicator is a progress bar swept by a timer tick while a request is
//! in flight; the tick subscription only exists while busy.

use std::time::Duration;

use iced::time;
use iced::widget::{container, progress_bar, text};
use iced::{Element, Length, Subscription};

use crate::ui::theme::{ThemeColors, Themable};

/// Percent the sweep advances per tick.
const SWEEP_STEP: f32 = 4.0;

/// Timer tick driving the busy sweep.
#[derive(Debug, Clone)]
pub struct BusyTick;

pub fn busy_tick_subscription() -> Subscription<BusyTick> {
    time::every(Duration::from_millis(40)).map(|_| BusyTick)
}

/// Next sweep position, wrapping at 100.
pub fn advance(position: f32) -> f32 {
    let next = position + SWEEP_STEP;
    if next > 100.0 {
        0.0
    } else {
        next
    }
}

pub fn busy_indicator<'a, Message: 'a>(position: f32) -> Element<'a, Message> {
    progress_bar(0.0..=100.0, position).height(6.0).into()
}

pub fn view<'a, Message: 'a>(status: &'a str, colors: ThemeColors) -> Element<'a, Message> {
    container(text(status).size(13))
        .padding([4.0, 10.0])
        .width(Length::Fill)
        .style(move |_theme| Themable::StatusLine.style(colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_wraps() {
        assert_eq!(advance(0.0), SWEEP_STEP);
        assert_eq!(advance(98.0), 0.0);
        assert_eq!(advance(100.0 - SWEEP_STEP), 100.0);
    }
}
