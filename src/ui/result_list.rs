//! Search result list with snippet preview

use iced::widget::{button, column, container, scrollable, text};
use iced::{Element, Length};

use crate::app::Message;
use crate::controller::{Controller, Phase};
use crate::ui::theme::{self, Themable};

pub fn view(controller: &Controller) -> Element<'_, Message> {
    let colors = controller.prefs().theme.colors();
    let selected = controller.selected();

    let rows: Vec<Element<'_, Message>> = controller
        .results()
        .titles()
        .iter()
        .enumerate()
        .map(|(i, title)| {
            button(text(title.as_str()).size(14))
                .width(Length::Fill)
                .padding([6.0, 10.0])
                .on_press(Message::ResultSelected(i))
                .style(move |_theme, status| theme::result_row_style(colors, selected == Some(i), status))
                .into()
        })
        .collect();

    let rows: Element<'_, Message> = if controller.results().is_empty() {
        text("No results.").size(14).into()
    } else {
        column(rows).spacing(2).into()
    };

    let list = container(scrollable(rows).height(Length::Fixed(260.0)))
        .padding(4)
        .width(Length::Fill)
        .style(move |_theme| Themable::ResultList.style(colors));

    // One article fetch at a time.
    let fetching = controller.phase() == Phase::FetchingArticle;
    let load = button(text("Load Article").size(14))
        .on_press_maybe((!fetching).then_some(Message::LoadSelected))
        .padding([6.0, 14.0])
        .style(move |_theme, status| theme::button_style(colors, status));

    let preview = controller.preview().map(|snippet| {
        container(
            column![
                text("Article Preview").size(15),
                text(snippet).size(13),
                button(text("Close").size(13))
                    .on_press(Message::PreviewDismissed)
                    .padding([4.0, 10.0])
                    .style(move |_theme, status| theme::button_style(colors, status)),
            ]
            .spacing(8),
        )
        .padding(12)
        .width(Length::Fill)
        .style(move |_theme| Themable::Preview.style(colors))
    });

    column![text("Select an article (click for preview):").size(14), list, load]
        .push_maybe(preview)
        .spacing(10)
        .into()
}
