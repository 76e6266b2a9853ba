//! Article panel: thumbnail, body text and export actions

use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Element, Font, Length};

use crate::app::Message;
use crate::backend::ArticleView;
use crate::export::ExportFormat;
use crate::preferences::Preferences;
use crate::ui::theme::{self, Themable, ThemeColors};

pub fn view<'a>(
    article: &'a ArticleView,
    thumbnail: Option<&'a image::Handle>,
    prefs: &Preferences,
) -> Element<'a, Message> {
    let colors = prefs.theme.colors();
    let font = Font::with_name(prefs.font_family.name());

    let picture = thumbnail.map(|handle| {
        container(image(handle.clone()).width(200).height(200)).center_x(Length::Fill)
    });

    let body = container(
        scrollable(
            container(
                text(article.body_text.as_str())
                    .size(prefs.font_size.points())
                    .font(font),
            )
            .padding(12)
            .width(Length::Fill),
        )
        .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_theme| Themable::ArticleBody.style(colors));

    let actions = row![
        action("Save as PDF", Message::Export(ExportFormat::Pdf), colors),
        action("Save as TXT", Message::Export(ExportFormat::Txt), colors),
        action("Save as DOCX", Message::Export(ExportFormat::Docx), colors),
        action("Back to List", Message::BackToList, colors),
    ]
    .spacing(8);

    column![text(article.title.as_str()).size(20).font(font)]
        .push_maybe(picture)
        .push(body)
        .push(actions)
        .spacing(10)
        .height(Length::Fill)
        .into()
}

fn action<'a>(label: &'a str, message: Message, colors: ThemeColors) -> Element<'a, Message> {
    button(text(label).size(14))
        .on_press(message)
        .padding([6.0, 14.0])
        .style(move |_theme, status| theme::button_style(colors, status))
        .into()
}
