//! Top control bar: keyword field, search button and preference pickers

use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::preferences::{FontFamily, FontSize, Language, Preferences};
use crate::ui::theme::{self, ThemeName, Themable};

pub fn view<'a>(keyword: &'a str, prefs: &Preferences) -> Element<'a, Message> {
    let colors = prefs.theme.colors();

    let search_row = row![
        text("Search Keyword:").size(14),
        text_input("e.g. Python (programming language)", keyword)
            .on_input(Message::KeywordChanged)
            .on_submit(Message::SearchSubmitted)
            .padding(8)
            .size(15)
            .width(Length::Fixed(360.0))
            .style(move |_theme, status| theme::input_style(colors, status)),
        button(text("Search").size(14))
            .on_press(Message::SearchSubmitted)
            .padding([6.0, 14.0])
            .style(move |_theme, status| theme::button_style(colors, status)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let picker_row = row![
        labeled(
            "Font Size",
            pick_list(FontSize::ALL, Some(prefs.font_size), Message::FontSizeSelected).text_size(13),
        ),
        labeled(
            "Font",
            pick_list(FontFamily::ALL, Some(prefs.font_family), Message::FontFamilySelected).text_size(13),
        ),
        labeled(
            "Lang",
            pick_list(Language::ALL, Some(prefs.language), Message::LanguageSelected).text_size(13),
        ),
        labeled(
            "Theme",
            pick_list(ThemeName::ALL, Some(prefs.theme), Message::ThemeSelected).text_size(13),
        ),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(column![search_row, picker_row].spacing(10))
        .padding(10)
        .width(Length::Fill)
        .style(move |_theme| Themable::ControlBar.style(colors))
        .into()
}

fn labeled<'a>(label: &'a str, picker: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    row![picker.into(), text(label).size(13)]
        .spacing(4)
        .align_y(Alignment::Center)
        .into()
}
