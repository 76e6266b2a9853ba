//! UI components

pub mod article_view;
pub mod result_list;
pub mod search_bar;
pub mod status_bar;
pub mod theme;
