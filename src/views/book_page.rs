//! Picks the view for the current page's kind and frames it with the
//! page-number footer.

use yew::prelude::*;

use crate::content::{Page, PageKind};
use crate::views::contents::ContentsPage;
use crate::views::content_page::ContentPage;
use crate::views::cover::CoverPage;
use crate::views::quiz_page::QuizPage;
use crate::views::references::ReferencesPage;

#[derive(Properties, PartialEq)]
pub struct BookPageProps {
    pub page: Page,
    pub animations_enabled: bool,
    pub on_navigate: Callback<usize>,
}

#[function_component(BookPage)]
pub fn book_page(props: &BookPageProps) -> Html {
    let inner = match props.page.kind {
        PageKind::Cover => html! {
            <CoverPage page={props.page.clone()} animations_enabled={props.animations_enabled} />
        },
        PageKind::Contents => html! {
            <ContentsPage
                on_navigate={props.on_navigate.clone()}
                animations_enabled={props.animations_enabled}
            />
        },
        PageKind::Quiz => html! {
            <QuizPage animations_enabled={props.animations_enabled} />
        },
        PageKind::References => html! {
            <ReferencesPage animations_enabled={props.animations_enabled} />
        },
        PageKind::Content => html! {
            <ContentPage page={props.page.clone()} animations_enabled={props.animations_enabled} />
        },
    };

    let fade = if props.animations_enabled { "fade-in" } else { "" };

    html! {
        <div class={classes!("book-page", fade)}>
            { inner }
            <div class="page-footer">
                {"Page "}{ props.page.id }
            </div>
        </div>
    }
}
