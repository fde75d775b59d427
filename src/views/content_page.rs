//! Renders a content page's block sequence. Collapsible sections and
//! revealable examples keep their toggle state here, keyed by block
//! position, and the state lives only as long as the page view.

use yew::prelude::*;

use crate::content::{Block, Page};
use crate::views::venn::VennDiagram;

#[derive(Properties, PartialEq)]
pub struct ContentPageProps {
    pub page: Page,
    pub animations_enabled: bool,
}

/// Blocks that render without any local state. Nested blocks inside
/// collapsibles always fall in this group.
fn render_basic(block: &Block) -> Html {
    match block {
        Block::Text(text) => html! { <p class="body-text">{ *text }</p> },
        Block::Heading { level, text } => match level {
            1 => html! { <h1 class="content-heading">{ *text }</h1> },
            2 => html! { <h2 class="content-heading">{ *text }</h2> },
            _ => html! { <h3 class="content-heading">{ *text }</h3> },
        },
        Block::Definition(text) => html! {
            <div class="definition">
                <div class="definition-tag">{"Definition"}</div>
                <div>{ *text }</div>
            </div>
        },
        Block::List { ordered, items } => {
            let entries = items.iter().map(|item| html! { <li>{ *item }</li> });
            if *ordered {
                html! { <ol class="content-list">{ for entries }</ol> }
            } else {
                html! { <ul class="content-list">{ for entries }</ul> }
            }
        }
        Block::Formula { formula, description } => html! {
            <div class="formula">
                <div class="formula-body mono">{ *formula }</div>
                if let Some(description) = description {
                    <div class="formula-description">{ *description }</div>
                }
            </div>
        },
        Block::Table { headers, rows } => html! {
            <div class="table-wrap">
                <table class="content-table">
                    <thead>
                        <tr>
                            { for headers.iter().map(|h| html! { <th>{ *h }</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for rows.iter().map(|row| html! {
                                <tr>
                                    { for row.iter().map(|cell| html! { <td>{ *cell }</td> }) }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        },
        // Stateful variants are handled by the page component itself.
        Block::Example { .. } | Block::Venn { .. } | Block::Collapsible { .. } => html! {},
    }
}

fn toggle(handle: &UseStateHandle<Vec<usize>>, idx: usize) {
    let mut open = (**handle).clone();
    if let Some(pos) = open.iter().position(|&i| i == idx) {
        open.remove(pos);
    } else {
        open.push(idx);
    }
    handle.set(open);
}

#[function_component(ContentPage)]
pub fn content_page(props: &ContentPageProps) -> Html {
    let expanded_sections = use_state(Vec::<usize>::new);
    let revealed_examples = use_state(Vec::<usize>::new);

    let fade = if props.animations_enabled { "fade-in" } else { "" };

    let render_block = |idx: usize, block: &Block| -> Html {
        match block {
            Block::Example { title, lines } => {
                let revealed = revealed_examples.contains(&idx);
                let onclick = {
                    let revealed_examples = revealed_examples.clone();
                    Callback::from(move |_| toggle(&revealed_examples, idx))
                };
                html! {
                    <div class="example">
                        <button class="example-toggle" {onclick}>
                            <span>{"Example: "}{ *title }</span>
                            <span>{ if revealed { "🙈" } else { "👁" } }</span>
                        </button>
                        if revealed {
                            <div class={classes!("example-body", fade)}>
                                { for lines.iter().map(|line| html! { <div>{ *line }</div> }) }
                            </div>
                        }
                    </div>
                }
            }
            Block::Venn { title, set_a, set_b, op } => html! {
                <div class="venn-block">
                    <h4 class="venn-title">{ *title }</h4>
                    <VennDiagram
                        set_a={set_a.clone()}
                        set_b={set_b.clone()}
                        op={*op}
                        animations_enabled={props.animations_enabled}
                    />
                </div>
            },
            Block::Collapsible { title, blocks } => {
                let expanded = expanded_sections.contains(&idx);
                let onclick = {
                    let expanded_sections = expanded_sections.clone();
                    Callback::from(move |_| toggle(&expanded_sections, idx))
                };
                html! {
                    <div class="collapsible">
                        <button class="collapsible-toggle" {onclick}>
                            <span>{ *title }</span>
                            <span>{ if expanded { "▲" } else { "▼" } }</span>
                        </button>
                        if expanded {
                            <div class={classes!("collapsible-body", fade)}>
                                { for blocks.iter().map(render_basic) }
                            </div>
                        }
                    </div>
                }
            }
            other => render_basic(other),
        }
    };

    html! {
        <div class="content-page">
            <div class="page-title">
                <h1>{ props.page.title }</h1>
                if let Some(subtitle) = props.page.subtitle {
                    <p class="page-subtitle">{ subtitle }</p>
                }
            </div>

            <div class="page-blocks">
                {
                    for props.page.blocks.iter().enumerate().map(|(idx, block)| html! {
                        <div class={fade}>
                            { render_block(idx, block) }
                        </div>
                    })
                }
            </div>
        </div>
    }
}
