//! The chapter quiz: multiple-choice questions answered in place,
//! locked on submit, scored by `crate::quiz`, and resettable.

use yew::prelude::*;

use crate::quiz::{questions, QuizState};

#[derive(Properties, PartialEq)]
pub struct QuizPageProps {
    pub animations_enabled: bool,
}

fn option_class(state: &QuizState, question: usize, option: usize, correct: usize) -> &'static str {
    let selected = state.selected(question) == Some(option);
    if state.submitted() {
        if option == correct {
            "option option-correct"
        } else if selected {
            "option option-wrong"
        } else {
            "option option-muted"
        }
    } else if selected {
        "option option-selected"
    } else {
        "option"
    }
}

#[function_component(QuizPage)]
pub fn quiz_page(props: &QuizPageProps) -> Html {
    let bank = questions();
    let state = use_state(|| QuizState::new(questions().len()));

    let on_select = {
        let state = state.clone();
        Callback::from(move |(question, option): (usize, usize)| {
            let mut next = (*state).clone();
            next.select(question, option);
            state.set(next);
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            next.submit();
            state.set(next);
        })
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            next.reset();
            state.set(next);
        })
    };

    let score = state.score(&bank);
    let percentage = state.percentage(&bank);
    let (score_class, score_message) = if percentage >= 80 {
        ("score-banner score-high", "Excellent! You have a strong understanding of sets.")
    } else if percentage >= 60 {
        ("score-banner score-mid", "Good job! Review the incorrect answers to strengthen your knowledge.")
    } else {
        ("score-banner score-low", "Keep studying! Review the concepts and try again.")
    };

    let fade = if props.animations_enabled { "fade-in" } else { "" };

    html! {
        <div class="quiz-page">
            <div class="page-title">
                <h1>{"Chapter Quiz"}</h1>
                <p class="page-subtitle">{"Test your understanding of sets and set operations"}</p>

                if state.submitted() {
                    <div class={classes!(score_class, fade)}>
                        <div class="score-line">
                            {"Score: "}{ score }{"/"}{ bank.len() }{" ("}{ percentage }{"%)"}
                        </div>
                        <div>{ score_message }</div>
                    </div>
                }
            </div>

            <div class="quiz-questions">
                {
                    for bank.iter().enumerate().map(|(qi, question)| {
                        html! {
                            <div class={classes!("question-card", fade)}>
                                <div class="question-number">{ qi + 1 }</div>
                                <div class="question-body">
                                    <h3>{ question.prompt }</h3>
                                    <div class="options">
                                        {
                                            for question.options.iter().enumerate().map(|(oi, option)| {
                                                let onclick = {
                                                    let on_select = on_select.clone();
                                                    Callback::from(move |_| on_select.emit((qi, oi)))
                                                };
                                                let marker = if state.submitted() {
                                                    if oi == question.correct {
                                                        "✓"
                                                    } else if state.selected(qi) == Some(oi) {
                                                        "✗"
                                                    } else {
                                                        ""
                                                    }
                                                } else {
                                                    ""
                                                };
                                                html! {
                                                    <button
                                                        class={option_class(&state, qi, oi, question.correct)}
                                                        disabled={state.submitted()}
                                                        {onclick}
                                                    >
                                                        <span class="mono">{ *option }</span>
                                                        <span class="option-marker">{ marker }</span>
                                                    </button>
                                                }
                                            })
                                        }
                                    </div>

                                    if state.submitted() {
                                        <div class={classes!("explanation", fade)}>
                                            <div class="explanation-tag">{"Explanation:"}</div>
                                            <div>{ question.explanation }</div>
                                        </div>
                                    }
                                </div>
                            </div>
                        }
                    })
                }
            </div>

            <div class="quiz-actions">
                if !state.submitted() {
                    <button
                        class="btn btn-primary"
                        onclick={on_submit}
                        disabled={!state.all_answered()}
                    >
                        {"Submit Quiz ("}{ state.answered_count() }{"/"}{ bank.len() }{" answered)"}
                    </button>
                } else {
                    <button class="btn btn-secondary" onclick={on_reset}>
                        {"Try Again"}
                    </button>
                }
            </div>
        </div>
    }
}
