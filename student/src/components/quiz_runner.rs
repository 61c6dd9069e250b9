//! Shared quiz UI driven by a [`QuizSession`].
//!
//! Used by the quiz page (which records the outcome) and by the practice
//! study tool (which does not).

use leptos::prelude::*;
use quiz::{Phase, QuizOutcome, QuizQuestion, QuizSession};

#[component]
pub fn QuizRunner(
    questions: Vec<QuizQuestion>,
    #[prop(optional)] on_finish: Option<Callback<QuizOutcome>>,
    /// Next-step links (href, label) on the results card.
    #[prop(optional)]
    links: Vec<(String, String)>,
) -> impl IntoView {
    let session = match QuizSession::new(questions) {
        Ok(session) => RwSignal::new(session),
        Err(e) => {
            leptos::logging::warn!("quiz unavailable: {e}");
            return view! { <p class="quiz__empty">"No questions available for this quiz yet."</p> }.into_any();
        }
    };
    let last_correct = RwSignal::new(None::<bool>);

    let check = move |_| {
        if let Some(Ok(correct)) = session.try_update(QuizSession::check) {
            last_correct.set(Some(correct));
        }
    };
    let advance = move |_| {
        last_correct.set(None);
        if let Some(Ok(Phase::Finished)) = session.try_update(QuizSession::advance) {
            if let (Some(cb), Some(outcome)) = (on_finish, session.with_untracked(QuizSession::outcome)) {
                cb.run(outcome);
            }
        }
    };
    let restart = move |_| {
        last_correct.set(None);
        session.update(QuizSession::restart);
    };

    let finished = move || session.with(|s| s.phase() == Phase::Finished);
    let checked = move || session.with(|s| s.phase() == Phase::Checked);

    let question_view = move || {
        let (question, marks) = session.with(|s| {
            let q = s.current_question().clone();
            let marks: Vec<&'static str> = (0..q.options.len()).map(|i| s.option_mark(i).class()).collect();
            (q, marks)
        });
        let options = question
            .options
            .into_iter()
            .zip(marks)
            .enumerate()
            .map(|(i, (text, class))| {
                view! {
                    <button
                        class=class
                        disabled=checked
                        on:click=move |_| {
                            if let Some(Err(e)) = session.try_update(|s| s.select(i)) {
                                leptos::logging::warn!("quiz option {i} ignored: {e}");
                            }
                        }
                    >
                        {text}
                    </button>
                }
            })
            .collect_view();
        let source = question.source_year.map(|year| format!("Similar to ESLCE {year}"));
        let explanation = question.explanation;
        view! {
            <div class="quiz__question">
                <h3 class="quiz__prompt">{question.prompt}</h3>
                {source.map(|s| view! { <p class="quiz__source">{s}</p> })}
                <div class="quiz__options">{options}</div>
                <Show when=checked>
                    <div class="quiz__feedback" class:quiz__feedback--correct=move || last_correct.get() == Some(true)>
                        <p class="quiz__verdict">
                            {move || if last_correct.get() == Some(true) { "Correct!" } else { "Incorrect" }}
                        </p>
                        <p class="quiz__explanation">{explanation.clone()}</p>
                    </div>
                </Show>
            </div>
        }
    };

    let results_view = move || {
        let outcome = session.with(QuizSession::outcome);
        let links = links.clone();
        outcome.map(|o| {
            view! {
                <div class="quiz__results">
                    <h3>"Quiz Complete!"</h3>
                    <p class="quiz__score">{format!("You scored {} out of {}", o.score, o.total)}</p>
                    <p class="quiz__message">{o.verdict().message()}</p>
                    <div class="quiz__next">
                        <button class="btn btn--primary" on:click=restart>
                            "Try Again"
                        </button>
                        {links
                            .into_iter()
                            .map(|(href, label)| view! { <a href=href class="btn btn--secondary">{label}</a> })
                            .collect_view()}
                    </div>
                </div>
            }
        })
    };

    view! {
        <section class="quiz">
            <Show when=move || !finished() fallback=results_view>
                <div class="quiz__header">
                    <span>
                        {move || session.with(|s| format!("Question {} of {}", s.current_index() + 1, s.total()))}
                    </span>
                    <span>{move || session.with(|s| format!("Score: {}", s.score()))}</span>
                </div>
                <div class="progress-bar">
                    <div
                        class="progress-bar__fill"
                        style:width=move || session.with(|s| format!("{:.0}%", s.progress_percent()))
                    ></div>
                </div>
                {question_view}
                <div class="quiz__controls">
                    <Show
                        when=checked
                        fallback=move || {
                            view! {
                                <button
                                    class="btn btn--primary"
                                    disabled=move || !session.with(QuizSession::can_check)
                                    on:click=check
                                >
                                    "Check Answer"
                                </button>
                            }
                        }
                    >
                        <button class="btn btn--primary" on:click=advance>
                            {move || if session.with(QuizSession::is_last) { "See Results" } else { "Next Question" }}
                        </button>
                    </Show>
                </div>
            </Show>
        </section>
    }
    .into_any()
}
