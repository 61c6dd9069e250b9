//! Full-length ESLCE exam simulator.

use leptos::prelude::*;
use quiz::bank::{SIMULATOR_SUBJECTS, subject_label};
use quiz::{ExamMode, ExamSimulator, SimulatorStage, format_time};

#[component]
fn Setup(exam: RwSignal<ExamSimulator>) -> impl IntoView {
    let mode_option = move |mode: ExamMode, label: &'static str| {
        view! {
            <label class="simulator__mode">
                <input
                    type="radio"
                    name="exam-mode"
                    prop:checked=move || exam.with(|e| e.mode() == mode)
                    on:change=move |_| exam.update(|e| e.set_mode(mode))
                />
                {label}
            </label>
        }
    };

    view! {
        <section class="simulator__setup">
            <h2>"Prepare for your ESLCE Exam"</h2>
            <label class="simulator__subject">
                <span>"Subject"</span>
                <select
                    prop:value=move || exam.with(|e| e.subject().to_owned())
                    on:change=move |ev| exam.update(|e| e.set_subject(&event_target_value(&ev)))
                >
                    {SIMULATOR_SUBJECTS
                        .into_iter()
                        .map(|(key, label)| view! { <option value=key>{label}</option> })
                        .collect_view()}
                </select>
            </label>
            {mode_option(ExamMode::Practice, "Practice Mode (No time limit)")}
            {mode_option(ExamMode::Timed, "Timed Exam (3 hours)")}
            <button class="btn btn--primary" on:click=move |_| exam.update(ExamSimulator::start)>
                {move || format!("Start ESLCE {} Exam", exam.with(|e| e.mode().label()))}
            </button>
        </section>
    }
}

#[component]
fn Running(exam: RwSignal<ExamSimulator>) -> impl IntoView {
    let question = move || {
        exam.with(|e| {
            let index = e.current_index();
            let selected = e.answer_for(index);
            e.current_question().cloned().map(|q| (q, selected))
        })
    };

    let question_view = move || {
        question().map(|(q, selected)| {
            let options = q
                .options
                .into_iter()
                .enumerate()
                .map(|(i, text)| {
                    view! {
                        <button
                            class="quiz-option"
                            class:quiz-option--selected=selected == Some(i)
                            on:click=move |_| {
                                if let Some(Err(e)) = exam.try_update(|e| e.answer(i)) {
                                    leptos::logging::warn!("simulator answer {i} ignored: {e}");
                                }
                            }
                        >
                            {text}
                        </button>
                    }
                })
                .collect_view();
            view! {
                <div class="quiz__question">
                    <h3 class="quiz__prompt">{q.prompt}</h3>
                    <div class="quiz__options">{options}</div>
                </div>
            }
        })
    };

    let step = move |delta: isize| {
        exam.update(|e| {
            if let Some(target) = e.current_index().checked_add_signed(delta) {
                if let Err(err) = e.go_to(target) {
                    leptos::logging::warn!("simulator step to {target} ignored: {err}");
                }
            }
        });
    };

    view! {
        <section class="simulator__exam">
            <div class="simulator__status">
                <span>{move || exam.with(|e| subject_label(e.subject()).to_owned())}</span>
                <Show when=move || exam.with(|e| e.mode() == ExamMode::Timed)>
                    <span class="simulator__timer">
                        {move || format!("Time Remaining: {}", exam.with(|e| format_time(e.remaining_minutes())))}
                    </span>
                </Show>
            </div>
            <p class="simulator__position">
                {move || {
                    exam.with(|e| {
                        format!(
                            "Question {} of {} · {} answered",
                            e.current_index() + 1,
                            e.questions().len(),
                            e.answered_count(),
                        )
                    })
                }}
            </p>
            {question_view}
            <div class="simulator__nav">
                <button
                    class="btn"
                    disabled=move || !exam.with(ExamSimulator::has_previous)
                    on:click=move |_| step(-1)
                >
                    "Previous"
                </button>
                <Show
                    when=move || exam.with(ExamSimulator::has_next)
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" on:click=move |_| exam.update(ExamSimulator::finish)>
                                "Finish Exam"
                            </button>
                        }
                    }
                >
                    <button class="btn" on:click=move |_| step(1)>
                        "Next"
                    </button>
                </Show>
            </div>
            <div class="simulator__grid">
                {move || {
                    exam.with(|e| {
                        (0..e.questions().len())
                            .map(|i| {
                                let answered = e.answer_for(i).is_some();
                                let current = e.current_index() == i;
                                view! {
                                    <button
                                        class="simulator__cell"
                                        class:simulator__cell--answered=answered
                                        class:simulator__cell--current=current
                                        on:click=move |_| {
                                            if let Some(Err(e)) = exam.try_update(|e| e.go_to(i)) {
                                                leptos::logging::warn!("simulator jump to {i} ignored: {e}");
                                            }
                                        }
                                    >
                                        {i + 1}
                                    </button>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </section>
    }
}

#[component]
fn Results(exam: RwSignal<ExamSimulator>) -> impl IntoView {
    view! {
        <section class="simulator__results">
            <h2>"Exam Results"</h2>
            <p class="simulator__percent">{move || format!("{}%", exam.with(ExamSimulator::percent))}</p>
            <p>
                {move || {
                    exam.with(|e| {
                        format!("You answered {} out of {} questions correctly.", e.score(), e.questions().len())
                    })
                }}
            </p>
            <p class="simulator__verdict">{move || exam.with(|e| e.verdict().message())}</p>
            <div class="simulator__actions">
                <button class="btn btn--secondary" on:click=move |_| exam.update(ExamSimulator::review)>
                    "Review Answers"
                </button>
                <button class="btn btn--primary" on:click=move |_| exam.update(ExamSimulator::new_exam)>
                    "Start New Exam"
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn SimulatorPage() -> impl IntoView {
    let exam = RwSignal::new(ExamSimulator::default());
    let stage = Memo::new(move |_| exam.with(ExamSimulator::stage));

    // One tick per minute; the simulator ignores ticks unless a timed exam is running.
    #[cfg(feature = "hydrate")]
    {
        let clock_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let clock_alive_task = clock_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(60)).await;
                if !clock_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let running = exam.with_untracked(|e| e.stage() == SimulatorStage::Running && e.mode() == ExamMode::Timed);
                if running && exam.try_update(ExamSimulator::tick) == Some(0) {
                    leptos::logging::log!("exam time expired");
                }
            }
        });
        on_cleanup(move || clock_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="page simulator-page">
            <header class="page__header">
                <h1>"ESLCE Exam Simulator"</h1>
            </header>
            {move || match stage.get() {
                SimulatorStage::Setup => view! { <Setup exam=exam/> }.into_any(),
                SimulatorStage::Running => view! { <Running exam=exam/> }.into_any(),
                SimulatorStage::Finished => view! { <Results exam=exam/> }.into_any(),
            }}
        </div>
    }
}
