use leptos::{either::EitherOf3, ev, html, prelude::*, task::spawn_local};
use leptos_use::{use_event_listener, use_window};

use crate::{
    resume::{RenderOutcome, ResumeState},
    site::{RESUME_PAGE_SCALE, RESUME_PATH},
};

use super::{
    icons::{NextIcon, PreviousIcon, SpinnerIcon},
    modal::Modal,
    pdfjs, BUTTON_CLASS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentStatus {
    Loading,
    Loaded,
    Failed,
}

#[component]
pub fn ResumeModal(state: RwSignal<ResumeState>) -> impl IntoView {
    let open = Signal::derive(move || state.with(ResumeState::is_open));
    let on_close = Callback::new(move |_| state.update(ResumeState::close));

    view! {
        <Modal
            open
            on_close
            label="Resume"
            panel_class="sm:min-w-[596px] h-full bg-white rounded scrollbar-hidden overflow-scroll flex flex-col justify-between items-center"
        >
            <ResumeViewer state />
        </Modal>
    }
}

/// Renders the current resume page at the width of its container, with pager controls.
///
/// Mounted each time the modal opens, so the document is (re)loaded per open while the
/// page cursor in `state` carries over.
#[component]
fn ResumeViewer(state: RwSignal<ResumeState>) -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let (status, set_status) = signal(DocumentStatus::Loading);

    let update_page_width = move || {
        if let Some(el) = container_ref.get_untracked() {
            let width = u32::try_from(el.offset_width()).unwrap_or(0);
            state.update(|s| s.paginator.update_page_width(width));
        }
    };

    // measure once the container is in the DOM
    Effect::new(move |_| {
        if container_ref.get().is_some() {
            update_page_width();
        }
    });
    let _ = use_event_listener(use_window(), ev::resize, move |_| update_page_width());

    Effect::new(move |_| {
        spawn_local(async move {
            match pdfjs::load_document(RESUME_PATH).await {
                Ok(num_pages) => {
                    state.update(|s| s.paginator.on_document_load_success(num_pages));
                    set_status(DocumentStatus::Loaded);
                }
                Err(e) => {
                    log::error!("{e}");
                    set_status(DocumentStatus::Failed);
                }
            }
        });
    });

    Effect::new(move |_| {
        if status.get() != DocumentStatus::Loaded {
            return;
        }
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let (page, width) = state.with(|s| (s.paginator.page_number(), s.paginator.page_width()));
        spawn_local(async move {
            match pdfjs::render_page(&canvas, RESUME_PATH, page, width, RESUME_PAGE_SCALE).await {
                Ok(RenderOutcome::Drawn) => {}
                // a later resize or page change already replaced this render
                Ok(RenderOutcome::Superseded) => log::debug!("render of page {page} superseded"),
                Err(e) => log::error!("{e}"),
            }
        });
    });

    let go_to_previous_page = move |_| state.update(|s| s.paginator.go_to_previous_page());
    let go_to_next_page = move |_| state.update(|s| s.paginator.go_to_next_page());

    view! {
        <div node_ref=container_ref class="h-full w-full border-2 border-red-500">
            {move || match status.get() {
                DocumentStatus::Loading => {
                    EitherOf3::A(
                        view! {
                            <div class="h-1/2 w-full flex items-center justify-center">
                                <SpinnerIcon class="animate-spin text-gray-900 text-5xl" />
                            </div>
                        },
                    )
                }
                DocumentStatus::Failed => EitherOf3::B(view! { <p>"Failed to load"</p> }),
                DocumentStatus::Loaded => {
                    EitherOf3::C(
                        view! { <canvas node_ref=canvas_ref class="h-full border-2 mx-auto" /> },
                    )
                }
            }}
        </div>

        <div class="flex justify-evenly items-center w-full p-4">
            <p>{move || state.with(|s| s.paginator.label())}</p>

            <div class="flex gap-2">
                <button
                    on:click=go_to_previous_page
                    disabled=move || !state.with(|s| s.paginator.has_previous_page())
                    aria-label="Previous page"
                    class=format!("disabled:cursor-not-allowed {BUTTON_CLASS}")
                >
                    <PreviousIcon />
                </button>
                <button
                    on:click=go_to_next_page
                    disabled=move || !state.with(|s| s.paginator.has_next_page())
                    aria-label="Next page"
                    class=format!("disabled:cursor-not-allowed {BUTTON_CLASS}")
                >
                    <NextIcon />
                </button>
            </div>
        </div>
    }
}
