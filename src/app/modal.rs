use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

/// Overlay dialog. Only mounted while `open`; backdrop click or Escape calls `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional, into)] label: Option<&'static str>,
    panel_class: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <CloseOnEscape on_close />
            <div class="relative z-50" role="dialog" aria-modal="true" aria-label=label>
                <div
                    class="fixed inset-0 bg-black/50 flex w-screen items-center justify-center p-4"
                    on:click=move |_| on_close.run(())
                >
                    <div class=panel_class on:click=|ev| ev.stop_propagation()>
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}

// listener lives as long as the modal content is mounted
#[component]
fn CloseOnEscape(on_close: Callback<()>) -> impl IntoView {
    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
}
