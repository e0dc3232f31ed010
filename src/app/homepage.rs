use leptos::{prelude::*, task::spawn_local};
use leptos_meta::Title;

use crate::{
    qr::QrContact,
    resume::ResumeState,
    site::{GITHUB_URL, ILLUSTRATION_PATH, LINKEDIN_URL, OWNER, TAGLINE, TITLE},
};

use super::{
    contact::ContactFooter,
    header::Header,
    icons::{GithubIcon, LinkedinIcon, WhatsappIcon},
    modal::Modal,
    projects::Projects,
    resume::ResumeModal,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let resume = RwSignal::new(ResumeState::default());
    let qr = RwSignal::new(QrContact::default());

    let any_open = move || resume.with(ResumeState::is_open) || qr.with(QrContact::is_open);
    let view_resume = Callback::new(move |_| resume.update(ResumeState::open));

    view! {
        <Title text=TITLE />
        <div class=move || if any_open() { "blur-sm" } else { "" }>
            <Header on_view_resume=view_resume />
            <main>
                <Hero qr />
                <section class="py-[112px] bg-white" id="latest-projects">
                    <div class="px-4 mx-auto max-w-7xl sm:px-6 lg:px-8">
                        <div class="text-center">
                            <h2 class="text-3xl font-bold leading-tight tracking-widest text-gray-900 sm:text-4xl xl:text-5xl font-pj">
                                "LATEST PROJECTS"
                            </h2>
                        </div>
                        <div class="grid grid-cols-1 mt-10 text-center sm:mt-16 sm:grid-cols-2 md:grid-cols-3 md:gap-0 xl:mt-24">
                            <Projects />
                        </div>
                    </div>
                </section>
            </main>
            <ContactFooter />
        </div>
        <ResumeModal state=resume />
        <QrModal qr />
    }
}

#[component]
fn Hero(qr: RwSignal<QrContact>) -> impl IntoView {
    // The modal opens before the encode lands, and opens even if it fails.
    let handle_click = move |_| {
        if let Some(pending) = qr.try_update(QrContact::handle_click) {
            spawn_local(async move {
                let res = pending.run();
                qr.update(|s| s.accept_encoding(res));
            });
        }
    };

    view! {
        <section class="py-[112px] bg-gradient-to-b from-gray-50 via-white to-gray-50" id="about">
            <div class="px-4 mx-auto sm:px-6 lg:px-8 max-w-7xl">
                <div class="grid max-w-md grid-cols-1 mx-auto md:grid-cols-12 gap-x-6 gap-y-8 md:max-w-none">
                    <div class="self-center md:col-span-6">
                        <h1 class="text-3xl font-bold text-gray-900 sm:text-4xl xl:text-5xl">
                            {format!("Hey 👋 I am {OWNER}, Frontend Developer!")}
                        </h1>
                        <p class="mt-5 text-base font-normal leading-7 text-gray-500">{TAGLINE}</p>

                        <div class="relative inline-flex mt-9 space-x-2 text-xl">
                            <a href=GITHUB_URL title="Github Profile" target="_blank" rel="noopener noreferrer">
                                <GithubIcon />
                            </a>
                            <a href=LINKEDIN_URL title="LinkedIn Profile" target="_blank" rel="noopener noreferrer">
                                <LinkedinIcon />
                            </a>
                            <button on:click=handle_click title="Connect on whatsapp">
                                <WhatsappIcon />
                            </button>
                        </div>
                    </div>

                    <div class="self-end md:col-span-6">
                        <img class="w-full max-w-xs mx-auto" src=ILLUSTRATION_PATH alt="" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn QrModal(qr: RwSignal<QrContact>) -> impl IntoView {
    let open = Signal::derive(move || qr.with(QrContact::is_open));
    let on_close = Callback::new(move |_| qr.update(QrContact::close));

    view! {
        <Modal
            open
            on_close
            label="WhatsApp QR code"
            panel_class="max-w-lg space-y-4 border bg-white p-12 rounded"
        >
            <h2 class="font-bold">"Scan QR code to connect with me on whatsapp"</h2>
            <div>
                <img
                    src=move || qr.with(|s| s.qr_code_url().to_string())
                    alt="WhatsApp QR Code"
                    class="mx-auto"
                />
            </div>
        </Modal>
    }
}
