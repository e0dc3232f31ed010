use leptos::prelude::*;

use crate::projects::{projects, Project};

#[component]
pub fn Projects() -> impl IntoView {
    let projects: &[Project] = match projects() {
        Ok(p) => p,
        Err(e) => {
            log::error!("{e}");
            &[]
        }
    };
    projects
        .iter()
        .map(|project| view! { <ProjectCard project=project.clone() /> })
        .collect_view()
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        image,
        tags,
        live,
        repo,
        placeholder,
    } = project;

    view! {
        <div class="md:p-8 lg:p-14 flex flex-col items-center">
            <img class="w-full rounded-lg shadow-md" src=image alt=title.clone() />
            <h3 class="mt-8 text-xl font-bold text-gray-900 font-pj">{title}</h3>
            {placeholder
                .then(|| {
                    view! {
                        <span class="mt-2 rounded-md px-2 py-1 bg-yellow-100 text-yellow-800 text-xs font-semibold">
                            "PLACEHOLDER"
                        </span>
                    }
                })}
            <p class="mt-5 text-base text-gray-600 font-pj">{description}</p>
            <div class="mt-4 flex flex-wrap justify-center gap-2">
                {tags
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <span class="rounded-md px-2 py-1 bg-gray-100 text-gray-700 text-sm">
                                {tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-6 flex gap-4 text-sm font-semibold">
                {live
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="text-blue-600 hover:underline">
                                "Live"
                            </a>
                        }
                    })}
                {repo
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="text-gray-900 hover:underline">
                                "Source"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn card(placeholder: bool, live: Option<&str>) -> String {
        let project = Project {
            title: "t".into(),
            description: "d".into(),
            image: "/i.png".into(),
            tags: vec![],
            live: live.map(Into::into),
            repo: None,
            placeholder,
        };
        Owner::new().with(|| view! { <ProjectCard project /> }.to_html())
    }

    #[test]
    fn test_placeholder_card_is_badged() {
        let html = card(true, None);
        assert!(html.contains("PLACEHOLDER"), "{html}");
        assert!(!html.contains("<a "), "{html}");
    }

    #[test]
    fn test_real_card_has_no_badge() {
        let html = card(false, Some("/"));
        assert!(!html.contains("PLACEHOLDER"), "{html}");
        assert!(html.contains("href=\"/\""), "{html}");
    }
}
