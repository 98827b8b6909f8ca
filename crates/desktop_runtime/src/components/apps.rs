//! Window bodies. Each one renders inside a [`super::WindowWrapper`] and owns no window state.

use super::*;
use system_ui::{WindowBody, WindowControls, WindowHeader, WindowTitle};

use crate::{
    launcher::{finder_activation, payload_location},
    model::{LocationKind, LocationNode},
};

pub(super) fn window_contents(key: WindowKey) -> View {
    match key {
        WindowKey::Finder => view! { <FinderWindow /> }.into_view(),
        WindowKey::Safari => view! { <SafariWindow /> }.into_view(),
        WindowKey::Photos => view! { <PhotosWindow /> }.into_view(),
        WindowKey::Contact => view! { <ContactWindow /> }.into_view(),
        WindowKey::Terminal => view! { <TerminalWindow /> }.into_view(),
        WindowKey::Resume => view! { <ResumeWindow /> }.into_view(),
        WindowKey::TextFile => view! { <TextFileWindow /> }.into_view(),
        WindowKey::ImageFile => view! { <ImageFileWindow /> }.into_view(),
    }
}

#[component]
fn WindowChrome(
    window_key: WindowKey,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    view! {
        <WindowHeader>
            <WindowControls on_close=Callback::new(move |_| runtime.close_window(window_key)) />
            <WindowTitle>{runtime.window_title(window_key)}</WindowTitle>
        </WindowHeader>
        <WindowBody layout_class=layout_class.unwrap_or("")>{children()}</WindowBody>
    }
}

fn location_icon(node: &LocationNode) -> String {
    if let Some(icon) = node.icon.as_ref() {
        return icon.clone();
    }
    match node.kind {
        LocationKind::Folder => "/images/folder.png",
        LocationKind::Text { .. } => "/images/txt.png",
        LocationKind::Image { .. } => "/images/image.png",
        LocationKind::Pdf { .. } => "/images/pdf.png",
        LocationKind::Url { .. } => "/images/safari.png",
    }
    .to_string()
}

/// Node referenced by the payload of a file viewer window.
fn payload_node(runtime: DesktopRuntimeContext, key: WindowKey) -> Option<LocationNode> {
    let id = runtime.windows.with(|store| {
        payload_location(store.window(key).and_then(|window| window.data.as_ref()))
    })?;
    runtime
        .location
        .with(|store| store.tree().node(&id).cloned())
}

#[component]
fn FinderWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let location = runtime.location;
    let roots: Vec<LocationNode> = location.with_untracked(|store| store.tree().roots().cloned().collect());
    let activate = move |id: LocationId| {
        let commands = location.with_untracked(|store| finder_activation(store.tree(), &id));
        runtime.run_launcher(commands);
    };

    view! {
        <WindowChrome window_key=WindowKey::Finder layout_class="finder">
            <aside class="finder-sidebar">
                <h3>"Favorites"</h3>
                <ul>
                    {roots
                        .into_iter()
                        .map(|node| {
                            let id = node.id.clone();
                            let selected = node.id.clone();
                            let icon = location_icon(&node);
                            view! {
                                <li
                                    class:active=move || location.with(|store| store.active_id() == &selected)
                                    on:click=move |_| runtime.set_active_location(Some(id.clone()))
                                >
                                    <img src=icon alt="" />
                                    <p>{node.name}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </aside>
            <div class="finder-content">
                <nav class="finder-breadcrumb">
                    {move || {
                        let crumbs: Vec<(LocationId, String)> = location.with(|store| {
                            store
                                .tree()
                                .path_to(store.active_id())
                                .into_iter()
                                .map(|node| (node.id.clone(), node.name.clone()))
                                .collect()
                        });
                        crumbs
                            .into_iter()
                            .map(|(id, name)| {
                                view! {
                                    <button
                                        type="button"
                                        on:click=move |_| runtime.set_active_location(Some(id.clone()))
                                    >
                                        {name}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </nav>
                <ul class="finder-items">
                    {move || {
                        let items: Vec<LocationNode> = location.with(|store| {
                            store.tree().children(store.active_id()).cloned().collect()
                        });
                        if items.is_empty() {
                            return view! { <li class="finder-empty">"This folder is empty."</li> }
                                .into_view();
                        }
                        items
                            .into_iter()
                            .map(|node| {
                                let id = node.id.clone();
                                let icon = location_icon(&node);
                                view! {
                                    <li on:click=move |_| activate(id.clone())>
                                        <img src=icon alt=node.name.clone() />
                                        <p>{node.name}</p>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </WindowChrome>
    }
}

#[component]
fn SafariWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let posts = runtime.content.with_value(|content| content.blog_posts.clone());

    view! {
        <WindowChrome window_key=WindowKey::Safari layout_class="safari">
            <h2>"My Developer Blog"</h2>
            <ul class="blog-posts">
                {posts
                    .into_iter()
                    .map(|post| {
                        view! {
                            <li>
                                <p class="blog-date">{post.date}</p>
                                <a href=post.href target="_blank" rel="noopener noreferrer">
                                    {post.title}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </WindowChrome>
    }
}

#[component]
fn PhotosWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let gallery = runtime.content.with_value(|content| content.gallery.clone());

    view! {
        <WindowChrome window_key=WindowKey::Photos layout_class="photos">
            <ul class="gallery">
                {gallery
                    .into_iter()
                    .map(|image| view! { <li><img src=image.src alt="" /></li> })
                    .collect_view()}
            </ul>
        </WindowChrome>
    }
}

#[component]
fn ContactWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let socials = runtime.content.with_value(|content| content.socials.clone());

    view! {
        <WindowChrome window_key=WindowKey::Contact layout_class="contact">
            <h3>"Let's connect"</h3>
            <ul class="socials">
                {socials
                    .into_iter()
                    .map(|social| {
                        view! {
                            <li>
                                <a href=social.href target="_blank" rel="noopener noreferrer">
                                    {social.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </WindowChrome>
    }
}

#[component]
fn TerminalWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let stack = runtime.content.with_value(|content| content.tech_stack.clone());
    let category_count = stack.len();

    view! {
        <WindowChrome window_key=WindowKey::Terminal layout_class="terminal">
            <p class="terminal-prompt">
                <span class="terminal-user">"@portfolio % "</span>
                "show tech stack"
            </p>
            <ul class="terminal-output">
                {stack
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li>
                                <span class="terminal-check">"✓ "</span>
                                <strong>{entry.category}</strong>
                                <span>{entry.items.join(", ")}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="terminal-footnote">
                {format!("✓ {category_count} categories loaded")}
            </p>
        </WindowChrome>
    }
}

#[component]
fn ResumeWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let href = runtime.content.with_value(|content| content.resume_href.clone());

    view! {
        <WindowChrome window_key=WindowKey::Resume layout_class="resume">
            <a class="resume-download" href=href.clone() download="" title="Download resume">
                "Download"
            </a>
            <object class="resume-document" data=href type="application/pdf">
                <p>"This browser cannot display the PDF inline."</p>
            </object>
        </WindowChrome>
    }
}

#[component]
fn TextFileWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let node = Signal::derive(move || payload_node(runtime, WindowKey::TextFile));

    view! {
        <WindowChrome window_key=WindowKey::TextFile layout_class="text-file">
            {move || match node.get() {
                Some(LocationNode { name, kind: LocationKind::Text { lines, image }, .. }) => {
                    view! {
                        <h3>{name}</h3>
                        {image.map(|src| view! { <img class="text-file-image" src=src alt="" /> })}
                        {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                    }
                        .into_view()
                }
                _ => view! { <p class="empty">"Nothing to show."</p> }.into_view(),
            }}
        </WindowChrome>
    }
}

#[component]
fn ImageFileWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let node = Signal::derive(move || payload_node(runtime, WindowKey::ImageFile));

    view! {
        <WindowChrome window_key=WindowKey::ImageFile layout_class="image-file">
            {move || match node.get() {
                Some(LocationNode { name, kind: LocationKind::Image { src }, .. }) => {
                    view! { <img src=src alt=name /> }.into_view()
                }
                _ => view! { <p class="empty">"Nothing to show."</p> }.into_view(),
            }}
        </WindowChrome>
    }
}
