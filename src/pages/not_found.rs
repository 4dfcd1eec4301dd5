use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    html! {
        <div class="not-found-page">
            <div class="not-found-card">
                <div class="not-found-line">
                    <span class="not-found-prompt">{"$ cd "}</span>{location.clone()}
                </div>
                <div class="not-found-line not-found-error">
                    {format!("bash: cd: {}: No such file or directory", location)}
                </div>
                <Link<Route> to={Route::Home} classes="not-found-link">
                    {"cd ~"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #060608;
                    color: #e9e4d8;
                    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                }
                .not-found-card {
                    border: 1px solid rgba(216, 183, 106, 0.16);
                    border-radius: 1rem;
                    background: rgba(12, 12, 15, 0.78);
                    padding: 2rem;
                    max-width: 36rem;
                }
                .not-found-line { margin-bottom: 0.75rem; font-size: 0.875rem; }
                .not-found-prompt { color: #d8b76a; }
                .not-found-error { color: #9a9387; }
                .not-found-link { color: #ecd9a8; text-decoration: none; }
                .not-found-link:hover { text-decoration: underline; }
                "#}
            </style>
        </div>
    }
}
