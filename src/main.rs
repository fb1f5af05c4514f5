mod api;
mod config;
mod controller;
mod error;
mod format;
mod models;
mod table;
mod upload;

use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::api::StatementApi;
use crate::config::{load_settings, Settings};
use crate::controller::{next_generation, Action, ViewState};
use crate::format::balance_label;
use crate::models::{SortColumn, SortOrder};
use crate::table::TransactionTable;
use crate::upload::{require_file, upload_notice, Notice};

#[derive(Properties, PartialEq)]
struct AppProps {
    settings: Settings,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let per_page = props.settings.per_page;
    let state = use_reducer(move || ViewState::new(per_page));
    let api = {
        let base = props.settings.api_base.clone();
        use_state(move || StatementApi::new(base))
    };
    let generation = use_mut_ref(|| 0u64);
    let file = use_state(|| None::<File>);
    let notice = use_state(|| None::<Notice>);
    let file_input = use_node_ref();

    // refetch balance + listing whenever the query or revision changes
    {
        let deps = state.fetch_key();
        let state = state.clone();
        let api = api.clone();
        use_effect_with_deps(
            move |(query, _revision)| {
                let query = *query;
                let current = next_generation(&generation);
                info!(generation = current, query = %query.to_query_string(), "refreshing statement");
                state.dispatch(Action::RefreshStarted(current));

                spawn_local(async move {
                    let outcome = api.snapshot(&query).await;
                    state.dispatch(Action::RefreshFinished {
                        generation: current,
                        outcome,
                    });
                });
                || ()
            },
            deps,
        );
    }

    let on_file_change = {
        let file = file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            file.set(input.files().and_then(|list| list.get(0)));
        })
    };

    let on_upload = {
        let state = state.clone();
        let api = api.clone();
        let file = file.clone();
        let notice = notice.clone();
        let file_input = file_input.clone();

        Callback::from(move |_| {
            let selected = match require_file((*file).clone()) {
                Ok(selected) => selected,
                Err(err) => {
                    notice.set(Some(Notice::Error(err.user_message())));
                    return;
                }
            };

            let state = state.clone();
            let api = api.clone();
            let file = file.clone();
            let notice = notice.clone();
            let file_input = file_input.clone();

            notice.set(None);
            state.dispatch(Action::UploadStarted);

            spawn_local(async move {
                let result = api.upload(&selected).await;
                match &result {
                    Ok(()) => {
                        info!(file = %selected.name(), "statement uploaded");
                        file.set(None);
                        if let Some(input) = file_input.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }
                    }
                    Err(err) => warn!(file = %selected.name(), error = %err, "upload failed"),
                }
                notice.set(Some(upload_notice(&result)));
                state.dispatch(Action::UploadFinished);
                if result.is_ok() {
                    state.dispatch(Action::Reload);
                }
            });
        })
    };

    let on_page_change = {
        let state = state.clone();
        Callback::from(move |page: u32| state.dispatch(Action::SetPage(page)))
    };

    let on_sort_change = {
        let state = state.clone();
        Callback::from(move |(sort_by, order): (SortColumn, SortOrder)| {
            state.dispatch(Action::Resort { sort_by, order })
        })
    };

    let busy = state.busy();

    page_shell(
        "Statement Viewer",
        html! {
            <>
                <div class="bg-card rounded-[10px] p-6 border border-border">
                    <h3 class="font-bold text-foreground text-lg mb-4">{"Upload Statement"}</h3>
                    <div class="flex gap-3 items-center">
                        <input
                            ref={file_input}
                            type="file"
                            accept=".csv"
                            onchange={on_file_change}
                            class="p-2 border rounded"
                            disabled={busy}
                        />
                        <button onclick={on_upload} disabled={busy} class="bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all disabled:opacity-50">
                            { if busy { "Memproses..." } else { "Upload" } }
                        </button>
                    </div>
                    {
                        if let Some(msg) = &*notice {
                            html! { <p class={classes!("mt-3", msg.class())}>{ msg.text() }</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="bg-card rounded-[10px] p-6 border border-border">
                    <h3 class="font-bold text-foreground text-lg">
                        {"Saldo: "}
                        <span class="font-semibold text-[#1D617A]">{ balance_label(state.balance, state.refresh_failed) }</span>
                    </h3>
                    if state.refresh_failed && !state.loading {
                        <p class="text-sm text-red-500 mt-2">{"Gagal memuat data"}</p>
                    }
                </div>

                <TransactionTable
                    transactions={state.transactions.clone()}
                    loading={busy}
                    page={state.query.page}
                    total={state.total}
                    per_page={state.query.per_page}
                    sort_by={state.query.sort_by}
                    order={state.query.order}
                    on_page_change={on_page_change}
                    on_sort_change={on_sort_change}
                />
            </>
        },
    )
}

fn page_shell(title: &'static str, children: Html) -> Html {
    html! {
        <div class="min-h-screen bg-background">
            <div class="p-6 max-w-5xl mx-auto">
                <div class="flex items-center justify-between pb-4 border-b border-border">
                    <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                </div>
                <div class="pt-5 space-y-6">
                    { children }
                </div>
            </div>
        </div>
    }
}

fn main() {
    let settings = load_settings();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(settings.log_level)
            .build(),
    );
    info!(api_base = %settings.api_base, per_page = settings.per_page, "starting statement viewer");
    yew::Renderer::<App>::with_props(AppProps { settings }).render();
}
