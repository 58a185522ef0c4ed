// ============================================================================
// APP - Raíz: crea el store, escucha auth y espera a la hidratación
// ============================================================================
// Las páginas reales (competiciones, jueces, noticias...) cuelgan de aquí;
// este componente solo monta la capa de estado.
// ============================================================================

use yew::prelude::*;
use crate::config::CONFIG;
use crate::hooks::{use_auth_listener, use_auth_state, use_news, use_provinces, use_store, StoreContext};
use crate::state::selectors::{is_admin, published_news};
use crate::state::Status;
use crate::utils::format_published;

#[function_component(App)]
pub fn app() -> Html {
    // Un store por carga de página
    let context = use_memo((), |_| StoreContext::from_config(&CONFIG));

    html! {
        <ContextProvider<StoreContext> context={(*context).clone()}>
            <AuthGate />
        </ContextProvider<StoreContext>>
    }
}

#[function_component(AuthGate)]
fn auth_gate() -> Html {
    use_auth_listener();
    let auth = use_auth_state();

    if !auth.state.hydrated {
        return html! { <div class="app-loading">{"Memuat..."}</div> };
    }

    html! {
        <main class="app">
            if is_admin(&auth.state) {
                <div class="admin-banner">{"Mode admin"}</div>
            }
            <ProvinceFilter />
            <LatestNews />
        </main>
    }
}

#[function_component(ProvinceFilter)]
fn province_filter() -> Html {
    let provinces = use_provinces();

    match provinces.status {
        Status::Failed => {
            let onclick = {
                let refetch = provinces.refetch.clone();
                Callback::from(move |_: MouseEvent| refetch.emit(()))
            };
            html! {
                <div class="error">
                    {provinces.error.clone().unwrap_or_default()}
                    <button {onclick}>{"Coba lagi"}</button>
                </div>
            }
        }
        _ => html! {
            <select class="province-filter" disabled={provinces.loading}>
                <option value="">{"Semua provinsi"}</option>
                { for provinces.items.iter().map(|p| html! {
                    <option key={p.id.clone()} value={p.id.clone()}>{p.name.clone()}</option>
                }) }
            </select>
        },
    }
}

#[function_component(LatestNews)]
fn latest_news() -> Html {
    let news = use_news();
    let store = use_store();
    let published = published_news(&store.state);

    html! {
        <section class="news">
            if news.loading && news.items.is_empty() {
                <p class="news-loading">{"Memuat berita..."}</p>
            }
            if let Some(error) = news.error.clone() {
                <p class="error">{error}</p>
            }
            <ul>
                { for published.iter().map(|n| html! {
                    <li key={n.id.clone()}>
                        <strong>{n.title.clone()}</strong>
                        if let Some(at) = n.published_at {
                            <small>{format_published(at)}</small>
                        }
                    </li>
                }) }
            </ul>
        </section>
    }
}
